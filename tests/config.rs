use std::fs;

use drone_performance_calculator::config::{
    Chemistry, ConfigError, DroneConfig, FrameLayout, load_config, load_presets, select_preset,
};

#[test]
fn empty_yaml_yields_documented_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("empty.yaml");
    fs::write(&path, "{}\n").expect("write yaml");

    let config = load_config(&path).expect("load empty config");
    assert_eq!(config, DroneConfig::default());
    assert_eq!(config.environment.altitude_m, 0.0);
    assert_eq!(config.environment.temperature_c, 25.0);
    assert_eq!(config.frame.motor_count, 4);
    assert_eq!(config.frame.layout, FrameLayout::Flat);
    assert_eq!(config.battery.chemistry, Chemistry::LiPo);
    assert_eq!((config.battery.cells_s, config.battery.cells_p), (4, 1));
    assert_eq!(config.battery.capacity_mah, 5_000.0);
    assert_eq!((config.battery.c_rating, config.battery.burst_c), (20.0, 40.0));
    assert_eq!(config.battery.internal_resistance_mohm, 5.0);
    assert_eq!(config.battery.discharge_depth, 80.0);
    assert_eq!(config.motor.kv, 920.0);
    assert_eq!(config.motor.resistance_ohm, 0.1);
    assert_eq!(config.esc.continuous_a, 30.0);
    assert_eq!((config.propeller.diameter_in, config.propeller.pitch_in), (10.0, 4.5));
    assert_eq!(config.propeller.blades, 2);
    assert_eq!((config.propeller.ct, config.propeller.cp), (None, None));
}

#[test]
fn partial_toml_keeps_remaining_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("six_s.toml");
    fs::write(
        &path,
        "[battery]\nchemistry = \"Li-ion\"\ncells_s = 6\n\n[frame]\nlayout = \"coaxial\"\nmotor_count = 8\n",
    )
    .expect("write toml");

    let config = load_config(&path).expect("load toml");
    assert_eq!(config.battery.chemistry, Chemistry::LiIon);
    assert_eq!(config.battery.cells_s, 6);
    assert_eq!(config.battery.capacity_mah, 5_000.0);
    assert_eq!(config.frame.layout, FrameLayout::Coaxial);
    assert_eq!(config.frame.motor_count, 8);
    assert_eq!(config.motor, DroneConfig::default().motor);
}

#[test]
fn free_form_labels_fall_back() {
    let yaml = "battery:\n  chemistry: NiMH\nframe:\n  layout: hex-x\n";
    let config: DroneConfig = load_yaml(yaml);
    assert_eq!(config.battery.chemistry, Chemistry::LiPo);
    assert_eq!(config.frame.layout, FrameLayout::Flat);

    let yaml = "battery:\n  chemistry: lihv\n";
    let config: DroneConfig = load_yaml(yaml);
    assert_eq!(config.battery.chemistry, Chemistry::LiHv);
}

fn load_yaml(yaml: &str) -> DroneConfig {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("labels.yaml");
    fs::write(&path, yaml).expect("write yaml");
    load_config(&path).expect("load labels")
}

#[test]
fn invalid_values_are_rejected() {
    let mut config = DroneConfig::default();
    config.frame.motor_count = 0;
    match config.validate() {
        Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "frame.motor_count"),
        other => panic!("expected invalid motor count, got {other:?}"),
    }

    let mut config = DroneConfig::default();
    config.battery.discharge_depth = 120.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Invalid { field: "battery.discharge_depth", .. })
    ));

    let mut config = DroneConfig::default();
    config.motor.kv = f64::NAN;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Invalid { field: "motor.kv", .. })
    ));

    assert!(DroneConfig::default().validate().is_ok());
}

#[test]
fn negative_physical_values_are_rejected() {
    let mut config = DroneConfig::default();
    config.motor.kv = -920.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Invalid { field: "motor.kv", .. })
    ));

    let mut config = DroneConfig::default();
    config.battery.capacity_mah = -5_000.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Invalid { field: "battery.capacity_mah", .. })
    ));

    let mut config = DroneConfig::default();
    config.propeller.weight_g = -1.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Invalid { field: "propeller.weight_g", .. })
    ));

    let mut config = DroneConfig::default();
    config.esc.resistance_mohm = -10.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Invalid { field: "esc.resistance_mohm", .. })
    ));

    let mut config = DroneConfig::default();
    config.environment.altitude_m = -50.0;
    config.environment.temperature_c = -10.0;
    assert!(config.validate().is_ok());
}

#[test]
fn loader_validates_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.yaml");
    fs::write(&path, "battery:\n  cells_s: 0\n").expect("write yaml");
    let err = load_config(&path).expect_err("zero cells must fail");
    assert!(err.to_string().contains("battery.cells_s"), "{err}");

    let missing = load_config(dir.path().join("missing.yaml")).expect_err("missing file");
    assert!(matches!(missing, ConfigError::Io(_)));
}

#[test]
fn bundled_presets_load_in_file_order() {
    let presets = load_presets("configs/presets").expect("preset catalog");
    assert_eq!(presets.len(), 3);
    assert_eq!(presets[0].name.as_deref(), Some("Quad 450"));
    assert!(presets.iter().any(|p| p.frame.layout == FrameLayout::Coaxial));

    let first = select_preset(&presets, None).expect("default preset");
    assert_eq!(first, presets[0]);

    let hexa = select_preset(&presets, Some("coax hexa lifter")).expect("case-insensitive");
    assert_eq!(hexa.frame.motor_count, 6);
    assert_eq!(hexa.battery.chemistry, Chemistry::LiIon);
    assert_eq!(hexa.propeller.ct, Some(0.1));
}

#[test]
fn preset_selection_errors() {
    assert!(matches!(select_preset(&[], None), Err(ConfigError::EmptyCatalog)));
    let presets = vec![DroneConfig::default()];
    match select_preset(&presets, Some("Octo")) {
        Err(ConfigError::PresetNotFound(name)) => assert_eq!(name, "Octo"),
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn yaml_preset_lists_and_unnamed_toml_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let list = dir.path().join("presets.yaml");
    fs::write(
        &list,
        "- name: Tiny\n  propeller:\n    diameter_in: 3.0\n- name: Big\n  frame:\n    motor_count: 8\n",
    )
    .expect("write list");
    let presets = load_presets(&list).expect("yaml list");
    assert_eq!(presets.len(), 2);
    assert_eq!(presets[1].frame.motor_count, 8);

    let catalog = dir.path().join("catalog");
    fs::create_dir_all(&catalog).expect("mkdir");
    fs::write(catalog.join("b_second.toml"), "[motor]\nkv = 700.0\n").expect("write");
    fs::write(catalog.join("a_first.toml"), "name = \"Named\"\n").expect("write");
    fs::write(catalog.join("notes.txt"), "ignored").expect("write");
    let presets = load_presets(&catalog).expect("dir catalog");
    assert_eq!(presets.len(), 2);
    assert_eq!(presets[0].name.as_deref(), Some("Named"));
    assert_eq!(presets[1].name.as_deref(), Some("b_second"));
    assert_eq!(presets[1].motor.kv, 700.0);
}
