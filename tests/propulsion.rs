use approx::assert_abs_diff_eq;
use drone_performance_calculator::force::n_to_gf;
use drone_performance_calculator::propulsion::{
    FrameLayout, coaxial_factor, estimate_prop_coefficients, geometry_factor,
    max_prop_diameter_mm, prop_power, resolve_prop_coefficients, thrust,
};
use drone_performance_calculator::units::in_to_mm;

#[test]
fn stationary_prop_makes_no_thrust_or_power() {
    for (ct, rho, d) in [(0.1, 1.225, 0.254), (0.2, 0.9, 0.5), (0.05, 1.3, 0.127)] {
        assert_eq!(thrust(ct, rho, 0.0, d), 0.0);
        assert_eq!(prop_power(ct, rho, 0.0, d), 0.0);
    }
}

#[test]
fn thrust_follows_rps_squared() {
    let t1 = thrust(0.1, 1.2, 100.0, 0.254);
    let t2 = thrust(0.1, 1.2, 200.0, 0.254);
    assert_abs_diff_eq!(t2 / t1, 4.0, epsilon = 1e-9);
    let p1 = prop_power(0.04, 1.2, 100.0, 0.254);
    let p2 = prop_power(0.04, 1.2, 200.0, 0.254);
    assert_abs_diff_eq!(p2 / p1, 8.0, epsilon = 1e-9);
}

#[test]
fn ten_by_four_five_estimate() {
    let c = estimate_prop_coefficients(10.0, 4.5, 2);
    assert_abs_diff_eq!(c.ct, 0.095_25, epsilon = 1e-12);
    assert_abs_diff_eq!(c.cp, 0.040_75, epsilon = 1e-12);
}

#[test]
fn three_blades_beat_two_blades() {
    for (d, p) in [(5.0, 3.0), (10.0, 4.5), (15.0, 5.5), (7.0, 4.0)] {
        let two = estimate_prop_coefficients(d, p, 2);
        let three = estimate_prop_coefficients(d, p, 3);
        assert!(three.ct > two.ct, "ct {d}x{p}");
        assert!(three.cp > two.cp, "cp {d}x{p}");
    }
}

#[test]
fn coaxial_derating() {
    assert_eq!(coaxial_factor(true), 0.85);
    assert_eq!(coaxial_factor(false), 1.0);
}

#[test]
fn frame_geometry_limits() {
    assert_eq!(geometry_factor(3), 0.866);
    assert_eq!(geometry_factor(4), 0.707);
    assert_eq!(geometry_factor(6), 0.5);
    assert_eq!(geometry_factor(8), 0.38);
    assert_eq!(geometry_factor(5), 0.5);
    assert_abs_diff_eq!(max_prop_diameter_mm(450.0, 4), 318.15, epsilon = 1e-9);
}

#[test]
fn coefficients_are_clamped_for_extreme_pitch() {
    let c = estimate_prop_coefficients(5.0, 50.0, 3);
    assert_eq!(c.ct, 0.22);
    assert_eq!(c.cp, 0.12);
    let c = estimate_prop_coefficients(0.0, 4.5, 2);
    assert_eq!(c.ct, 0.075);
    assert_eq!(c.cp, 0.025);
}

#[test]
fn partial_override_keeps_estimate_for_the_other() {
    let est = estimate_prop_coefficients(10.0, 4.5, 2);
    let c = resolve_prop_coefficients(Some(0.11), None, 10.0, 4.5, 2);
    assert_eq!(c.ct, 0.11);
    assert_eq!(c.cp, est.cp);
}

#[test]
fn layout_labels_fall_back_to_flat() {
    assert_eq!(FrameLayout::from_label("Coaxial"), FrameLayout::Coaxial);
    assert_eq!(FrameLayout::from_label("x8"), FrameLayout::Flat);
}

#[test]
fn unit_helpers() {
    assert_abs_diff_eq!(in_to_mm(10.0), 254.0, epsilon = 1e-12);
    assert_abs_diff_eq!(n_to_gf(9.806_65), 1_000.0, epsilon = 1e-9);
}
