use super::*;

#[test]
fn pointer_ratio_divides_by_viewport() {
    assert_eq!(pointer_ratio(50.0, 25.0, 100.0, 100.0), (0.5, 0.25));
    assert_eq!(pointer_ratio(0.0, 0.0, 1280.0, 720.0), (0.0, 0.0));
}

#[test]
fn pointer_ratio_clamps_out_of_bounds() {
    assert_eq!(pointer_ratio(-10.0, 900.0, 100.0, 100.0), (0.0, 1.0));
}

#[test]
fn pointer_ratio_centers_on_degenerate_viewport() {
    assert_eq!(pointer_ratio(10.0, 10.0, 0.0, f64::NAN), (0.5, 0.5));
}

#[test]
fn install_is_noop_without_browser() {
    install();
}
