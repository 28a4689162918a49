use quickcheck_macros::quickcheck;
use series_chart_wasm::domain::chart::{ChartConfig, ViewState};

fn default_view() -> ViewState {
    ViewState::from_config(&ChartConfig::default())
}

#[test]
fn wheel_step_is_proportional_to_detail() {
    let mut view = default_view();
    view.zoom(-1.0);
    assert!((view.detail - 31.5).abs() < 1e-4, "got {}", view.detail);
}

#[test]
fn zoom_in_saturates_at_the_floor() {
    let mut view = ViewState::new(3.0, 3.0, 320.0);
    for _ in 0..50 {
        view.zoom(1.0);
        assert_eq!(view.detail, 3.0);
    }
}

#[test]
fn zoom_out_saturates_at_the_ceiling() {
    let mut view = default_view();
    for _ in 0..500 {
        view.zoom(-1.0);
    }
    assert_eq!(view.detail, 320.0);
}

#[test]
fn zero_delta_is_a_no_op() {
    let mut view = default_view();
    view.zoom(0.0);
    assert_eq!(view.detail, 30.0);
}

#[test]
fn only_the_sign_of_the_delta_matters() {
    let mut small = default_view();
    let mut large = default_view();
    small.zoom(-0.3);
    large.zoom(-4096.0);
    assert_eq!(small.detail, large.detail);
}

#[quickcheck]
fn detail_stays_in_bounds(deltas: Vec<f64>) -> bool {
    let mut view = default_view();
    for delta in deltas {
        view.zoom(delta);
    }
    (3.0..=320.0).contains(&view.detail)
}
