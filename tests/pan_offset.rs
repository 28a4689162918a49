use quickcheck_macros::quickcheck;
use series_chart_wasm::domain::chart::{ChartConfig, ViewState};

fn panning_view_at(start_from: usize) -> ViewState {
    let mut view = ViewState::from_config(&ChartConfig::default());
    view.start_from = start_from;
    view.begin_pan();
    view
}

#[test]
fn drag_right_reveals_earlier_indices() {
    let mut view = panning_view_at(10);
    view.pan_move(5.0);
    assert_eq!(view.start_from, 9);
}

#[test]
fn drag_left_reveals_later_indices() {
    let mut view = panning_view_at(10);
    view.pan_move(-2.0);
    assert_eq!(view.start_from, 11);
}

#[test]
fn moves_are_ignored_while_not_panning() {
    let mut view = ViewState::from_config(&ChartConfig::default());
    view.start_from = 10;
    view.pan_move(5.0);
    view.pan_move(-5.0);
    assert_eq!(view.start_from, 10);
    assert!(!view.is_panning);
}

#[test]
fn offset_saturates_at_zero() {
    let mut view = panning_view_at(1);
    view.pan_move(3.0);
    assert_eq!(view.start_from, 0);
    view.pan_move(3.0);
    assert_eq!(view.start_from, 0);
}

#[test]
fn gesture_toggle_controls_the_moves() {
    let mut view = panning_view_at(5);
    view.end_pan();
    view.pan_move(1.0);
    assert_eq!(view.start_from, 5);
    view.begin_pan();
    view.pan_move(1.0);
    assert_eq!(view.start_from, 4);
}

#[quickcheck]
fn offset_tracks_the_clamped_model(movements: Vec<i32>) -> bool {
    let mut view = panning_view_at(0);
    let mut model: i64 = 0;
    for movement in movements {
        view.pan_move(movement as f64);
        model = (model - movement.signum() as i64).max(0);
    }
    view.start_from as i64 == model
}
