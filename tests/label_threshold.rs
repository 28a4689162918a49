use series_chart_wasm::domain::chart::{ChartConfig, ViewState, WindowProjector};
use series_chart_wasm::domain::series::{Magnitude, SampleSeries};
use series_chart_wasm::infrastructure::rendering::shapes;

fn frame_at_detail(detail: f32) -> series_chart_wasm::domain::chart::Frame {
    let series = SampleSeries::new((0..200).map(|i| Magnitude::from(42.0 + i as f32)).collect());
    let mut view = ViewState::from_config(&ChartConfig::default());
    view.detail = detail;
    WindowProjector::project(&series, &view, &ChartConfig::default())
}

#[test]
fn narrow_columns_render_no_labels() {
    // detail 45 on an 800 px canvas puts columns under the threshold
    let frame = frame_at_detail(45.0);
    assert!(frame.visible[0].px_width <= 20.0);
    assert!(shapes::labels(&frame).is_empty());
}

#[test]
fn wide_columns_carry_one_label_each() {
    let frame = frame_at_detail(30.0);
    let labels = shapes::labels(&frame);
    assert_eq!(labels.len(), frame.visible.len());
}

#[test]
fn label_geometry_follows_the_column() {
    let frame = frame_at_detail(30.0);
    let labels = shapes::labels(&frame);
    let width = frame.visible[0].px_width;

    for (point, label) in frame.visible.iter().zip(&labels) {
        assert!((label.x - (point.index as f32 * width + 2.0)).abs() < 1e-3);
        assert!((label.y - (point.height.max(10.0) - 10.0)).abs() < 1e-3);
        assert!((label.font_size - width / 2.0).abs() < 1e-3);
    }
}

#[test]
fn baseline_columns_anchor_their_label_at_the_top() {
    let series = SampleSeries::new(vec![Magnitude::from(60.0)]);
    let mut view = ViewState::from_config(&ChartConfig::default());
    view.detail = 30.0;
    let frame = WindowProjector::project(&series, &view, &ChartConfig::default());
    let labels = shapes::labels(&frame);

    // Past-the-end columns are baseline; max(0, 10) - 10 pins them to 0
    assert_eq!(labels[1].y, 0.0);
    assert_eq!(labels[1].content, "0");
}

#[test]
fn label_text_is_the_magnitude() {
    let frame = frame_at_detail(30.0);
    let labels = shapes::labels(&frame);
    assert_eq!(labels[0].content, "42");
    assert_eq!(labels[3].content, "45");
}
