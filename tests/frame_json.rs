use serde_json::Value;
use series_chart_wasm::domain::chart::{ChartConfig, ViewState, WindowProjector};
use series_chart_wasm::domain::series::{Magnitude, SampleSeries};

#[test]
fn frame_serializes_with_the_documented_shape() {
    let series = SampleSeries::new((0..64).map(|i| Magnitude::from(30.0 + i as f32)).collect());
    let view = ViewState::from_config(&ChartConfig::default());
    let frame = WindowProjector::project(&series, &view, &ChartConfig::default());

    let json: Value = serde_json::to_value(&frame).unwrap();

    let visible = json["visible"].as_array().unwrap();
    assert_eq!(visible.len(), 31);
    assert_eq!(visible[0]["index"], 0);
    assert_eq!(visible[0]["height"], 30.0);
    assert!(visible[0]["px_width"].is_number());

    assert_eq!(json["overlay"].as_array().unwrap().len(), 31);
    assert_eq!(json["h_lines"].as_array().unwrap().len(), 31);
    assert_eq!(json["v_lines"].as_array().unwrap().len(), 31);
    assert!(json["h_lines"][0]["offset"].is_number());
}

#[test]
fn config_json_round_trips_through_serde() {
    let parsed: ChartConfig =
        serde_json::from_str(r#"{"canvas_size": 600.0, "series_len": 2000}"#).unwrap();
    assert_eq!(parsed.canvas_size, 600.0);
    assert_eq!(parsed.series_len, 2000);
    // Unspecified fields keep their defaults
    assert_eq!(parsed.default_detail, 30.0);
    assert_eq!(parsed.bounds, series_chart_wasm::domain::series::MagnitudeBounds::default());
    assert_eq!(parsed.max_detail(), 240.0);
}
