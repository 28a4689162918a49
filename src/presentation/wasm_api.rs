use std::str::FromStr;
use wasm_bindgen::prelude::*;

use gloo::console;

use crate::application::ChartApplicationService;
use crate::app::App;
use crate::domain::chart::{ChartConfig, SeriesKind};
use crate::infrastructure::rendering::CanvasRenderer;
use crate::infrastructure::services::JsRandomSource;

/// WASM API for driving the chart from JavaScript.
/// Minimal logic - only a bridge to the application layer. Lets a host
/// embed the engine headlessly, without the Leptos shell.
#[wasm_bindgen]
pub struct SeriesChartApi {
    service: ChartApplicationService,
    renderer: CanvasRenderer,
}

#[wasm_bindgen]
impl SeriesChartApi {
    /// Create an API instance over a canvas element, default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: String) -> Result<SeriesChartApi, JsValue> {
        Self::build(canvas_id, ChartConfig::default())
    }

    /// Create an API instance with a JSON configuration override, e.g.
    /// `{"canvas_size": 600, "series_len": 2000}`.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(canvas_id: String, config_json: &str) -> Result<SeriesChartApi, JsValue> {
        let config: ChartConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("invalid config: {}", e)))?;
        Self::build(canvas_id, config)
    }

    fn build(canvas_id: String, config: ChartConfig) -> Result<SeriesChartApi, JsValue> {
        let mut service = ChartApplicationService::new(canvas_id.clone(), config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        service.reset_series(&mut JsRandomSource::new());

        let size = config.canvas_size as u32;
        let renderer = CanvasRenderer::new(canvas_id, size, size);

        console::log!("📈 SeriesChartApi ready");
        Ok(SeriesChartApi { service, renderer })
    }

    /// Regenerate the backing series (same as the reset key).
    pub fn regenerate(&mut self) {
        self.service.reset_series(&mut JsRandomSource::new());
    }

    /// Feed a wheel delta; positive zooms out, like the DOM's `deltaY`.
    #[wasm_bindgen(js_name = zoomBy)]
    pub fn zoom_by(&mut self, delta_y: f64) {
        self.service.handle_wheel(delta_y);
    }

    #[wasm_bindgen(js_name = beginPan)]
    pub fn begin_pan(&mut self) {
        self.service.begin_pan();
    }

    #[wasm_bindgen(js_name = endPan)]
    pub fn end_pan(&mut self) {
        self.service.end_pan();
    }

    /// Feed a pointer movement while panning.
    #[wasm_bindgen(js_name = panBy)]
    pub fn pan_by(&mut self, movement_x: f64) {
        self.service.handle_pointer_move(movement_x);
    }

    pub fn detail(&self) -> f64 {
        self.service.stats().detail as f64
    }

    #[wasm_bindgen(js_name = startFrom)]
    pub fn start_from(&self) -> usize {
        self.service.stats().start_from
    }

    /// Current projection as JSON, for hosts with their own back-end.
    #[wasm_bindgen(js_name = frameJson)]
    pub fn frame_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.service.frame())
            .map_err(|e| JsValue::from_str(&format!("frame serialization failed: {}", e)))
    }

    /// Toggle one of the silhouettes ("primary" or "overlay").
    #[wasm_bindgen(js_name = setSeriesVisible)]
    pub fn set_series_visible(&mut self, kind: &str, visible: bool) -> Result<(), JsValue> {
        let kind = SeriesKind::from_str(kind)
            .map_err(|_| JsValue::from_str(&format!("unknown series kind '{}'", kind)))?;
        self.renderer.series_visibility.set(kind, visible);
        Ok(())
    }

    /// Paint the current frame onto the canvas.
    pub fn render(&self) -> Result<(), JsValue> {
        self.renderer
            .render_frame(&self.service.frame())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Mount the full Leptos shell into `document.body`.
#[wasm_bindgen(js_name = runApp)]
pub fn run_app() {
    leptos::mount_to_body(|| leptos::view! { <App /> });
}
