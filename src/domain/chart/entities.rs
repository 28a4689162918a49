use super::services::WindowProjector;
use super::value_objects::{ChartConfig, Frame, ViewState};
use crate::domain::series::SampleSeries;

/// Domain entity - one chart: a backing series plus its viewport.
///
/// The series is replaced wholesale on reset; the view changes only via
/// its transition methods. Everything the back-end draws comes out of
/// `frame()`.
#[derive(Debug, Clone)]
pub struct Chart {
    pub id: String,
    pub config: ChartConfig,
    series: SampleSeries,
    view: ViewState,
}

impl Chart {
    pub fn new(id: String, config: ChartConfig) -> Self {
        Self { id, config, series: SampleSeries::empty(), view: ViewState::from_config(&config) }
    }

    pub fn series(&self) -> &SampleSeries {
        &self.series
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn has_data(&self) -> bool {
        !self.series.is_empty()
    }

    /// Swap in a freshly generated series. The viewport is untouched: a
    /// reset changes the data under the window, not the window.
    pub fn set_series(&mut self, series: SampleSeries) {
        self.series = series;
    }

    pub fn zoom(&mut self, delta: f64) {
        self.view.zoom(delta);
    }

    pub fn begin_pan(&mut self) {
        self.view.begin_pan();
    }

    pub fn end_pan(&mut self) {
        self.view.end_pan();
    }

    pub fn pan_move(&mut self, movement_x: f64) {
        self.view.pan_move(movement_x);
    }

    /// Project the current state into a render-ready frame.
    pub fn frame(&self) -> Frame {
        WindowProjector::project(&self.series, &self.view, &self.config)
    }
}
