use crate::domain::{
    chart::{Chart, ChartConfig, Frame},
    errors::DataResult,
    events::{EventDispatcher, InMemoryEventDispatcher, SeriesEvent, ViewEvent},
    logging::{LogComponent, get_logger},
    series::{RandomSource, SeriesGenerator},
};

/// Application service coordinating one chart.
///
/// Maps raw input values onto domain transitions, regenerates the series,
/// and publishes domain events. The Leptos shell and the wasm API both go
/// through this service; neither touches the domain directly.
pub struct ChartApplicationService {
    chart: Chart,
    generator: SeriesGenerator,
    dispatcher: InMemoryEventDispatcher,
}

impl ChartApplicationService {
    pub fn new(chart_id: String, config: ChartConfig) -> DataResult<Self> {
        config.validate()?;
        let generator = SeriesGenerator::new(config.series_len, config.bounds)?;

        get_logger().info(
            LogComponent::Application("ChartService"),
            &format!(
                "🚀 Chart '{}' ready: {} samples in [{}, {}), canvas {} px",
                chart_id, config.series_len, config.bounds.min, config.bounds.max, config.canvas_size
            ),
        );

        Ok(Self { chart: Chart::new(chart_id, config), generator, dispatcher: InMemoryEventDispatcher::new() })
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    pub fn dispatcher_mut(&mut self) -> &mut InMemoryEventDispatcher {
        &mut self.dispatcher
    }

    /// Regenerate the backing series wholesale (startup and the reset key).
    pub fn reset_series(&mut self, rng: &mut dyn RandomSource) {
        let series = self.generator.generate(rng);
        let len = series.len();
        self.chart.set_series(series);
        self.dispatcher.publish_series_event(SeriesEvent::SeriesRegenerated { len });

        get_logger().info(
            LogComponent::Application("ChartService"),
            &format!("🔄 Series regenerated: {} samples", len),
        );
    }

    /// Wheel input. The DOM reports wheel-down as a positive `deltaY`;
    /// wheel-down zooms out (more points visible), so the sign flips at
    /// this boundary.
    pub fn handle_wheel(&mut self, delta_y: f64) {
        let old_detail = self.chart.view().detail;
        self.chart.zoom(-delta_y);
        let new_detail = self.chart.view().detail;

        if new_detail != old_detail {
            self.dispatcher.publish_view_event(ViewEvent::DetailChanged {
                chart_id: self.chart.id.clone(),
                old_detail,
                new_detail,
            });
        }
    }

    /// Pointer pressed on the canvas.
    pub fn begin_pan(&mut self) {
        self.chart.begin_pan();
        self.dispatcher.publish_view_event(ViewEvent::PanStateChanged {
            chart_id: self.chart.id.clone(),
            is_panning: true,
        });
    }

    /// Pointer released anywhere.
    pub fn end_pan(&mut self) {
        self.chart.end_pan();
        self.dispatcher.publish_view_event(ViewEvent::PanStateChanged {
            chart_id: self.chart.id.clone(),
            is_panning: false,
        });
    }

    /// Pointer moved anywhere while the pan gesture is active.
    pub fn handle_pointer_move(&mut self, movement_x: f64) {
        let old_start = self.chart.view().start_from;
        self.chart.pan_move(movement_x);
        let new_start = self.chart.view().start_from;

        if new_start != old_start {
            self.dispatcher.publish_view_event(ViewEvent::WindowScrolled {
                chart_id: self.chart.id.clone(),
                start_from: new_start,
            });
        }
    }

    /// Render-ready projection of the current state.
    pub fn frame(&self) -> Frame {
        self.chart.frame()
    }

    pub fn stats(&self) -> ViewStats {
        let view = self.chart.view();
        ViewStats {
            detail: view.detail,
            start_from: view.start_from,
            is_panning: view.is_panning,
            series_len: self.chart.series().len(),
        }
    }
}

/// Snapshot of the interactive state for the UI header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewStats {
    pub detail: f32,
    pub start_from: usize,
    pub is_panning: bool,
    pub series_len: usize,
}
