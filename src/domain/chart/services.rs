use super::value_objects::{ChartConfig, Frame, GridLine, OverlayPoint, ViewState, VisiblePoint};
use crate::domain::series::{Magnitude, SampleSeries};

/// Domain service - projects the viewport state onto the backing series.
///
/// Stateless and deterministic: the same `(series, view, config)` always
/// yields the same frame. Callers re-run it on every state change instead
/// of patching a previous frame.
pub struct WindowProjector;

impl WindowProjector {
    pub fn project(series: &SampleSeries, view: &ViewState, config: &ChartConfig) -> Frame {
        let px_width = config.canvas_size / view.detail;
        let count = Self::window_len(view.detail, view.start_from);

        let visible: Vec<VisiblePoint> = (0..count)
            .map(|i| VisiblePoint {
                index: i,
                // Indices past the series end project as the baseline.
                height: series
                    .get(view.start_from + i)
                    .unwrap_or(Magnitude::ZERO)
                    .value(),
                px_width,
            })
            .collect();

        // Global index is always start_from + local index; the overlay
        // parity is derived here and nowhere else.
        let overlay = visible
            .iter()
            .map(|point| OverlayPoint::from_visible(point, view.start_from + point.index))
            .collect();

        let h_lines = Self::grid_lines(view.detail, config.canvas_size);
        let v_lines = Self::grid_lines(view.detail, config.canvas_size);

        Frame { visible, overlay, h_lines, v_lines }
    }

    /// Window length under the literal sizing rule
    /// `ceil(detail + start_from + 1) - start_from`; with an integral
    /// start offset this is `ceil(detail) + 1`. The extra point keeps the
    /// right edge of the viewport covered at fractional detail.
    pub fn window_len(detail: f32, start_from: usize) -> usize {
        let raw = (detail as f64 + start_from as f64 + 1.0).ceil() as usize;
        raw.saturating_sub(start_from)
    }

    /// One axis of the grid: `⌊detail⌋ + 1` evenly spaced lines.
    pub fn grid_lines(detail: f32, canvas_size: f32) -> Vec<GridLine> {
        let step = canvas_size / detail;
        let count = detail as usize + 1;
        (0..count).map(|i| GridLine { offset: step * i as f32 }).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::SampleSeries;

    fn ramp_series(len: usize) -> SampleSeries {
        SampleSeries::new((0..len).map(|i| Magnitude::from(30.0 + i as f32)).collect())
    }

    #[test]
    fn window_len_adds_one_extra_point() {
        assert_eq!(WindowProjector::window_len(30.0, 0), 31);
        assert_eq!(WindowProjector::window_len(31.5, 0), 33);
        assert_eq!(WindowProjector::window_len(31.5, 12), 33);
    }

    #[test]
    fn past_end_heights_are_baseline() {
        let series = ramp_series(10);
        let mut view = ViewState::new(30.0, 3.0, 320.0);
        view.start_from = 5;
        let frame = WindowProjector::project(&series, &view, &ChartConfig::default());
        assert_eq!(frame.visible.len(), 31);
        assert_eq!(frame.visible[4].height, 39.0);
        assert_eq!(frame.visible[5].height, 0.0);
        assert!(frame.visible[6..].iter().all(|p| p.height == 0.0));
    }
}
