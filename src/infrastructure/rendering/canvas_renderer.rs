use gloo::utils::document;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes::{self, AreaShape, LineSegment, TextLabel};
use crate::domain::{
    chart::{Color, Frame, SeriesKind},
    errors::{AppError, RenderingResult},
    logging::{LogComponent, get_logger},
};
use strum::IntoEnumIterator;

#[cfg(feature = "parallel")]
use rayon::join;

/// Which silhouettes the painter draws; both by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesVisibility {
    pub primary: bool,
    pub overlay: bool,
}

impl Default for SeriesVisibility {
    fn default() -> Self {
        Self { primary: true, overlay: true }
    }
}

impl SeriesVisibility {
    pub fn shows(&self, kind: SeriesKind) -> bool {
        match kind {
            SeriesKind::Primary => self.primary,
            SeriesKind::Overlay => self.overlay,
        }
    }

    pub fn set(&mut self, kind: SeriesKind, visible: bool) {
        match kind {
            SeriesKind::Primary => self.primary = visible,
            SeriesKind::Overlay => self.overlay = visible,
        }
    }
}

/// Everything one redraw paints, precomputed before touching the canvas.
#[derive(Debug, Clone)]
struct RenderPlan {
    grid: Vec<LineSegment>,
    areas: Vec<AreaShape>,
    labels: Vec<TextLabel>,
}

/// Canvas 2D painter - Infrastructure implementation of the drawing
/// back-end contract: stroke segments, fill vertex-list paths, draw text.
pub struct CanvasRenderer {
    canvas_id: String,
    width: u32,
    height: u32,
    parallel_threshold: usize,
    pub series_visibility: SeriesVisibility,
}

impl CanvasRenderer {
    pub fn new(canvas_id: String, width: u32, height: u32) -> Self {
        Self {
            canvas_id,
            width,
            height,
            // Parallelize shape building only past this column count
            parallel_threshold: 100,
            series_visibility: SeriesVisibility::default(),
        }
    }

    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Get canvas element and context
    fn get_canvas_context(&self) -> RenderingResult<(HtmlCanvasElement, CanvasRenderingContext2d)> {
        let canvas = document()
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| {
                AppError::RenderingError(format!("canvas element '{}' not found", self.canvas_id))
            })?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| AppError::RenderingError("element is not a canvas".to_string()))?;

        canvas.set_width(self.width);
        canvas.set_height(self.height);

        let context = canvas
            .get_context("2d")
            .map_err(|_| AppError::RenderingError("failed to get 2D context".to_string()))?
            .ok_or_else(|| AppError::RenderingError("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::RenderingError("failed to cast to 2D context".to_string()))?;

        Ok((canvas, context))
    }

    /// Paint one frame: background, grid, the two silhouettes, labels.
    pub fn render_frame(&self, frame: &Frame) -> RenderingResult<()> {
        let start_time = Self::now();

        let plan = self.build_plan(frame);
        let calc_time = Self::now();

        let (_canvas, context) = self.get_canvas_context()?;
        self.paint(&context, &plan)?;

        let end_time = Self::now();
        get_logger().debug(
            LogComponent::Infrastructure("CanvasRenderer"),
            &format!(
                "⚡ Frame painted: {} columns, {} grid lines, {} labels (calc={:.1}ms, draw={:.1}ms)",
                frame.visible.len(),
                plan.grid.len(),
                plan.labels.len(),
                calc_time - start_time,
                end_time - calc_time,
            ),
        );

        Ok(())
    }

    fn build_plan(&self, frame: &Frame) -> RenderPlan {
        let grid = shapes::grid_segments(frame, self.width as f32);
        let areas = self.build_areas(frame);
        let labels = shapes::labels(frame);
        RenderPlan { grid, areas, labels }
    }

    /// The two silhouettes are independent, so past the threshold they
    /// are built concurrently; the paint pass stays sequential because
    /// Canvas 2D is not thread-safe.
    #[cfg(feature = "parallel")]
    fn build_areas(&self, frame: &Frame) -> Vec<AreaShape> {
        if frame.visible.len() >= self.parallel_threshold {
            let (primary, overlay) = join(
                || {
                    self.series_visibility
                        .shows(SeriesKind::Primary)
                        .then(|| shapes::area(frame, SeriesKind::Primary))
                        .flatten()
                },
                || {
                    self.series_visibility
                        .shows(SeriesKind::Overlay)
                        .then(|| shapes::area(frame, SeriesKind::Overlay))
                        .flatten()
                },
            );
            [primary, overlay].into_iter().flatten().collect()
        } else {
            self.build_areas_sequential(frame)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn build_areas(&self, frame: &Frame) -> Vec<AreaShape> {
        self.build_areas_sequential(frame)
    }

    fn build_areas_sequential(&self, frame: &Frame) -> Vec<AreaShape> {
        SeriesKind::iter()
            .filter(|kind| self.series_visibility.shows(*kind))
            .filter_map(|kind| shapes::area(frame, kind))
            .collect()
    }

    fn paint(&self, context: &CanvasRenderingContext2d, plan: &RenderPlan) -> RenderingResult<()> {
        context.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        context.set_fill_style(&JsValue::from(Color::BACKGROUND.to_css()));
        context.fill_rect(0.0, 0.0, self.width as f64, self.height as f64);

        for segment in &plan.grid {
            context.set_stroke_style(&JsValue::from(segment.color.to_css()));
            context.set_line_width(segment.stroke_width as f64);
            context.begin_path();
            context.move_to(segment.x1 as f64, segment.y1 as f64);
            context.line_to(segment.x2 as f64, segment.y2 as f64);
            context.stroke();
        }

        for area in &plan.areas {
            let Some((first, rest)) = area.vertices.split_first() else {
                continue;
            };
            context.set_fill_style(&JsValue::from(area.fill.to_css()));
            context.begin_path();
            context.move_to(first.0 as f64, first.1 as f64);
            for vertex in rest {
                context.line_to(vertex.0 as f64, vertex.1 as f64);
            }
            context.close_path();
            context.fill();
        }

        context.set_fill_style(&JsValue::from(Color::LABEL.to_css()));
        for label in &plan.labels {
            context.set_font(&format!("{}px sans-serif", label.font_size));
            context
                .fill_text(&label.content, label.x as f64, label.y as f64)
                .map_err(|_| AppError::RenderingError("failed to draw label".to_string()))?;
        }

        Ok(())
    }

    fn now() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }
}
