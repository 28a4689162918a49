use crate::domain::errors::{AppError, DataResult};
use crate::domain::series::MagnitudeBounds;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// Hard floor for the zoom level.
pub const MIN_DETAIL: f32 = 3.0;
/// The zoom ceiling is the canvas size divided by this.
pub const MAX_DETAIL_DIVISOR: f32 = 2.5;
/// Zoom step is the current detail divided by this.
pub const ZOOM_STEP_DIVISOR: f32 = 20.0;

/// Sign of an input delta. Unlike `f64::signum`, zero (and NaN) map to
/// zero so that zero-delta events are no-ops.
fn sign(value: f64) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Value Object - static chart configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Side of the square drawable area, in pixels.
    pub canvas_size: f32,
    /// Points visible across the viewport at startup.
    pub default_detail: f32,
    /// Length of the generated backing series.
    pub series_len: usize,
    /// Magnitude range for the generator.
    pub bounds: MagnitudeBounds,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            canvas_size: 800.0,
            default_detail: 30.0,
            series_len: 5000,
            bounds: MagnitudeBounds::default(),
        }
    }
}

impl ChartConfig {
    pub fn min_detail(&self) -> f32 {
        MIN_DETAIL
    }

    pub fn max_detail(&self) -> f32 {
        self.canvas_size / MAX_DETAIL_DIVISOR
    }

    pub fn validate(&self) -> DataResult<()> {
        if self.canvas_size <= 0.0 {
            return Err(AppError::ValidationError(format!(
                "canvas size must be positive, got {}",
                self.canvas_size
            )));
        }
        if self.max_detail() < self.min_detail() {
            return Err(AppError::ValidationError(format!(
                "canvas of {} px cannot fit the minimum detail window",
                self.canvas_size
            )));
        }
        if !self.bounds.is_valid() {
            return Err(AppError::ValidationError(format!(
                "invalid magnitude bounds [{}, {})",
                self.bounds.min, self.bounds.max
            )));
        }
        Ok(())
    }
}

/// Value Object - Viewport state: zoom level, scroll offset, pan flag.
///
/// `detail` is the number of data points spanning the viewport width;
/// `start_from` is the global index of the first visible point. Both
/// change only through the transition methods below.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub detail: f32,
    pub start_from: usize,
    pub is_panning: bool,
    pub min_detail: f32,
    pub max_detail: f32,
}

impl ViewState {
    pub fn new(detail: f32, min_detail: f32, max_detail: f32) -> Self {
        Self {
            detail: detail.clamp(min_detail, max_detail),
            start_from: 0,
            is_panning: false,
            min_detail,
            max_detail,
        }
    }

    pub fn from_config(config: &ChartConfig) -> Self {
        Self::new(config.default_detail, config.min_detail(), config.max_detail())
    }

    /// Zoom by a signed scroll amount. Only the sign matters; the step is
    /// proportional to the current detail, and the result saturates at the
    /// configured bounds. Negative deltas widen the window.
    pub fn zoom(&mut self, delta: f64) {
        let step = self.detail / ZOOM_STEP_DIVISOR;
        let next = self.detail - sign(delta) * step;
        self.detail = next.clamp(self.min_detail, self.max_detail);
    }

    /// Pointer pressed on the canvas.
    pub fn begin_pan(&mut self) {
        self.is_panning = true;
    }

    /// Pointer released anywhere in the document.
    pub fn end_pan(&mut self) {
        self.is_panning = false;
    }

    /// Shift the window by one index per pointer-move event, opposite to
    /// the pointer direction. Ignored while not panning; saturates at 0.
    pub fn pan_move(&mut self, movement_x: f64) {
        if !self.is_panning {
            return;
        }
        let direction = sign(movement_x);
        if direction > 0.0 {
            self.start_from = self.start_from.saturating_sub(1);
        } else if direction < 0.0 {
            self.start_from += 1;
        }
    }
}

/// Derived, ephemeral - one point of the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisiblePoint {
    /// Window-local index.
    pub index: usize,
    pub height: f32,
    pub px_width: f32,
}

/// Derived from [`VisiblePoint`] - the alternating overlay silhouette.
/// Height is zeroed on points whose global offset parity is even.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayPoint {
    pub index: usize,
    pub height: f32,
    pub px_width: f32,
}

impl OverlayPoint {
    pub fn from_visible(point: &VisiblePoint, global_index: usize) -> Self {
        let parity = ((global_index + 1) % 2) as f32;
        Self { index: point.index, height: point.height * parity, px_width: point.px_width }
    }
}

/// Derived - a single grid line at `offset` px from the canvas origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub offset: f32,
}

/// Everything the drawing back-end needs for one redraw.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub visible: Vec<VisiblePoint>,
    pub overlay: Vec<OverlayPoint>,
    pub h_lines: Vec<GridLine>,
    pub v_lines: Vec<GridLine>,
}

/// Value Object - which of the two silhouettes a fill pass paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, AsRefStr)]
pub enum SeriesKind {
    #[display(fmt = "Primary")]
    #[strum(serialize = "primary")]
    Primary,
    #[display(fmt = "Overlay")]
    #[strum(serialize = "overlay")]
    Overlay,
}

/// Value Object - Color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn to_hex(&self) -> u32 {
        let r = (self.r * 255.0) as u32;
        let g = (self.g * 255.0) as u32;
        let b = (self.b * 255.0) as u32;
        (r << 16) | (g << 8) | b
    }

    /// CSS form consumed by the Canvas 2D API.
    pub fn to_css(&self) -> String {
        if (self.a - 1.0).abs() < f32::EPSILON {
            format!("#{:06x}", self.to_hex())
        } else {
            let r = (self.r * 255.0) as u32;
            let g = (self.g * 255.0) as u32;
            let b = (self.b * 255.0) as u32;
            format!("rgba({}, {}, {}, {})", r, g, b, self.a)
        }
    }

    /// Palette
    pub const BACKGROUND: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    pub const GRID: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const LABEL: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    /// #00aaff
    pub const PRIMARY_FILL: Color = Color { r: 0.0, g: 2.0 / 3.0, b: 1.0, a: 1.0 };
    /// #00ffaa
    pub const OVERLAY_FILL: Color = Color { r: 0.0, g: 1.0, b: 2.0 / 3.0, a: 1.0 };
}

impl SeriesKind {
    pub fn fill_color(&self) -> Color {
        match self {
            SeriesKind::Primary => Color::PRIMARY_FILL,
            SeriesKind::Overlay => Color::OVERLAY_FILL,
        }
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}
