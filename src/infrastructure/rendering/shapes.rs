use crate::domain::chart::{Color, Frame, SeriesKind};

/// Labels are suppressed below this column width to avoid clutter.
pub const LABEL_MIN_WIDTH: f32 = 20.0;
/// Grid stroke width in pixels.
pub const GRID_STROKE_WIDTH: f32 = 1.0;

/// A stroked segment, the only primitive the grid needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub stroke_width: f32,
    pub color: Color,
}

/// A filled shape described by an ordered outline; the painter closes it.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaShape {
    pub vertices: Vec<(f32, f32)>,
    pub fill: Color,
}

/// A text label for one visible column.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    pub content: String,
}

/// Both grid axes as stroked segments spanning the full canvas.
pub fn grid_segments(frame: &Frame, canvas_size: f32) -> Vec<LineSegment> {
    let mut segments = Vec::with_capacity(frame.h_lines.len() + frame.v_lines.len());

    for line in &frame.h_lines {
        segments.push(LineSegment {
            x1: 0.0,
            y1: line.offset,
            x2: canvas_size,
            y2: line.offset,
            stroke_width: GRID_STROKE_WIDTH,
            color: Color::GRID,
        });
    }

    for line in &frame.v_lines {
        segments.push(LineSegment {
            x1: line.offset,
            y1: 0.0,
            x2: line.offset,
            y2: canvas_size,
            stroke_width: GRID_STROKE_WIDTH,
            color: Color::GRID,
        });
    }

    segments
}

/// Closed outline of a step-after area over baseline 0.
///
/// Each height holds flat until the next point's x, then steps. The
/// outline runs along the stepped top, drops to the baseline under the
/// last point and returns under the first. Empty input yields no shape.
pub fn step_after_outline(points: &[(f32, f32)]) -> Option<Vec<(f32, f32)>> {
    let (&(first_x, first_y), rest) = points.split_first()?;

    let mut outline = Vec::with_capacity(points.len() * 2 + 2);
    outline.push((first_x, first_y));

    let mut prev_y = first_y;
    for &(x, y) in rest {
        outline.push((x, prev_y));
        outline.push((x, y));
        prev_y = y;
    }

    let last_x = points.last().map(|&(x, _)| x).unwrap_or(first_x);
    outline.push((last_x, 0.0));
    outline.push((first_x, 0.0));

    Some(outline)
}

/// Build one of the two filled silhouettes from a frame.
pub fn area(frame: &Frame, kind: SeriesKind) -> Option<AreaShape> {
    let points: Vec<(f32, f32)> = match kind {
        SeriesKind::Primary => frame
            .visible
            .iter()
            .map(|p| (p.index as f32 * p.px_width, p.height))
            .collect(),
        SeriesKind::Overlay => frame
            .overlay
            .iter()
            .map(|p| (p.index as f32 * p.px_width, p.height))
            .collect(),
    };

    step_after_outline(&points).map(|vertices| AreaShape { vertices, fill: kind.fill_color() })
}

/// Labels for the visible columns wide enough to carry one.
pub fn labels(frame: &Frame) -> Vec<TextLabel> {
    frame
        .visible
        .iter()
        .filter(|p| p.px_width > LABEL_MIN_WIDTH)
        .map(|p| TextLabel {
            x: p.index as f32 * p.px_width + 2.0,
            y: p.height.max(10.0) - 10.0,
            font_size: p.px_width / 2.0,
            content: format_magnitude(p.height),
        })
        .collect()
}

/// Whole magnitudes print bare; anything else keeps one decimal.
pub fn format_magnitude(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_outline_degrades_to_no_shape() {
        assert_eq!(step_after_outline(&[]), None);
    }

    #[test]
    fn outline_steps_then_closes_on_baseline() {
        let outline = step_after_outline(&[(0.0, 5.0), (10.0, 7.0)]).unwrap();
        assert_eq!(
            outline,
            vec![(0.0, 5.0), (10.0, 5.0), (10.0, 7.0), (10.0, 0.0), (0.0, 0.0)]
        );
    }

    #[test]
    fn whole_magnitudes_print_bare() {
        assert_eq!(format_magnitude(442.0), "442");
        assert_eq!(format_magnitude(31.5), "31.5");
    }
}
