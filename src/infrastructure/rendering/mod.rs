pub mod canvas_renderer;
pub mod shapes;

pub use canvas_renderer::{CanvasRenderer, SeriesVisibility};
pub use shapes::{AreaShape, LineSegment, TextLabel};
