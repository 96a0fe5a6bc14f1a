//! Drawing backend contract and its implementations
//!
//! Motifs only talk to the [`Surface`] trait. [`RasterSurface`] rasterizes into
//! an RGBA image, [`RecordingSurface`] keeps the primitives for inspection.

/// RGBA color value type
pub mod color;
/// Raster backend built on `image` and `imageproc`
pub mod raster;
/// Backend that records primitives instead of drawing them
pub mod recording;

pub use color::Color;
pub use raster::RasterSurface;
pub use recording::{Primitive, RecordingSurface};

use crate::math::geometry::Point;

/// Primitive drawing operations every backend provides
///
/// Implementations must accept any input without panicking: degenerate
/// polygons, zero radii and shapes outside the canvas are silently dropped.
pub trait Surface {
    /// Canvas size as `(width, height)` in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Cover the whole canvas with `color`, replacing what was there
    fn clear(&mut self, color: Color);

    /// Fill the interior of a closed polygon
    fn fill_polygon(&mut self, points: &[Point], color: Color);

    /// Stroke the edges of a closed polygon, including the closing edge
    fn stroke_polygon(&mut self, points: &[Point], color: Color, width: u32);

    /// Stroke an open sequence of connected line segments
    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: u32);

    /// Fill a disc
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    /// Stroke a circle outline centred on `radius`
    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, width: u32);

    /// Stroke a single line segment
    fn stroke_line(&mut self, start: Point, end: Point, color: Color, width: u32) {
        self.stroke_polyline(&[start, end], color, width);
    }
}
