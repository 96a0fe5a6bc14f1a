//! Surface that records draw calls instead of rasterizing them

use super::{Color, Surface};
use crate::math::geometry::Point;

/// One recorded draw call
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Whole-canvas fill
    Clear {
        /// Fill color
        color: Color,
    },
    /// Solid polygon
    FillPolygon {
        /// Polygon vertices in drawing order
        points: Vec<Point>,
        /// Fill color
        color: Color,
    },
    /// Closed polygon outline
    StrokePolygon {
        /// Polygon vertices in drawing order
        points: Vec<Point>,
        /// Stroke color
        color: Color,
        /// Stroke width in pixels
        width: u32,
    },
    /// Open polyline, including single segments
    StrokePolyline {
        /// Polyline vertices in drawing order
        points: Vec<Point>,
        /// Stroke color
        color: Color,
        /// Stroke width in pixels
        width: u32,
    },
    /// Solid disc
    FillCircle {
        /// Disc center
        center: Point,
        /// Disc radius
        radius: f64,
        /// Fill color
        color: Color,
    },
    /// Circle outline
    StrokeCircle {
        /// Circle center
        center: Point,
        /// Circle radius
        radius: f64,
        /// Stroke color
        color: Color,
        /// Stroke width in pixels
        width: u32,
    },
}

impl Primitive {
    /// Color the primitive is drawn with
    pub const fn color(&self) -> Color {
        match self {
            Self::Clear { color }
            | Self::FillPolygon { color, .. }
            | Self::StrokePolygon { color, .. }
            | Self::StrokePolyline { color, .. }
            | Self::FillCircle { color, .. }
            | Self::StrokeCircle { color, .. } => *color,
        }
    }

    /// Stroke width, or `None` for fills
    pub const fn width(&self) -> Option<u32> {
        match self {
            Self::StrokePolygon { width, .. }
            | Self::StrokePolyline { width, .. }
            | Self::StrokeCircle { width, .. } => Some(*width),
            Self::Clear { .. } | Self::FillPolygon { .. } | Self::FillCircle { .. } => None,
        }
    }

    /// Whether the primitive paints an area rather than a stroke
    pub const fn is_fill(&self) -> bool {
        matches!(
            self,
            Self::Clear { .. } | Self::FillPolygon { .. } | Self::FillCircle { .. }
        )
    }

    /// Largest distance from `center` any part of the primitive reaches
    ///
    /// Stroke widths are not included. Returns `None` for [`Primitive::Clear`].
    pub fn reach(&self, center: Point) -> Option<f64> {
        match self {
            Self::Clear { .. } => None,
            Self::FillPolygon { points, .. }
            | Self::StrokePolygon { points, .. }
            | Self::StrokePolyline { points, .. } => points
                .iter()
                .map(|point| point.distance(center))
                .reduce(f64::max),
            Self::FillCircle { center: c, radius, .. }
            | Self::StrokeCircle { center: c, radius, .. } => Some(c.distance(center) + radius),
        }
    }
}

/// In-memory [`Surface`] keeping every primitive in call order
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    primitives: Vec<Primitive>,
}

impl RecordingSurface {
    /// Create an empty recording for a canvas of the given size
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            primitives: Vec::new(),
        }
    }

    /// Primitives recorded so far
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Remove and return every recorded primitive
    pub fn take(&mut self) -> Vec<Primitive> {
        std::mem::take(&mut self.primitives)
    }
}

impl Surface for RecordingSurface {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) {
        self.primitives.push(Primitive::Clear { color });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.primitives.push(Primitive::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn stroke_polygon(&mut self, points: &[Point], color: Color, width: u32) {
        self.primitives.push(Primitive::StrokePolygon {
            points: points.to_vec(),
            color,
            width,
        });
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: u32) {
        self.primitives.push(Primitive::StrokePolyline {
            points: points.to_vec(),
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.primitives.push(Primitive::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, width: u32) {
        self.primitives.push(Primitive::StrokeCircle {
            center,
            radius,
            color,
            width,
        });
    }
}
