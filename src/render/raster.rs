//! Raster backend drawing into an RGBA image buffer
//!
//! Each primitive is first rasterized with `imageproc` into a coverage mask
//! covering only its bounding box, then blended onto the canvas in one pass.
//! Overlapping pieces of the same stroke (joins, segment ends) therefore never
//! accumulate alpha twice.

use super::{Color, Surface};
use crate::math::geometry::Point;
use image::{GrayImage, Luma, Pixel, Rgba, RgbaImage};
use imageproc::drawing::{
    draw_antialiased_line_segment_mut, draw_filled_circle_mut, draw_polygon_mut,
};
use imageproc::point::Point as PixelPoint;

const COVERED: Luma<u8> = Luma([255]);
const UNCOVERED: Luma<u8> = Luma([0]);

// Extra pixels around a primitive's bounding box so rounding never clips it
const MASK_MARGIN: f64 = 2.0;

/// Canvas pixels a primitive may touch, already clipped to the canvas
#[derive(Clone, Copy, Debug)]
struct MaskBounds {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl MaskBounds {
    fn around(points: &[Point], padding: f64, canvas: (u32, u32)) -> Option<Self> {
        let mut min = Point::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);

        for point in points {
            if !point.x.is_finite() || !point.y.is_finite() {
                return None;
            }
            min = Point::new(min.x.min(point.x), min.y.min(point.y));
            max = Point::new(max.x.max(point.x), max.y.max(point.y));
        }

        let padding = padding + MASK_MARGIN;
        let x0 = (min.x - padding).floor().max(0.0);
        let y0 = (min.y - padding).floor().max(0.0);
        let x1 = (max.x + padding).ceil().min(f64::from(canvas.0));
        let y1 = (max.y + padding).ceil().min(f64::from(canvas.1));

        (x1 > x0 && y1 > y0).then(|| Self {
            x: x0 as u32,
            y: y0 as u32,
            width: (x1 - x0) as u32,
            height: (y1 - y0) as u32,
        })
    }

    fn around_circle(center: Point, radius: f64, padding: f64, canvas: (u32, u32)) -> Option<Self> {
        let reach = Point::new(radius, radius);
        Self::around(&[center - reach, center + reach], padding, canvas)
    }

    fn pixel(&self, point: Point) -> (i32, i32) {
        (
            (point.x - f64::from(self.x)).round() as i32,
            (point.y - f64::from(self.y)).round() as i32,
        )
    }

    // imageproc rejects polygons whose first and last vertex coincide
    fn polygon(&self, points: &[Point]) -> Option<Vec<PixelPoint<i32>>> {
        let mut polygon: Vec<PixelPoint<i32>> = Vec::with_capacity(points.len());
        for point in points {
            let (x, y) = self.pixel(*point);
            let vertex = PixelPoint::new(x, y);
            if polygon.last() != Some(&vertex) {
                polygon.push(vertex);
            }
        }
        while polygon.len() > 1 && polygon.first() == polygon.last() {
            polygon.pop();
        }

        (polygon.len() >= 3).then_some(polygon)
    }
}

fn max_coverage(line: Luma<u8>, original: Luma<u8>, weight: f32) -> Luma<u8> {
    let Luma([line]) = line;
    let Luma([original]) = original;
    let covered = (f32::from(line) * weight.clamp(0.0, 1.0)).round() as u8;
    Luma([original.max(covered)])
}

fn rasterize_polyline(mask: &mut GrayImage, bounds: &MaskBounds, points: &[Point], width: u32) {
    // imageproc anti-aliases between whole-pixel endpoints, so hairlines
    // snap to the nearest pixel centre
    if width <= 1 {
        for segment in points.windows(2) {
            if let [start, end] = segment {
                draw_antialiased_line_segment_mut(
                    mask,
                    bounds.pixel(*start),
                    bounds.pixel(*end),
                    COVERED,
                    max_coverage,
                );
            }
        }
        return;
    }

    let half = f64::from(width) / 2.0;
    for segment in points.windows(2) {
        if let [start, end] = segment {
            let length = start.distance(*end);
            if length < f64::EPSILON {
                continue;
            }
            let normal = Point::new(start.y - end.y, end.x - start.x) * (half / length);
            let quad = [
                *start + normal,
                *end + normal,
                *end - normal,
                *start - normal,
            ];
            if let Some(polygon) = bounds.polygon(&quad) {
                draw_polygon_mut(mask, &polygon, COVERED);
            }
        }
    }

    // Round joins and caps
    let join_radius = ((width - 1) / 2) as i32;
    for point in points {
        draw_filled_circle_mut(mask, bounds.pixel(*point), join_radius, COVERED);
    }
}

/// RGBA canvas implementing [`Surface`]
#[derive(Clone, Debug)]
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    /// Allocate a canvas filled with `background`
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background.into()),
        }
    }

    /// Borrow the underlying image buffer
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Give up the canvas and return its image buffer
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Color at a pixel, or `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image.get_pixel_checked(x, y).map(|pixel| Color::from(*pixel))
    }

    fn paint<F>(&mut self, bounds: Option<MaskBounds>, color: Color, rasterize: F)
    where
        F: FnOnce(&mut GrayImage, &MaskBounds),
    {
        if color.is_transparent() {
            return;
        }
        let Some(bounds) = bounds else {
            return;
        };

        let mut mask = GrayImage::new(bounds.width, bounds.height);
        rasterize(&mut mask, &bounds);

        for (x, y, coverage) in mask.enumerate_pixels() {
            let Luma([coverage]) = *coverage;
            if coverage == 0 {
                continue;
            }
            if let Some(target) = self
                .image
                .get_pixel_mut_checked(bounds.x + x, bounds.y + y)
            {
                target.blend(&Rgba::from(color.with_coverage(coverage)));
            }
        }
    }
}

impl Surface for RasterSurface {
    fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn clear(&mut self, color: Color) {
        for pixel in self.image.pixels_mut() {
            *pixel = color.into();
        }
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        let bounds = MaskBounds::around(points, 0.0, self.dimensions());
        self.paint(bounds, color, |mask, bounds| {
            if let Some(polygon) = bounds.polygon(points) {
                draw_polygon_mut(mask, &polygon, COVERED);
            }
        });
    }

    fn stroke_polygon(&mut self, points: &[Point], color: Color, width: u32) {
        let mut closed = points.to_vec();
        if let Some(first) = points.first() {
            closed.push(*first);
        }
        self.stroke_polyline(&closed, color, width);
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: u32) {
        if points.len() < 2 || width == 0 {
            return;
        }
        let bounds = MaskBounds::around(points, f64::from(width), self.dimensions());
        self.paint(bounds, color, |mask, bounds| {
            rasterize_polyline(mask, bounds, points, width);
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        if !radius.is_finite() || radius <= 0.0 {
            return;
        }
        let bounds = MaskBounds::around_circle(center, radius, 0.0, self.dimensions());
        self.paint(bounds, color, |mask, bounds| {
            draw_filled_circle_mut(mask, bounds.pixel(center), radius.round() as i32, COVERED);
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, width: u32) {
        if !radius.is_finite() || radius <= 0.0 || width == 0 {
            return;
        }
        let half = f64::from(width) / 2.0;
        let bounds = MaskBounds::around_circle(center, radius, half, self.dimensions());
        self.paint(bounds, color, |mask, bounds| {
            let origin = bounds.pixel(center);
            let outer = (radius + half).round() as i32;
            let inner = (radius - half).round() as i32;
            draw_filled_circle_mut(mask, origin, outer, COVERED);
            if inner > 0 && inner < outer {
                draw_filled_circle_mut(mask, origin, inner, UNCOVERED);
            }
        });
    }
}
