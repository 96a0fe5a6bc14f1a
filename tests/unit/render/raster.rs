//! Tests for the raster backend

#[cfg(test)]
mod tests {
    use alpona::math::geometry::Point;
    use alpona::render::{Color, RasterSurface, Surface};

    const BLACK: Color = Color::rgb(0, 0, 0);
    const WHITE: Color = Color::rgb(255, 255, 255);

    fn canvas() -> RasterSurface {
        RasterSurface::new(100, 100, BLACK)
    }

    fn is_painted(surface: &RasterSurface, x: u32, y: u32) -> bool {
        surface.pixel(x, y).is_some_and(|color| color != BLACK)
    }

    fn square(min: f64, max: f64) -> Vec<Point> {
        vec![
            Point::new(min, min),
            Point::new(max, min),
            Point::new(max, max),
            Point::new(min, max),
        ]
    }

    // Tests canvas allocation and pixel lookup bounds
    // Verified by swapping width and height in new
    #[test]
    fn test_new_canvas() {
        let surface = RasterSurface::new(30, 20, BLACK);

        assert_eq!(surface.dimensions(), (30, 20));
        assert_eq!(surface.pixel(29, 19), Some(BLACK));
        assert_eq!(surface.pixel(30, 0), None);
        assert_eq!(surface.pixel(0, 20), None);
        assert_eq!(surface.into_image().dimensions(), (30, 20));
    }

    // Tests that clear replaces every pixel
    // Verified by blending instead of replacing in clear
    #[test]
    fn test_clear() {
        let mut surface = canvas();
        surface.fill_polygon(&square(10.0, 20.0), WHITE);
        surface.clear(Color::rgb(110, 60, 40));

        assert!(
            surface
                .image()
                .pixels()
                .all(|pixel| pixel.0 == [110, 60, 40, 255])
        );
    }

    // Tests opaque polygon fill inside and outside the shape
    // Verified by skipping the mask blend
    #[test]
    fn test_fill_polygon() {
        let mut surface = canvas();
        surface.fill_polygon(&square(20.0, 80.0), WHITE);

        assert_eq!(surface.pixel(50, 50), Some(WHITE));
        assert_eq!(surface.pixel(5, 5), Some(BLACK));
        assert_eq!(surface.pixel(95, 50), Some(BLACK));
    }

    // Tests that an explicitly closed polygon is still filled
    // Verified by removing the duplicate closing vertex handling
    #[test]
    fn test_fill_polygon_with_closing_vertex() {
        let mut surface = canvas();
        let mut closed = square(20.0, 80.0);
        closed.push(Point::new(20.0, 20.0));
        surface.fill_polygon(&closed, WHITE);

        assert_eq!(surface.pixel(50, 50), Some(WHITE));
    }

    // Tests that shapes crossing the canvas edge are clipped rather than dropped
    // Verified by rejecting bounds that start outside the canvas
    #[test]
    fn test_fill_polygon_partially_off_canvas() {
        let mut surface = canvas();
        surface.fill_polygon(&square(-50.0, 30.0), WHITE);

        assert_eq!(surface.pixel(10, 10), Some(WHITE));
        assert_eq!(surface.pixel(60, 60), Some(BLACK));
    }

    // Tests translucent fills blend with the background
    // Verified by writing the fill color without blending
    #[test]
    fn test_translucent_fill_blends() {
        let mut surface = canvas();
        surface.fill_polygon(&square(20.0, 80.0), WHITE.with_alpha(128));

        let pixel = surface.pixel(50, 50).expect("pixel inside canvas");
        assert!((120..=136).contains(&pixel.r), "unexpected blend {pixel:?}");
        assert!(pixel.a >= 254);
    }

    // Tests disc fill
    // Verified by passing the radius as a diameter
    #[test]
    fn test_fill_circle() {
        let mut surface = canvas();
        surface.fill_circle(Point::new(50.0, 50.0), 10.0, WHITE);

        assert!(is_painted(&surface, 50, 50));
        assert!(is_painted(&surface, 58, 50));
        assert!(!is_painted(&surface, 65, 50));
    }

    // Tests that a stroked circle leaves its interior untouched
    // Verified by removing the inner disc erase
    #[test]
    fn test_stroke_circle_is_annulus() {
        let mut surface = canvas();
        surface.stroke_circle(Point::new(50.0, 50.0), 20.0, WHITE, 4);

        assert!(is_painted(&surface, 70, 50));
        assert!(is_painted(&surface, 50, 30));
        assert!(!is_painted(&surface, 50, 50));
        assert!(!is_painted(&surface, 60, 50));
        assert!(!is_painted(&surface, 80, 50));
    }

    // Tests hairline and thick polylines
    // Verified by ignoring the width when building segment quads
    #[test]
    fn test_stroke_polyline_width() {
        let line = [Point::new(10.0, 50.0), Point::new(90.0, 50.0)];

        let mut hairline = canvas();
        hairline.stroke_polyline(&line, WHITE, 1);
        assert!(is_painted(&hairline, 50, 50));
        assert!(!is_painted(&hairline, 50, 53));

        let mut thick = canvas();
        thick.stroke_polyline(&line, WHITE, 6);
        assert!(is_painted(&thick, 50, 50));
        assert!(is_painted(&thick, 50, 52));
        assert!(!is_painted(&thick, 50, 60));
    }

    // Tests that hairline endpoints snap to the nearest pixel row
    // Verified by truncating instead of rounding endpoints
    #[test]
    fn test_hairline_snaps_to_nearest_pixel() {
        let mut low = canvas();
        low.stroke_polyline(&[Point::new(10.0, 50.4), Point::new(90.0, 50.4)], WHITE, 1);
        assert!(is_painted(&low, 50, 50));
        assert!(!is_painted(&low, 50, 51));

        let mut high = canvas();
        high.stroke_polyline(&[Point::new(10.0, 50.6), Point::new(90.0, 50.6)], WHITE, 1);
        assert!(is_painted(&high, 50, 51));
        assert!(!is_painted(&high, 50, 50));
    }

    // Tests that a stroked polygon draws its closing edge but not its interior
    // Verified by stroking the points as an open polyline
    #[test]
    fn test_stroke_polygon_closes() {
        let mut surface = canvas();
        surface.stroke_polygon(&square(20.0, 80.0), WHITE, 2);

        assert!(is_painted(&surface, 20, 50));
        assert!(is_painted(&surface, 50, 20));
        assert!(!is_painted(&surface, 50, 50));
    }

    // Tests that degenerate input is ignored without panicking
    // Verified by removing the vertex count check
    #[test]
    fn test_degenerate_primitives_are_ignored() {
        let mut surface = canvas();
        let reference = surface.image().clone();

        surface.fill_polygon(&[Point::new(1.0, 1.0), Point::new(5.0, 5.0)], WHITE);
        surface.fill_polygon(&[Point::new(3.0, 3.0); 4], WHITE);
        surface.fill_polygon(
            &[
                Point::new(f64::NAN, 1.0),
                Point::new(5.0, 5.0),
                Point::new(9.0, 1.0),
            ],
            WHITE,
        );
        surface.fill_polygon(&square(-80.0, -40.0), WHITE);
        surface.fill_circle(Point::new(50.0, 50.0), 0.0, WHITE);
        surface.stroke_circle(Point::new(50.0, 50.0), -3.0, WHITE, 2);
        surface.stroke_circle(Point::new(50.0, 50.0), 10.0, WHITE, 0);
        surface.stroke_polyline(&[Point::new(10.0, 10.0)], WHITE, 3);
        surface.stroke_polyline(&[], WHITE, 3);
        surface.fill_circle(Point::new(500.0, 500.0), 10.0, WHITE);

        assert_eq!(surface.image(), &reference);
    }

    // Tests that fully transparent colors leave the canvas unchanged
    // Verified by removing the transparency early return
    #[test]
    fn test_transparent_color_is_noop() {
        let mut surface = canvas();
        let reference = surface.image().clone();
        surface.fill_polygon(&square(20.0, 80.0), WHITE.with_alpha(0));

        assert_eq!(surface.image(), &reference);
    }
}
