//! Tests for curve-based motifs

#[cfg(test)]
mod tests {
    use alpona::io::configuration::{CLAY, IVORY};
    use alpona::math::geometry::{Point, Ring};
    use alpona::motif::curves::{braid, crosshatch, lotus_petals, spiral, wave};
    use alpona::motif::{Environment, FillMode};
    use alpona::render::{Primitive, RecordingSurface};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const RING: Ring = Ring {
        index: 1,
        inner: 50.0,
        outer: 90.0,
    };
    const TOLERANCE: f64 = 1e-6;

    fn environment() -> Environment {
        Environment::for_canvas(256, 256, IVORY, CLAY)
    }

    fn record<F>(seed: u64, draw: F) -> Vec<Primitive>
    where
        F: FnOnce(&mut RecordingSurface, &Environment, &mut StdRng),
    {
        let mut surface = RecordingSurface::new(256, 256);
        let mut rng = StdRng::seed_from_u64(seed);
        draw(&mut surface, &environment(), &mut rng);
        surface.take()
    }

    fn radius(point: &Point) -> f64 {
        point.distance(environment().center)
    }

    fn within_ring(point: &Point) -> bool {
        let r = radius(point);
        r > RING.inner - TOLERANCE && r < RING.outer + TOLERANCE
    }

    fn polylines(primitives: &[Primitive]) -> Vec<&Vec<Point>> {
        primitives
            .iter()
            .filter_map(|primitive| match primitive {
                Primitive::StrokePolyline { points, .. } => Some(points),
                _ => None,
            })
            .collect()
    }

    // Tests that the spiral winds outwards from the inner to the outer edge
    // Verified by interpolating the radius backwards
    #[test]
    fn test_spiral() {
        let primitives = record(1, |s, e, r| spiral(s, e, &RING, r));
        let strokes = polylines(&primitives);

        assert_eq!(strokes.len(), 1);
        let points = strokes.first().expect("one spiral stroke");
        assert_eq!(points.len(), 300);
        assert!((radius(points.first().expect("start")) - RING.inner).abs() < TOLERANCE);
        assert!((radius(points.last().expect("end")) - RING.outer).abs() < TOLERANCE);
        for pair in points.windows(2) {
            if let [a, b] = pair {
                assert!(radius(b) >= radius(a) - TOLERANCE);
            }
        }
        assert!(
            primitives
                .iter()
                .all(|p| p.width().is_some_and(|w| (1..=2).contains(&w)))
        );
    }

    // Tests that both braid strands swing across the whole band
    // Verified by doubling the amplitude
    #[test]
    fn test_braid() {
        let primitives = record(2, |s, e, r| braid(s, e, &RING, r));
        let strands = polylines(&primitives);

        assert_eq!(strands.len(), 2);
        for strand in strands {
            assert_eq!(strand.len(), 720);
            assert!(strand.iter().all(within_ring));
            let widest = strand.iter().map(radius).fold(f64::NEG_INFINITY, f64::max);
            assert!(widest > RING.outer - 1.0);
        }
        assert!(primitives.iter().all(|p| p.color().a == 170));
    }

    // Tests that the wave is one closed stroke inside the band
    // Verified by stopping one segment short of a full turn
    #[test]
    fn test_wave() {
        for seed in 0..10 {
            let primitives = record(seed, |s, e, r| wave(s, e, &RING, r));
            let strokes = polylines(&primitives);

            assert_eq!(strokes.len(), 1);
            let points = strokes.first().expect("one wave stroke");
            assert!((51..=81).contains(&points.len()));
            assert!(points.iter().all(within_ring));

            let start = points.first().expect("start");
            let end = points.last().expect("end");
            assert!(start.distance(*end) < TOLERANCE, "wave must close on itself");
        }
    }

    // Tests that crosshatch draws two spirals spanning the band
    // Verified by turning both spirals the same way
    #[test]
    fn test_crosshatch() {
        let primitives = record(3, |s, e, r| crosshatch(s, e, &RING, r));
        let spirals = polylines(&primitives);

        assert_eq!(spirals.len(), 2);
        for points in &spirals {
            assert_eq!(points.len(), 200);
            assert!(points.iter().all(within_ring));
        }
        assert!(primitives.iter().all(|p| p.color().a == 150));

        let a = spirals.first().and_then(|points| points.get(1)).copied();
        let b = spirals.last().and_then(|points| points.get(1)).copied();
        assert_ne!(a, b, "spirals must diverge immediately");
    }

    // Tests lotus petal outlines: mirrored sides meeting at base and tip
    // Verified by repeating the tip vertex on the mirrored side
    #[test]
    fn test_lotus_petals() {
        let filled = record(4, |s, e, r| lotus_petals(s, e, &RING, FillMode::Filled, r));
        let petals: Vec<&Vec<Point>> = filled
            .iter()
            .filter_map(|primitive| match primitive {
                Primitive::FillPolygon { points, .. } => Some(points),
                _ => None,
            })
            .collect();

        assert!((8..=16).contains(&petals.len()));
        for petal in &petals {
            assert_eq!(petal.len(), 28);
            assert!((radius(petal.first().expect("base")) - RING.inner).abs() < TOLERANCE);
            assert!((radius(petal.get(14).expect("tip")) - RING.outer).abs() < TOLERANCE);
            assert!(petal.iter().all(within_ring));
        }
        assert!(filled.iter().filter(|p| p.is_fill()).all(|p| p.color().a == 170));

        let outlined = record(4, |s, e, r| lotus_petals(s, e, &RING, FillMode::Outlined, r));
        assert!(outlined.iter().all(|p| !p.is_fill() && p.color().a == 180));
    }
}
