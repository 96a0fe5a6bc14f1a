//! Motifs traced as continuous curves in polar coordinates

use super::{Environment, FillMode, fill_with_border};
use crate::math::geometry::{Point, Ring, polar_point};
use crate::math::probability::line_width;
use crate::math::{lerp, linspace};
use crate::render::Surface;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::f64::consts::{PI, TAU};

const SPIRAL_SAMPLES: usize = 300;
const BRAID_SAMPLES: usize = 720;
const CROSSHATCH_SAMPLES: usize = 200;
const CROSSHATCH_WOBBLE: f64 = 0.15;

// Samples along one side of a lotus petal, base and tip included
const LOTUS_SIDE_SAMPLES: usize = 15;
// Petal half-width at its widest, relative to the petal spacing
const LOTUS_FULLNESS: f64 = 0.9;

const WAVE_FREQUENCIES: [u32; 4] = [5, 7, 9, 11];

/// Spiral: one stroke winding 4 to 7 times from the inner to the outer edge
pub fn spiral<S, R>(surface: &mut S, environment: &Environment, ring: &Ring, rng: &mut R)
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    let turns = rng.random_range(4..=7_u32);
    let width = line_width(rng, FillMode::Filled);
    let sweep = TAU * f64::from(turns);

    let points: Vec<Point> = linspace(0.0, sweep, SPIRAL_SAMPLES)
        .into_iter()
        .map(|t| polar_point(environment.center, lerp(ring.inner, ring.outer, t / sweep), t))
        .collect();
    surface.stroke_polyline(&points, environment.primary.with_alpha(180), width);
}

/// Braid: two sinusoids half a period apart, swinging across the whole band
pub fn braid<S, R>(surface: &mut S, environment: &Environment, ring: &Ring, rng: &mut R)
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    let frequency = f64::from(rng.random_range(16..=24_u32));
    let width = line_width(rng, FillMode::Outlined);
    let amplitude = ring.thickness() / 2.0;
    let color = environment.primary.with_alpha(170);

    for phase in [0.0, PI] {
        let points: Vec<Point> = linspace(0.0, TAU, BRAID_SAMPLES)
            .into_iter()
            .map(|angle| {
                let radius = amplitude.mul_add(frequency.mul_add(angle, phase).sin(), ring.mid());
                polar_point(environment.center, radius, angle)
            })
            .collect();
        surface.stroke_polyline(&points, color, width);
    }
}

/// Wave: one closed stroke oscillating between the ring edges
pub fn wave<S, R>(surface: &mut S, environment: &Environment, ring: &Ring, rng: &mut R)
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    let segments = rng.random_range(50..=80_u32);
    let frequency = f64::from(WAVE_FREQUENCIES.choose(rng).copied().unwrap_or(5));
    let width = line_width(rng, FillMode::Outlined);
    let phase = rng.random_range(0.0..PI);

    let points: Vec<Point> = (0..=segments)
        .map(|i| {
            let angle = TAU * f64::from(i) / f64::from(segments);
            let swing = 0.5f64.mul_add(frequency.mul_add(angle, phase).sin(), 0.5);
            polar_point(
                environment.center,
                ring.thickness().mul_add(swing, ring.inner),
                angle,
            )
        })
        .collect();
    surface.stroke_polyline(&points, environment.primary.with_alpha(180), width);
}

/// Crosshatch: two wobbling spirals turning in opposite directions
pub fn crosshatch<S, R>(surface: &mut S, environment: &Environment, ring: &Ring, rng: &mut R)
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    let width = line_width(rng, FillMode::Outlined);
    let color = environment.primary.with_alpha(150);

    for direction in [-1.0, 1.0] {
        let sweep = TAU * f64::from(rng.random_range(6..=10_u32));
        let points: Vec<Point> = linspace(0.0, sweep, CROSSHATCH_SAMPLES)
            .into_iter()
            .map(|t| {
                let angle = CROSSHATCH_WOBBLE.mul_add((t * 0.7).sin(), t * direction);
                polar_point(environment.center, lerp(ring.inner, ring.outer, t / sweep), angle)
            })
            .collect();
        surface.stroke_polyline(&points, color, width);
    }
}

/// Lotus petals: rounded petals whose sides follow half a sine period
///
/// One side is sampled from base to tip and mirrored about the petal axis;
/// the shared base and tip vertices appear once.
pub fn lotus_petals<S, R>(
    surface: &mut S,
    environment: &Environment,
    ring: &Ring,
    fill_mode: FillMode,
    rng: &mut R,
) where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    let count = rng.random_range(8..=16_u32);
    let width = line_width(rng, fill_mode);
    let half_width = LOTUS_FULLNESS * PI / f64::from(count);
    let profile: Vec<(f64, f64)> = linspace(0.0, 1.0, LOTUS_SIDE_SAMPLES)
        .into_iter()
        .map(|t| (lerp(ring.inner, ring.outer, t), half_width * (PI * t).sin()))
        .collect();

    for i in 0..count {
        let axis = TAU * f64::from(i) / f64::from(count);
        let mut outline: Vec<Point> = profile
            .iter()
            .map(|&(radius, offset)| polar_point(environment.center, radius, axis + offset))
            .collect();
        let inner_side = profile.len().saturating_sub(1);
        outline.extend(
            profile
                .iter()
                .take(inner_side)
                .skip(1)
                .rev()
                .map(|&(radius, offset)| polar_point(environment.center, radius, axis - offset)),
        );

        match fill_mode {
            FillMode::Filled => fill_with_border(
                surface,
                &outline,
                environment.primary.with_alpha(170),
                environment.primary.with_alpha(210),
                width,
            ),
            FillMode::Outlined => {
                surface.stroke_polygon(&outline, environment.primary.with_alpha(180), width);
            }
        }
    }
}
