//! Circle and cell motifs

use super::{Environment, FillMode, fill_circle_with_border};
use crate::math::geometry::{Ring, polar_point};
use crate::math::lerp;
use crate::math::probability::line_width;
use crate::render::Surface;
use rand::Rng;
use std::f64::consts::{PI, TAU};

/// Circles: small circles evenly spaced on a single radius
///
/// The placement radius falls in the middle 40% of the ring. The circle size
/// is bounded both by the ring thickness and by the arc available to each
/// circle, so neighbours never merge in thin or crowded rings.
pub fn circles<S, R>(
    surface: &mut S,
    environment: &Environment,
    ring: &Ring,
    fill_mode: FillMode,
    rng: &mut R,
) where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    let count = rng.random_range(10..=20_u32);
    let width = line_width(rng, fill_mode);
    let placement = lerp(ring.inner, ring.outer, rng.random_range(0.3..=0.7));
    let radius = (ring.thickness() / rng.random_range(2.5..=4.0))
        .min((TAU * placement / f64::from(count)) / rng.random_range(2.5..=4.0));

    for i in 0..count {
        let position = polar_point(
            environment.center,
            placement,
            TAU * f64::from(i) / f64::from(count),
        );

        match fill_mode {
            FillMode::Filled => fill_circle_with_border(
                surface,
                position,
                radius,
                environment.primary.with_alpha(180),
                environment.primary.with_alpha(200),
                width,
            ),
            FillMode::Outlined => {
                surface.stroke_circle(position, radius, environment.primary.with_alpha(180), width);
            }
        }
    }
}

/// Dots: tiny discs on two to four sub-rings, odd sub-rings staggered
pub fn dots<S, R>(surface: &mut S, environment: &Environment, ring: &Ring, rng: &mut R)
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    let total = rng.random_range(80..=150_u32);
    let sub_rings = rng.random_range(2..=4_u32);
    let width = line_width(rng, FillMode::Filled);
    let per_ring = total / sub_rings;

    for k in 0..sub_rings {
        let radius = lerp(
            ring.inner,
            ring.outer,
            f64::from(k + 1) / f64::from(sub_rings + 1),
        );
        let offset = if k % 2 == 1 {
            PI / f64::from(per_ring)
        } else {
            0.0
        };

        for i in 0..per_ring {
            let angle = TAU * f64::from(i) / f64::from(per_ring) + offset;
            let size = f64::from(rng.random_range(1..=3_u32));
            fill_circle_with_border(
                surface,
                polar_point(environment.center, radius, angle),
                size,
                environment.primary.with_alpha(200),
                environment.primary.with_alpha(220),
                width,
            );
        }
    }
}

/// Concentric rings: circle outlines evenly spaced across the band
pub fn concentric_rings<S, R>(surface: &mut S, environment: &Environment, ring: &Ring, rng: &mut R)
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    let count = rng.random_range(4..=8_u32);
    let width = line_width(rng, FillMode::Outlined);
    let color = environment.primary.with_alpha(180);

    for i in 0..count {
        let radius = lerp(
            ring.inner,
            ring.outer,
            (f64::from(i) + 0.5) / f64::from(count),
        );
        surface.stroke_circle(environment.center, radius, color, width);
    }
}

/// Checkerboard: an angular by radial grid with every other cell filled
pub fn checkerboard<S, R>(surface: &mut S, environment: &Environment, ring: &Ring, rng: &mut R)
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    let angular = rng.random_range(32..=64_u32);
    let radial = rng.random_range(3..=6_u32);
    let color = environment.primary.with_alpha(180);
    let center = environment.center;

    for row in 0..radial {
        let near = lerp(ring.inner, ring.outer, f64::from(row) / f64::from(radial));
        let far = lerp(ring.inner, ring.outer, f64::from(row + 1) / f64::from(radial));

        for column in (0..angular).filter(|column| (column + row) % 2 == 1) {
            let start = TAU * f64::from(column) / f64::from(angular);
            let end = TAU * f64::from(column + 1) / f64::from(angular);
            let cell = [
                polar_point(center, near, start),
                polar_point(center, near, end),
                polar_point(center, far, end),
                polar_point(center, far, start),
            ];
            surface.fill_polygon(&cell, color);
        }
    }
}
