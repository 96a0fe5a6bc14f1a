//! Spoke and wedge motifs
//!
//! Every shape here is anchored on a set of evenly spaced angles and spans the
//! ring from its inner to its outer edge.

use super::{Environment, FillMode, fill_with_border};
use crate::math::geometry::{Ring, polar_point};
use crate::math::linspace;
use crate::math::probability::line_width;
use crate::render::Surface;
use rand::Rng;
use std::f64::consts::{FRAC_PI_4, PI, TAU};

// Segments approximating the inner arc under each filled triangle
const ARC_SEGMENTS: usize = 10;

// Angular half-width of a sunburst ray relative to the ray spacing
const SUNBURST_SHARPNESS: f64 = 0.2;

const RADIAL_JITTER: f64 = 0.05;

// Branch length of a sprout relative to the ring thickness
const SPROUT_BRANCH: f64 = 0.35;

/// Wedge triangles: base on the inner circle, apex on the outer circle
///
/// Filled triangles follow the inner arc with a short polyline fan so they sit
/// flush against the previous ring. Outlined triangles leave the base open.
pub fn triangles<S, R>(
    surface: &mut S,
    environment: &Environment,
    ring: &Ring,
    fill_mode: FillMode,
    rng: &mut R,
) where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    let count = rng.random_range(16..=30_u32);
    let width = line_width(rng, fill_mode);
    let color = environment.primary.with_alpha(200);
    let step = TAU / f64::from(count);
    let center = environment.center;

    for i in 0..count {
        let start = step * f64::from(i);
        let end = step * f64::from(i + 1);
        let apex = polar_point(center, ring.outer, f64::midpoint(start, end));

        match fill_mode {
            FillMode::Filled => {
                let mut outline = Vec::with_capacity(ARC_SEGMENTS + 2);
                outline.push(apex);
                outline.extend(
                    linspace(end, start, ARC_SEGMENTS + 1)
                        .into_iter()
                        .map(|angle| polar_point(center, ring.inner, angle)),
                );
                fill_with_border(
                    surface,
                    &outline,
                    color,
                    environment.primary.with_alpha(220),
                    width,
                );
            }
            FillMode::Outlined => {
                surface.stroke_line(polar_point(center, ring.inner, start), apex, color, width);
                surface.stroke_line(polar_point(center, ring.inner, end), apex, color, width);
            }
        }
    }
}

/// Petals: one vertex on the inner circle, two on the outer circle
pub fn petals<S, R>(
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
    let spread = PI / f64::from(count);
    let center = environment.center;

    for i in 0..count {
        let angle = TAU * f64::from(i) / f64::from(count);
        let petal = [
            polar_point(center, ring.inner, angle),
            polar_point(center, ring.outer, angle + spread),
            polar_point(center, ring.outer, angle - spread),
        ];

        match fill_mode {
            FillMode::Filled => fill_with_border(
                surface,
                &petal,
                environment.primary.with_alpha(180),
                environment.primary.with_alpha(200),
                width,
            ),
            FillMode::Outlined => {
                surface.stroke_polygon(&petal, environment.primary.with_alpha(180), width);
            }
        }
    }
}

/// Sunburst: many thin rays pointing outwards
pub fn sunburst<S, R>(
    surface: &mut S,
    environment: &Environment,
    ring: &Ring,
    fill_mode: FillMode,
    rng: &mut R,
) where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    let count = rng.random_range(24..=48_u32);
    let width = line_width(rng, fill_mode);
    let half_width = SUNBURST_SHARPNESS * PI / f64::from(count);
    let center = environment.center;

    for i in 0..count {
        let angle = TAU * f64::from(i) / f64::from(count);
        let ray = [
            polar_point(center, ring.inner, angle - half_width),
            polar_point(center, ring.outer, angle),
            polar_point(center, ring.inner, angle + half_width),
        ];

        match fill_mode {
            FillMode::Filled => fill_with_border(
                surface,
                &ray,
                environment.primary.with_alpha(200),
                environment.primary.with_alpha(220),
                width,
            ),
            FillMode::Outlined => {
                surface.stroke_polygon(&ray, environment.primary.with_alpha(180), width);
            }
        }
    }
}

/// Tesselation: closed wedge triangle outlines without fill
pub fn tesselation<S, R>(surface: &mut S, environment: &Environment, ring: &Ring, rng: &mut R)
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    let count = rng.random_range(20..=40_u32);
    let width = line_width(rng, FillMode::Outlined);
    let color = environment.primary.with_alpha(180);
    let center = environment.center;

    for i in 0..count {
        let start = TAU * f64::from(i) / f64::from(count);
        let end = TAU * f64::from(i + 1) / f64::from(count);
        let wedge = [
            polar_point(center, ring.inner, start),
            polar_point(center, ring.inner, end),
            polar_point(center, ring.outer, f64::midpoint(start, end)),
        ];
        surface.stroke_polygon(&wedge, color, width);
    }
}

/// Radial lines: straight strokes across the ring with a small angular jitter
pub fn radial_lines<S, R>(surface: &mut S, environment: &Environment, ring: &Ring, rng: &mut R)
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    let count = rng.random_range(20..=40_u32);
    let width = line_width(rng, FillMode::Outlined);
    let color = environment.primary.with_alpha(180);
    let center = environment.center;

    for i in 0..count {
        let angle = TAU * f64::from(i) / f64::from(count)
            + rng.random_range(-RADIAL_JITTER..=RADIAL_JITTER);
        surface.stroke_line(
            polar_point(center, ring.inner, angle),
            polar_point(center, ring.outer, angle),
            color,
            width,
        );
    }
}

/// Sprouts: radial stems, each with two branches leaving its midpoint at 45°
pub fn sprouts<S, R>(surface: &mut S, environment: &Environment, ring: &Ring, rng: &mut R)
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    let count = rng.random_range(10..=20_u32);
    let width = line_width(rng, FillMode::Outlined);
    let color = environment.primary.with_alpha(190);
    let branch = SPROUT_BRANCH * ring.thickness();
    let center = environment.center;

    for i in 0..count {
        let angle = TAU * f64::from(i) / f64::from(count);
        let stem_mid = polar_point(center, ring.mid(), angle);

        surface.stroke_line(
            polar_point(center, ring.inner, angle),
            polar_point(center, ring.outer, angle),
            color,
            width,
        );
        for side in [-FRAC_PI_4, FRAC_PI_4] {
            surface.stroke_line(stem_mid, polar_point(stem_mid, branch, angle + side), color, width);
        }
    }
}
