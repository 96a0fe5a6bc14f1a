//! Canvas-space points, polar conversion and the concentric ring layout
//!
//! Every motif places its vertices with [`polar_point`] relative to the image
//! center. Rings partition `[0, base_radius)` into equal-width bands.

use crate::io::configuration::RADIUS_DIVISOR;
use std::ops::{Add, Mul, Sub};

/// A point in canvas coordinates (x to the right, y downwards)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate in pixels
    pub x: f64,
    /// Vertical coordinate in pixels
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Convert polar coordinates around `center` to a canvas point
pub fn polar_point(center: Point, radius: f64, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new(radius.mul_add(cos, center.x), radius.mul_add(sin, center.y))
}

/// An annular band `[inner, outer)` around the image center
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    /// Position of the ring in the layer sequence, counted from the center
    pub index: usize,
    /// Inner radius in pixels (inclusive)
    pub inner: f64,
    /// Outer radius in pixels (exclusive)
    pub outer: f64,
}

impl Ring {
    /// Radial thickness of the band
    pub fn thickness(&self) -> f64 {
        self.outer - self.inner
    }

    /// Radius halfway between the inner and outer edges
    pub fn mid(&self) -> f64 {
        f64::midpoint(self.inner, self.outer)
    }
}

/// Radius of the outermost ring boundary for a canvas of the given size
pub fn base_radius(width: u32, height: u32) -> f64 {
    f64::from(width.min(height)) / RADIUS_DIVISOR
}

/// Split `[0, base_radius)` into `n_layers` equal bands, innermost first
///
/// Consecutive rings share their boundary exactly and the last ring ends at
/// `base_radius`. Returns an empty vector when `n_layers` is zero.
pub fn ring_bands(base_radius: f64, n_layers: usize) -> Vec<Ring> {
    let layers = n_layers as f64;
    let boundary = |i: usize| {
        if i == n_layers {
            base_radius
        } else {
            base_radius * (i as f64 / layers)
        }
    };

    (0..n_layers)
        .map(|index| Ring {
            index,
            inner: boundary(index),
            outer: boundary(index + 1),
        })
        .collect()
}
