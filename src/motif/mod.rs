//! Catalog of ring motifs
//!
//! A motif turns one ring band into draw calls on a [`Surface`]. The catalog is
//! a closed enum, [`MotifId`], dispatched statically by [`MotifId::draw`].
//! Motifs that exist in both fill modes share one geometric generator and
//! branch on [`FillMode`] only when emitting primitives.

/// Curve-based motifs: spiral, braid, wave, crosshatch and lotus petals
pub mod curves;
/// Motifs built from circles and cells: circles, dots, concentric rings, checkerboard
pub mod orbital;
/// Motifs built from radial spokes and wedges: triangles, petals, sunburst, tesselation, radial lines, sprouts
pub mod radial;

use crate::math::geometry::{Point, Ring};
use crate::render::{Color, Surface};
use rand::Rng;
use std::fmt;

/// Whether a ring's shapes are solid or drawn as outlines only
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FillMode {
    /// Solid shapes with thin borders
    Filled,
    /// Outlines with heavier strokes
    Outlined,
}

impl FillMode {
    /// Lower-case name used in logs and file names
    pub const fn name(self) -> &'static str {
        match self {
            Self::Filled => "filled",
            Self::Outlined => "outlined",
        }
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const BOTH: &[FillMode] = &[FillMode::Filled, FillMode::Outlined];
const FILLED_ONLY: &[FillMode] = &[FillMode::Filled];
const OUTLINED_ONLY: &[FillMode] = &[FillMode::Outlined];

/// Identifier of a motif generator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MotifId {
    /// Wedge triangles with their base on the inner edge
    Triangles,
    /// Small circles spaced around one radius
    Circles,
    /// Triangular petals pointing inwards
    Petals,
    /// One continuous spiral stroke
    Spiral,
    /// Jittered radial strokes
    RadialLines,
    /// Open wedge triangle outlines
    Tesselation,
    /// Evenly spaced circle outlines
    ConcentricRings,
    /// Alternating annular cells
    Checkerboard,
    /// Thin sharp rays
    Sunburst,
    /// Rounded petals with sinusoidal sides
    LotusPetals,
    /// Two interleaved sinusoidal strokes
    Braid,
    /// Radial stems with a pair of branches each
    Sprouts,
    /// Small dots on several sub-rings
    Dots,
    /// One closed sinusoidal stroke
    Wave,
    /// Two counter-rotating wobbling spirals
    Crosshatch,
}

impl MotifId {
    /// Every motif in the catalog
    pub const ALL: [Self; 15] = [
        Self::Triangles,
        Self::Circles,
        Self::Petals,
        Self::Spiral,
        Self::RadialLines,
        Self::Tesselation,
        Self::ConcentricRings,
        Self::Checkerboard,
        Self::Sunburst,
        Self::LotusPetals,
        Self::Braid,
        Self::Sprouts,
        Self::Dots,
        Self::Wave,
        Self::Crosshatch,
    ];

    /// Snake-case identifier
    pub const fn name(self) -> &'static str {
        match self {
            Self::Triangles => "triangles",
            Self::Circles => "circles",
            Self::Petals => "petals",
            Self::Spiral => "spiral",
            Self::RadialLines => "radial_lines",
            Self::Tesselation => "tesselation",
            Self::ConcentricRings => "concentric_rings",
            Self::Checkerboard => "checkerboard",
            Self::Sunburst => "sunburst",
            Self::LotusPetals => "lotus_petals",
            Self::Braid => "braid",
            Self::Sprouts => "sprouts",
            Self::Dots => "dots",
            Self::Wave => "wave",
            Self::Crosshatch => "crosshatch",
        }
    }

    /// Fill modes this motif can be drawn in
    pub const fn fill_modes(self) -> &'static [FillMode] {
        match self {
            Self::Triangles | Self::Circles | Self::Petals | Self::Sunburst | Self::LotusPetals => {
                BOTH
            }
            Self::Spiral | Self::Checkerboard | Self::Dots => FILLED_ONLY,
            Self::RadialLines
            | Self::Tesselation
            | Self::ConcentricRings
            | Self::Braid
            | Self::Sprouts
            | Self::Wave
            | Self::Crosshatch => OUTLINED_ONLY,
        }
    }

    /// Whether the motif has a variant for `fill_mode`
    pub fn supports(self, fill_mode: FillMode) -> bool {
        self.fill_modes().contains(&fill_mode)
    }

    /// Draw this motif into `ring`
    ///
    /// Single-variant motifs ignore `fill_mode` and always draw their only
    /// variant.
    pub fn draw<S, R>(
        self,
        surface: &mut S,
        environment: &Environment,
        ring: &Ring,
        fill_mode: FillMode,
        rng: &mut R,
    ) where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        match self {
            Self::Triangles => radial::triangles(surface, environment, ring, fill_mode, rng),
            Self::Circles => orbital::circles(surface, environment, ring, fill_mode, rng),
            Self::Petals => radial::petals(surface, environment, ring, fill_mode, rng),
            Self::Spiral => curves::spiral(surface, environment, ring, rng),
            Self::RadialLines => radial::radial_lines(surface, environment, ring, rng),
            Self::Tesselation => radial::tesselation(surface, environment, ring, rng),
            Self::ConcentricRings => orbital::concentric_rings(surface, environment, ring, rng),
            Self::Checkerboard => orbital::checkerboard(surface, environment, ring, rng),
            Self::Sunburst => radial::sunburst(surface, environment, ring, fill_mode, rng),
            Self::LotusPetals => curves::lotus_petals(surface, environment, ring, fill_mode, rng),
            Self::Braid => curves::braid(surface, environment, ring, rng),
            Self::Sprouts => radial::sprouts(surface, environment, ring, rng),
            Self::Dots => orbital::dots(surface, environment, ring, rng),
            Self::Wave => curves::wave(surface, environment, ring, rng),
            Self::Crosshatch => curves::crosshatch(surface, environment, ring, rng),
        }
    }
}

impl fmt::Display for MotifId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A motif together with the fill mode it is drawn in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MotifChoice {
    /// Geometric generator
    pub motif: MotifId,
    /// Solid or outlined variant
    pub fill_mode: FillMode,
}

impl MotifChoice {
    /// Pair a motif with a fill mode
    pub const fn new(motif: MotifId, fill_mode: FillMode) -> Self {
        Self { motif, fill_mode }
    }

    /// Filled variant of `motif`
    pub const fn filled(motif: MotifId) -> Self {
        Self::new(motif, FillMode::Filled)
    }

    /// Outlined variant of `motif`
    pub const fn outlined(motif: MotifId) -> Self {
        Self::new(motif, FillMode::Outlined)
    }

    /// Whether the motif actually has this fill variant
    pub fn is_supported(&self) -> bool {
        self.motif.supports(self.fill_mode)
    }

    /// Draw the chosen variant into `ring`
    pub fn draw<S, R>(&self, surface: &mut S, environment: &Environment, ring: &Ring, rng: &mut R)
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        self.motif
            .draw(surface, environment, ring, self.fill_mode, rng);
    }
}

impl fmt::Display for MotifChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.motif.fill_modes().len() > 1 {
            write!(f, "{}_{}", self.motif, self.fill_mode)
        } else {
            write!(f, "{}", self.motif)
        }
    }
}

/// Per-image drawing context shared by every motif
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    /// Center of every ring
    pub center: Point,
    /// Foreground color; motifs vary only its alpha
    pub primary: Color,
    /// Canvas background color
    pub background: Color,
}

impl Environment {
    /// Environment centred on the canvas midpoint
    ///
    /// The center is snapped to whole pixels.
    pub fn for_canvas(width: u32, height: u32, primary: Color, background: Color) -> Self {
        Self {
            center: Point::new(f64::from(width / 2), f64::from(height / 2)),
            primary,
            background,
        }
    }
}

/// Fill a polygon and, when `width > 1`, trace its border on top
pub(crate) fn fill_with_border<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[Point],
    fill: Color,
    border: Color,
    width: u32,
) {
    surface.fill_polygon(points, fill);
    if width > 1 {
        surface.stroke_polygon(points, border, width);
    }
}

/// Fill a disc and, when `width > 1`, trace its border on top
pub(crate) fn fill_circle_with_border<S: Surface + ?Sized>(
    surface: &mut S,
    center: Point,
    radius: f64,
    fill: Color,
    border: Color,
    width: u32,
) {
    surface.fill_circle(center, radius, fill);
    if width > 1 {
        surface.stroke_circle(center, radius, border, width);
    }
}
