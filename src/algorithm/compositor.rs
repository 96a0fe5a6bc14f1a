//! End-to-end composition of one mandala image
//!
//! The compositor clears the canvas to the background color, draws a random
//! number of rings, and asks the sequencer for each ring's motif. It strokes a
//! boundary circle at every ring's outer edge. Rings are drawn strictly from
//! the center outwards because each boundary stroke overlaps the ring below.

use crate::algorithm::observer::{LayerEvent, LayerObserver, TracingObserver};
use crate::algorithm::palette::Palette;
use crate::algorithm::sequencer::LayerSequencer;
use crate::io::configuration::{
    BOUNDARY_ALPHA, CLAY, IVORY, MAX_DIMENSION, MAX_LAYERS, MIN_LAYERS,
};
use crate::io::error::{AlponaError, Result, invalid_parameter};
use crate::math::geometry::{Ring, base_radius, ring_bands};
use crate::math::probability::boundary_width;
use crate::motif::{Environment, MotifChoice};
use crate::render::{Color, RasterSurface, Surface};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Parameters of one generated image
#[derive(Clone, Debug, PartialEq)]
pub struct CompositorConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Motif pools used by the sequencer
    pub palette: Palette,
    /// Foreground color of every motif and boundary stroke
    pub primary: Color,
    /// Canvas background color
    pub background: Color,
    /// Fewest rings per image
    pub min_layers: usize,
    /// Most rings per image
    pub max_layers: usize,
}

impl CompositorConfig {
    /// Default configuration for a canvas of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            palette: Palette::default(),
            primary: IVORY,
            background: CLAY,
            min_layers: MIN_LAYERS,
            max_layers: MAX_LAYERS,
        }
    }

    /// Replace the motif palette
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Radius of the outermost ring boundary
    pub fn base_radius(&self) -> f64 {
        base_radius(self.width, self.height)
    }

    /// Check that the configuration describes a drawable image
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Width or height is zero or larger than [`MAX_DIMENSION`]
    /// - The layer range is empty or starts at zero
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 {
                return Err(AlponaError::InvalidDimension {
                    parameter,
                    value,
                    reason: "must be positive".to_string(),
                });
            }
            if value > MAX_DIMENSION {
                return Err(AlponaError::InvalidDimension {
                    parameter,
                    value,
                    reason: format!("must not exceed {MAX_DIMENSION}"),
                });
            }
        }

        if self.min_layers == 0 || self.min_layers > self.max_layers {
            return Err(invalid_parameter(
                "layers",
                &format!("{}..={}", self.min_layers, self.max_layers),
                &"layer range must be non-empty and start above zero",
            ));
        }

        Ok(())
    }
}

/// A ring together with the motif drawn on it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerRecord {
    /// Ring radii and index
    pub ring: Ring,
    /// Motif and fill mode drawn on the ring
    pub choice: MotifChoice,
}

/// Summary of one composed image
#[derive(Clone, Debug, PartialEq)]
pub struct Composition {
    /// Radius of the outermost ring boundary
    pub base_radius: f64,
    /// Every ring, innermost first
    pub layers: Vec<LayerRecord>,
}

/// Draws complete images from a validated configuration
#[derive(Clone, Debug)]
pub struct Compositor {
    config: CompositorConfig,
}

impl Compositor {
    /// Create a compositor
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails [`CompositorConfig::validate`]
    pub fn new(config: CompositorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration the compositor was built with
    pub const fn config(&self) -> &CompositorConfig {
        &self.config
    }

    /// Shared drawing context for every motif of an image
    pub fn environment(&self) -> Environment {
        Environment::for_canvas(
            self.config.width,
            self.config.height,
            self.config.primary,
            self.config.background,
        )
    }

    /// Draw one image onto `surface`
    ///
    /// # Errors
    ///
    /// Returns [`AlponaError::EmptyMotifPool`] if the sequencer runs out of
    /// motifs, which a validated palette prevents.
    pub fn compose<S, R, O>(
        &self,
        surface: &mut S,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<Composition>
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
        O: LayerObserver + ?Sized,
    {
        let environment = self.environment();
        let n_layers = rng.random_range(self.config.min_layers..=self.config.max_layers);
        let base_radius = self.config.base_radius();

        surface.clear(environment.background);
        observer.composition_started(n_layers, base_radius);

        let mut sequencer = LayerSequencer::new(&self.config.palette);
        let mut layers = Vec::with_capacity(n_layers);
        let boundary = environment.primary.with_alpha(BOUNDARY_ALPHA);

        for ring in ring_bands(base_radius, n_layers) {
            let choice = sequencer.next_layer(rng)?;
            observer.layer_selected(&LayerEvent {
                index: ring.index,
                total: n_layers,
                ring,
                choice,
            });

            choice.draw(surface, &environment, &ring, rng);
            surface.stroke_circle(environment.center, ring.outer, boundary, boundary_width(rng));

            layers.push(LayerRecord { ring, choice });
        }

        Ok(Composition {
            base_radius,
            layers,
        })
    }

    /// Draw one image onto a fresh raster canvas
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Compositor::compose`]
    pub fn render<R, O>(&self, rng: &mut R, observer: &mut O) -> Result<RasterSurface>
    where
        R: Rng + ?Sized,
        O: LayerObserver + ?Sized,
    {
        let mut surface =
            RasterSurface::new(self.config.width, self.config.height, self.config.background);
        self.compose(&mut surface, rng, observer)?;
        Ok(surface)
    }
}

/// Random source for one image: seeded when `seed` is given, OS entropy otherwise
pub fn image_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Generate one image with the default palette and colors
///
/// Layer events are reported through `tracing`.
///
/// # Errors
///
/// Returns [`AlponaError::InvalidDimension`] if either dimension is zero or
/// larger than [`MAX_DIMENSION`]
pub fn generate_image(width: u32, height: u32, seed: Option<u64>) -> Result<RasterSurface> {
    let compositor = Compositor::new(CompositorConfig::new(width, height))?;
    compositor.render(&mut image_rng(seed), &mut TracingObserver)
}
