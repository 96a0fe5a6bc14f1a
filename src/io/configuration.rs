//! Generation constants and runtime configuration defaults

use crate::render::Color;
use std::ops::RangeInclusive;

// Layer layout
/// Fewest concentric rings drawn in one image
pub const MIN_LAYERS: usize = 15;
/// Most concentric rings drawn in one image
pub const MAX_LAYERS: usize = 25;
/// The outermost ring ends at `min(width, height) / RADIUS_DIVISOR`
pub const RADIUS_DIVISOR: f64 = 2.2;

// Sequencer transition probabilities
/// Chance that a filled ring is recorded as followed by another filled ring
pub const FILLED_CONTINUATION_PROBABILITY: f64 = 0.70;
/// Chance that an outlined ring is recorded as followed by a filled ring
pub const OUTLINED_TO_FILLED_PROBABILITY: f64 = 0.85;

// Stroke widths in pixels
/// Border width range for filled shapes
pub const FILLED_STROKE_WIDTH: RangeInclusive<u32> = 1..=2;
/// Stroke width range for outlined shapes
pub const OUTLINED_STROKE_WIDTH: RangeInclusive<u32> = 2..=4;
/// Stroke width range for the circle drawn at each ring's outer edge
pub const BOUNDARY_STROKE_WIDTH: RangeInclusive<u32> = 1..=3;
/// Alpha of the circle drawn at each ring's outer edge
pub const BOUNDARY_ALPHA: u8 = 180;

// Palette
/// Clay tone filling the whole canvas before any ring is drawn
pub const CLAY: Color = Color::rgb(110, 60, 40);
/// Rice-paste white used for every foreground stroke and fill
pub const IVORY: Color = Color::rgb(245, 245, 240);

// Safety limit to prevent excessive memory allocation
/// Largest accepted canvas width or height
pub const MAX_DIMENSION: u32 = 10_000;

// Default values for command-line parameters
/// Default canvas width in pixels
pub const DEFAULT_WIDTH: u32 = 1024;
/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: u32 = 1024;
/// Default number of images per batch
pub const DEFAULT_COUNT: usize = 10;
/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// Output settings
/// Prefix of every generated file name
pub const OUTPUT_PREFIX: &str = "image_";
/// Extension of every generated file name
pub const OUTPUT_EXTENSION: &str = "png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
