//! Random stroke widths
//!
//! Filled shapes keep thin borders so their edges stay crisp, while outlined
//! shapes need heavier strokes to carry the ring on their own.

use crate::io::configuration::{
    BOUNDARY_STROKE_WIDTH, FILLED_STROKE_WIDTH, OUTLINED_STROKE_WIDTH,
};
use crate::motif::FillMode;
use rand::Rng;

/// Draw a stroke width for shapes of the given fill mode
///
/// Returns a value in `1..=2` for [`FillMode::Filled`] and `2..=4` for
/// [`FillMode::Outlined`].
pub fn line_width<R: Rng + ?Sized>(rng: &mut R, fill_mode: FillMode) -> u32 {
    match fill_mode {
        FillMode::Filled => rng.random_range(FILLED_STROKE_WIDTH),
        FillMode::Outlined => rng.random_range(OUTLINED_STROKE_WIDTH),
    }
}

/// Draw a stroke width for the boundary circle separating two rings
pub fn boundary_width<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.random_range(BOUNDARY_STROKE_WIDTH)
}
