//! Ring-by-ring motif selection
//!
//! The sequencer is a random process with memory depth one. It remembers the
//! motif drawn on the previous ring and a class tag, filled or outlined, that
//! decides which pool the next ring samples from:
//!
//! - Ring 0 always draws an anchor motif and records the class as filled.
//! - Every later ring samples the pool of the recorded class, minus the
//!   previous motif, then re-rolls the class tag. From a filled tag the next
//!   tag stays filled with probability 0.70; from an outlined tag it becomes
//!   filled with probability 0.85.
//!
//! The class roll only changes which tag is recorded. The motif for the current
//! ring always comes from the pool of the tag recorded before the roll, so an
//! outlined tag may follow a ring drawn from the filled pool and vice versa.

use crate::algorithm::palette::Palette;
use crate::io::configuration::{FILLED_CONTINUATION_PROBABILITY, OUTLINED_TO_FILLED_PROBABILITY};
use crate::io::error::{AlponaError, Result};
use crate::motif::{FillMode, MotifChoice};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Pick uniformly from `pool`, skipping `excluded`
///
/// When skipping would leave nothing to pick from, the whole pool is used
/// instead, so a single-entry pool keeps returning its only motif. Returns
/// `None` only for an empty pool.
pub fn pick_excluding<R: Rng + ?Sized>(
    pool: &[MotifChoice],
    excluded: Option<MotifChoice>,
    rng: &mut R,
) -> Option<MotifChoice> {
    let eligible: Vec<MotifChoice> = pool
        .iter()
        .copied()
        .filter(|choice| Some(*choice) != excluded)
        .collect();

    if eligible.is_empty() {
        pool.choose(rng).copied()
    } else {
        eligible.choose(rng).copied()
    }
}

/// Stateful motif selector for the rings of one image
#[derive(Clone, Debug)]
pub struct LayerSequencer<'a> {
    palette: &'a Palette,
    previous: Option<MotifChoice>,
    class: FillMode,
    layers: usize,
}

impl<'a> LayerSequencer<'a> {
    /// Start a sequence before ring 0
    pub const fn new(palette: &'a Palette) -> Self {
        Self {
            palette,
            previous: None,
            class: FillMode::Filled,
            layers: 0,
        }
    }

    /// Motif drawn on the most recent ring
    pub const fn previous(&self) -> Option<MotifChoice> {
        self.previous
    }

    /// Class tag that selects the pool for the next ring
    pub const fn class(&self) -> FillMode {
        self.class
    }

    /// Number of rings selected so far
    pub const fn layers(&self) -> usize {
        self.layers
    }

    /// Forget all history and start again from ring 0
    pub const fn reset(&mut self) {
        self.previous = None;
        self.class = FillMode::Filled;
        self.layers = 0;
    }

    /// Choose the motif for the next ring and advance the state
    ///
    /// # Errors
    ///
    /// Returns [`AlponaError::EmptyMotifPool`] if the pool to sample is empty,
    /// which cannot happen for a palette built through [`Palette::new`] or
    /// [`Palette::from_kind`].
    pub fn next_layer<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<MotifChoice> {
        let choice = if self.layers == 0 {
            let anchor = pick_excluding(self.palette.anchors(), None, rng)
                .ok_or(AlponaError::EmptyMotifPool { pool: "anchor" })?;
            self.class = FillMode::Filled;
            anchor
        } else {
            let (pool_name, filled_probability) = match self.class {
                FillMode::Filled => ("filled", FILLED_CONTINUATION_PROBABILITY),
                FillMode::Outlined => ("outlined", OUTLINED_TO_FILLED_PROBABILITY),
            };
            let next_filled = rng.random_bool(filled_probability);
            let choice = pick_excluding(self.palette.pool(self.class), self.previous, rng)
                .ok_or(AlponaError::EmptyMotifPool { pool: pool_name })?;
            self.class = if next_filled {
                FillMode::Filled
            } else {
                FillMode::Outlined
            };
            choice
        };

        self.previous = Some(choice);
        self.layers += 1;
        Ok(choice)
    }
}
