//! Motif pools the sequencer draws from
//!
//! A palette holds three pools: the anchors eligible for the innermost ring,
//! the pool sampled after a ring recorded as filled, and the pool sampled
//! after a ring recorded as outlined.

use crate::io::error::{AlponaError, Result, invalid_parameter};
use crate::motif::{FillMode, MotifChoice, MotifId};
use clap::ValueEnum;

/// Built-in palettes selectable from the command line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PaletteKind {
    /// The traditional five filled and six outlined motifs
    Classic,
    /// Classic plus sunburst, lotus petals, braid and sprouts
    #[default]
    Extended,
    /// Extended plus the experimental dots, wave and crosshatch motifs
    Full,
}

const ANCHORS: [MotifChoice; 2] = [
    MotifChoice::filled(MotifId::Spiral),
    MotifChoice::filled(MotifId::Circles),
];

const CLASSIC_FILLED: [MotifChoice; 5] = [
    MotifChoice::filled(MotifId::Triangles),
    MotifChoice::filled(MotifId::Circles),
    MotifChoice::filled(MotifId::Spiral),
    MotifChoice::filled(MotifId::Petals),
    MotifChoice::filled(MotifId::Checkerboard),
];

const CLASSIC_OUTLINED: [MotifChoice; 6] = [
    MotifChoice::outlined(MotifId::Triangles),
    MotifChoice::outlined(MotifId::Circles),
    MotifChoice::outlined(MotifId::Tesselation),
    MotifChoice::outlined(MotifId::Petals),
    MotifChoice::outlined(MotifId::RadialLines),
    MotifChoice::outlined(MotifId::ConcentricRings),
];

const EXTENDED_FILLED: [MotifChoice; 2] = [
    MotifChoice::filled(MotifId::Sunburst),
    MotifChoice::filled(MotifId::LotusPetals),
];

const EXTENDED_OUTLINED: [MotifChoice; 4] = [
    MotifChoice::outlined(MotifId::Sunburst),
    MotifChoice::outlined(MotifId::LotusPetals),
    MotifChoice::outlined(MotifId::Braid),
    MotifChoice::outlined(MotifId::Sprouts),
];

const EXPERIMENTAL_FILLED: [MotifChoice; 1] = [MotifChoice::filled(MotifId::Dots)];

const EXPERIMENTAL_OUTLINED: [MotifChoice; 2] = [
    MotifChoice::outlined(MotifId::Wave),
    MotifChoice::outlined(MotifId::Crosshatch),
];

/// Anchor, filled and outlined motif pools
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    anchors: Vec<MotifChoice>,
    filled: Vec<MotifChoice>,
    outlined: Vec<MotifChoice>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_kind(PaletteKind::default())
    }
}

impl Palette {
    /// Build a palette from explicit pools
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any pool is empty
    /// - A pool contains a fill variant its motif does not have
    /// - An anchor or filled-pool entry is outlined, or an outlined-pool
    ///   entry is filled
    pub fn new(
        anchors: Vec<MotifChoice>,
        filled: Vec<MotifChoice>,
        outlined: Vec<MotifChoice>,
    ) -> Result<Self> {
        for (pool, choices, expected) in [
            ("anchor", &anchors, FillMode::Filled),
            ("filled", &filled, FillMode::Filled),
            ("outlined", &outlined, FillMode::Outlined),
        ] {
            if choices.is_empty() {
                return Err(AlponaError::EmptyMotifPool { pool });
            }
            if let Some(choice) = choices.iter().find(|choice| !choice.is_supported()) {
                return Err(invalid_parameter(
                    "palette",
                    choice,
                    &format!("{} has no {} variant", choice.motif, choice.fill_mode),
                ));
            }
            if let Some(choice) = choices.iter().find(|choice| choice.fill_mode != expected) {
                return Err(invalid_parameter(
                    "palette",
                    choice,
                    &format!("the {pool} pool only takes {expected} motifs"),
                ));
            }
        }

        Ok(Self {
            anchors,
            filled,
            outlined,
        })
    }

    /// One of the built-in palettes
    pub fn from_kind(kind: PaletteKind) -> Self {
        let mut filled = CLASSIC_FILLED.to_vec();
        let mut outlined = CLASSIC_OUTLINED.to_vec();

        if matches!(kind, PaletteKind::Extended | PaletteKind::Full) {
            filled.extend(EXTENDED_FILLED);
            outlined.extend(EXTENDED_OUTLINED);
        }
        if kind == PaletteKind::Full {
            filled.extend(EXPERIMENTAL_FILLED);
            outlined.extend(EXPERIMENTAL_OUTLINED);
        }

        Self {
            anchors: ANCHORS.to_vec(),
            filled,
            outlined,
        }
    }

    /// Motifs eligible for the innermost ring
    pub fn anchors(&self) -> &[MotifChoice] {
        &self.anchors
    }

    /// Pool sampled after a ring recorded as filled
    pub fn filled(&self) -> &[MotifChoice] {
        &self.filled
    }

    /// Pool sampled after a ring recorded as outlined
    pub fn outlined(&self) -> &[MotifChoice] {
        &self.outlined
    }

    /// Pool sampled after a ring recorded with the given class
    pub fn pool(&self, class: FillMode) -> &[MotifChoice] {
        match class {
            FillMode::Filled => &self.filled,
            FillMode::Outlined => &self.outlined,
        }
    }
}
