//! Procedural alpona/mandala image generation
//!
//! An image is a stack of concentric rings around the canvas center. Each ring
//! gets one geometric motif chosen by a small stateful sequencer that favours
//! filled layers, alternates them with outlined ones, and never repeats the
//! same motif twice in a row.

#![forbid(unsafe_code)]

/// Motif pools, layer sequencing and image composition
pub mod algorithm;
/// Command line, configuration, errors, export, progress and logging
pub mod io;
/// Interpolation, polar geometry and random stroke widths
pub mod math;
/// Motif catalog and per-image drawing environment
pub mod motif;
/// Drawing backend contract and implementations
pub mod render;

pub use algorithm::compositor::generate_image;
pub use io::error::{AlponaError, Result};
