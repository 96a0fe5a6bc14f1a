//! Ring composition: motif pools, the layer sequencer and the compositor

/// Canvas setup and the ring-by-ring drawing loop
pub mod compositor;
/// Events reported while composing
pub mod observer;
/// Anchor, filled and outlined motif pools
pub mod palette;
/// Stateful per-ring motif selection
pub mod sequencer;
