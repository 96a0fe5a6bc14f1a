//! Structured events emitted while an image is composed
//!
//! The compositor owns no logging state. It reports to a [`LayerObserver`]
//! supplied by the caller, which may log, record or drive a progress bar.

use crate::math::geometry::Ring;
use crate::motif::MotifChoice;

/// A ring has been assigned its motif and is about to be drawn
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerEvent {
    /// Ring index, 0 for the innermost ring
    pub index: usize,
    /// Number of rings in the image
    pub total: usize,
    /// Radii of the ring
    pub ring: Ring,
    /// Motif and fill mode chosen for the ring
    pub choice: MotifChoice,
}

/// Receiver of composition events
pub trait LayerObserver {
    /// Called once per image after the ring count is drawn
    fn composition_started(&mut self, _n_layers: usize, _base_radius: f64) {}

    /// Called once per ring, innermost first
    fn layer_selected(&mut self, event: &LayerEvent);
}

/// Observer that forwards events to `tracing` at debug level
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl LayerObserver for TracingObserver {
    fn composition_started(&mut self, n_layers: usize, base_radius: f64) {
        tracing::debug!(n_layers, base_radius, "composition started");
    }

    fn layer_selected(&mut self, event: &LayerEvent) {
        tracing::debug!(
            index = event.index,
            total = event.total,
            motif = %event.choice.motif,
            fill_mode = %event.choice.fill_mode,
            inner_radius = event.ring.inner,
            outer_radius = event.ring.outer,
            "layer selected"
        );
    }
}

impl LayerObserver for () {
    fn layer_selected(&mut self, _event: &LayerEvent) {}
}

impl LayerObserver for Vec<LayerEvent> {
    fn layer_selected(&mut self, event: &LayerEvent) {
        self.push(*event);
    }
}

impl<T: LayerObserver + ?Sized> LayerObserver for &mut T {
    fn composition_started(&mut self, n_layers: usize, base_radius: f64) {
        (**self).composition_started(n_layers, base_radius);
    }

    fn layer_selected(&mut self, event: &LayerEvent) {
        (**self).layer_selected(event);
    }
}

impl<T: LayerObserver> LayerObserver for Option<T> {
    fn composition_started(&mut self, n_layers: usize, base_radius: f64) {
        if let Some(observer) = self {
            observer.composition_started(n_layers, base_radius);
        }
    }

    fn layer_selected(&mut self, event: &LayerEvent) {
        if let Some(observer) = self {
            observer.layer_selected(event);
        }
    }
}

impl<A: LayerObserver, B: LayerObserver> LayerObserver for (A, B) {
    fn composition_started(&mut self, n_layers: usize, base_radius: f64) {
        self.0.composition_started(n_layers, base_radius);
        self.1.composition_started(n_layers, base_radius);
    }

    fn layer_selected(&mut self, event: &LayerEvent) {
        self.0.layer_selected(event);
        self.1.layer_selected(event);
    }
}
