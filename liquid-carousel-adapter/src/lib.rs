//! Adapter utilities for the `liquid-carousel` crate.
//!
//! The `liquid-carousel` crate is UI-agnostic: it owns the offset, the gesture state machine and
//! the per-item transforms. This crate provides the framework-neutral glue a host needs around
//! it:
//!
//! - Listener lifecycle with deferred attach (retry until the container has items)
//! - A frame clock that turns host timestamps into bounded integration steps
//! - Input event routing (mouse vs. touch, wheel gating on narrow windows)
//! - The periodic idle recenter check
//!
//! This crate is intentionally framework-agnostic (no DOM/egui bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod clock;
mod controller;
mod event;
mod options;
mod surface;

#[cfg(test)]
mod tests;

pub use clock::FrameClock;
pub use controller::{AttachStatus, Controller};
pub use event::InputEvent;
pub use options::{
    ControllerOptions, DEFAULT_MAX_FRAME_MS, DEFAULT_RECENTER_INTERVAL_MS, DEFAULT_RETRY_DELAY_MS,
    DEFAULT_WHEEL_MIN_WINDOW_WIDTH,
};
pub use surface::{ListenerId, Surface};
