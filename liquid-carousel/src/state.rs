use crate::Phase;

/// A lightweight, serializable snapshot of the carousel position.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub offset: f32,
    pub phase: Phase,
    pub centered: Option<usize>,
}

/// Counters for settle behavior, useful when tuning spring parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselStats {
    /// Settles that ran to completion (including force-terminated ones).
    pub settles: u64,
    /// Settles terminated by the iteration cap.
    pub exhausted_settles: u64,
    /// Idle snaps performed by `Carousel::recenter`.
    pub recenters: u64,
}
