//! A headless gesture carousel with edge resistance and spring snapping.
//!
//! The carousel turns pointer/touch/wheel input into a horizontal scroll offset over a strip of
//! items, resists drags past either end ("rubber-banding"), picks a target item on release from
//! velocity and drag distance, and settles onto it with a damped spring. It also derives a
//! perspective transform (rotation, scale, opacity, stacking) for every item.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - item bounds and viewport width, through [`Geometry`]
//! - input events with positions and millisecond timestamps
//! - a frame tick calling [`Carousel::advance`]
//!
//! and to apply [`Carousel::offset`] and [`Carousel::transforms`] to its widgets.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod carousel;
mod drag;
mod geometry;
mod options;
mod snap;
mod spring;
mod state;
mod stretch;
mod transform;
mod types;


pub use carousel::Carousel;
pub use drag::DragSession;
pub use geometry::{Geometry, Layout};
pub use options::*;
pub use snap::{Release, select_target};
pub use spring::{Spring, SpringStatus};
pub use state::{CarouselState, CarouselStats};
pub use stretch::{Stretch, overshoot, resist, unresist};
pub use transform::{ease_out_cubic, item_transform, smoothstep};
pub use types::{
    Cursor, Frame, InputKind, ItemBounds, ItemTransform, Phase, SnapDecision, SnapReason,
    SwipeDirection,
};
