use liquid_carousel::{Cursor, Geometry, ItemTransform};

/// Handle for one registered set of input listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListenerId(pub u64);

/// A host scroll container driven by a [`crate::Controller`].
///
/// Geometry is read live through the [`Geometry`] supertrait. The remaining methods are the
/// side effects the controller performs on the host.
pub trait Surface: Geometry {
    /// Current scroll position of the container, read once when attaching.
    fn scroll_offset(&self) -> f32;

    /// Installs the pointer/touch/wheel listeners that forward events to
    /// [`crate::Controller::handle`].
    fn bind_listeners(&mut self) -> ListenerId;

    fn unbind_listeners(&mut self, id: ListenerId);

    fn set_scroll_offset(&mut self, offset: f32);

    /// Receives one transform per item, in index order.
    fn apply_transforms(&mut self, transforms: &[ItemTransform]);

    fn set_cursor(&mut self, _cursor: Cursor) {}

    /// Width of the host window. Wheel input is only handled on wide (desktop) windows.
    fn window_width(&self) -> f32 {
        f32::INFINITY
    }
}
