use crate::ItemBounds;

/// Live layout information the carousel reads from the rendering layer.
///
/// Implementations must answer from current layout every time they are called: the carousel
/// does not cache item bounds between frames. After the host rebuilds its item list it calls
/// [`crate::Carousel::rebuild`] so derived state is refreshed.
pub trait Geometry {
    /// Visible width of the scroll container.
    fn viewport_width(&self) -> f32;

    /// Total scrollable width of the track (padding included).
    fn content_width(&self) -> f32;

    fn item_count(&self) -> usize;

    /// Bounds of item `index`, or `None` when out of range or not laid out.
    fn item_bounds(&self, index: usize) -> Option<ItemBounds>;

    /// `true` when geometry-dependent work (centering, targeting, transforms) can run.
    fn is_measurable(&self) -> bool {
        let w = self.viewport_width();
        w.is_finite() && w > 0.0
    }

    fn max_scroll(&self) -> f32 {
        let max = self.content_width() - self.viewport_width();
        if max.is_finite() { max.max(0.0) } else { 0.0 }
    }

    fn clamp_offset(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_scroll())
    }

    /// The scroll offset that puts the center of item `index` at the viewport center.
    ///
    /// Not clamped: edge items may ask for an offset outside `[0, max_scroll]`.
    fn centered_offset(&self, index: usize) -> Option<f32> {
        let b = self.item_bounds(index)?;
        Some(b.left - self.viewport_width() / 2.0 + b.width / 2.0)
    }

    /// Index of the item whose center is closest to the viewport center at `offset`.
    ///
    /// Ties go to the lowest index.
    fn nearest_index(&self, offset: f32) -> Option<usize> {
        if !self.is_measurable() {
            return None;
        }
        let center = offset + self.viewport_width() / 2.0;
        let mut best: Option<(usize, f32)> = None;
        for i in 0..self.item_count() {
            let Some(b) = self.item_bounds(i) else {
                continue;
            };
            let dist = (b.center() - center).abs();
            match best {
                Some((_, d)) if dist >= d => {}
                _ => best = Some((i, dist)),
            }
        }
        best.map(|(i, _)| i)
    }
}

impl<G: Geometry + ?Sized> Geometry for &G {
    fn viewport_width(&self) -> f32 {
        (**self).viewport_width()
    }

    fn content_width(&self) -> f32 {
        (**self).content_width()
    }

    fn item_count(&self) -> usize {
        (**self).item_count()
    }

    fn item_bounds(&self, index: usize) -> Option<ItemBounds> {
        (**self).item_bounds(index)
    }
}

/// An owned layout for hosts that compute item positions themselves (and for tests).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    viewport_width: f32,
    padding_start: f32,
    padding_end: f32,
    gap: f32,
    items: Vec<ItemBounds>,
}

impl Layout {
    pub fn new(viewport_width: f32) -> Self {
        Self {
            viewport_width,
            ..Self::default()
        }
    }

    /// `count` items of `item_width` separated by `gap`, padded so that the first and last item
    /// can both be centered.
    pub fn uniform(count: usize, item_width: f32, gap: f32, viewport_width: f32) -> Self {
        let pad = ((viewport_width - item_width) / 2.0).max(0.0);
        let mut layout = Self::new(viewport_width).with_padding(pad, pad).with_gap(gap);
        for _ in 0..count {
            layout.push(item_width);
        }
        layout
    }

    /// Sets track padding. Existing items are shifted to the new start padding.
    pub fn with_padding(mut self, padding_start: f32, padding_end: f32) -> Self {
        let shift = padding_start - self.padding_start;
        for item in &mut self.items {
            item.left += shift;
        }
        self.padding_start = padding_start;
        self.padding_end = padding_end;
        self
    }

    /// Gap used by subsequent [`Layout::push`] calls.
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Appends an item after the last one.
    pub fn push(&mut self, width: f32) -> usize {
        let left = match self.items.last() {
            Some(last) => last.right() + self.gap,
            None => self.padding_start,
        };
        self.items.push(ItemBounds::new(left, width));
        self.items.len() - 1
    }

    /// Replaces all items with explicitly positioned bounds.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = ItemBounds>) {
        self.items.clear();
        self.items.extend(items);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn set_viewport_width(&mut self, viewport_width: f32) {
        self.viewport_width = viewport_width;
    }

    pub fn items(&self) -> &[ItemBounds] {
        &self.items
    }
}

impl Geometry for Layout {
    fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    fn content_width(&self) -> f32 {
        let end = self
            .items
            .iter()
            .map(ItemBounds::right)
            .fold(self.padding_start, f32::max);
        end + self.padding_end
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn item_bounds(&self, index: usize) -> Option<ItemBounds> {
        self.items.get(index).copied()
    }
}
