//! Clone-padded ring construction for seamless wrap rendering

use cinerow_model::CarouselItem;

/// One position in the padded ring. Clone slots render normally but are
/// excluded from every count derived from the original sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub item: CarouselItem,
    pub is_clone: bool,
}

/// The original item sequence padded on both sides with clones: a copy of
/// the tail leads, a copy of the head trails, both in natural order so the
/// visual seam is continuous in either direction.
#[derive(Debug, Clone)]
pub struct Ring {
    slots: Vec<Slot>,
    original_count: usize,
    clone_padding: usize,
}

impl Ring {
    /// Build the ring for `items` with `items_per_view` clones per side.
    ///
    /// When the sequence is shorter than `items_per_view` the padding
    /// clamps to the available items rather than repeating them.
    pub fn build(items: &[CarouselItem], items_per_view: usize) -> Self {
        let original_count = items.len();
        let clone_padding = items_per_view.min(original_count);

        let mut slots = Vec::with_capacity(original_count + 2 * clone_padding);
        slots.extend(
            items[original_count - clone_padding..]
                .iter()
                .cloned()
                .map(Slot::cloned),
        );
        slots.extend(items.iter().cloned().map(Slot::original));
        slots.extend(
            items[..clone_padding].iter().cloned().map(Slot::cloned),
        );

        Self {
            slots,
            original_count,
            clone_padding,
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn original_count(&self) -> usize {
        self.original_count
    }

    /// Number of clone slots on each side; also the ring index of the
    /// first real item.
    pub fn clone_padding(&self) -> usize {
        self.clone_padding
    }

    /// The clone slots inserted before the first real item.
    pub fn leading_clones(&self) -> &[Slot] {
        &self.slots[..self.clone_padding]
    }

    /// The clone slots appended after the last real item.
    pub fn trailing_clones(&self) -> &[Slot] {
        &self.slots[self.slots.len() - self.clone_padding..]
    }
}

impl Slot {
    fn original(item: CarouselItem) -> Self {
        Self {
            item,
            is_clone: false,
        }
    }

    fn cloned(item: CarouselItem) -> Self {
        Self {
            item,
            is_clone: true,
        }
    }
}
