use crate::element::ElementType;
use crate::id_generator::{GestureId, ItemId};

/// One rendered item and the gesture it came from
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnItem {
    pub id: ItemId,
    pub gesture: GestureId,
    pub element: ElementType,
}

/// Items currently visible on the surface, in creation order.
///
/// Only grows by [`ItemHistory::push`]; shrinks through undo of the newest
/// gesture or a full clear.
#[derive(Debug, Default, Clone)]
pub struct ItemHistory {
    items: Vec<DrawnItem>,
}

impl ItemHistory {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: DrawnItem) {
        self.items.push(item);
    }

    /// Remove every item of the most recent gesture and return them, oldest first
    pub fn pop_gesture(&mut self) -> Vec<DrawnItem> {
        let Some(gesture) = self.items.last().map(|item| item.gesture) else {
            return Vec::new();
        };
        let keep = self
            .items
            .iter()
            .rposition(|item| item.gesture != gesture)
            .map_or(0, |index| index + 1);
        self.items.split_off(keep)
    }

    /// Returns true if there is anything to undo
    pub fn can_undo(&self) -> bool {
        !self.items.is_empty()
    }

    /// Remove everything
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[DrawnItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of undo steps available
    pub fn gesture_count(&self) -> usize {
        let mut count = 0;
        let mut previous = None;
        for item in &self.items {
            if previous != Some(item.gesture) {
                count += 1;
                previous = Some(item.gesture);
            }
        }
        count
    }
}
