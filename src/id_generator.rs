use serde::{Deserialize, Serialize};

/// Handle of a single item on the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u64);

/// Groups the items produced by one gesture so undo can remove them together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GestureId(pub u64);

/// Monotonic counter owned by one surface.
///
/// Ids are never reused, even after undo or clear.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_item(&mut self) -> ItemId {
        ItemId(self.bump())
    }

    pub fn next_gesture(&mut self) -> GestureId {
        GestureId(self.bump())
    }

    fn bump(&mut self) -> u64 {
        let id = self.next.max(1);
        self.next = id + 1;
        id
    }
}
