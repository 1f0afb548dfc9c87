use egui::Pos2;

/// Per-gesture state machine: `Idle -> Dragging -> Idle`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        start: Pos2,
    },
}

impl GestureState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
