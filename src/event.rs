use std::path::PathBuf;

use egui::{Color32, Pos2};

use crate::style::FillMode;
use crate::tools::ToolKind;

/// Everything the editor reacts to, dispatched synchronously on the UI thread
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// Primary button pressed at a surface-local position
    PointerDown(Pos2),
    /// Pointer moved, with or without the button held
    PointerMove(Pos2),
    /// Primary button released
    PointerUp(Pos2),
    ToolChanged(ToolKind),
    ColorChanged(Color32),
    BrushSizeChanged(f32),
    FillModeChanged(FillMode),
    UndoRequested,
    ClearRequested,
    SaveRequested(PathBuf),
}

impl EditorEvent {
    /// Pointer events carry a position; everything else does not
    pub fn position(&self) -> Option<Pos2> {
        match self {
            Self::PointerDown(pos) | Self::PointerMove(pos) | Self::PointerUp(pos) => Some(*pos),
            _ => None,
        }
    }
}
