use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::smoother::SmootherConfig;
use crate::style::Style;
use crate::surface::DEFAULT_BACKGROUND;
use crate::tools::ToolKind;

/// User-facing settings restored between runs through eframe storage.
///
/// Drawn items are never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct AppSettings {
    pub style: Style,
    pub tool: ToolKind,
    pub smoother: SmootherConfig,
    pub background: Color32,
    /// Destination used by the save button and Ctrl+S
    pub export_path: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            style: Style::default(),
            tool: ToolKind::default(),
            smoother: SmootherConfig::default(),
            background: DEFAULT_BACKGROUND,
            export_path: "drawing.png".to_owned(),
        }
    }
}
