use egui::Color32;
use serde::{Deserialize, Serialize};

/// Smallest and largest brush width the editor accepts
pub const MIN_BRUSH_WIDTH: f32 = 1.0;
pub const MAX_BRUSH_WIDTH: f32 = 40.0;

/// Swatches offered next to the color picker
pub const QUICK_COLORS: [Color32; 8] = [
    Color32::from_rgb(0x00, 0x00, 0x00),
    Color32::from_rgb(0xFF, 0x00, 0x00),
    Color32::from_rgb(0x00, 0x00, 0xFF),
    Color32::from_rgb(0x00, 0xAA, 0x00),
    Color32::from_rgb(0xFF, 0xD7, 0x00),
    Color32::from_rgb(0xFF, 0xA5, 0x00),
    Color32::from_rgb(0x80, 0x00, 0x80),
    Color32::from_rgb(0xFF, 0xC0, 0xCB),
];

/// How closed shapes (rectangles and ovals) are painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillMode {
    /// Border only
    #[default]
    Outline,
    /// Interior only
    Filled,
    /// Interior plus a border in the same color
    Both,
}

impl FillMode {
    pub const ALL: [FillMode; 3] = [FillMode::Outline, FillMode::Filled, FillMode::Both];

    pub fn label(self) -> &'static str {
        match self {
            FillMode::Outline => "Outline",
            FillMode::Filled => "Filled",
            FillMode::Both => "Both",
        }
    }

    pub fn draws_outline(self) -> bool {
        matches!(self, FillMode::Outline | FillMode::Both)
    }

    pub fn draws_fill(self) -> bool {
        matches!(self, FillMode::Filled | FillMode::Both)
    }
}

/// Style captured at the moment an item is rendered.
///
/// Items keep their own copy, so changing the current style never re-styles
/// what is already on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub color: Color32,
    pub width: f32,
    pub fill: FillMode,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            width: 4.0,
            fill: FillMode::Outline,
        }
    }
}

impl Style {
    pub fn new(color: Color32, width: f32, fill: FillMode) -> Self {
        Self {
            color,
            width: clamp_width(width),
            fill,
        }
    }

    pub fn with_color(self, color: Color32) -> Self {
        Self { color, ..self }
    }

    pub fn with_width(self, width: f32) -> Self {
        Self {
            width: clamp_width(width),
            ..self
        }
    }

    pub fn with_fill(self, fill: FillMode) -> Self {
        Self { fill, ..self }
    }
}

/// Clamp a requested brush width into the supported range. NaN falls back to the minimum.
pub fn clamp_width(width: f32) -> f32 {
    if width.is_nan() {
        return MIN_BRUSH_WIDTH;
    }
    width.clamp(MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH)
}

/// `#RRGGBB` form of an opaque color, as shown in the status bar
pub fn color_hex(color: Color32) -> String {
    let [r, g, b, _] = color.to_srgba_unmultiplied();
    format!("#{r:02X}{g:02X}{b:02X}")
}
