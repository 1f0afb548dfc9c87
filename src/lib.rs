#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod editor;
pub mod element;
pub mod error;
pub mod event;
pub mod history;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod raster;
pub mod settings;
pub mod smoother;
pub mod state;
pub mod style;
pub mod surface;
pub mod tools;

pub use app::PaintApp;
pub use editor::Editor;
pub use element::ShapeKind;
pub use error::ExportError;
pub use event::EditorEvent;
pub use history::{DrawnItem, ItemHistory};
pub use id_generator::{GestureId, ItemId};
pub use settings::AppSettings;
pub use smoother::{SmoothedSegment, SmootherConfig, StrokeSmoother};
pub use style::{FillMode, Style};
pub use surface::DrawingSurface;
pub use tools::ToolKind;
