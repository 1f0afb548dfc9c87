use std::path::PathBuf;

use crate::editor::Editor;
use crate::event::EditorEvent;
use crate::input::InputHandler;
use crate::panels::{central_panel, status_bar, tools_panel};
use crate::settings::AppSettings;

/// Message shown in the status bar after a save attempt
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Saved(PathBuf),
    SaveFailed(String),
}

/// Only the settings are persisted; drawn items live for the session.
#[derive(Default)]
pub struct PaintApp {
    settings: AppSettings,
    editor: Editor,
    input: InputHandler,
    notice: Option<Notice>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings: AppSettings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        log::info!("Starting with tool {:?} and brush width {}", settings.tool, settings.style.width);

        Self {
            editor: Editor::new(&settings),
            settings,
            input: InputHandler::new(),
            notice: None,
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub fn settings_mut(&mut self) -> &mut AppSettings {
        &mut self.settings
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn export_path(&self) -> PathBuf {
        PathBuf::from(&self.settings.export_path)
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Feed one event to the editor and turn the save outcome into a notice
    pub fn dispatch(&mut self, event: EditorEvent) {
        let saving = match &event {
            EditorEvent::SaveRequested(path) => Some(path.clone()),
            _ => None,
        };
        match self.editor.handle_event(event) {
            Ok(()) => {
                if let Some(path) = saving {
                    self.notice = Some(Notice::Saved(path));
                }
            }
            Err(err) => {
                self.notice = Some(Notice::SaveFailed(err.to_string()));
            }
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.editor.store_settings(&mut self.settings);
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let shortcuts = self.input.process_shortcuts(ctx, &self.export_path());
        for event in shortcuts {
            self.dispatch(event);
        }

        tools_panel(self, ctx);
        status_bar(self, ctx);
        central_panel(self, ctx);
    }
}
