//! Status bar component

use egui::{Color32, RichText, Ui};

/// Status bar information
#[derive(Debug, Clone, Default)]
pub struct StatusInfo {
    /// Route path of the current page
    pub location: String,

    /// Lightbox position, `2 / 5`
    pub position: String,

    /// Lightbox zoom, `150%`
    pub zoom: String,

    /// Last notice or error
    pub message: String,

    pub is_error: bool,
}

impl StatusInfo {
    pub fn notify(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.is_error = false;
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.is_error = true;
    }
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn ui(ui: &mut Ui, info: &StatusInfo) {
        ui.horizontal(|ui| {
            ui.label(&info.location);

            if !info.position.is_empty() {
                ui.separator();
                ui.label(&info.position);
            }

            if !info.zoom.is_empty() {
                ui.separator();
                ui.label(format!("Zoom: {}", info.zoom));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if !info.message.is_empty() {
                    let text = RichText::new(&info.message);
                    let text = if info.is_error {
                        text.color(Color32::from_rgb(220, 38, 38))
                    } else {
                        text
                    };
                    ui.label(text);
                }
            });
        });
    }
}
