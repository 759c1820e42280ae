//! Modal dialogs

use egui::{Align2, Context, Window};

/// Result of dialog interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResult<T> {
    /// Still open, nothing decided
    None,
    Ok(T),
    Cancel,
}

/// Common dialog trait
pub trait Dialog {
    type Output;
    fn ui(&mut self, ctx: &Context) -> DialogResult<Self::Output>;
    fn is_open(&self) -> bool;
    fn close(&mut self);
}

/// Confirmation dialog
pub struct ConfirmDialog {
    pub open: bool,
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
    /// Paint the confirm button red
    pub dangerous: bool,
}

impl ConfirmDialog {
    /// Ask before deleting the project titled `title`
    pub fn new_delete(title: &str) -> Self {
        let name = if title.trim().is_empty() {
            "this project".to_string()
        } else {
            format!("\"{}\"", title)
        };
        Self {
            open: true,
            title: "Delete project".to_string(),
            message: format!("Are you sure? {} will be removed permanently.", name),
            confirm_text: "Delete".to_string(),
            cancel_text: "Cancel".to_string(),
            dangerous: true,
        }
    }
}

impl Dialog for ConfirmDialog {
    type Output = bool;

    fn ui(&mut self, ctx: &Context) -> DialogResult<bool> {
        if !self.open {
            return DialogResult::None;
        }

        let mut result = DialogResult::None;

        Window::new(&self.title)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(&self.message);
                ui.add_space(16.0);

                ui.horizontal(|ui| {
                    let confirm_btn = if self.dangerous {
                        ui.button(egui::RichText::new(&self.confirm_text).color(egui::Color32::RED))
                    } else {
                        ui.button(&self.confirm_text)
                    };

                    if confirm_btn.clicked() {
                        result = DialogResult::Ok(true);
                        self.open = false;
                    }

                    if ui.button(&self.cancel_text).clicked() {
                        result = DialogResult::Cancel;
                        self.open = false;
                    }
                });
            });

        result
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_dialog_text() {
        let dialog = ConfirmDialog::new_delete("Anna & Mark");
        assert!(dialog.is_open());
        assert!(dialog.dangerous);
        assert_eq!(
            dialog.message,
            "Are you sure? \"Anna & Mark\" will be removed permanently."
        );
        assert!(ConfirmDialog::new_delete(" ").message.contains("this project"));
    }

    #[test]
    fn test_closed_dialog_is_inert() {
        let mut dialog = ConfirmDialog::new_delete("x");
        dialog.close();
        assert_eq!(dialog.ui(&Context::default()), DialogResult::None);
    }
}
