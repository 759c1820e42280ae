//! Site settings editor

use super::header;
use crate::pages::{PageAction, PageContext};
use app_core::{AppError, AppState, PortfolioRepository, SiteSettings};
use egui::{RichText, TextEdit, Ui};

/// Working copy of the photographer details
pub struct SettingsPage {
    working: SiteSettings,
    instagram: String,
    behance: String,
    modified: bool,
}

fn optional(handle: &str) -> Option<String> {
    let handle = handle.trim().trim_start_matches('@');
    (!handle.is_empty()).then(|| handle.to_string())
}

impl SettingsPage {
    pub fn load(state: &AppState) -> Result<Self, AppError> {
        let working = state.repo.settings()?;
        Ok(Self {
            instagram: working.instagram.clone().unwrap_or_default(),
            behance: working.behance.clone().unwrap_or_default(),
            working,
            modified: false,
        })
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Settings as they would be saved
    pub fn settings(&self) -> SiteSettings {
        SiteSettings {
            instagram: optional(&self.instagram),
            behance: optional(&self.behance),
            ..self.working.clone()
        }
    }

    pub fn save(&mut self, state: &AppState) -> Result<(), AppError> {
        if self.working.photographer_name.trim().is_empty() {
            return Err(AppError::Validation("Photographer name is required".into()));
        }
        state.repo.save_settings(&self.settings())?;
        self.modified = false;
        tracing::info!("Site settings saved");
        Ok(())
    }

    pub fn ui(&mut self, ui: &mut Ui, cx: &mut PageContext<'_>) -> Option<PageAction> {
        let theme = cx.theme;
        let mut action = None;

        let button = if self.modified { Some("Save Changes") } else { None };
        if header(ui, theme, "Settings", button) {
            action = Some(match self.save(cx.state) {
                Ok(()) => PageAction::Notify("Settings saved".to_string()),
                Err(e) => PageAction::Failed(e),
            });
        }

        egui::Grid::new("site_settings_grid")
            .num_columns(2)
            .spacing([40.0, 12.0])
            .show(ui, |ui| {
                let mut row = |ui: &mut Ui, label: &str, value: &mut String| {
                    ui.label(label);
                    if ui
                        .add(TextEdit::singleline(value).desired_width(360.0))
                        .changed()
                    {
                        self.modified = true;
                    }
                    ui.end_row();
                };
                row(ui, "Photographer Name:", &mut self.working.photographer_name);
                row(ui, "Email:", &mut self.working.email);
                row(ui, "Phone:", &mut self.working.phone);
                row(ui, "Instagram:", &mut self.instagram);
                row(ui, "Behance:", &mut self.behance);

                ui.label("Short Bio:");
                if ui
                    .add(
                        TextEdit::multiline(&mut self.working.short_bio)
                            .desired_rows(4)
                            .desired_width(360.0),
                    )
                    .changed()
                {
                    self.modified = true;
                }
                ui.end_row();
            });

        if self.modified {
            ui.add_space(12.0);
            ui.label(RichText::new("Unsaved changes").color(theme.text_secondary));
        }
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::tests::memory_state;

    #[test]
    fn test_save_settings() {
        let state = memory_state();
        let mut page = SettingsPage::load(&state).unwrap();
        page.working.phone = "+39 02 1234".into();
        page.instagram = " @new_handle ".into();
        page.behance.clear();
        page.modified = true;

        page.save(&state).unwrap();
        assert!(!page.is_modified());

        let saved = state.repo.settings().unwrap();
        assert_eq!(saved.phone, "+39 02 1234");
        assert_eq!(saved.instagram.as_deref(), Some("new_handle"));
        assert_eq!(saved.behance, None);
    }

    #[test]
    fn test_name_required() {
        let state = memory_state();
        let mut page = SettingsPage::load(&state).unwrap();
        page.working.photographer_name = " ".into();
        assert!(matches!(page.save(&state), Err(AppError::Validation(_))));
    }
}
