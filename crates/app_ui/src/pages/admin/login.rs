//! Admin sign-in

use crate::pages::{field_label, PageAction, PageContext};
use app_core::{AppState, MockAuthenticator, Route};
use egui::{RichText, TextEdit, Ui};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials. (Try admin@demo.com / password)";

#[derive(Default)]
pub struct LoginPage {
    email: String,
    password: String,
    error: Option<String>,
}

impl LoginPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the entered credentials and start a session
    pub fn submit(&mut self, state: &AppState) -> Option<PageAction> {
        match state.login(&MockAuthenticator, self.email.trim(), &self.password) {
            Ok(true) => {
                self.error = None;
                self.password.clear();
                Some(PageAction::Navigate(Route::AdminDashboard))
            }
            Ok(false) => {
                tracing::warn!("Rejected admin login for {}", self.email.trim());
                self.error = Some(INVALID_CREDENTIALS.to_string());
                None
            }
            Err(e) => Some(PageAction::Failed(e)),
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, cx: &mut PageContext<'_>) -> Option<PageAction> {
        let theme = cx.theme;
        let mut action = None;

        ui.add_space((ui.available_height() * 0.25).max(48.0));
        ui.vertical_centered(|ui| {
            ui.set_max_width(360.0);
            egui::Frame::group(ui.style())
                .fill(theme.surface)
                .inner_margin(40.0)
                .show(ui, |ui| {
                    ui.label(RichText::new("Admin Access").size(28.0));
                    ui.label(
                        RichText::new("Enter your credentials to manage the portfolio.")
                            .color(theme.text_secondary),
                    );
                    ui.add_space(24.0);

                    field_label(ui, theme, "Email");
                    ui.add(TextEdit::singleline(&mut self.email).desired_width(f32::INFINITY));
                    ui.add_space(12.0);
                    field_label(ui, theme, "Password");
                    let password = ui.add(
                        TextEdit::singleline(&mut self.password)
                            .password(true)
                            .desired_width(f32::INFINITY),
                    );
                    ui.add_space(16.0);

                    if let Some(error) = &self.error {
                        ui.label(RichText::new(error).color(theme.error));
                        ui.add_space(8.0);
                    }

                    let entered =
                        password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.button("Sign In").clicked() || entered {
                        action = self.submit(cx.state);
                    }
                    ui.add_space(16.0);
                    if ui.link("← Back to site").clicked() {
                        action = Some(PageAction::Navigate(Route::Home));
                    }
                });
        });

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::tests::memory_state;

    #[test]
    fn test_bad_credentials_show_hint() {
        let state = memory_state();
        let mut page = LoginPage::new();
        page.email = "admin@demo.com".into();
        page.password = "wrong".into();

        assert!(page.submit(&state).is_none());
        assert_eq!(page.error.as_deref(), Some(INVALID_CREDENTIALS));
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_login_navigates_to_dashboard() {
        let state = memory_state();
        let mut page = LoginPage::new();
        page.email = MockAuthenticator::EMAIL.into();
        page.password = MockAuthenticator::PASSWORD.into();

        let action = page.submit(&state);
        assert!(matches!(action, Some(PageAction::Navigate(Route::AdminDashboard))));
        assert!(state.is_authenticated());
        assert!(page.password.is_empty());
    }
}
