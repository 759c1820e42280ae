//! Admin area: login, project management, SEO tools and site settings

pub mod dashboard;
pub mod editor;
pub mod login;
pub mod seo_tools;
pub mod settings;

pub use dashboard::DashboardPage;
pub use editor::ProjectEditor;
pub use login::LoginPage;
pub use seo_tools::SeoToolsPage;
pub use settings::SettingsPage;

use crate::theme::Theme;
use egui::{RichText, Ui};

/// Page heading with an optional primary button on the right
pub(crate) fn header(ui: &mut Ui, theme: &Theme, title: &str, button: Option<&str>) -> bool {
    let mut clicked = false;
    ui.add_space(32.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new(title).size(28.0).color(theme.text));
        if let Some(text) = button {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                clicked = ui.button(text).clicked();
            });
        }
    });
    ui.add_space(24.0);
    clicked
}
