//! Site chrome: public navigation bar and footer, admin sidebar

use crate::pages::PageAction;
use crate::theme::Theme;
use app_core::seo::instagram_url;
use app_core::{Route, SiteSettings};
use chrono::Datelike;
use egui::{Align, Layout, RichText, Ui};

/// Public navigation, in display order
pub const NAV_LINKS: [(&str, Route); 5] = [
    ("Home", Route::Home),
    ("Portfolio", Route::Portfolio { category: None }),
    ("Services", Route::Services),
    ("About", Route::About),
    ("Contact", Route::Contact),
];

/// Whether `link` is the section `current` belongs to
pub fn is_active(link: &Route, current: &Route) -> bool {
    match (link, current) {
        (Route::Portfolio { .. }, Route::Portfolio { .. } | Route::Project { .. }) => true,
        _ => link == current,
    }
}

pub fn copyright_line(year: i32, photographer: &str) -> String {
    format!("© {} {}. All rights reserved.", year, photographer)
}

/// Open an external link in the system handler
pub fn open_link(target: &str) {
    if let Err(e) = open::that(target) {
        tracing::warn!("Failed to open {}: {}", target, e);
    }
}

fn logo(ui: &mut Ui, theme: &Theme) -> bool {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        let lumina = ui.add(
            egui::Label::new(RichText::new("LUMINA").size(22.0).strong().color(theme.text))
                .sense(egui::Sense::click()),
        );
        let lens = ui.add(
            egui::Label::new(RichText::new("LENS").size(22.0).color(theme.accent))
                .sense(egui::Sense::click()),
        );
        lumina.clicked() || lens.clicked()
    })
    .inner
}

/// Top navigation bar of the public site
pub fn nav_bar(ui: &mut Ui, current: &Route, theme: &Theme) -> Option<PageAction> {
    let mut action = None;
    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if logo(ui, theme) {
            action = Some(PageAction::Navigate(Route::Home));
        }
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.spacing_mut().item_spacing.x = 32.0;
            for (name, link) in NAV_LINKS.iter().rev() {
                let color = if is_active(link, current) {
                    theme.accent
                } else {
                    theme.text_secondary
                };
                let text = RichText::new(name.to_uppercase()).size(12.0).color(color);
                if ui.add(egui::Button::new(text).frame(false)).clicked() {
                    action = Some(PageAction::Navigate(link.clone()));
                }
            }
        });
    });
    ui.add_space(12.0);
    action
}

/// Footer with bio, contact details, social links and the admin entry
pub fn footer(ui: &mut Ui, settings: &SiteSettings, theme: &Theme) -> Option<PageAction> {
    let mut action = None;
    ui.add_space(48.0);
    ui.separator();
    ui.add_space(24.0);

    ui.columns(3, |columns| {
        if logo(&mut columns[0], theme) {
            action = Some(PageAction::Navigate(Route::Home));
        }
        columns[0].label(RichText::new(&settings.short_bio).color(theme.text_secondary));

        columns[1].label(RichText::new("CONTACT").size(12.0).strong());
        if columns[1].link(&settings.email).clicked() {
            open_link(&format!("mailto:{}", settings.email));
        }
        if columns[1].link(&settings.phone).clicked() {
            open_link(&format!("tel:{}", settings.phone));
        }

        columns[2].label(RichText::new("FOLLOW").size(12.0).strong());
        if let Some(handle) = &settings.instagram {
            if columns[2].link("Instagram").clicked() {
                open_link(&instagram_url(handle));
            }
        }
    });

    ui.add_space(32.0);
    ui.horizontal(|ui| {
        let year = chrono::Local::now().year();
        ui.label(
            RichText::new(copyright_line(year, &settings.photographer_name))
                .size(12.0)
                .color(theme.text_secondary),
        );
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui
                .add(egui::Button::new(RichText::new("Admin").size(12.0)).frame(false))
                .clicked()
            {
                action = Some(PageAction::Navigate(Route::AdminDashboard));
            }
        });
    });
    ui.add_space(24.0);
    action
}

/// Admin navigation shown next to every protected page
pub fn admin_sidebar(ui: &mut Ui, current: &Route, theme: &Theme) -> Option<PageAction> {
    let mut action = None;
    ui.add_space(24.0);
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label(RichText::new("Lumina").size(20.0).strong());
        ui.label(RichText::new("CMS").size(20.0).color(theme.text_secondary));
    });
    ui.add_space(24.0);

    let links = [
        ("Projects", Route::AdminDashboard),
        ("SEO Tools", Route::AdminSeo),
        ("Settings", Route::AdminSettings),
    ];
    for (name, link) in links {
        let active = match (&link, current) {
            (Route::AdminDashboard, Route::AdminProject { .. }) => true,
            _ => &link == current,
        };
        if ui.selectable_label(active, name).clicked() {
            action = Some(PageAction::Navigate(link));
        }
    }

    ui.with_layout(Layout::bottom_up(Align::Min), |ui| {
        ui.add_space(16.0);
        if ui
            .add(egui::Button::new(RichText::new("Logout").color(theme.error)).frame(false))
            .clicked()
        {
            action = Some(PageAction::Logout);
        }
    });
    action
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_link_covers_projects() {
        let portfolio = Route::Portfolio { category: None };
        assert!(is_active(&portfolio, &Route::Portfolio { category: Some("weddings".into()) }));
        assert!(is_active(&portfolio, &Route::Project { slug: "x".into() }));
        assert!(!is_active(&Route::Home, &Route::About));
        assert!(is_active(&Route::Contact, &Route::Contact));
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(2026, "Elena Vore"),
            "© 2026 Elena Vore. All rights reserved."
        );
    }
}
