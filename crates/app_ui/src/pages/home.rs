//! Landing page

use super::{PageAction, PageContext};
use crate::components::photo_grid::paint_photo;
use app_core::portfolio::recent_projects;
use app_core::{
    seo, AppError, AppState, Category, ImageItem, PageMeta, PortfolioRepository, Project, Route,
    SiteSettings,
};
use egui::{Align, Layout, RichText, Sense, Ui, Vec2};

/// Projects featured under "Signature series"
const FEATURED: usize = 3;

const STATS: [(&str, &str); 2] = [("320+", "Sessions delivered"), ("12", "Years of experience")];

const STEPS: [(&str, &str); 3] = [
    (
        "Thoughtful briefing",
        "Careful listening to understand what makes your story unique.",
    ),
    (
        "Gentle direction",
        "Natural guidance toward authentic, elegant gestures.",
    ),
    (
        "Handcrafted editing",
        "A cohesive palette, soft contrast and precise sharpness.",
    ),
];

pub struct HomePage {
    settings: SiteSettings,
    featured: Vec<Project>,
    categories: Vec<Category>,
}

impl HomePage {
    pub fn load(state: &AppState) -> Result<Self, AppError> {
        let projects = state.repo.projects()?;
        Ok(Self {
            settings: state.repo.settings()?,
            featured: recent_projects(&projects, FEATURED).to_vec(),
            categories: state.repo.categories()?,
        })
    }

    pub fn meta(&self, origin: &str) -> PageMeta {
        PageMeta::new("Home")
            .description(self.settings.short_bio.clone())
            .schema(seo::home_schema(&self.settings, &self.featured, origin))
    }

    pub fn ui(&mut self, ui: &mut Ui, cx: &mut PageContext<'_>) -> Option<PageAction> {
        let mut action = None;
        let theme = cx.theme;

        // Hero
        ui.add_space(48.0);
        ui.label(
            RichText::new("FINE ART PHOTOGRAPHY")
                .size(12.0)
                .color(theme.accent),
        );
        ui.label(
            RichText::new("Quiet stories crafted in light, for the moments that matter.")
                .size(44.0)
                .color(theme.text),
        );
        ui.label(RichText::new(&self.settings.short_bio).size(16.0).color(theme.text_secondary));
        ui.add_space(16.0);
        ui.horizontal(|ui| {
            if ui.button("VIEW PORTFOLIO").clicked() {
                action = Some(PageAction::Navigate(Route::Portfolio { category: None }));
            }
            if ui.button("BOOK A SESSION").clicked() {
                action = Some(PageAction::Navigate(Route::Contact));
            }
        });
        ui.add_space(24.0);
        ui.horizontal(|ui| {
            for (value, label) in STATS {
                egui::Frame::group(ui.style()).inner_margin(16.0).show(ui, |ui| {
                    ui.label(RichText::new(value).size(28.0));
                    ui.label(RichText::new(label.to_uppercase()).size(11.0).color(theme.text_secondary));
                });
            }
        });

        // Signature series
        ui.add_space(64.0);
        ui.label(RichText::new("SIGNATURE SERIES").size(12.0).color(theme.text_secondary));
        ui.add_space(16.0);
        if let Some(slug) = self.featured_cards(ui, cx) {
            action = Some(PageAction::Navigate(Route::Project { slug }));
        }

        // Categories
        ui.add_space(64.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new("SPECIALTIES").size(12.0).color(theme.text_secondary));
                ui.heading("Tailored narratives");
            });
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("SEE EVERYTHING").clicked() {
                    action = Some(PageAction::Navigate(Route::Portfolio { category: None }));
                }
            });
        });
        ui.add_space(16.0);
        ui.columns(self.categories.len().max(1), |columns| {
            for (column, category) in columns.iter_mut().zip(&self.categories) {
                egui::Frame::group(column.style()).inner_margin(16.0).show(column, |ui| {
                    let title = ui.add(
                        egui::Label::new(RichText::new(format!("{}  →", category.name)).size(18.0))
                            .sense(Sense::click()),
                    );
                    ui.label(
                        RichText::new(format!(
                            "Elegant narratives for {}.",
                            category.name.to_lowercase()
                        ))
                        .color(theme.text_secondary),
                    );
                    if title.clicked() {
                        action = Some(PageAction::Navigate(Route::Portfolio {
                            category: Some(category.slug.clone()),
                        }));
                    }
                });
            }
        });

        // Experience
        ui.add_space(64.0);
        ui.label(RichText::new("THE EXPERIENCE").size(12.0).color(theme.text_secondary));
        ui.heading("Complete curation, from first contact to final delivery.");
        ui.add_space(16.0);
        ui.columns(STEPS.len(), |columns| {
            for (column, (title, desc)) in columns.iter_mut().zip(STEPS) {
                egui::Frame::group(column.style()).inner_margin(16.0).show(column, |ui| {
                    ui.label(RichText::new(title).size(18.0));
                    ui.label(RichText::new(desc).color(theme.text_secondary));
                });
            }
        });

        // Call to action
        ui.add_space(64.0);
        ui.vertical_centered(|ui| {
            ui.heading("Let's create something that stands the test of time.");
            ui.add_space(16.0);
            ui.horizontal(|ui| {
                if ui.button("SEE PROJECTS").clicked() {
                    action = Some(PageAction::Navigate(Route::Portfolio { category: None }));
                }
                if ui.button("REQUEST A PROPOSAL").clicked() {
                    action = Some(PageAction::Navigate(Route::Contact));
                }
            });
        });

        action
    }

    /// Cover cards for the featured projects; returns a clicked slug
    fn featured_cards(&self, ui: &mut Ui, cx: &PageContext<'_>) -> Option<String> {
        let mut clicked = None;
        let count = self.featured.len().max(1);
        ui.columns(count, |columns| {
            for (column, project) in columns.iter_mut().zip(&self.featured) {
                let width = column.available_width();
                let (rect, response) =
                    column.allocate_exact_size(Vec2::new(width, width * 4.0 / 3.0), Sense::click());
                let cover = ImageItem::new(project.id.clone(), project.cover_image.clone())
                    .with_title(project.title.clone());
                paint_photo(column, rect, &cover, 0, cx.textures, &cx.state.loader);

                column.label(RichText::new(&project.title).size(20.0));
                column.label(
                    RichText::new(project.category.to_uppercase())
                        .size(11.0)
                        .color(cx.theme.text_secondary),
                );
                if response.clicked() {
                    clicked = Some(project.slug.clone());
                }
            }
        });
        clicked
    }
}
