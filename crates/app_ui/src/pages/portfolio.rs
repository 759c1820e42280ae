//! Portfolio index and project detail pages
//!
//! Both pages show a photo grid and open the lightbox over the exact
//! sequence the grid displays, so lightbox indices match grid indices.

use super::{section_title, PageAction, PageContext};
use crate::components::photo_grid::{paint_photo, PhotoGrid};
use app_core::{
    seo, AppError, AppState, Category, ImageItem, ImageProvider, ImageScope, PageMeta,
    PortfolioImages, PortfolioRepository, Project, Route, SiteSettings,
};
use egui::{Align, Layout, RichText, Sense, Ui, Vec2};

/// Category name for a route slug. Unknown slugs are used as a name as is.
fn category_name(categories: &[Category], slug: &str) -> String {
    categories
        .iter()
        .find(|c| c.slug.eq_ignore_ascii_case(slug))
        .map(|c| c.name.clone())
        .unwrap_or_else(|| slug.to_string())
}

pub struct PortfolioPage {
    /// Selected category slug
    category: Option<String>,
    categories: Vec<Category>,
    projects: Vec<Project>,
    images: Vec<ImageItem>,
    grid: PhotoGrid,
}

impl PortfolioPage {
    pub fn load(state: &AppState, category: Option<String>) -> Result<Self, AppError> {
        let categories = state.repo.categories()?;
        let scope = ImageScope::Portfolio {
            category: category.as_deref().map(|slug| category_name(&categories, slug)),
        };
        let images = PortfolioImages::new(&state.repo, scope).list()?;
        tracing::debug!(category = ?category, count = images.len(), "Portfolio loaded");

        Ok(Self {
            category,
            categories,
            projects: state.repo.projects()?,
            images,
            grid: PhotoGrid::new(),
        })
    }

    pub fn images(&self) -> &[ImageItem] {
        &self.images
    }

    pub fn meta(&self, origin: &str) -> PageMeta {
        PageMeta::new("Portfolio")
            .description(
                "Browse our selected photography portfolio featuring weddings, editorials, \
                 and portraits.",
            )
            .schema(seo::portfolio_schema(&self.projects, origin))
    }

    pub fn ui(&mut self, ui: &mut Ui, cx: &mut PageContext<'_>) -> Option<PageAction> {
        let theme = cx.theme;
        let mut action = None;

        section_title(ui, theme, "Portfolio", Some("Selected Works"));
        ui.vertical_centered(|ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 24.0;
                let tabs = std::iter::once(("All", None)).chain(
                    self.categories
                        .iter()
                        .map(|c| (c.name.as_str(), Some(c.slug.clone()))),
                );
                for (name, slug) in tabs {
                    let active = slug.as_deref().map(str::to_lowercase)
                        == self.category.as_deref().map(str::to_lowercase);
                    if ui.selectable_label(active, name.to_uppercase()).clicked() && !active {
                        action = Some(PageAction::Navigate(Route::Portfolio { category: slug }));
                    }
                }
            });
        });
        ui.add_space(32.0);

        if self.images.is_empty() {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("No images in this category yet.").color(theme.text_secondary),
                );
            });
        } else if let Some(index) =
            self.grid
                .ui(ui, &self.images, cx.textures, &cx.state.loader)
        {
            cx.lightbox.open(self.images.clone(), index);
        }

        action
    }
}

pub struct ProjectPage {
    project: Option<Project>,
    settings: SiteSettings,
    grid: PhotoGrid,
}

impl ProjectPage {
    pub fn load(state: &AppState, slug: &str) -> Result<Self, AppError> {
        let project = state.repo.project_by_slug(slug)?;
        if project.is_none() {
            tracing::info!("No project with slug {}", slug);
        }
        Ok(Self {
            project,
            settings: state.repo.settings()?,
            grid: PhotoGrid::new(),
        })
    }

    pub fn meta(&self) -> PageMeta {
        match &self.project {
            Some(project) => PageMeta::new(project.title.clone())
                .description(project.description.clone())
                .image(project.cover_image.clone())
                .article()
                .schema(seo::project_schema(project, &self.settings)),
            None => PageMeta::new("Project Not Found"),
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, cx: &mut PageContext<'_>) -> Option<PageAction> {
        let theme = cx.theme;
        let mut action = None;

        let Some(project) = &self.project else {
            ui.add_space(96.0);
            ui.vertical_centered(|ui| {
                ui.heading("Project not found");
                ui.add_space(16.0);
                if ui.button("Back to Portfolio").clicked() {
                    action = Some(PageAction::Navigate(Route::Portfolio { category: None }));
                }
            });
            return action;
        };

        // Hero
        let width = ui.available_width();
        let (rect, _) = ui.allocate_exact_size(Vec2::new(width, width * 0.45), Sense::hover());
        let cover = ImageItem::new(project.id.clone(), project.cover_image.clone())
            .with_title(project.title.clone());
        paint_photo(ui, rect, &cover, 0, cx.textures, &cx.state.loader);

        ui.add_space(32.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(project.category.to_uppercase())
                        .size(12.0)
                        .color(theme.accent),
                );
                ui.label(RichText::new(&project.title).size(40.0));
            });
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("{}  ·  {}", project.date, project.location))
                        .color(theme.text_secondary),
                );
            });
        });
        ui.add_space(16.0);
        ui.label(RichText::new(&project.description).size(16.0).color(theme.text_secondary));
        ui.add_space(48.0);

        if let Some(index) = self
            .grid
            .ui(ui, &project.images, cx.textures, &cx.state.loader)
        {
            cx.lightbox.open(project.images.clone(), index);
        }

        ui.add_space(48.0);
        ui.vertical_centered(|ui| {
            if ui.button("← Back to Portfolio").clicked() {
                action = Some(PageAction::Navigate(Route::Portfolio { category: None }));
            }
        });
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::tests::memory_state;

    #[test]
    fn test_portfolio_filters_by_slug() {
        let state = memory_state();
        let all = PortfolioPage::load(&state, None).unwrap();
        let weddings = PortfolioPage::load(&state, Some("weddings".into())).unwrap();
        assert!(!weddings.images().is_empty());
        assert!(weddings.images().len() < all.images().len());
        assert!(weddings
            .images()
            .iter()
            .all(|img| img.category.as_deref() == Some("Weddings")));

        let none = PortfolioPage::load(&state, Some("events".into())).unwrap();
        assert!(none.images().is_empty());
    }

    #[test]
    fn test_category_name_falls_back_to_slug() {
        let categories = app_core::seed::categories();
        assert_eq!(category_name(&categories, "Editorial"), "Editorial");
        assert_eq!(category_name(&categories, "unknown"), "unknown");
    }

    #[test]
    fn test_project_meta() {
        let state = memory_state();
        let project = state.repo.projects().unwrap().remove(0);
        let page = ProjectPage::load(&state, &project.slug).unwrap();

        let meta = page.meta();
        assert_eq!(meta.title, project.title);
        assert_eq!(meta.image.as_deref(), Some(project.cover_image.as_str()));
        assert_eq!(meta.schema.unwrap()["@type"], "ImageGallery");

        let missing = ProjectPage::load(&state, "nope").unwrap();
        assert!(missing.project.is_none());
        assert!(missing.meta().schema.is_none());
    }
}
