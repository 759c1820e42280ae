//! Project editor: details, cover and gallery of one project

use super::header;
use crate::components::photo_grid::paint_photo;
use crate::components::{GalleryEdit, GalleryEditor};
use crate::pages::{field_label, PageAction, PageContext};
use crate::theme::Theme;
use app_core::portfolio::slugify;
use app_core::route::NEW_PROJECT_ID;
use app_core::{AppError, AppState, Category, ImageItem, PortfolioRepository, Project, Route};
use chrono::NaiveDate;
use egui::{vec2, ComboBox, RichText, Sense, TextEdit, Ui};

pub struct ProjectEditor {
    project: Project,
    is_new: bool,
    categories: Vec<Category>,
    /// URL typed into the "add image" field
    new_image_url: String,
    gallery: GalleryEditor,
}

impl ProjectEditor {
    /// Open the project with `id`, or a fresh draft for the "new" id
    pub fn load(state: &AppState, id: &str) -> Result<Self, AppError> {
        let existing = if id == NEW_PROJECT_ID {
            None
        } else {
            let project = state.repo.project_by_id(id)?;
            if project.is_none() {
                tracing::warn!("Project {} not found, opening a new draft", id);
            }
            project
        };
        let is_new = existing.is_none();
        let project =
            existing.unwrap_or_else(|| Project::new_draft(chrono::Local::now().date_naive()));

        Ok(Self {
            project,
            is_new,
            categories: state.repo.categories()?,
            new_image_url: String::new(),
            gallery: GalleryEditor::new(),
        })
    }

    pub fn heading(&self) -> &'static str {
        if self.is_new {
            "New Project"
        } else {
            "Edit Project"
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Title edit that keeps the slug in step
    pub fn set_title(&mut self, title: &str) {
        self.project.title = title.to_string();
        self.project.slug = slugify(title);
    }

    /// Append an image from the URL field. Blank input is ignored.
    pub fn add_image(&mut self) -> bool {
        let url = self.new_image_url.trim();
        if url.is_empty() {
            return false;
        }
        self.project.images.push(ImageItem::upload(url));
        self.new_image_url.clear();
        true
    }

    /// Apply a gallery edit. Moves are already applied by the gallery.
    pub fn apply(&mut self, edit: &GalleryEdit) {
        match edit {
            GalleryEdit::Removed(id) => self.project.remove_image(id),
            GalleryEdit::Aspect(id, aspect) => self.project.set_image_aspect(id, *aspect),
            GalleryEdit::Moved { .. } => {}
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.project.title.trim().is_empty() {
            return Err(AppError::Validation("Title is required".into()));
        }
        if NaiveDate::parse_from_str(&self.project.date, "%Y-%m-%d").is_err() {
            return Err(AppError::Validation(format!(
                "Date must be YYYY-MM-DD, got \"{}\"",
                self.project.date
            )));
        }
        Ok(())
    }

    pub fn save(&mut self, state: &AppState) -> Result<(), AppError> {
        self.validate()?;
        self.project.slug = self.project.slug.trim_matches('-').to_string();
        state.repo.save_project(self.project.clone())?;
        tracing::info!(id = %self.project.id, "Saved project {}", self.project.title);
        self.is_new = false;
        Ok(())
    }

    pub fn ui(&mut self, ui: &mut Ui, cx: &mut PageContext<'_>) -> Option<PageAction> {
        let theme = cx.theme;
        let mut action = None;

        ui.horizontal(|ui| {
            if ui.link("← Back").clicked() {
                action = Some(PageAction::Navigate(Route::AdminDashboard));
            }
        });
        if header(ui, theme, self.heading(), Some("Save Project")) {
            action = Some(match self.save(cx.state) {
                Ok(()) => PageAction::Navigate(Route::AdminDashboard),
                Err(e) => PageAction::Failed(e),
            });
        }

        ui.columns(2, |columns| {
            self.details_ui(&mut columns[0], theme);
            self.cover_ui(&mut columns[1], cx);
        });

        ui.add_space(32.0);
        ui.separator();
        ui.add_space(16.0);
        ui.label(RichText::new("Gallery").size(20.0));
        ui.label(
            RichText::new("Drag images to reorder. Pick a ratio to control the grid layout.")
                .color(theme.text_secondary),
        );
        ui.add_space(12.0);
        ui.horizontal(|ui| {
            let field = ui.add(
                TextEdit::singleline(&mut self.new_image_url)
                    .hint_text("https://…")
                    .desired_width(ui.available_width() - 120.0),
            );
            let entered = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("+ Add Image").clicked() || entered {
                self.add_image();
            }
        });
        ui.add_space(16.0);

        let edit = self.gallery.ui(
            ui,
            &mut self.project.images,
            cx.textures,
            &cx.state.loader,
        );
        if let Some(edit) = edit {
            tracing::debug!(?edit, "Gallery edited");
            self.apply(&edit);
        }

        action
    }

    fn details_ui(&mut self, ui: &mut Ui, theme: &Theme) {
        field_label(ui, theme, "Title");
        let mut title = self.project.title.clone();
        if ui
            .add(TextEdit::singleline(&mut title).desired_width(f32::INFINITY))
            .changed()
        {
            self.set_title(&title);
        }
        ui.add_space(12.0);

        field_label(ui, theme, "Slug");
        ui.add(TextEdit::singleline(&mut self.project.slug).desired_width(f32::INFINITY));
        ui.add_space(12.0);

        field_label(ui, theme, "Category");
        ComboBox::from_id_salt("project_category")
            .selected_text(&self.project.category)
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for category in &self.categories {
                    ui.selectable_value(
                        &mut self.project.category,
                        category.name.clone(),
                        &category.name,
                    );
                }
            });
        ui.add_space(12.0);

        egui::Grid::new("project_meta")
            .num_columns(2)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                field_label(ui, theme, "Date");
                field_label(ui, theme, "Location");
                ui.end_row();
                ui.add(TextEdit::singleline(&mut self.project.date).hint_text("YYYY-MM-DD"));
                ui.add(TextEdit::singleline(&mut self.project.location));
                ui.end_row();
            });
        ui.add_space(12.0);

        field_label(ui, theme, "Description");
        ui.add(
            TextEdit::multiline(&mut self.project.description)
                .desired_rows(5)
                .desired_width(f32::INFINITY),
        );
    }

    fn cover_ui(&mut self, ui: &mut Ui, cx: &PageContext<'_>) {
        field_label(ui, cx.theme, "Cover Image");
        let width = ui.available_width();
        let (rect, _) = ui.allocate_exact_size(vec2(width, width * 0.6), Sense::hover());
        let cover = ImageItem::new("cover", self.project.cover_image.clone());
        paint_photo(ui, rect, &cover, 0, cx.textures, &cx.state.loader);
        ui.add_space(8.0);
        ui.add(
            TextEdit::singleline(&mut self.project.cover_image)
                .hint_text("Image URL")
                .desired_width(f32::INFINITY),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::tests::memory_state;
    use app_core::AspectRatio;

    #[test]
    fn test_new_project_draft() {
        let state = memory_state();
        let editor = ProjectEditor::load(&state, NEW_PROJECT_ID).unwrap();
        assert_eq!(editor.heading(), "New Project");
        assert_eq!(editor.project().cover_image, Project::PLACEHOLDER_COVER);
        assert!(editor.validate().is_err());
    }

    #[test]
    fn test_title_drives_slug() {
        let state = memory_state();
        let mut editor = ProjectEditor::load(&state, NEW_PROJECT_ID).unwrap();
        editor.set_title("Autumn  in Kyoto ");
        assert_eq!(editor.project().slug, "autumn-in-kyoto-");
    }

    #[test]
    fn test_save_new_project() {
        let state = memory_state();
        let mut editor = ProjectEditor::load(&state, NEW_PROJECT_ID).unwrap();
        editor.set_title("Autumn in Kyoto ");
        editor.new_image_url = " https://x.test/a.jpg ".into();
        assert!(editor.add_image());
        assert!(!editor.add_image());
        editor.save(&state).unwrap();
        assert_eq!(editor.heading(), "Edit Project");

        let saved = state.repo.project_by_slug("autumn-in-kyoto").unwrap().unwrap();
        assert_eq!(saved.images.len(), 1);
        assert_eq!(saved.images[0].url, "https://x.test/a.jpg");
        assert_eq!(saved.images[0].aspect_ratio, Some(AspectRatio::Square));
        assert_eq!(state.repo.projects().unwrap().len(), 4);
    }

    #[test]
    fn test_edit_existing_project() {
        let state = memory_state();
        let original = state.repo.projects().unwrap().remove(0);
        let mut editor = ProjectEditor::load(&state, &original.id).unwrap();
        assert_eq!(editor.heading(), "Edit Project");

        let first = original.images[0].id.clone();
        editor.apply(&GalleryEdit::Aspect(first.clone(), AspectRatio::Landscape));
        editor.apply(&GalleryEdit::Removed(original.images[1].id.clone()));
        editor.save(&state).unwrap();

        let saved = state.repo.project_by_id(&original.id).unwrap().unwrap();
        assert_eq!(saved.images.len(), original.images.len() - 1);
        assert_eq!(saved.images[0].aspect_ratio, Some(AspectRatio::Landscape));
        assert_eq!(saved.slug, original.slug);
    }

    #[test]
    fn test_invalid_date_rejected() {
        let state = memory_state();
        let mut editor = ProjectEditor::load(&state, NEW_PROJECT_ID).unwrap();
        editor.set_title("Dated");
        editor.project.date = "03/2024".into();
        assert!(matches!(editor.save(&state), Err(AppError::Validation(_))));
    }
}
