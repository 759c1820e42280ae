//! Editable gallery for the project editor: drag to reorder, remove, and
//! pick each image's aspect class

use super::photo_grid::paint_photo;
use crate::textures::TextureCache;
use app_core::grid::placement;
use app_core::{AspectRatio, ImageItem, ImageLoader, ReorderList};
use egui::{Color32, ComboBox, CursorIcon, Rect, Sense, Stroke, Ui, Vec2};

const COLUMNS: usize = 3;
const SPACING: f32 = 16.0;

/// Edit applied to the gallery in one frame
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryEdit {
    Moved { from: usize, to: usize },
    Removed(String),
    Aspect(String, AspectRatio),
}

/// Gallery editor component
#[derive(Default)]
pub struct GalleryEditor {
    reorder: ReorderList,
}

impl GalleryEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index currently being dragged
    pub fn dragging(&self) -> Option<usize> {
        self.reorder.dragging()
    }

    /// Render the gallery. Moves are applied to `images` in place; removals
    /// and ratio changes are returned for the caller to apply.
    pub fn ui(
        &mut self,
        ui: &mut Ui,
        images: &mut Vec<ImageItem>,
        textures: &TextureCache,
        loader: &ImageLoader,
    ) -> Option<GalleryEdit> {
        if images.is_empty() {
            ui.weak("No images added yet.");
            return None;
        }

        let mut edit = None;
        let tile_width =
            ((ui.available_width() - SPACING * (COLUMNS - 1) as f32) / COLUMNS as f32).max(80.0);
        let released = ui.input(|i| i.pointer.any_released());
        let mut dropped_on = None;

        egui::Grid::new("gallery_editor")
            .num_columns(COLUMNS)
            .spacing(Vec2::splat(SPACING))
            .show(ui, |ui| {
                for index in 0..images.len() {
                    ui.vertical(|ui| {
                        let image = &images[index];
                        let aspect = image.aspect_ratio.unwrap_or_default();
                        let tile =
                            Vec2::new(tile_width, tile_width / placement(image, false).aspect());

                        let (rect, response) = ui.allocate_exact_size(tile, Sense::drag());
                        paint_photo(ui, rect, image, index, textures, loader);
                        self.paint_drag_state(ui, rect, index);

                        if response.drag_started() {
                            self.reorder.pick_up(index);
                        }
                        if self.reorder.dragging().is_some() && response.contains_pointer() {
                            self.reorder.hover(index);
                            if released {
                                dropped_on = Some(index);
                            }
                        }
                        if response.hovered() {
                            ui.ctx().set_cursor_icon(CursorIcon::Grab);
                        }

                        ui.horizontal(|ui| {
                            let id = image.id.clone();
                            let mut selected = aspect;
                            ComboBox::from_id_salt(("ratio", &id))
                                .selected_text(selected.label())
                                .width(tile_width - 40.0)
                                .show_ui(ui, |ui| {
                                    for option in AspectRatio::ALL {
                                        ui.selectable_value(&mut selected, option, option.label());
                                    }
                                });
                            if selected != aspect {
                                edit = Some(GalleryEdit::Aspect(id.clone(), selected));
                            }
                            if ui
                                .button(egui::RichText::new("✕").color(Color32::RED))
                                .on_hover_text("Remove Image")
                                .clicked()
                            {
                                edit = Some(GalleryEdit::Removed(id));
                            }
                        });
                    });

                    if (index + 1) % COLUMNS == 0 {
                        ui.end_row();
                    }
                }
            });

        if let Some(from) = self.reorder.dragging() {
            match dropped_on {
                Some(to) => {
                    if self.reorder.drop_on(images, to) {
                        edit = Some(GalleryEdit::Moved { from, to });
                    }
                }
                None if released => self.reorder.cancel(),
                None => {}
            }
        }

        edit
    }

    fn paint_drag_state(&self, ui: &Ui, rect: Rect, index: usize) {
        if self.reorder.dragging() == Some(index) {
            ui.painter()
                .rect_filled(rect, 4.0, Color32::from_white_alpha(153));
            ui.painter().rect_stroke(
                rect.shrink(1.0),
                4.0,
                Stroke::new(2.0, Color32::from_rgb(120, 113, 108)),
            );
        } else if self.reorder.drop_target() == Some(index) {
            ui.painter().rect_stroke(
                rect.shrink(1.0),
                4.0,
                Stroke::new(2.0, Color32::from_rgb(168, 162, 158)),
            );
        }
    }
}
