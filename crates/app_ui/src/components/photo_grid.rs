//! Dense photo grid
//!
//! Lays images out with [`app_core::grid::pack`] and paints each cell
//! cover-cropped. Clicking a cell reports its index so the caller can open
//! the lightbox over the same sequence.

use crate::textures::{cover_uv, TextureCache};
use app_core::grid::{self, GridMetrics};
use app_core::{ImageItem, ImageLoader};
use egui::{Align2, Color32, FontId, Rect, Sense, Ui, Vec2};

/// Photo grid component
pub struct PhotoGrid {
    /// Space between cells in points
    pub gap: f32,
    /// Render every cell 1:1 regardless of its declared aspect
    pub ignore_aspect: bool,
}

impl Default for PhotoGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl PhotoGrid {
    pub fn new() -> Self {
        Self {
            gap: 16.0,
            ignore_aspect: false,
        }
    }

    pub fn square(mut self) -> Self {
        self.ignore_aspect = true;
        self
    }

    /// Render the grid. Returns the index of a clicked image.
    pub fn ui(
        &self,
        ui: &mut Ui,
        items: &[ImageItem],
        textures: &TextureCache,
        loader: &ImageLoader,
    ) -> Option<usize> {
        if items.is_empty() {
            return None;
        }

        let width = ui.available_width();
        let columns = grid::columns_for_width(width);
        let layout = grid::pack(&grid::placements(items, self.ignore_aspect), columns);
        let metrics = GridMetrics::for_width(width, columns, self.gap);

        let (area, _) = ui.allocate_exact_size(
            Vec2::new(width, metrics.total_height(layout.rows)),
            Sense::hover(),
        );

        let mut clicked = None;
        for (index, (item, cell)) in items.iter().zip(&layout.cells).enumerate() {
            let bounds = metrics.bounds(cell);
            let rect = Rect::from_min_size(
                area.min + Vec2::new(bounds.x, bounds.y),
                Vec2::new(bounds.width, bounds.height),
            );
            if !ui.is_rect_visible(rect) {
                continue;
            }

            let response = ui
                .interact(rect, ui.id().with(("photo", &item.id)), Sense::click())
                .on_hover_cursor(egui::CursorIcon::PointingHand);
            paint_photo(ui, rect, item, index, textures, loader);

            if response.hovered() {
                ui.painter()
                    .rect_filled(rect, 0.0, Color32::from_black_alpha(26));
                if let Some(title) = &item.project_title {
                    ui.painter().text(
                        rect.left_bottom() + Vec2::new(12.0, -12.0),
                        Align2::LEFT_BOTTOM,
                        title,
                        FontId::proportional(14.0),
                        Color32::WHITE,
                    );
                }
            }
            if response.clicked() {
                clicked = Some(index);
            }
        }

        clicked
    }
}

/// Paint one photo cover-cropped into `rect`, or a placeholder with its
/// alt text while no texture exists
pub fn paint_photo(
    ui: &Ui,
    rect: Rect,
    item: &ImageItem,
    index: usize,
    textures: &TextureCache,
    loader: &ImageLoader,
) {
    let painter = ui.painter_at(rect);
    match textures.get_or_request(loader, &item.url) {
        Some(texture) => {
            let uv = cover_uv(texture.size_vec2(), rect.size());
            painter.image(texture.id(), rect, uv, Color32::WHITE);
        }
        None => {
            painter.rect_filled(rect, 0.0, Color32::from_rgb(245, 245, 245));
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                item.alt_text(index),
                FontId::proportional(12.0),
                Color32::from_rgb(163, 163, 163),
            );
        }
    }
}
