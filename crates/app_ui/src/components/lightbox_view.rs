//! Full-window lightbox overlay
//!
//! Draws the state held by [`app_core::Lightbox`] and feeds pointer and
//! button input back into it. Keyboard shortcuts arrive as commands from
//! the input handler instead.

use crate::textures::{contain_size, TextureCache};
use app_core::{ImageLoader, Lightbox, Point};
use egui::{
    Align, Align2, Button, Color32, Context, CursorIcon, FontId, Id, Layout, Order, Pos2, Rect,
    RichText, Sense, Ui, UiBuilder, Vec2,
};

const HEADER_HEIGHT: f32 = 56.0;
const ARROW_SIZE: f32 = 48.0;
const TOOLBAR_SIZE: Vec2 = Vec2::new(220.0, 44.0);
/// Unzoomed images fit in this share of the window
const FIT_FRACTION: f32 = 0.9;

fn to_point(pos: Pos2) -> Point {
    Point::new(pos.x, pos.y)
}

/// Lightbox overlay component
pub struct LightboxView {
    pub background: Color32,
}

impl LightboxView {
    pub fn new(background: Color32) -> Self {
        Self { background }
    }

    /// Render the overlay when the lightbox is open
    pub fn ui(
        &self,
        ctx: &Context,
        lightbox: &mut Lightbox,
        textures: &TextureCache,
        loader: &ImageLoader,
    ) {
        if !lightbox.is_open() {
            return;
        }

        let screen = ctx.screen_rect();
        egui::Area::new(Id::new("lightbox"))
            .order(Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                ui.set_min_size(screen.size());
                self.stage(ui, screen, lightbox, textures, loader);
                self.header(ui, screen, lightbox);
                self.arrows(ui, screen, lightbox);
                self.toolbar(ui, screen, lightbox);
                self.caption(ui, screen, lightbox);
            });
    }

    /// Image surface: painting, loading spinner and drag-to-pan
    fn stage(
        &self,
        ui: &mut Ui,
        screen: Rect,
        lightbox: &mut Lightbox,
        textures: &TextureCache,
        loader: &ImageLoader,
    ) {
        let response = ui.interact(screen, Id::new("lightbox_stage"), Sense::drag());
        ui.painter().rect_filled(screen, 0.0, self.background);

        let pointer = response
            .interact_pointer_pos()
            .or_else(|| ui.input(|i| i.pointer.hover_pos()));
        if response.drag_started() {
            if let Some(pos) = pointer {
                lightbox.begin_drag(to_point(pos));
            }
        } else if response.dragged() {
            if let Some(pos) = pointer {
                lightbox.drag_to(to_point(pos));
            }
        }
        let dragging = lightbox.session().is_some_and(|s| s.is_dragging());
        if response.drag_stopped() || (dragging && !response.contains_pointer()) {
            lightbox.end_drag();
        }

        let Some(item) = lightbox.current().cloned() else {
            return;
        };

        if let Some(texture) = textures.get_or_request(loader, &item.url) {
            lightbox.mark_loaded(&item.id);

            let transform = lightbox.transform();
            let offset = transform.screen_offset();
            let fitted = contain_size(texture.size_vec2(), screen.size() * FIT_FRACTION);
            let rect = Rect::from_center_size(
                screen.center() + Vec2::new(offset.x, offset.y),
                fitted * transform.scale,
            );
            let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
            ui.painter_at(screen)
                .image(texture.id(), rect, uv, Color32::WHITE);
        }

        let loaded = lightbox.session().is_some_and(|s| s.is_loaded());
        if !loaded {
            ui.put(
                Rect::from_center_size(screen.center(), Vec2::splat(32.0)),
                egui::Spinner::new().size(32.0),
            );
        }

        if lightbox.can_zoom_out() && response.hovered() {
            let icon = if dragging {
                CursorIcon::Grabbing
            } else {
                CursorIcon::Grab
            };
            ui.ctx().set_cursor_icon(icon);
        }
    }

    /// Counter on the left, close button on the right
    fn header(&self, ui: &mut Ui, screen: Rect, lightbox: &mut Lightbox) {
        let bar = Rect::from_min_size(screen.min, Vec2::new(screen.width(), HEADER_HEIGHT));
        ui.painter()
            .rect_filled(bar, 0.0, Color32::from_white_alpha(128));

        if let Some(counter) = lightbox.counter_label() {
            ui.painter().text(
                bar.left_center() + Vec2::new(16.0, 0.0),
                Align2::LEFT_CENTER,
                counter,
                FontId::monospace(12.0),
                Color32::from_rgb(115, 115, 115),
            );
        }

        let close = Rect::from_center_size(
            bar.right_center() - Vec2::new(32.0, 0.0),
            Vec2::splat(36.0),
        );
        let response = ui
            .put(close, Button::new(RichText::new("✕").size(20.0)).frame(false))
            .on_hover_text("Close");
        if response.clicked() {
            lightbox.close();
        }
    }

    fn arrows(&self, ui: &mut Ui, screen: Rect, lightbox: &mut Lightbox) {
        if !lightbox.is_open() {
            return;
        }
        let size = Vec2::splat(ARROW_SIZE);
        let y = screen.center().y;
        let prev = Rect::from_center_size(Pos2::new(screen.left() + 16.0 + ARROW_SIZE / 2.0, y), size);
        let next = Rect::from_center_size(Pos2::new(screen.right() - 16.0 - ARROW_SIZE / 2.0, y), size);

        if ui
            .put(prev, Button::new(RichText::new("‹").size(28.0)).rounding(ARROW_SIZE / 2.0))
            .on_hover_text("Previous")
            .clicked()
        {
            lightbox.prev();
        }
        if ui
            .put(next, Button::new(RichText::new("›").size(28.0)).rounding(ARROW_SIZE / 2.0))
            .on_hover_text("Next")
            .clicked()
        {
            lightbox.next();
        }
    }

    /// Zoom out, percentage, zoom in, reset
    fn toolbar(&self, ui: &mut Ui, screen: Rect, lightbox: &mut Lightbox) {
        let Some(percent) = lightbox.zoom_percent() else {
            return;
        };
        let rect = Rect::from_center_size(
            Pos2::new(screen.center().x, screen.bottom() - 24.0 - TOOLBAR_SIZE.y / 2.0),
            TOOLBAR_SIZE,
        );
        ui.painter()
            .rect_filled(rect, TOOLBAR_SIZE.y / 2.0, Color32::from_white_alpha(230));

        ui.allocate_new_ui(
            UiBuilder::new()
                .max_rect(rect.shrink2(Vec2::new(20.0, 6.0)))
                .layout(Layout::left_to_right(Align::Center)),
            |ui| {
                ui.spacing_mut().item_spacing.x = 16.0;
                if ui
                    .add_enabled(lightbox.can_zoom_out(), Button::new("−").frame(false))
                    .on_hover_text("Zoom out")
                    .clicked()
                {
                    lightbox.zoom_out();
                }
                ui.label(RichText::new(format!("{}%", percent)).monospace().size(12.0));
                if ui
                    .add_enabled(lightbox.can_zoom_in(), Button::new("+").frame(false))
                    .on_hover_text("Zoom in")
                    .clicked()
                {
                    lightbox.zoom_in();
                }
                ui.separator();
                if ui
                    .add(Button::new("⟲").frame(false))
                    .on_hover_text("Reset")
                    .clicked()
                {
                    lightbox.reset_view();
                }
            },
        );
    }

    fn caption(&self, ui: &mut Ui, screen: Rect, lightbox: &Lightbox) {
        let Some(title) = lightbox.current().and_then(|item| item.title.as_deref()) else {
            return;
        };
        ui.painter().text(
            screen.left_bottom() + Vec2::new(24.0, -24.0),
            Align2::LEFT_BOTTOM,
            title,
            FontId::proportional(18.0),
            Color32::from_rgb(23, 23, 23),
        );
    }
}
