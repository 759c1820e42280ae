//! About page

use super::{section_title, PageAction, PageContext};
use crate::components::photo_grid::paint_photo;
use app_core::{
    seed, seo, AppError, AppState, ImageItem, PageMeta, PortfolioRepository, SiteSettings,
    Testimonial,
};
use egui::{RichText, Sense, Ui, Vec2};

const PORTRAIT_URL: &str = "https://picsum.photos/id/64/800/1000";

const PUBLICATIONS: [&str; 4] = [
    "Vogue Italia",
    "Kinfolk Magazine",
    "Harper's Bazaar",
    "The Lane",
];

const BIO: [&str; 2] = [
    "Photography is more than just capturing a moment; it's about preserving the feeling of \
     that moment. With over a decade of experience behind the lens, I strive to create images \
     that are honest, emotive and timeless.",
    "My approach is minimalist and observational. I prefer natural light and unposed \
     interactions, allowing the true character of my subjects to shine through.",
];

pub struct AboutPage {
    settings: SiteSettings,
    testimonials: Vec<Testimonial>,
}

impl AboutPage {
    pub fn load(state: &AppState) -> Result<Self, AppError> {
        let settings = state.repo.settings()?;
        let testimonials = seed::testimonials(&settings.photographer_name);
        Ok(Self {
            settings,
            testimonials,
        })
    }

    /// First word of the photographer's name
    pub fn first_name(&self) -> &str {
        self.settings
            .photographer_name
            .split_whitespace()
            .next()
            .unwrap_or_default()
    }

    pub fn meta(&self, origin: &str) -> PageMeta {
        let href = format!("{}/about", origin.trim_end_matches('/'));
        PageMeta::new("About")
            .description(format!("Learn more about {}", self.settings.photographer_name))
            .schema(seo::about_schema(&self.settings, &href))
    }

    pub fn ui(&mut self, ui: &mut Ui, cx: &mut PageContext<'_>) -> Option<PageAction> {
        let theme = cx.theme;
        ui.add_space(48.0);

        ui.columns(2, |columns| {
            let width = columns[0].available_width();
            let (rect, _) = columns[0]
                .allocate_exact_size(Vec2::new(width, width * 1.25), Sense::hover());
            let portrait = ImageItem::new("portrait", PORTRAIT_URL).with_title("Photographer");
            paint_photo(&columns[0], rect, &portrait, 0, cx.textures, &cx.state.loader);

            let ui = &mut columns[1];
            ui.add_space(32.0);
            ui.label(RichText::new(format!("About {}", self.first_name())).size(44.0));
            ui.add_space(16.0);
            for paragraph in BIO {
                ui.label(RichText::new(paragraph).size(16.0).color(theme.text_secondary));
                ui.add_space(12.0);
            }

            ui.add_space(24.0);
            ui.label(RichText::new("PUBLICATIONS & FEATURES").size(12.0).strong());
            ui.add_space(12.0);
            for publication in PUBLICATIONS {
                ui.label(RichText::new(format!("—  {}", publication)).color(theme.accent));
            }
        });

        section_title(ui, theme, "Kind Words", None);
        ui.columns(self.testimonials.len().max(1), |columns| {
            for (column, quote) in columns.iter_mut().zip(&self.testimonials) {
                egui::Frame::none()
                    .fill(theme.surface)
                    .inner_margin(32.0)
                    .show(column, |ui| {
                        ui.label(
                            RichText::new(format!("\"{}\"", quote.text))
                                .italics()
                                .size(16.0)
                                .color(theme.text_secondary),
                        );
                        ui.add_space(16.0);
                        ui.label(
                            RichText::new(format!("- {}", quote.client.to_uppercase()))
                                .size(11.0)
                                .strong(),
                        );
                    });
            }
        });

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::tests::memory_state;

    #[test]
    fn test_about_meta() {
        let state = memory_state();
        let page = AboutPage::load(&state).unwrap();
        let meta = page.meta("https://x.test/");

        let name = &page.settings.photographer_name;
        assert_eq!(meta.description.as_deref(), Some(format!("Learn more about {}", name).as_str()));
        let schema = meta.schema.unwrap();
        assert_eq!(schema["url"], "https://x.test/about");
        assert_eq!(schema["@type"], "Person");
    }

    #[test]
    fn test_first_name_and_testimonials() {
        let state = memory_state();
        let mut page = AboutPage::load(&state).unwrap();
        page.settings.photographer_name = "Elena Vore".into();
        assert_eq!(page.first_name(), "Elena");
        assert_eq!(page.testimonials.len(), 3);

        page.settings.photographer_name.clear();
        assert_eq!(page.first_name(), "");
    }
}
