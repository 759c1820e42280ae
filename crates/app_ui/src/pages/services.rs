//! Services and pricing

use super::{section_title, PageAction, PageContext};
use app_core::{seo, AppError, AppState, PageMeta, PortfolioRepository, Route, Service};
use egui::{RichText, Ui};

const FAQ: [(&str, &str); 3] = [
    (
        "Do you travel for weddings?",
        "Yes, I am available worldwide. Travel fees apply for locations outside of the main \
         city area.",
    ),
    (
        "How many images will we receive?",
        "For a full wedding day, you can expect between 500-700 fully edited images.",
    ),
    (
        "What is your turnaround time?",
        "Portrait sessions are delivered within 2 weeks. Weddings are delivered within 6-8 weeks.",
    ),
];

pub struct ServicesPage {
    services: Vec<Service>,
}

impl ServicesPage {
    pub fn load(state: &AppState) -> Result<Self, AppError> {
        Ok(Self {
            services: state.repo.services()?,
        })
    }

    pub fn meta(&self) -> PageMeta {
        PageMeta::new("Services & Investment")
            .description("Pricing and packages for photography services.")
            .schema(seo::services_schema(&self.services))
    }

    pub fn ui(&mut self, ui: &mut Ui, cx: &mut PageContext<'_>) -> Option<PageAction> {
        let theme = cx.theme;
        let mut action = None;

        section_title(ui, theme, "Investment", Some("Services & Pricing"));
        ui.columns(self.services.len().max(1), |columns| {
            for (column, service) in columns.iter_mut().zip(&self.services) {
                egui::Frame::group(column.style())
                    .inner_margin(32.0)
                    .show(column, |ui| {
                        ui.label(RichText::new(&service.title).size(22.0));
                        ui.add_space(12.0);
                        ui.label(RichText::new(&service.description).color(theme.text_secondary));
                        ui.add_space(24.0);
                        ui.label(
                            RichText::new(&service.price_display)
                                .size(18.0)
                                .color(theme.accent),
                        );
                        ui.add_space(12.0);
                        let inquire = ui.add_sized(
                            [ui.available_width(), 32.0],
                            egui::Button::new("Inquire"),
                        );
                        if inquire.clicked() {
                            tracing::debug!("Inquiry for {}", service.title);
                            action = Some(PageAction::Navigate(Route::Contact));
                        }
                    });
            }
        });

        section_title(ui, theme, "FAQ", None);
        for (question, answer) in FAQ {
            ui.label(RichText::new(question).size(16.0).strong());
            ui.label(RichText::new(answer).color(theme.text_secondary));
            ui.add_space(12.0);
            ui.separator();
            ui.add_space(12.0);
        }

        action
    }
}
