//! Contact page with the booking form
//!
//! Submissions are not sent anywhere; a valid form is cleared and a demo
//! notice is shown.

use super::{field_label, PageAction, PageContext};
use crate::components::chrome::open_link;
use app_core::{AppError, AppState, PortfolioRepository, SiteSettings};
use egui::{ComboBox, RichText, TextEdit, Ui};

pub const SENT_NOTICE: &str = "Thank you! Your message has been sent. (This is a demo)";

/// Interest options as (value, label)
const INTERESTS: [(&str, &str); 4] = [
    ("Wedding", "Wedding Photography"),
    ("Portrait", "Portrait Session"),
    ("Editorial", "Editorial / Commercial"),
    ("Other", "Other"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    /// Empty when no interest was picked
    pub interest: String,
    pub message: String,
}

impl ContactForm {
    /// First problem that keeps the form from being sent
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Please enter your name.");
        }
        let email = self.email.trim();
        match email.split_once('@') {
            Some((user, domain)) if !user.is_empty() && !domain.is_empty() => {}
            _ => return Err("Please enter a valid email address."),
        }
        if self.message.trim().is_empty() {
            return Err("Please enter a message.");
        }
        Ok(())
    }

    /// Validate and clear the form
    pub fn submit(&mut self) -> Result<(), &'static str> {
        self.validate()?;
        tracing::info!(interest = %self.interest, "Contact form submitted");
        *self = Self::default();
        Ok(())
    }

    fn interest_label(&self) -> &'static str {
        INTERESTS
            .iter()
            .find(|(value, _)| *value == self.interest)
            .map(|(_, label)| *label)
            .unwrap_or("Select a service type")
    }
}

/// WhatsApp chat link with a greeting prefilled
pub fn whatsapp_url(phone: &str, photographer: &str) -> String {
    let number: String = phone.chars().filter(char::is_ascii_digit).collect();
    let text = format!(
        "Hello {}, I'd like to inquire about a session.",
        photographer
    );
    format!("https://wa.me/{}?text={}", number, text.replace(' ', "%20"))
}

pub struct ContactPage {
    settings: SiteSettings,
    form: ContactForm,
    error: Option<&'static str>,
}

impl ContactPage {
    pub fn load(state: &AppState) -> Result<Self, AppError> {
        Ok(Self {
            settings: state.repo.settings()?,
            form: ContactForm::default(),
            error: None,
        })
    }

    pub fn ui(&mut self, ui: &mut Ui, cx: &mut PageContext<'_>) -> Option<PageAction> {
        let theme = cx.theme;
        let mut action = None;
        ui.add_space(48.0);

        ui.columns(2, |columns| {
            let ui = &mut columns[0];
            ui.label(RichText::new("Get in Touch").size(44.0));
            ui.add_space(16.0);
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    RichText::new(
                        "Currently booking for the upcoming season. Please fill out the form \
                         or email me directly at",
                    )
                    .color(theme.text_secondary),
                );
                if ui.link(&self.settings.email).clicked() {
                    open_link(&format!("mailto:{}", self.settings.email));
                }
            });
            ui.add_space(32.0);
            field_label(ui, theme, "Direct Contact");
            ui.label(RichText::new(&self.settings.phone).size(20.0));
            ui.label(RichText::new(&self.settings.email).size(20.0));
            ui.add_space(32.0);
            if ui.link("Chat on WhatsApp").clicked() {
                open_link(&whatsapp_url(
                    &self.settings.phone,
                    &self.settings.photographer_name,
                ));
            }

            let ui = &mut columns[1];
            let form = &mut self.form;
            field_label(ui, theme, "Name");
            ui.add(TextEdit::singleline(&mut form.name).desired_width(f32::INFINITY));
            ui.add_space(16.0);
            field_label(ui, theme, "Email");
            ui.add(TextEdit::singleline(&mut form.email).desired_width(f32::INFINITY));
            ui.add_space(16.0);

            field_label(ui, theme, "Interest");
            ComboBox::from_id_salt("contact_interest")
                .selected_text(form.interest_label())
                .width(ui.available_width())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut form.interest, String::new(), "Select a service type");
                    for (value, label) in INTERESTS {
                        ui.selectable_value(&mut form.interest, value.to_string(), label);
                    }
                });
            ui.add_space(16.0);

            field_label(ui, theme, "Message");
            ui.add(
                TextEdit::multiline(&mut form.message)
                    .desired_rows(6)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(24.0);

            if let Some(error) = self.error {
                ui.label(RichText::new(error).color(theme.error));
            }
            if ui.button("Send Message").clicked() {
                match self.form.submit() {
                    Ok(()) => {
                        self.error = None;
                        action = Some(PageAction::Notify(SENT_NOTICE.to_string()));
                    }
                    Err(e) => self.error = Some(e),
                }
            }
        });

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            interest: "Portrait".into(),
            message: "Hello".into(),
        }
    }

    #[test]
    fn test_submit_clears_form() {
        let mut form = filled();
        assert!(form.submit().is_ok());
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_required_fields() {
        let mut form = filled();
        form.name = "  ".into();
        assert_eq!(form.submit(), Err("Please enter your name."));
        assert_eq!(form.email, "ada@example.com");

        let mut form = filled();
        form.email = "ada.example.com".into();
        assert!(form.validate().is_err());

        let mut form = filled();
        form.message.clear();
        assert!(form.validate().is_err());

        // Interest is optional
        let mut form = filled();
        form.interest.clear();
        assert!(form.validate().is_ok());
        assert_eq!(form.interest_label(), "Select a service type");
    }

    #[test]
    fn test_whatsapp_url() {
        assert_eq!(
            whatsapp_url("+1 (555) 012-3456", "Elena Vore"),
            "https://wa.me/15550123456?text=Hello%20Elena%20Vore,%20I'd%20like%20to%20inquire%20about%20a%20session."
        );
    }
}
