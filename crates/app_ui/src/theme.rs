//! Application theming

use egui::{Color32, FontFamily, FontId, TextStyle, Visuals};

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub surface: Color32,
    pub primary: Color32,
    pub text: Color32,
    pub text_secondary: Color32,
    /// Stone accent used for active links and eyebrow labels
    pub accent: Color32,
    pub error: Color32,
    pub success: Color32,
    /// Backdrop of the lightbox
    pub viewer_background: Color32,
}

impl Theme {
    /// Light theme (default)
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::from_rgb(250, 250, 250),
            surface: Color32::from_rgb(255, 255, 255),
            primary: Color32::from_rgb(245, 245, 245),
            text: Color32::from_rgb(23, 23, 23),
            text_secondary: Color32::from_rgb(115, 115, 115),
            accent: Color32::from_rgb(120, 113, 108),
            error: Color32::from_rgb(220, 38, 38),
            success: Color32::from_rgb(34, 197, 94),
            viewer_background: Color32::from_rgb(250, 250, 250),
        }
    }

    /// Dark theme
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(23, 23, 23),
            surface: Color32::from_rgb(38, 38, 38),
            primary: Color32::from_rgb(64, 64, 64),
            text: Color32::from_rgb(245, 245, 245),
            text_secondary: Color32::from_rgb(168, 162, 158),
            accent: Color32::from_rgb(214, 211, 209),
            error: Color32::from_rgb(248, 113, 113),
            success: Color32::from_rgb(74, 222, 128),
            viewer_background: Color32::from_rgb(10, 10, 10),
        }
    }

    /// Apply theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        let mut visuals = if self.name == "dark" {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.surface;
        visuals.window_fill = self.surface;
        visuals.extreme_bg_color = self.background;
        visuals.faint_bg_color = self.primary;

        visuals.widgets.noninteractive.bg_fill = self.surface;
        visuals.widgets.noninteractive.fg_stroke.color = self.text;

        visuals.widgets.inactive.bg_fill = self.primary;
        visuals.widgets.inactive.fg_stroke.color = self.text;

        visuals.widgets.hovered.bg_fill = self.accent.linear_multiply(0.2);
        visuals.widgets.hovered.fg_stroke.color = self.text;

        visuals.widgets.active.bg_fill = self.accent.linear_multiply(0.4);
        visuals.widgets.active.fg_stroke.color = self.text;

        visuals.selection.bg_fill = self.accent.linear_multiply(0.3);
        visuals.selection.stroke.color = self.accent;

        style.visuals = visuals;
        style
            .text_styles
            .insert(TextStyle::Heading, FontId::new(30.0, FontFamily::Proportional));
        ctx.set_style(style);
    }

    /// Get theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    /// Override the lightbox backdrop with a configured hex color
    pub fn with_viewer_background(mut self, hex: &str) -> Self {
        match Self::parse_color(hex) {
            Some(color) => self.viewer_background = color,
            None => tracing::warn!("Ignoring invalid viewer background color: {}", hex),
        }
        self
    }

    /// Parse a hex color string
    pub fn parse_color(hex: &str) -> Option<Color32> {
        let hex = hex.trim_start_matches('#');

        if !hex.is_ascii() {
            return None;
        }
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color32::from_rgb(r, g, b))
        } else if hex.len() == 8 {
            let a = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let r = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let g = u8::from_str_radix(&hex[4..6], 16).ok()?;
            let b = u8::from_str_radix(&hex[6..8], 16).ok()?;
            Some(Color32::from_rgba_unmultiplied(r, g, b, a))
        } else {
            None
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(Theme::parse_color("#fafafa"), Some(Color32::from_rgb(250, 250, 250)));
        assert_eq!(
            Theme::parse_color("80000000"),
            Some(Color32::from_rgba_unmultiplied(0, 0, 0, 128))
        );
        assert_eq!(Theme::parse_color("#fff"), None);
        assert_eq!(Theme::parse_color("#zzzzzz"), None);
    }

    #[test]
    fn test_by_name_defaults_to_light() {
        assert_eq!(Theme::by_name("DARK").name, "dark");
        assert_eq!(Theme::by_name("sepia").name, "light");
    }

    #[test]
    fn test_viewer_background_override() {
        let theme = Theme::light().with_viewer_background("#000000");
        assert_eq!(theme.viewer_background, Color32::BLACK);

        let theme = Theme::light().with_viewer_background("nope");
        assert_eq!(theme.viewer_background, Theme::light().viewer_background);
    }
}
