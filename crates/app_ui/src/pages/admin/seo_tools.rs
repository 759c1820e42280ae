//! Sitemap and robots.txt previews with export

use super::header;
use crate::pages::{PageAction, PageContext};
use app_core::sitemap::{self, ROBOTS_FILE, SITEMAP_FILE};
use app_core::{AppError, AppState, PortfolioRepository};
use egui::{RichText, ScrollArea, TextEdit, Ui};
use std::path::PathBuf;

const TIP: &str = "Upload sitemap.xml and robots.txt to the root of the public site, then \
                   submit the sitemap URL in Google Search Console.";

pub struct SeoToolsPage {
    sitemap: String,
    robots: String,
    export_dir: PathBuf,
}

impl SeoToolsPage {
    pub fn load(state: &AppState) -> Result<Self, AppError> {
        let (origin, export_dir) = {
            let config = state.config.read();
            (config.site.origin.clone(), config.site.export_dir.clone())
        };
        let projects = state.repo.projects()?;
        let today = chrono::Local::now().date_naive();

        Ok(Self {
            sitemap: sitemap::generate_sitemap(&origin, &projects, today),
            robots: sitemap::generate_robots(&origin),
            export_dir,
        })
    }

    /// Write both files into the export directory
    pub fn export(&self) -> Result<PathBuf, AppError> {
        sitemap::export(&self.export_dir, SITEMAP_FILE, &self.sitemap)?;
        sitemap::export(&self.export_dir, ROBOTS_FILE, &self.robots)?;
        tracing::info!("Exported SEO files to {}", self.export_dir.display());
        Ok(self.export_dir.clone())
    }

    pub fn ui(&mut self, ui: &mut Ui, cx: &mut PageContext<'_>) -> Option<PageAction> {
        let theme = cx.theme;
        let mut action = None;

        if header(ui, theme, "SEO Tools", Some("Export Files")) {
            action = Some(match self.export() {
                Ok(dir) => PageAction::Notify(format!("Exported to {}", dir.display())),
                Err(e) => PageAction::Failed(e),
            });
        }

        ui.columns(2, |columns| {
            preview(&mut columns[0], SITEMAP_FILE, &self.sitemap);
            preview(&mut columns[1], ROBOTS_FILE, &self.robots);
        });

        ui.add_space(24.0);
        egui::Frame::group(ui.style())
            .fill(theme.primary)
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.label(RichText::new("Tip").strong());
                ui.label(RichText::new(TIP).color(theme.text_secondary));
            });

        action
    }
}

fn preview(ui: &mut Ui, name: &str, content: &str) {
    ui.label(RichText::new(name).monospace().strong());
    ui.add_space(8.0);
    ScrollArea::vertical()
        .id_salt(name)
        .max_height(360.0)
        .show(ui, |ui| {
            let mut text = content;
            ui.add(
                TextEdit::multiline(&mut text)
                    .code_editor()
                    .desired_width(f32::INFINITY),
            );
        });
}
