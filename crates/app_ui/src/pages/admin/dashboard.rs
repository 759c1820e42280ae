//! Project list of the admin area

use super::header;
use crate::components::{ConfirmDialog, Dialog, DialogResult};
use crate::pages::{PageAction, PageContext};
use app_core::{AppError, AppState, PortfolioRepository, Project, Route};
use egui::{RichText, Ui};

pub struct DashboardPage {
    projects: Vec<Project>,
    /// Pending delete confirmation with the project id
    confirm: Option<(String, ConfirmDialog)>,
}

impl DashboardPage {
    pub fn load(state: &AppState) -> Result<Self, AppError> {
        Ok(Self {
            projects: state.repo.projects()?,
            confirm: None,
        })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Remove a project and refresh the list
    pub fn delete(&mut self, state: &AppState, id: &str) -> Result<(), AppError> {
        state.repo.delete_project(id)?;
        self.projects = state.repo.projects()?;
        tracing::info!("Deleted project {}", id);
        Ok(())
    }

    pub fn ui(&mut self, ui: &mut Ui, cx: &mut PageContext<'_>) -> Option<PageAction> {
        let theme = cx.theme;
        let mut action = None;

        if header(ui, theme, "Portfolio Projects", Some("+ New Project")) {
            action = Some(PageAction::Navigate(Route::new_project()));
        }

        if self.projects.is_empty() {
            ui.add_space(32.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("No projects found. Create your first one.")
                        .color(theme.text_secondary),
                );
            });
        } else {
            let mut delete_request = None;
            egui::Grid::new("project_table")
                .num_columns(4)
                .spacing([40.0, 12.0])
                .striped(true)
                .show(ui, |ui| {
                    for heading in ["TITLE", "CATEGORY", "DATE", "ACTIONS"] {
                        ui.label(RichText::new(heading).size(11.0).color(theme.text_secondary));
                    }
                    ui.end_row();

                    for project in &self.projects {
                        ui.label(RichText::new(&project.title).strong());
                        ui.label(&project.category);
                        ui.label(&project.date);
                        ui.horizontal(|ui| {
                            if ui.button("Edit").clicked() {
                                action = Some(PageAction::Navigate(Route::AdminProject {
                                    id: project.id.clone(),
                                }));
                            }
                            if ui
                                .button(RichText::new("Delete").color(theme.error))
                                .clicked()
                            {
                                delete_request = Some((project.id.clone(), project.title.clone()));
                            }
                        });
                        ui.end_row();
                    }
                });
            if let Some((id, title)) = delete_request {
                self.confirm = Some((id, ConfirmDialog::new_delete(&title)));
            }
        }

        if let Some((id, dialog)) = &mut self.confirm {
            match dialog.ui(ui.ctx()) {
                DialogResult::Ok(true) => {
                    let id = id.clone();
                    self.confirm = None;
                    if let Err(e) = self.delete(cx.state, &id) {
                        action = Some(PageAction::Failed(e));
                    }
                }
                DialogResult::Ok(false) | DialogResult::Cancel => self.confirm = None,
                DialogResult::None => {}
            }
        }

        action
    }
}
