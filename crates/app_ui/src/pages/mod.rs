//! Pages of the public site and the admin area
//!
//! A [`Page`] is opened for a [`Route`] with a snapshot of the data it
//! shows, renders itself every frame, and reports what the shell should do
//! next as a [`PageAction`].

pub mod about;
pub mod admin;
pub mod contact;
pub mod home;
pub mod portfolio;
pub mod services;

use crate::textures::TextureCache;
use crate::theme::Theme;
use app_core::{AppError, AppState, Lightbox, PageMeta, Route};
use egui::{RichText, Ui};

pub use about::AboutPage;
pub use admin::{DashboardPage, LoginPage, ProjectEditor, SeoToolsPage, SettingsPage};
pub use contact::ContactPage;
pub use home::HomePage;
pub use portfolio::{PortfolioPage, ProjectPage};
pub use services::ServicesPage;

/// Everything a page may touch while rendering
pub struct PageContext<'a> {
    pub state: &'a AppState,
    pub theme: &'a Theme,
    pub textures: &'a TextureCache,
    pub lightbox: &'a mut Lightbox,
}

/// What a page asks the shell to do
#[derive(Debug)]
pub enum PageAction {
    Navigate(Route),
    Logout,
    /// Show a notice in the status bar
    Notify(String),
    /// Show a recoverable error in the status bar
    Failed(AppError),
}

impl From<AppError> for PageAction {
    fn from(e: AppError) -> Self {
        PageAction::Failed(e)
    }
}

/// The page for the current route
pub enum Page {
    Home(HomePage),
    About(AboutPage),
    Services(ServicesPage),
    Contact(ContactPage),
    Portfolio(PortfolioPage),
    Project(ProjectPage),
    Login(LoginPage),
    Dashboard(DashboardPage),
    Editor(ProjectEditor),
    SeoTools(SeoToolsPage),
    Settings(SettingsPage),
}

impl Page {
    /// Load the page for `route`. The route is expected to have passed the
    /// session guard already.
    pub fn open(route: &Route, state: &AppState) -> Result<Self, AppError> {
        let page = match route {
            Route::Home => Page::Home(HomePage::load(state)?),
            Route::About => Page::About(AboutPage::load(state)?),
            Route::Services => Page::Services(ServicesPage::load(state)?),
            Route::Contact => Page::Contact(ContactPage::load(state)?),
            Route::Portfolio { category } => {
                Page::Portfolio(PortfolioPage::load(state, category.clone())?)
            }
            Route::Project { slug } => Page::Project(ProjectPage::load(state, slug)?),
            Route::Login => Page::Login(LoginPage::new()),
            Route::AdminDashboard => Page::Dashboard(DashboardPage::load(state)?),
            Route::AdminSeo => Page::SeoTools(SeoToolsPage::load(state)?),
            Route::AdminProject { id } => Page::Editor(ProjectEditor::load(state, id)?),
            Route::AdminSettings => Page::Settings(SettingsPage::load(state)?),
        };
        Ok(page)
    }

    /// Head metadata; `origin` is the public site origin
    pub fn meta(&self, origin: &str) -> PageMeta {
        match self {
            Page::Home(page) => page.meta(origin),
            Page::About(page) => page.meta(origin),
            Page::Services(page) => page.meta(),
            Page::Contact(_) => {
                PageMeta::new("Contact").description("Get in touch for bookings and inquiries.")
            }
            Page::Portfolio(page) => page.meta(origin),
            Page::Project(page) => page.meta(),
            Page::Login(_) => PageMeta::new("Admin Access"),
            Page::Dashboard(_) => PageMeta::new("Portfolio Projects"),
            Page::Editor(page) => PageMeta::new(page.heading()),
            Page::SeoTools(_) => PageMeta::new("SEO Tools"),
            Page::Settings(_) => PageMeta::new("Settings"),
        }
    }

    /// Protected pages render inside the admin layout
    pub fn is_admin(&self) -> bool {
        matches!(
            self,
            Page::Dashboard(_) | Page::Editor(_) | Page::SeoTools(_) | Page::Settings(_)
        )
    }

    /// The login page renders without any chrome
    pub fn is_bare(&self) -> bool {
        matches!(self, Page::Login(_))
    }

    pub fn ui(&mut self, ui: &mut Ui, cx: &mut PageContext<'_>) -> Option<PageAction> {
        match self {
            Page::Home(page) => page.ui(ui, cx),
            Page::About(page) => page.ui(ui, cx),
            Page::Services(page) => page.ui(ui, cx),
            Page::Contact(page) => page.ui(ui, cx),
            Page::Portfolio(page) => page.ui(ui, cx),
            Page::Project(page) => page.ui(ui, cx),
            Page::Login(page) => page.ui(ui, cx),
            Page::Dashboard(page) => page.ui(ui, cx),
            Page::Editor(page) => page.ui(ui, cx),
            Page::SeoTools(page) => page.ui(ui, cx),
            Page::Settings(page) => page.ui(ui, cx),
        }
    }
}

/// Centered serif-style heading with an optional eyebrow subtitle
pub(crate) fn section_title(ui: &mut Ui, theme: &Theme, title: &str, subtitle: Option<&str>) {
    ui.add_space(48.0);
    ui.vertical_centered(|ui| {
        ui.heading(title);
        if let Some(subtitle) = subtitle {
            ui.label(
                RichText::new(subtitle.to_uppercase())
                    .size(12.0)
                    .color(theme.accent),
            );
        }
    });
    ui.add_space(32.0);
}

/// Small uppercase label above a form field
pub(crate) fn field_label(ui: &mut Ui, theme: &Theme, text: &str) {
    ui.label(
        RichText::new(text.to_uppercase())
            .size(11.0)
            .color(theme.text_secondary),
    );
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use app_core::{open_store, AppConfig, StorageBackend};

    pub(crate) fn memory_state() -> AppState {
        let mut config = AppConfig::default();
        config.storage.backend = StorageBackend::Memory;
        config.site.origin = "https://x.test".into();
        let store = open_store(&config).unwrap();
        AppState::new(config, store).unwrap()
    }

    #[test]
    fn test_open_every_route() {
        let state = memory_state();
        let routes = [
            Route::Home,
            Route::About,
            Route::Services,
            Route::Contact,
            Route::Portfolio { category: None },
            Route::Project {
                slug: "sarah-portrait-session".into(),
            },
            Route::Login,
            Route::AdminDashboard,
            Route::AdminSeo,
            Route::new_project(),
            Route::AdminSettings,
        ];
        for route in routes {
            let page = Page::open(&route, &state).unwrap();
            assert_eq!(page.is_admin(), route.is_protected(), "{}", route);
        }
    }

    #[test]
    fn test_meta_titles() {
        let state = memory_state();
        let page = Page::open(&Route::Services, &state).unwrap();
        assert_eq!(page.meta("o").title, "Services & Investment");

        let page = Page::open(&Route::Project { slug: "missing".into() }, &state).unwrap();
        assert_eq!(page.meta("o").title, "Project Not Found");

        let page = Page::open(&Route::new_project(), &state).unwrap();
        assert_eq!(page.meta("o").title, "New Project");
    }
}
