//! Portfolio persistence
//!
//! Pages talk to [`PortfolioRepository`]; [`KvRepository`] implements it
//! over any [`KeyValueStore`], one JSON document per entity collection.

use crate::error::AppError;
use crate::model::{Category, Project, Service, SiteSettings};
use crate::portfolio::slugify;
use crate::seed;
use app_db::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Storage keys
pub mod keys {
    pub const PROJECTS: &str = "lumina_projects";
    pub const CATEGORIES: &str = "lumina_categories";
    pub const SETTINGS: &str = "lumina_settings";
    pub const SERVICES: &str = "lumina_services";
    pub const AUTH: &str = "lumina_auth";
}

pub trait PortfolioRepository: Send + Sync {
    fn projects(&self) -> Result<Vec<Project>, AppError>;

    fn project_by_slug(&self, slug: &str) -> Result<Option<Project>, AppError> {
        Ok(self.projects()?.into_iter().find(|p| p.slug == slug))
    }

    fn project_by_id(&self, id: &str) -> Result<Option<Project>, AppError> {
        Ok(self.projects()?.into_iter().find(|p| p.id == id))
    }

    /// Insert or replace by id; new projects go to the end
    fn save_project(&self, project: Project) -> Result<(), AppError>;

    fn delete_project(&self, id: &str) -> Result<(), AppError>;

    fn categories(&self) -> Result<Vec<Category>, AppError>;

    fn settings(&self) -> Result<SiteSettings, AppError>;

    fn save_settings(&self, settings: &SiteSettings) -> Result<(), AppError>;

    fn services(&self) -> Result<Vec<Service>, AppError>;
}

/// Repository over a flat key-value store
pub struct KvRepository<S> {
    store: S,
}

impl<S: KeyValueStore> KvRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write the demo content for every collection that is still absent.
    /// Existing documents are never touched.
    pub fn seed(&self) -> Result<(), AppError> {
        self.seed_key(keys::PROJECTS, &seed::projects())?;
        self.seed_key(keys::CATEGORIES, &seed::categories())?;
        self.seed_key(keys::SETTINGS, &seed::settings())?;
        self.seed_key(keys::SERVICES, &seed::services())?;
        Ok(())
    }

    fn seed_key<T: Serialize>(&self, key: &str, value: &T) -> Result<(), AppError> {
        if !self.store.contains(key)? {
            tracing::info!(key, "Seeding initial content");
            self.save(key, value)?;
        }
        Ok(())
    }

    /// Missing documents read as `T::default()`
    fn load<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T, AppError> {
        match self.store.read(key)? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(T::default()),
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let value = serde_json::to_value(value)?;
        self.store.write(key, &value)?;
        Ok(())
    }
}

impl<S: KeyValueStore> PortfolioRepository for KvRepository<S> {
    fn projects(&self) -> Result<Vec<Project>, AppError> {
        self.load(keys::PROJECTS)
    }

    fn save_project(&self, mut project: Project) -> Result<(), AppError> {
        if project.slug.is_empty() {
            project.slug = slugify(&project.title);
        }

        let mut projects = self.projects()?;
        match projects.iter_mut().find(|p| p.id == project.id) {
            Some(existing) => *existing = project,
            None => projects.push(project),
        }
        self.save(keys::PROJECTS, &projects)
    }

    fn delete_project(&self, id: &str) -> Result<(), AppError> {
        let mut projects = self.projects()?;
        projects.retain(|p| p.id != id);
        self.save(keys::PROJECTS, &projects)
    }

    fn categories(&self) -> Result<Vec<Category>, AppError> {
        self.load(keys::CATEGORIES)
    }

    fn settings(&self) -> Result<SiteSettings, AppError> {
        self.load(keys::SETTINGS)
    }

    fn save_settings(&self, settings: &SiteSettings) -> Result<(), AppError> {
        self.save(keys::SETTINGS, settings)
    }

    fn services(&self) -> Result<Vec<Service>, AppError> {
        self.load(keys::SERVICES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_db::MemoryStore;
    use chrono::NaiveDate;
    use serde_json::json;

    fn seeded() -> KvRepository<MemoryStore> {
        let repo = KvRepository::new(MemoryStore::new());
        repo.seed().unwrap();
        repo
    }

    #[test]
    fn test_empty_store_reads_defaults() {
        let repo = KvRepository::new(MemoryStore::new());
        assert!(repo.projects().unwrap().is_empty());
        assert!(repo.categories().unwrap().is_empty());
        assert_eq!(repo.settings().unwrap(), SiteSettings::default());
    }

    #[test]
    fn test_seed_populates_all_collections() {
        let repo = seeded();
        assert_eq!(repo.projects().unwrap().len(), 3);
        assert_eq!(repo.categories().unwrap().len(), 4);
        assert_eq!(repo.services().unwrap().len(), 3);
        assert_eq!(repo.settings().unwrap().photographer_name, "Elena Vore");
    }

    #[test]
    fn test_seed_keeps_existing_data() {
        let store = MemoryStore::new();
        store.write(keys::PROJECTS, &json!([])).unwrap();

        let repo = KvRepository::new(store);
        repo.seed().unwrap();
        assert!(repo.projects().unwrap().is_empty());
        assert_eq!(repo.categories().unwrap().len(), 4);
    }

    #[test]
    fn test_lookup() {
        let repo = seeded();
        let project = repo.project_by_slug("vogue-urban-editorial").unwrap().unwrap();
        assert_eq!(project.title, "Urban Shadows");
        assert_eq!(repo.project_by_id("3").unwrap().unwrap().slug, "sarah-portrait-session");
        assert!(repo.project_by_slug("missing").unwrap().is_none());
    }

    #[test]
    fn test_save_project_upserts() {
        let repo = seeded();

        let mut project = repo.project_by_id("2").unwrap().unwrap();
        project.title = "Urban Light".into();
        repo.save_project(project).unwrap();

        let projects = repo.projects().unwrap();
        assert_eq!(projects.len(), 3);
        assert_eq!(projects[1].title, "Urban Light");

        let mut draft = Project::new_draft(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        draft.title = "Summer Garden Party".into();
        repo.save_project(draft).unwrap();

        let projects = repo.projects().unwrap();
        assert_eq!(projects.len(), 4);
        assert_eq!(projects[3].slug, "summer-garden-party");
    }

    #[test]
    fn test_delete_project() {
        let repo = seeded();
        repo.delete_project("1").unwrap();
        let ids: Vec<_> = repo.projects().unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn test_settings_round_trip() {
        let repo = seeded();
        let mut settings = repo.settings().unwrap();
        settings.phone = "+44 20 0000".into();
        settings.behance = None;
        repo.save_settings(&settings).unwrap();
        assert_eq!(repo.settings().unwrap(), settings);
    }

    #[test]
    fn test_corrupt_collection_is_an_error() {
        let store = MemoryStore::new();
        store.write(keys::PROJECTS, &json!({"not": "a list"})).unwrap();
        let repo = KvRepository::new(store);
        assert!(matches!(repo.projects(), Err(AppError::Serialization(_))));
    }
}
