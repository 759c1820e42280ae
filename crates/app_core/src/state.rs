//! Application state management

use crate::config::StorageBackend;
use crate::route::Route;
use crate::seo::{self, HeadState, HeadTags, PageMeta};
use crate::session::{Authenticator, Session, SessionStore};
use crate::{AppConfig, AppError, ImageLoader, KvRepository, PortfolioRepository};
use app_db::{KeyValueStore, MemoryStore};
use parking_lot::RwLock;
use std::sync::Arc;

pub type SharedStore = Arc<dyn KeyValueStore>;

/// Open the store selected in the configuration
pub fn open_store(config: &AppConfig) -> Result<SharedStore, AppError> {
    match config.storage.backend {
        StorageBackend::Sqlite => {
            let store = app_db::open(config.storage.path.as_deref())
                .map_err(|e| AppError::Init(e.to_string()))?;
            Ok(Arc::new(store))
        }
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage; changes are lost on exit");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// Main application state
pub struct AppState {
    /// Application configuration
    pub config: RwLock<AppConfig>,

    /// Portfolio content
    pub repo: KvRepository<SharedStore>,

    sessions: SessionStore<SharedStore>,

    /// Admin session
    pub session: RwLock<Session>,

    /// Document head of the current page
    pub head: RwLock<HeadState>,

    /// Background image decoding
    pub loader: Arc<ImageLoader>,
}

impl AppState {
    /// Create the state over `store`, seeding demo content if it is empty
    pub fn new(config: AppConfig, store: SharedStore) -> Result<Self, AppError> {
        let repo = KvRepository::new(Arc::clone(&store));
        repo.seed()?;

        let sessions = SessionStore::new(store);
        let session = sessions.load()?;

        let loader = Arc::new(ImageLoader::new(
            config.site.media_root.clone(),
            config.viewer.max_dimension,
        ));

        Ok(Self {
            config: RwLock::new(config),
            repo,
            sessions,
            session: RwLock::new(session),
            head: RwLock::new(HeadState::new()),
            loader,
        })
    }

    /// Save the current configuration
    pub fn save_config(&self) -> anyhow::Result<()> {
        self.config.read().save()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    /// Check credentials and persist the session on success
    pub fn login(
        &self,
        auth: &dyn Authenticator,
        email: &str,
        password: &str,
    ) -> Result<bool, AppError> {
        if !auth.verify(email, password) {
            return Ok(false);
        }
        let mut session = self.session.write();
        session.login();
        self.sessions.save(&session)?;
        tracing::info!("Admin session started");
        Ok(true)
    }

    pub fn logout(&self) -> Result<(), AppError> {
        let mut session = self.session.write();
        session.logout();
        self.sessions.save(&session)?;
        tracing::info!("Admin session ended");
        Ok(())
    }

    /// Resolve `meta` for `route` and write it into the head.
    /// Returns the new document title.
    pub fn publish_head(&self, meta: &PageMeta, route: &Route) -> Result<String, AppError> {
        let settings = self.repo.settings()?;
        let href = {
            let config = self.config.read();
            format!("{}{}", config.site.origin.trim_end_matches('/'), route.path())
        };
        let tags = HeadTags::resolve(meta, &settings, &href);

        let mut head = self.head.write();
        seo::apply(&mut *head, &tags);
        Ok(tags.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MockAuthenticator;
    use crate::seo::MetaAttribute;

    fn memory_state() -> AppState {
        let mut config = AppConfig::default();
        config.storage.backend = StorageBackend::Memory;
        config.site.origin = "https://x.test".into();
        let store = open_store(&config).unwrap();
        AppState::new(config, store).unwrap()
    }

    #[test]
    fn test_new_seeds_content() {
        let state = memory_state();
        assert_eq!(state.repo.projects().unwrap().len(), 3);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_login_logout() {
        let state = memory_state();
        assert!(!state.login(&MockAuthenticator, "admin@demo.com", "nope").unwrap());
        assert!(!state.is_authenticated());

        assert!(state.login(&MockAuthenticator, "admin@demo.com", "password").unwrap());
        assert!(state.is_authenticated());
        assert!(state.repo.store().contains("lumina_auth").unwrap());

        state.logout().unwrap();
        assert!(!state.is_authenticated());
        assert!(!state.repo.store().contains("lumina_auth").unwrap());
    }

    #[test]
    fn test_publish_head() {
        let state = memory_state();
        let title = state
            .publish_head(&PageMeta::new("About"), &Route::About)
            .unwrap();
        assert_eq!(title, "About | Elena Vore");

        assert_eq!(
            state.head.read().meta(MetaAttribute::Property, "og:url"),
            Some("https://x.test/about")
        );

        state.config.write().site.origin = "https://x.test/".into();
        state.publish_head(&PageMeta::new("Contact"), &Route::Contact).unwrap();
        assert_eq!(
            state.head.read().meta(MetaAttribute::Property, "og:url"),
            Some("https://x.test/contact")
        );
    }

    #[test]
    fn test_sqlite_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.storage.path = Some(dir.path().join("lumina.db"));

        let store = open_store(&config).unwrap();
        let state = AppState::new(config.clone(), store).unwrap();
        state.login(&MockAuthenticator, "admin@demo.com", "password").unwrap();
        drop(state);

        // Reopening keeps the session
        let reopened = AppState::new(config.clone(), open_store(&config).unwrap()).unwrap();
        assert!(reopened.is_authenticated());
    }
}
