//! LuminaLens Core Domain Logic
//!
//! This crate contains:
//! - Portfolio data model and repository
//! - Photo grid layout and lightbox viewer state
//! - Routing, session and head metadata
//! - Configuration
//! - Error types
//! - Image loading

pub mod command;
pub mod config;
pub mod error;
pub mod grid;
pub mod image_loader;
pub mod lightbox;
pub mod model;
pub mod portfolio;
pub mod provider;
pub mod reorder;
pub mod repository;
pub mod route;
pub mod seed;
pub mod seo;
pub mod session;
pub mod sitemap;
pub mod state;

pub use command::{Command, CommandId};
pub use config::{AppConfig, GeneralConfig, SiteConfig, StorageBackend, StorageConfig, ViewerConfig};
pub use error::AppError;
pub use grid::{GridCell, GridLayout, GridMetrics, GridPlacement};
pub use image_loader::{ImageLoader, LoadOutcome, LoadedImage};
pub use lightbox::{Lightbox, LoadState, Point, Preloader, ViewTransform, ViewerSession};
pub use model::{AspectRatio, Category, ImageItem, Project, Service, SiteSettings, Testimonial};
pub use provider::{ImageProvider, ImageScope, PortfolioImages};
pub use reorder::ReorderList;
pub use repository::{KvRepository, PortfolioRepository};
pub use route::{Route, Router};
pub use seo::{HeadState, HeadTags, PageMeta};
pub use session::{Authenticator, MockAuthenticator, Session};
pub use state::{open_store, AppState, SharedStore};
