//! Image sequences handed to the grid and the lightbox

use crate::error::AppError;
use crate::model::ImageItem;
use crate::portfolio::{filter_by_category, flatten_images};
use crate::repository::PortfolioRepository;

/// Source of an ordered image sequence
pub trait ImageProvider {
    fn list(&self) -> Result<Vec<ImageItem>, AppError>;

    fn get(&self, id: &str) -> Result<Option<ImageItem>, AppError> {
        Ok(self.list()?.into_iter().find(|img| img.id == id))
    }
}

impl ImageProvider for [ImageItem] {
    fn list(&self) -> Result<Vec<ImageItem>, AppError> {
        Ok(self.to_vec())
    }
}

impl ImageProvider for Vec<ImageItem> {
    fn list(&self) -> Result<Vec<ImageItem>, AppError> {
        Ok(self.clone())
    }
}

/// What part of the portfolio a page shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageScope {
    /// Every project, optionally narrowed to one category
    Portfolio { category: Option<String> },
    /// A single project's gallery, by slug
    Project(String),
}

/// Repository-backed provider
pub struct PortfolioImages<'a, R: ?Sized> {
    repo: &'a R,
    scope: ImageScope,
}

impl<'a, R: PortfolioRepository + ?Sized> PortfolioImages<'a, R> {
    pub fn new(repo: &'a R, scope: ImageScope) -> Self {
        Self { repo, scope }
    }
}

impl<R: PortfolioRepository + ?Sized> ImageProvider for PortfolioImages<'_, R> {
    fn list(&self) -> Result<Vec<ImageItem>, AppError> {
        match &self.scope {
            ImageScope::Portfolio { category } => Ok(filter_by_category(
                flatten_images(&self.repo.projects()?),
                category.as_deref(),
            )),
            ImageScope::Project(slug) => Ok(self
                .repo
                .project_by_slug(slug)?
                .map(|p| p.images)
                .unwrap_or_default()),
        }
    }
}
