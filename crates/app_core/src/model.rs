//! Portfolio data model
//!
//! Field names serialize in camelCase so stored documents keep the
//! `lumina_*` JSON layout.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Declared aspect class of an image, independent of its pixel size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    #[default]
    Square,
    Portrait,
    Landscape,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 3] = [Self::Square, Self::Portrait, Self::Landscape];

    /// Label used by the editor's ratio selector
    pub fn label(self) -> &'static str {
        match self {
            Self::Square => "Square 1:1",
            Self::Portrait => "Portrait 2:3",
            Self::Landscape => "Landscape 3:2",
        }
    }
}

/// A single photograph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageItem {
    pub id: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<AspectRatio>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ImageItem {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            title: None,
            aspect_ratio: None,
            project_slug: None,
            project_title: None,
            category: None,
        }
    }

    pub fn with_aspect(mut self, aspect: AspectRatio) -> Self {
        self.aspect_ratio = Some(aspect);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Fresh image with a random id, as added from the editor
    pub fn upload(url: impl Into<String>) -> Self {
        Self::new(uuid::Uuid::new_v4().to_string(), url).with_aspect(AspectRatio::Square)
    }

    /// Alt text for the grid; falls back to the position in the sequence
    pub fn alt_text(&self, index: usize) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("Portfolio item {}", index))
    }
}

/// A published portfolio project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub slug: String,
    pub title: String,
    /// Category *name* (not slug)
    pub category: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub location: String,
    pub description: String,
    pub cover_image: String,
    #[serde(default)]
    pub images: Vec<ImageItem>,
}

impl Project {
    pub const PLACEHOLDER_COVER: &'static str = "https://picsum.photos/800/600";

    /// Empty project as opened by "New Project"
    pub fn new_draft(today: NaiveDate) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            slug: String::new(),
            title: String::new(),
            category: "Weddings".to_string(),
            date: today.format("%Y-%m-%d").to_string(),
            location: String::new(),
            description: String::new(),
            cover_image: Self::PLACEHOLDER_COVER.to_string(),
            images: Vec::new(),
        }
    }

    pub fn set_image_aspect(&mut self, image_id: &str, aspect: AspectRatio) {
        if let Some(img) = self.images.iter_mut().find(|i| i.id == image_id) {
            img.aspect_ratio = Some(aspect);
        }
    }

    pub fn remove_image(&mut self, image_id: &str) {
        self.images.retain(|i| i.id != image_id);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price_display: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub client: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Photographer details shown across the site
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    pub photographer_name: String,
    pub short_bio: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behance: Option<String>,
}
