//! Queries over the project list

use crate::model::{ImageItem, Project};

/// Category filter value that keeps every image
pub const ALL_CATEGORIES: &str = "all";

/// Every project's images in project order, each tagged with its parent
/// project's slug, title and category
pub fn flatten_images(projects: &[Project]) -> Vec<ImageItem> {
    projects
        .iter()
        .flat_map(|p| {
            p.images.iter().map(move |img| ImageItem {
                project_slug: Some(p.slug.clone()),
                project_title: Some(p.title.clone()),
                category: Some(p.category.clone()),
                ..img.clone()
            })
        })
        .collect()
}

/// Keep images whose category name matches `category` ignoring case.
/// `None` or `"all"` keeps everything.
pub fn filter_by_category(images: Vec<ImageItem>, category: Option<&str>) -> Vec<ImageItem> {
    match category {
        None => images,
        Some(c) if c.eq_ignore_ascii_case(ALL_CATEGORIES) => images,
        Some(c) => images
            .into_iter()
            .filter(|img| {
                img.category
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase() == c.to_lowercase())
            })
            .collect(),
    }
}

/// Lower-case and replace every whitespace run with a single `-`.
/// Leading and trailing runs are kept so the editor can slugify while typing.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.extend(c.to_lowercase());
            in_space = false;
        }
    }
    slug
}

/// The first `count` projects in stored order
pub fn recent_projects(projects: &[Project], count: usize) -> &[Project] {
    &projects[..count.min(projects.len())]
}
