//! Page head metadata and schema.org structured data

use crate::model::{Project, Service, SiteSettings};
use serde_json::{json, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageKind {
    #[default]
    Website,
    Article,
}

impl PageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
        }
    }
}

/// What a page wants in the document head
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageMeta {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub kind: PageKind,
    pub schema: Option<Value>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn article(mut self) -> Self {
        self.kind = PageKind::Article;
        self
    }

    pub fn schema(mut self, schema: Value) -> Self {
        self.schema = Some(schema);
        self
    }
}

/// Attribute a meta tag is keyed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MetaAttribute {
    Name,
    Property,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub attribute: MetaAttribute,
    pub key: &'static str,
    pub content: String,
}

/// Fully resolved head contents for one page
#[derive(Debug, Clone, PartialEq)]
pub struct HeadTags {
    pub title: String,
    pub tags: Vec<MetaTag>,
    pub schema: Option<Value>,
}

impl HeadTags {
    /// Fill in site-wide fallbacks. `href` is the page's full URL.
    pub fn resolve(meta: &PageMeta, settings: &SiteSettings, href: &str) -> Self {
        let title = format!("{} | {}", meta.title, settings.photographer_name);
        let description = meta
            .description
            .clone()
            .unwrap_or_else(|| settings.short_bio.clone());
        let image = meta.image.clone().unwrap_or_else(|| {
            settings
                .instagram
                .as_ref()
                .map(|handle| instagram_url(handle))
                .unwrap_or_default()
        });

        let tag = |attribute: MetaAttribute, key: &'static str, content: String| MetaTag {
            attribute,
            key,
            content,
        };
        let tags = vec![
            tag(MetaAttribute::Name, "description", description.clone()),
            tag(MetaAttribute::Property, "og:title", title.clone()),
            tag(MetaAttribute::Property, "og:description", description),
            tag(MetaAttribute::Property, "og:image", image),
            tag(MetaAttribute::Property, "og:type", meta.kind.as_str().to_string()),
            tag(MetaAttribute::Property, "og:url", href.to_string()),
            tag(MetaAttribute::Name, "twitter:card", "summary_large_image".to_string()),
        ];

        Self {
            title,
            tags,
            schema: meta.schema.clone(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.content.as_str())
    }
}

/// Document head collaborator
pub trait DocumentHead {
    fn set_title(&mut self, title: &str);
    fn set_meta(&mut self, attribute: MetaAttribute, key: &str, content: &str);
    fn attach_schema(&mut self, schema: &Value);
    fn detach_schema(&mut self);
}

/// Write `tags` into `head`. Empty tags are skipped and keep their previous
/// content; the structured-data block always belongs to the latest page.
pub fn apply(head: &mut impl DocumentHead, tags: &HeadTags) {
    head.set_title(&tags.title);
    for tag in tags.tags.iter().filter(|t| !t.content.is_empty()) {
        head.set_meta(tag.attribute, tag.key, &tag.content);
    }
    head.detach_schema();
    if let Some(schema) = &tags.schema {
        head.attach_schema(schema);
    }
}

/// In-process head; the shell mirrors its title into the window title
#[derive(Debug, Clone, Default)]
pub struct HeadState {
    title: String,
    meta: BTreeMap<(MetaAttribute, String), String>,
    schema: Option<Value>,
}

impl HeadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn meta(&self, attribute: MetaAttribute, key: &str) -> Option<&str> {
        self.meta
            .get(&(attribute, key.to_string()))
            .map(String::as_str)
    }

    pub fn schema(&self) -> Option<&Value> {
        self.schema.as_ref()
    }

    /// `application/ld+json` payload of the attached schema
    pub fn schema_json(&self) -> Option<String> {
        self.schema
            .as_ref()
            .and_then(|s| serde_json::to_string_pretty(s).ok())
    }
}

impl DocumentHead for HeadState {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_meta(&mut self, attribute: MetaAttribute, key: &str, content: &str) {
        self.meta
            .insert((attribute, key.to_string()), content.to_string());
    }

    fn attach_schema(&mut self, schema: &Value) {
        self.schema = Some(schema.clone());
    }

    fn detach_schema(&mut self) {
        self.schema = None;
    }
}

pub fn instagram_url(handle: &str) -> String {
    format!("https://instagram.com/{}", handle)
}

pub fn behance_url(handle: &str) -> String {
    format!("https://behance.net/{}", handle)
}

/// Digits of a display price such as `"From $3,500"`, or `"0"`
pub fn price_digits(display: &str) -> String {
    let digits: String = display.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        "0".to_string()
    } else {
        digits
    }
}

pub fn home_schema(settings: &SiteSettings, projects: &[Project], origin: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "ProfessionalService",
        "name": settings.photographer_name,
        "image": projects.first().map(|p| p.cover_image.as_str()),
        "description": settings.short_bio,
        "telephone": settings.phone,
        "email": settings.email,
        "address": {
            "@type": "PostalAddress",
            "addressCountry": "US"
        },
        "priceRange": "$$$",
        "url": origin
    })
}

pub fn about_schema(settings: &SiteSettings, href: &str) -> Value {
    let same_as: Vec<String> = settings
        .instagram
        .iter()
        .map(|h| instagram_url(h))
        .chain(settings.behance.iter().map(|h| behance_url(h)))
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": settings.photographer_name,
        "url": href,
        "sameAs": same_as,
        "jobTitle": "Photographer",
        "description": settings.short_bio
    })
}

pub fn services_schema(services: &[Service]) -> Value {
    let offers: Vec<Value> = services
        .iter()
        .enumerate()
        .map(|(i, s)| {
            json!({
                "@type": "Offer",
                "position": i + 1,
                "name": s.title,
                "description": s.description,
                "priceSpecification": {
                    "@type": "PriceSpecification",
                    "priceCurrency": "USD",
                    "price": price_digits(&s.price_display)
                }
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "ItemList",
        "itemListElement": offers
    })
}

pub fn portfolio_schema(projects: &[Project], origin: &str) -> Value {
    let works: Vec<Value> = projects
        .iter()
        .enumerate()
        .map(|(i, p)| {
            json!({
                "@type": "CreativeWork",
                "position": i + 1,
                "url": format!("{}/portfolio/{}", origin, p.slug),
                "name": p.title
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "CollectionPage",
        "name": "Portfolio",
        "description": "Selected photography works.",
        "mainEntity": {
            "@type": "ItemList",
            "itemListElement": works
        }
    })
}

pub fn project_schema(project: &Project, settings: &SiteSettings) -> Value {
    let images: Vec<&str> = project.images.iter().map(|i| i.url.as_str()).collect();

    json!({
        "@context": "https://schema.org",
        "@type": "ImageGallery",
        "name": project.title,
        "description": project.description,
        "datePublished": project.date,
        "author": {
            "@type": "Person",
            "name": settings.photographer_name
        },
        "locationCreated": project.location,
        "image": images
    })
}
