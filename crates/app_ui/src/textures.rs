//! GPU textures for decoded photos, keyed by image URL

use app_core::{ImageLoader, LoadOutcome};
use egui::{ColorImage, Context, Rect, TextureHandle, TextureOptions, Vec2};
use std::collections::{HashMap, HashSet};

/// Textures uploaded from [`ImageLoader`] results.
///
/// URLs that failed to load are remembered so they are not requested
/// again every frame.
#[derive(Default)]
pub struct TextureCache {
    textures: HashMap<String, TextureHandle>,
    failed: HashSet<String>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, url: &str) -> Option<&TextureHandle> {
        self.textures.get(url)
    }

    pub fn has_failed(&self, url: &str) -> bool {
        self.failed.contains(url)
    }

    /// Texture for `url`, queueing a decode when it is not cached yet
    pub fn get_or_request(&self, loader: &ImageLoader, url: &str) -> Option<&TextureHandle> {
        if let Some(texture) = self.textures.get(url) {
            return Some(texture);
        }
        if !self.failed.contains(url) && !loader.is_pending(url) {
            loader.request(url);
        }
        None
    }

    /// Upload one finished load. Returns true when a texture was added.
    pub fn ingest(&mut self, ctx: &Context, outcome: LoadOutcome) -> bool {
        match outcome.result {
            Ok(image) => {
                let color = ColorImage::from_rgba_unmultiplied(
                    [image.width as usize, image.height as usize],
                    &image.data,
                );
                let handle = ctx.load_texture(
                    format!("photo-{:016x}", image.hash),
                    color,
                    TextureOptions::LINEAR,
                );
                self.failed.remove(&outcome.url);
                self.textures.insert(outcome.url, handle);
                true
            }
            Err(e) => {
                tracing::debug!("No texture for {}: {}", outcome.url, e);
                self.failed.insert(outcome.url);
                false
            }
        }
    }

    /// Forget failures so they are retried, e.g. after the media root changed
    pub fn retry_failed(&mut self) {
        self.failed.clear();
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

/// UV rectangle that crops `image` to fill a `frame` of another aspect
/// (CSS `object-fit: cover`)
pub fn cover_uv(image: Vec2, frame: Vec2) -> Rect {
    let full = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    if image.x <= 0.0 || image.y <= 0.0 || frame.x <= 0.0 || frame.y <= 0.0 {
        return full;
    }
    let image_aspect = image.x / image.y;
    let frame_aspect = frame.x / frame.y;
    if image_aspect > frame_aspect {
        // Wider than the frame: crop the sides
        let visible = frame_aspect / image_aspect;
        let margin = (1.0 - visible) / 2.0;
        Rect::from_min_max(egui::pos2(margin, 0.0), egui::pos2(1.0 - margin, 1.0))
    } else {
        let visible = image_aspect / frame_aspect;
        let margin = (1.0 - visible) / 2.0;
        Rect::from_min_max(egui::pos2(0.0, margin), egui::pos2(1.0, 1.0 - margin))
    }
}

/// Largest size of `image`'s aspect that fits in `bounds` without
/// upscaling (CSS `object-fit: contain` with max width/height)
pub fn contain_size(image: Vec2, bounds: Vec2) -> Vec2 {
    if image.x <= 0.0 || image.y <= 0.0 {
        return Vec2::ZERO;
    }
    let scale = (bounds.x / image.x).min(bounds.y / image.y).min(1.0);
    image * scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_core::{AppError, LoadedImage};

    fn outcome(url: &str, ok: bool) -> LoadOutcome {
        let result = if ok {
            Ok(LoadedImage {
                width: 2,
                height: 1,
                data: vec![255; 8],
                hash: 7,
            })
        } else {
            Err(AppError::UnsupportedSource(url.to_string()))
        };
        LoadOutcome {
            url: url.to_string(),
            result,
        }
    }

    #[test]
    fn test_ingest_uploads_texture() {
        let ctx = Context::default();
        let mut cache = TextureCache::new();

        assert!(cache.ingest(&ctx, outcome("a.png", true)));
        let texture = cache.get("a.png").unwrap();
        assert_eq!(texture.size(), [2, 1]);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_failed_urls_are_not_requested_again() {
        let ctx = Context::default();
        let loader = ImageLoader::new(".", 64);
        let mut cache = TextureCache::new();

        assert!(!cache.ingest(&ctx, outcome("https://x.test/a.jpg", false)));
        assert!(cache.has_failed("https://x.test/a.jpg"));
        assert!(cache.get_or_request(&loader, "https://x.test/a.jpg").is_none());
        assert!(!loader.is_pending("https://x.test/a.jpg"));

        cache.retry_failed();
        assert!(!cache.has_failed("https://x.test/a.jpg"));
    }

    #[test]
    fn test_cover_uv_crops_long_side() {
        // 2:1 image in a square frame keeps the middle half
        let uv = cover_uv(Vec2::new(200.0, 100.0), Vec2::new(50.0, 50.0));
        assert_eq!(uv.min, egui::pos2(0.25, 0.0));
        assert_eq!(uv.max, egui::pos2(0.75, 1.0));

        let uv = cover_uv(Vec2::new(100.0, 200.0), Vec2::new(50.0, 50.0));
        assert_eq!(uv.min, egui::pos2(0.0, 0.25));
    }

    #[test]
    fn test_contain_size_never_upscales() {
        assert_eq!(
            contain_size(Vec2::new(400.0, 200.0), Vec2::new(100.0, 100.0)),
            Vec2::new(100.0, 50.0)
        );
        assert_eq!(
            contain_size(Vec2::new(40.0, 20.0), Vec2::new(100.0, 100.0)),
            Vec2::new(40.0, 20.0)
        );
    }
}
