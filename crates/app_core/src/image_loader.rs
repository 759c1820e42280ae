//! Image loading and decoding service
//!
//! Reads and decodes run on the rayon pool; finished images come back over
//! a crossbeam channel that the UI drains once per frame with
//! [`ImageLoader::poll`]. `http(s)` URLs are downloaded with a blocking
//! reqwest client on the same pool.

use crate::lightbox::Preloader;
use crate::model::ImageItem;
use crate::AppError;
use crossbeam_channel::{unbounded, Receiver, Sender};
use image::{GenericImageView, ImageReader};
use parking_lot::Mutex;
use reqwest::blocking::Client;
use std::collections::HashSet;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use xxhash_rust::xxh3::xxh3_64;

const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Decoded RGBA8 image
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    /// xxh3 of the encoded bytes
    pub hash: u64,
}

/// Result of one request, keyed by the image URL
#[derive(Debug)]
pub struct LoadOutcome {
    pub url: String,
    pub result: Result<LoadedImage, AppError>,
}

/// Where an image URL points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Local(PathBuf),
    Remote(String),
    /// Any other scheme (`ftp://`, `data:`, ...)
    Unsupported(String),
}

/// `file://` is stripped; relative paths are joined onto `media_root`
pub fn resolve_source(url: &str, media_root: &Path) -> ImageSource {
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return ImageSource::Remote(url.to_string());
    }

    let raw = match url.strip_prefix("file://") {
        Some(raw) => raw,
        None if lower.contains("://") || lower.starts_with("data:") => {
            return ImageSource::Unsupported(url.to_string());
        }
        None => url,
    };
    let path = Path::new(raw);
    if path.is_absolute() {
        ImageSource::Local(path.to_path_buf())
    } else {
        ImageSource::Local(media_root.join(path))
    }
}

/// Client used for remote images. Falls back to reqwest's defaults when
/// the configured builder cannot be created.
pub fn http_client() -> Client {
    Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(concat!("LuminaLens/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("HTTP client setup failed, using defaults: {}", e);
            Client::new()
        })
}

/// Image loader service
pub struct ImageLoader {
    media_root: PathBuf,
    max_dimension: u32,
    client: Client,
    /// URLs currently decoding
    pending: Arc<Mutex<HashSet<String>>>,
    done_tx: Sender<LoadOutcome>,
    done_rx: Receiver<LoadOutcome>,
}

impl ImageLoader {
    pub fn new(media_root: impl Into<PathBuf>, max_dimension: u32) -> Self {
        Self::with_client(media_root, max_dimension, http_client())
    }

    pub fn with_client(
        media_root: impl Into<PathBuf>,
        max_dimension: u32,
        client: Client,
    ) -> Self {
        let (done_tx, done_rx) = unbounded();
        Self {
            media_root: media_root.into(),
            max_dimension: max_dimension.max(1),
            client,
            pending: Arc::new(Mutex::new(HashSet::new())),
            done_tx,
            done_rx,
        }
    }

    /// Queue a decode of `url`. Returns false when the same URL is already
    /// in flight.
    pub fn request(&self, url: &str) -> bool {
        if !self.pending.lock().insert(url.to_string()) {
            return false;
        }

        let source = resolve_source(url, &self.media_root);
        let url = url.to_string();
        let max_dimension = self.max_dimension;
        let client = self.client.clone();
        let pending = Arc::clone(&self.pending);
        let done_tx = self.done_tx.clone();

        rayon::spawn(move || {
            let result = match source {
                ImageSource::Local(path) => load_image_sync(&path, max_dimension),
                ImageSource::Remote(remote) => load_remote_sync(&client, &remote, max_dimension),
                ImageSource::Unsupported(other) => Err(AppError::UnsupportedSource(other)),
            };
            if let Err(e) = &result {
                tracing::debug!("Image load failed for {}: {}", url, e);
            }
            let key = url.clone();
            // The outcome is queued before the URL stops counting as pending,
            // so a request in between cannot start a second decode.
            // Receiver lives as long as the loader; a send error means shutdown
            let _ = done_tx.send(LoadOutcome { url, result });
            pending.lock().remove(&key);
        });
        true
    }

    pub fn is_pending(&self, url: &str) -> bool {
        self.pending.lock().contains(url)
    }

    /// Drain finished loads without blocking
    pub fn poll(&self) -> Vec<LoadOutcome> {
        self.done_rx.try_iter().collect()
    }
}

impl Preloader for ImageLoader {
    fn preload(&self, item: &ImageItem) {
        self.request(&item.url);
    }
}

/// Read and decode one file, downscaling past `max_dimension`
pub fn load_image_sync(path: &Path, max_dimension: u32) -> Result<LoadedImage, AppError> {
    tracing::debug!("Loading image: {:?}", path);
    let data = std::fs::read(path)?;
    decode_image(&data, max_dimension)
}

/// Download and decode one remote image
pub fn load_remote_sync(
    client: &Client,
    url: &str,
    max_dimension: u32,
) -> Result<LoadedImage, AppError> {
    tracing::debug!("Fetching image: {}", url);
    let data = client
        .get(url)
        .send()
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.bytes())
        .map_err(|e| AppError::Network(format!("{}: {}", url, e)))?;
    decode_image(&data, max_dimension)
}

/// Hash and decode encoded bytes into RGBA8
pub fn decode_image(data: &[u8], max_dimension: u32) -> Result<LoadedImage, AppError> {
    let hash = xxh3_64(data);

    let img = ImageReader::new(Cursor::new(data))
        .with_guessed_format()?
        .decode()?;

    let (w, h) = img.dimensions();
    let img = if w > max_dimension || h > max_dimension {
        img.thumbnail(max_dimension, max_dimension)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(LoadedImage {
        width,
        height,
        data: rgba.into_raw(),
        hash,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use tempfile::tempdir;

    fn write_png(path: &Path, w: u32, h: u32) {
        image::RgbaImage::from_pixel(w, h, image::Rgba([200, 10, 10, 255]))
            .save(path)
            .unwrap();
    }

    fn wait(loader: &ImageLoader) -> LoadOutcome {
        loader.done_rx.recv_timeout(Duration::from_secs(10)).unwrap()
    }

    fn png_bytes(w: u32, h: u32) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        image::RgbaImage::from_pixel(w, h, image::Rgba([10, 200, 10, 255]))
            .write_to(&mut out, image::ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    /// Answer one HTTP request on a local port and return the base URL
    fn serve_once(status: &'static str, body: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let head = format!(
                "HTTP/1.1 {}\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status,
                body.len()
            );
            stream.write_all(head.as_bytes()).unwrap();
            stream.write_all(&body).unwrap();
        });
        format!("http://{}", addr)
    }

    fn local_client() -> Client {
        Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap()
    }

    #[test]
    fn test_resolve_source() {
        let root = Path::new("/srv/media");
        assert_eq!(
            resolve_source("https://picsum.photos/id/10/1200/1800", root),
            ImageSource::Remote("https://picsum.photos/id/10/1200/1800".into())
        );
        assert_eq!(
            resolve_source("weddings/a.jpg", root),
            ImageSource::Local(root.join("weddings/a.jpg"))
        );
        assert_eq!(
            resolve_source("file:///tmp/b.png", root),
            ImageSource::Local(PathBuf::from("/tmp/b.png"))
        );
        assert_eq!(
            resolve_source("ftp://host/c.jpg", root),
            ImageSource::Unsupported("ftp://host/c.jpg".into())
        );
    }

    #[test]
    fn test_load_and_downscale() {
        let dir = tempdir().unwrap();
        write_png(&dir.path().join("big.png"), 64, 32);

        let loader = ImageLoader::new(dir.path(), 16);
        assert!(loader.request("big.png"));

        let outcome = wait(&loader);
        assert_eq!(outcome.url, "big.png");
        let img = outcome.result.unwrap();
        assert_eq!((img.width, img.height), (16, 8));
        assert_eq!(img.data.len(), 16 * 8 * 4);
        assert!(!loader.is_pending("big.png"));
    }

    #[test]
    fn test_missing_file_reports_io() {
        let dir = tempdir().unwrap();
        let loader = ImageLoader::new(dir.path(), 512);
        loader.request("nope.jpg");
        assert!(matches!(wait(&loader).result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_remote_image_is_fetched() {
        let base = serve_once("200 OK", png_bytes(40, 20));
        let loader = ImageLoader::with_client(".", 10, local_client());
        let url = format!("{}/id/10/1200/800", base);
        assert!(loader.request(&url));

        let outcome = wait(&loader);
        assert_eq!(outcome.url, url);
        let img = outcome.result.unwrap();
        assert_eq!((img.width, img.height), (10, 5));
    }

    #[test]
    fn test_remote_error_status() {
        let base = serve_once("404 Not Found", Vec::new());
        let loader = ImageLoader::with_client(".", 512, local_client());
        loader.request(&format!("{}/missing.jpg", base));
        let err = wait(&loader).result.unwrap_err();
        assert!(matches!(err, AppError::Network(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_other_schemes_unsupported() {
        let loader = ImageLoader::with_client(".", 512, local_client());
        loader.request("ftp://example.com/a.jpg");
        assert!(matches!(
            wait(&loader).result,
            Err(AppError::UnsupportedSource(_))
        ));
    }

    #[test]
    fn test_outcome_queued_before_pending_clears() {
        let dir = tempdir().unwrap();
        write_png(&dir.path().join("a.png"), 4, 4);
        let loader = ImageLoader::new(dir.path(), 512);
        loader.request("a.png");

        // Whenever the URL stops being pending, its outcome is already queued
        let deadline = std::time::Instant::now() + Duration::from_secs(10);
        while loader.is_pending("a.png") {
            assert!(std::time::Instant::now() < deadline);
            std::thread::yield_now();
        }
        assert_eq!(loader.poll().len(), 1);
        assert!(loader.request("a.png"));
    }

    #[test]
    fn test_preload_goes_through_request() {
        let dir = tempdir().unwrap();
        write_png(&dir.path().join("a.png"), 4, 4);
        let loader = ImageLoader::new(dir.path(), 512);

        loader.preload(&ImageItem::new("a", "a.png"));
        let outcome = wait(&loader);
        assert!(outcome.result.is_ok());
        assert!(loader.poll().is_empty());
    }
}
