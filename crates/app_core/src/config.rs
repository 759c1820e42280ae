//! Application configuration

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub site: SiteConfig,
    pub storage: StorageConfig,
    pub viewer: ViewerConfig,
    pub keybindings: HashMap<String, Vec<String>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            site: SiteConfig::default(),
            storage: StorageConfig::default(),
            viewer: ViewerConfig::default(),
            keybindings: default_keybindings(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub theme: String,
    pub window_width: u32,
    pub window_height: u32,
    pub start_maximized: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            window_width: 1280,
            window_height: 800,
            start_maximized: false,
        }
    }
}

/// Where the portfolio is published and where its media lives
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Public origin used for canonical URLs, sitemap and robots
    pub origin: String,
    /// Base directory for relative image URLs
    pub media_root: PathBuf,
    /// Target directory of the SEO export buttons
    pub export_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let data_dir = ProjectDirs::from("com", "LuminaLens", "LuminaLens")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            origin: "https://lumina.example.com".to_string(),
            media_root: data_dir.join("media"),
            export_dir: data_dir.join("export"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageBackend {
    #[serde(rename = "sqlite")]
    Sqlite,
    #[serde(rename = "memory")]
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Database file; the data directory is used when unset
    pub path: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Sqlite,
            path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Decode the neighbours of the current lightbox image ahead of time
    pub preload: bool,
    /// Longest edge of decoded images, larger ones are downscaled
    pub max_dimension: u32,
    pub background_color: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            preload: true,
            max_dimension: 2048,
            background_color: "#fafafa".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Self = toml::from_str(&content)?;
            tracing::info!("Configuration loaded from {:?}", config_path);
            Ok(config)
        } else {
            tracing::info!("Using default configuration");
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;

        tracing::info!("Configuration saved to {:?}", config_path);
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("com", "LuminaLens", "LuminaLens")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("./config.toml"))
    }
}

fn default_keybindings() -> HashMap<String, Vec<String>> {
    let mut kb = HashMap::new();

    // Lightbox
    kb.insert("lightbox.next".into(), vec!["Right".into()]);
    kb.insert("lightbox.prev".into(), vec!["Left".into()]);
    kb.insert("lightbox.close".into(), vec!["Escape".into()]);
    kb.insert("lightbox.zoom_in".into(), vec!["Plus".into(), "=".into()]);
    kb.insert("lightbox.zoom_out".into(), vec!["Minus".into()]);
    kb.insert("lightbox.reset".into(), vec!["0".into()]);

    // Navigation
    kb.insert("nav.back".into(), vec!["Alt+Left".into()]);

    // App
    kb.insert("app.exit".into(), vec!["Alt+F4".into(), "Ctrl+q".into()]);
    kb.insert("app.reload".into(), vec!["F5".into()]);

    kb
}
