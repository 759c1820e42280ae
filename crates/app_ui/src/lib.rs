//! LuminaLens UI Layer
//!
//! Provides:
//! - egui components (photo grid, lightbox, gallery editor, site chrome)
//! - Pages for the public site and the admin area
//! - wgpu rendering pipeline
//! - Input handling

pub mod components;
pub mod input;
pub mod pages;
pub mod renderer;
pub mod textures;
pub mod theme;

pub use input::InputHandler;
pub use pages::{Page, PageAction, PageContext};
pub use renderer::Renderer;
pub use textures::TextureCache;
pub use theme::Theme;
