//! UI Components

pub mod chrome;
pub mod dialogs;
pub mod gallery_editor;
pub mod lightbox_view;
pub mod photo_grid;
pub mod status_bar;

pub use dialogs::{ConfirmDialog, Dialog, DialogResult};
pub use gallery_editor::{GalleryEdit, GalleryEditor};
pub use lightbox_view::LightboxView;
pub use photo_grid::PhotoGrid;
pub use status_bar::{StatusBar, StatusInfo};
