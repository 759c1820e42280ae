//! Command system for user actions

use serde::{Deserialize, Serialize};

/// Command identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandId(pub String);

impl CommandId {
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // Lightbox commands
    pub const LIGHTBOX_NEXT: &'static str = "lightbox.next";
    pub const LIGHTBOX_PREV: &'static str = "lightbox.prev";
    pub const LIGHTBOX_CLOSE: &'static str = "lightbox.close";
    pub const LIGHTBOX_ZOOM_IN: &'static str = "lightbox.zoom_in";
    pub const LIGHTBOX_ZOOM_OUT: &'static str = "lightbox.zoom_out";
    pub const LIGHTBOX_RESET: &'static str = "lightbox.reset";

    // Navigation
    pub const NAV_BACK: &'static str = "nav.back";

    // App commands
    pub const APP_EXIT: &'static str = "app.exit";
    /// Reopen the current page and retry failed images
    pub const APP_RELOAD: &'static str = "app.reload";
}

/// A resolved user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub id: CommandId,
}

impl Command {
    pub fn new(id: &str) -> Self {
        Self {
            id: CommandId::new(id),
        }
    }

    pub fn is(&self, id: &str) -> bool {
        self.id.as_str() == id
    }

    /// Lightbox commands only apply while the lightbox is open
    pub fn is_lightbox(&self) -> bool {
        self.id.as_str().starts_with("lightbox.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_scope() {
        let cmd = Command::new(CommandId::LIGHTBOX_ZOOM_IN);
        assert!(cmd.is(CommandId::LIGHTBOX_ZOOM_IN));
        assert!(cmd.is_lightbox());
        assert!(!Command::new(CommandId::APP_EXIT).is_lightbox());
    }
}
