//! Input handling and keybinding resolution

use app_core::{Command, CommandId};
use std::collections::HashMap;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::{Key, ModifiersState, NamedKey};

/// Input handler that maps keys/mouse to commands
pub struct InputHandler {
    /// Key bindings: key string -> command ID
    bindings: HashMap<String, String>,

    /// Current modifier state
    modifiers: ModifiersState,
}

impl InputHandler {
    /// Create a new input handler from `command -> keys` bindings
    pub fn new(bindings: HashMap<String, Vec<String>>) -> Self {
        let mut key_to_command = HashMap::new();

        for (command, keys) in bindings {
            for key in keys {
                key_to_command.insert(key.to_lowercase(), command.clone());
            }
        }

        Self {
            bindings: key_to_command,
            modifiers: ModifiersState::empty(),
        }
    }

    /// Update modifier state
    pub fn update_modifiers(&mut self, modifiers: ModifiersState) {
        self.modifiers = modifiers;
    }

    /// Handle a key event and return the corresponding command
    pub fn handle_key(&self, event: &KeyEvent) -> Option<Command> {
        if event.state != ElementState::Pressed {
            return None;
        }
        self.resolve(&event.logical_key)
    }

    /// Look up the command bound to `key` under the current modifiers
    pub fn resolve(&self, key: &Key) -> Option<Command> {
        let key_str = key_to_string(key);
        if key_str.is_empty() {
            return None;
        }
        let full_key = self.build_key_string(&key_str);

        tracing::debug!("Key pressed: {}", full_key);

        self.bindings
            .get(&full_key.to_lowercase())
            .map(|cmd_id| Command::new(cmd_id))
    }

    /// Build a key string with modifiers
    fn build_key_string(&self, key: &str) -> String {
        let mut parts = Vec::new();

        if self.modifiers.control_key() {
            parts.push("Ctrl");
        }
        if self.modifiers.alt_key() {
            parts.push("Alt");
        }
        // Shift is already folded into printable characters like `+`
        if self.modifiers.shift_key() && key.chars().count() > 1 {
            parts.push("Shift");
        }
        if self.modifiers.super_key() {
            parts.push("Super");
        }

        parts.push(key);
        parts.join("+")
    }

    /// Mouse side buttons step through the open lightbox
    pub fn handle_mouse_button(&self, button: MouseButton, state: ElementState) -> Option<Command> {
        if state != ElementState::Pressed {
            return None;
        }
        match button {
            MouseButton::Back => Some(Command::new(CommandId::LIGHTBOX_PREV)),
            MouseButton::Forward => Some(Command::new(CommandId::LIGHTBOX_NEXT)),
            _ => None,
        }
    }
}

/// Convert a logical key to the name used in keybindings
fn key_to_string(key: &Key) -> String {
    match key {
        Key::Named(named) => match named {
            NamedKey::Space => "Space".to_string(),
            NamedKey::Enter => "Return".to_string(),
            NamedKey::Tab => "Tab".to_string(),
            NamedKey::Escape => "Escape".to_string(),
            NamedKey::Backspace => "Backspace".to_string(),
            NamedKey::Delete => "Delete".to_string(),
            NamedKey::Home => "Home".to_string(),
            NamedKey::End => "End".to_string(),
            NamedKey::ArrowUp => "Up".to_string(),
            NamedKey::ArrowDown => "Down".to_string(),
            NamedKey::ArrowLeft => "Left".to_string(),
            NamedKey::ArrowRight => "Right".to_string(),
            NamedKey::F4 => "F4".to_string(),
            NamedKey::F5 => "F5".to_string(),
            NamedKey::F11 => "F11".to_string(),
            _ => format!("{:?}", named),
        },
        Key::Character(c) => match c.as_str() {
            "+" => "Plus".to_string(),
            "-" => "Minus".to_string(),
            other => other.to_string(),
        },
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_core::AppConfig;

    fn handler() -> InputHandler {
        InputHandler::new(AppConfig::default().keybindings)
    }

    fn character(c: &str) -> Key {
        Key::Character(c.into())
    }

    fn resolved(handler: &InputHandler, key: &Key) -> Option<String> {
        handler.resolve(key).map(|cmd| cmd.id.as_str().to_string())
    }

    #[test]
    fn test_default_lightbox_bindings() {
        let h = handler();
        assert_eq!(
            resolved(&h, &Key::Named(NamedKey::ArrowRight)).as_deref(),
            Some(CommandId::LIGHTBOX_NEXT)
        );
        assert_eq!(
            resolved(&h, &Key::Named(NamedKey::ArrowLeft)).as_deref(),
            Some(CommandId::LIGHTBOX_PREV)
        );
        assert_eq!(
            resolved(&h, &Key::Named(NamedKey::Escape)).as_deref(),
            Some(CommandId::LIGHTBOX_CLOSE)
        );
        assert_eq!(resolved(&h, &character("+")).as_deref(), Some(CommandId::LIGHTBOX_ZOOM_IN));
        assert_eq!(resolved(&h, &character("=")).as_deref(), Some(CommandId::LIGHTBOX_ZOOM_IN));
        assert_eq!(resolved(&h, &character("-")).as_deref(), Some(CommandId::LIGHTBOX_ZOOM_OUT));
        assert_eq!(resolved(&h, &character("0")).as_deref(), Some(CommandId::LIGHTBOX_RESET));
        assert_eq!(resolved(&h, &character("x")), None);
    }

    #[test]
    fn test_modifiers() {
        let mut h = handler();
        assert_eq!(resolved(&h, &character("q")), None);

        h.update_modifiers(ModifiersState::CONTROL);
        assert_eq!(resolved(&h, &character("q")).as_deref(), Some(CommandId::APP_EXIT));

        // Shifted characters match their unshifted binding name
        h.update_modifiers(ModifiersState::SHIFT);
        assert_eq!(resolved(&h, &character("+")).as_deref(), Some(CommandId::LIGHTBOX_ZOOM_IN));
    }

    #[test]
    fn test_history_and_reload() {
        let mut h = handler();
        assert_eq!(
            resolved(&h, &Key::Named(NamedKey::F5)).as_deref(),
            Some(CommandId::APP_RELOAD)
        );
        h.update_modifiers(ModifiersState::ALT);
        assert_eq!(
            resolved(&h, &Key::Named(NamedKey::ArrowLeft)).as_deref(),
            Some(CommandId::NAV_BACK)
        );
    }

    #[test]
    fn test_mouse_side_buttons() {
        let h = handler();
        let cmd = h.handle_mouse_button(MouseButton::Back, ElementState::Pressed);
        assert!(cmd.is_some_and(|c| c.is(CommandId::LIGHTBOX_PREV)));
        assert!(h
            .handle_mouse_button(MouseButton::Forward, ElementState::Released)
            .is_none());
        assert!(h
            .handle_mouse_button(MouseButton::Left, ElementState::Pressed)
            .is_none());
    }
}
