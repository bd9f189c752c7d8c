use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use tui_input::backend::crossterm::to_input_request;

use crate::config::{default_bindings, parse_key, parse_modifiers, Config, KeyBinding};
use crate::controller::Event;

use super::Action;

/// A binding with its key and action already parsed
#[derive(Debug, Clone, PartialEq, Eq)]
struct ResolvedBinding {
    code: KeyCode,
    modifiers: KeyModifiers,
    action: Action,
}

/// Maps key events to controller events
pub struct ActionDispatcher {
    bindings: Vec<ResolvedBinding>,
}

impl ActionDispatcher {
    /// Create a new dispatcher: configured bindings first, then the defaults
    pub fn new(config: &Config) -> Self {
        let bindings = config
            .bindings
            .iter()
            .chain(default_bindings().iter())
            .filter_map(Self::resolve_binding)
            .collect();

        Self { bindings }
    }

    /// Dispatch a key event. Returns `None` for keys with no meaning.
    pub fn dispatch(&self, key: KeyEvent) -> Option<Event> {
        if let Some(binding) = self
            .bindings
            .iter()
            .find(|b| b.code == key.code && b.modifiers == key.modifiers)
        {
            return Some(binding.action.into());
        }

        // Plain typing goes to the input as text
        if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
            if let KeyCode::Char(c) = key.code {
                return Some(Event::CharacterTyped(c.to_string()));
            }
        }

        // Anything else is left to the text field (cursor moves, deletes)
        to_input_request(&CrosstermEvent::Key(key)).map(Event::Other)
    }

    fn resolve_binding(binding: &KeyBinding) -> Option<ResolvedBinding> {
        let code = match parse_key(&binding.key) {
            Ok(code) => code,
            Err(err) => {
                tracing::warn!(key = %binding.key, %err, "ignoring key binding");
                return None;
            }
        };

        let Some(action) = Action::from_name(&binding.action) else {
            tracing::warn!(action = %binding.action, "ignoring key binding with unknown action");
            return None;
        };

        Some(ResolvedBinding {
            code,
            modifiers: parse_modifiers(binding.mods.as_deref()),
            action,
        })
    }
}
