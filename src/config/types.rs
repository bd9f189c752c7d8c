use serde::{Deserialize, Serialize};

use crate::theme::ThemeColorsConfig;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub bindings: Vec<KeyBinding>,
}

/// Text and sizing of the lookup screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// Line shown above the input field
    pub prompt: String,

    /// Shown in the input field while it is empty
    pub placeholder: String,

    /// Hint line shown below the input field
    pub hint: String,

    /// Maximum number of characters accepted by the input field
    pub char_limit: usize,

    /// Visible width of the input field in columns
    pub input_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            prompt: "Tell me what dracula color you need:".to_string(),
            placeholder: "palette,shade".to_string(),
            hint: "(esc to quit)".to_string(),
            char_limit: 156,
            input_width: 20,
        }
    }
}

/// Chrome color theme selection
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ThemeConfig {
    /// Preset name ("dracula" or "classic")
    #[serde(default)]
    pub preset: Option<String>,

    /// Per-color overrides applied on top of the preset
    #[serde(default)]
    pub colors: ThemeColorsConfig,
}

/// Key binding configuration (Alacritty-style)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyBinding {
    /// Key to bind (e.g., "Enter", "Esc", "F1", "q")
    pub key: String,

    /// Modifier keys (e.g., "Control", "Shift", "Control|Shift")
    #[serde(default)]
    pub mods: Option<String>,

    /// Built-in action to execute ("Submit" or "Cancel")
    pub action: String,
}

impl KeyBinding {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            mods: None,
            action: action.into(),
        }
    }

    pub fn with_mods(mut self, mods: impl Into<String>) -> Self {
        self.mods = Some(mods.into());
        self
    }
}

/// Bindings that are always active after the configured ones
pub fn default_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("Enter", "Submit"),
        KeyBinding::new("Esc", "Cancel"),
        KeyBinding::new("c", "Cancel").with_mods("Control"),
    ]
}
