mod keybinding;
mod loader;
mod types;

pub use keybinding::{parse_key, parse_modifiers};
pub use loader::default_config_path;
pub use types::{default_bindings, Config, KeyBinding, ThemeConfig, UiConfig};
