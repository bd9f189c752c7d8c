use std::path::PathBuf;

use thiserror::Error;

use crate::palette::ResolveError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Invalid key binding: {0}")]
    InvalidKeyBinding(String),

    #[error("{0}")]
    Resolve(#[from] ResolveError),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
