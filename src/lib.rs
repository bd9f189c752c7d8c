pub mod action;
pub mod app;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod palette;
pub mod report;
pub mod theme;
pub mod tui;

pub use app::App;
pub use config::Config;
pub use controller::Controller;
pub use error::{Error, Result};
