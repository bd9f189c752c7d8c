//! Common test utilities

#![allow(dead_code)]

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dcol::controller::{Controller, Event, RenderModel};
use dcol::palette::PaletteStore;
use tempfile::TempDir;

/// Controller over the built-in Dracula table
pub fn controller() -> Controller {
    Controller::new(PaletteStore::dracula())
}

/// Type `input` into a fresh controller and submit it
pub fn submit(input: &str) -> (Controller, RenderModel) {
    let mut controller = controller();
    controller.handle(Event::CharacterTyped(input.to_string()));
    let model = controller
        .handle(Event::Submit)
        .expect("submit should produce a model");
    (controller, model)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn key_ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// A config file in a temporary directory
pub struct TestConfig {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TestConfig {
    pub fn new(content: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).expect("Failed to write config");
        Self { dir, path }
    }
}
