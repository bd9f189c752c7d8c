use crossterm::event::KeyEvent;

use crate::action::ActionDispatcher;
use crate::config::Config;
use crate::controller::{Controller, RenderModel};
use crate::error::Result;
use crate::palette::PaletteStore;
use crate::theme::Theme;
use crate::tui::{read_event, render, Event, Terminal};

/// Main application state
pub struct App {
    pub config: Config,
    pub theme: Theme,

    controller: Controller,
    dispatcher: ActionDispatcher,

    // Last model produced by the controller
    model: RenderModel,
}

impl App {
    /// Create a new application over the built-in Dracula palettes
    pub fn new(config: Config) -> Self {
        Self::with_store(config, PaletteStore::dracula())
    }

    pub fn with_store(config: Config, store: &'static PaletteStore) -> Self {
        let theme = Theme::from_config(&config.theme);
        let dispatcher = ActionDispatcher::new(&config);
        let controller = Controller::new(store).with_char_limit(config.ui.char_limit);
        let model = controller.render_model();

        Self {
            config,
            theme,
            controller,
            dispatcher,
            model,
        }
    }

    /// Run the application main loop until the controller terminates
    pub fn run(&mut self, mut terminal: Terminal) -> Result<()> {
        tracing::info!(theme = %self.theme.name, "starting interactive session");

        while !self.should_quit() {
            terminal.draw(|frame| render(frame, &self.model, &self.theme, &self.config.ui))?;

            match read_event()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize => {
                    // Redrawn on the next iteration
                }
            }
        }

        tracing::info!("session ended");
        Ok(())
    }

    /// Feed one key press through the dispatcher and controller
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(event) = self.dispatcher.dispatch(key) else {
            return;
        };

        if let Some(model) = self.controller.handle(event) {
            self.model = model;
        }
    }

    pub fn should_quit(&self) -> bool {
        self.controller.is_terminated()
    }

    pub fn model(&self) -> &RenderModel {
        &self.model
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }
}
