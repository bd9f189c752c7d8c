//! Query/result state machine behind the lookup screen
//!
//! The controller owns the input text and the outcome of the last submit. It
//! knows nothing about terminals: events come in, a [`RenderModel`] comes out.

use tui_input::{Input, InputRequest};

use crate::palette::{
    parse, project, resolve, ColorValue, DisplayRow, PaletteStore, ResolutionResult,
};

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Editing,
    Resolved,
    Failed,
    Terminated,
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            State::Editing => write!(f, "Editing"),
            State::Resolved => write!(f, "Resolved"),
            State::Failed => write!(f, "Failed"),
            State::Terminated => write!(f, "Terminated"),
        }
    }
}

/// Discrete input events understood by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Text typed at the cursor
    CharacterTyped(String),
    /// Resolve the current input
    Submit,
    /// Quit
    Cancel,
    /// Editing request passed through to the text field (cursor moves, deletes)
    Other(InputRequest),
}

/// Everything the presenter needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub state: State,
    pub input_text: String,
    /// Cursor position in display columns
    pub cursor: usize,
    pub error_message: Option<String>,
    pub header_label: Option<&'static str>,
    pub rows: Vec<DisplayRow>,
    pub accent_color: Option<ColorValue>,
}

#[derive(Debug, Clone)]
pub struct Controller {
    store: &'static PaletteStore,
    input: Input,
    char_limit: usize,
    state: State,
    outcome: Option<ResolutionResult>,
    rows: Vec<DisplayRow>,
}

impl Controller {
    pub fn new(store: &'static PaletteStore) -> Self {
        Self {
            store,
            input: Input::default(),
            char_limit: usize::MAX,
            state: State::Editing,
            outcome: None,
            rows: Vec::new(),
        }
    }

    /// Cap the number of characters the input accepts
    pub fn with_char_limit(mut self, char_limit: usize) -> Self {
        self.char_limit = char_limit;
        self
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn input_text(&self) -> &str {
        self.input.value()
    }

    /// Outcome of the last submit, if any
    pub fn outcome(&self) -> Option<&ResolutionResult> {
        self.outcome.as_ref()
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn is_terminated(&self) -> bool {
        self.state == State::Terminated
    }

    /// Apply one event. Returns the model to draw next, or `None` once the
    /// controller has terminated; events after that are ignored.
    pub fn handle(&mut self, event: Event) -> Option<RenderModel> {
        if self.is_terminated() {
            return None;
        }

        match event {
            Event::CharacterTyped(text) => {
                self.insert_text(&text);
                self.state = State::Editing;
            }
            Event::Submit => self.submit(),
            Event::Cancel => {
                tracing::debug!(state = %self.state, "cancelled");
                self.state = State::Terminated;
                return None;
            }
            Event::Other(InputRequest::InsertChar(c)) => {
                self.insert_text(&c.to_string());
                self.state = State::Editing;
            }
            Event::Other(request) => {
                let before = self.input.value().to_string();
                self.input.handle(request);
                if self.input.value() != before {
                    self.state = State::Editing;
                }
            }
        }

        Some(self.render_model())
    }

    /// Consuming form of [`Controller::handle`]: `(state, event) -> (state, model)`
    pub fn step(mut self, event: Event) -> (Self, Option<RenderModel>) {
        let model = self.handle(event);
        (self, model)
    }

    /// Derive the render model for the current state
    pub fn render_model(&self) -> RenderModel {
        let (error_message, header_label, accent_color) = match &self.outcome {
            None => (None, None, None),
            Some(Ok(resolution)) => (
                None,
                Some(resolution.palette_name()),
                resolution.accent_color(),
            ),
            Some(Err(err)) => (Some(err.to_string()), None, None),
        };

        RenderModel {
            state: self.state,
            input_text: self.input.value().to_string(),
            cursor: self.input.visual_cursor(),
            error_message,
            header_label,
            rows: self.rows.clone(),
            accent_color,
        }
    }

    fn insert_text(&mut self, text: &str) {
        let mut len = self.input.value().chars().count();
        for c in text.chars() {
            if len >= self.char_limit {
                break;
            }
            self.input.handle(InputRequest::InsertChar(c));
            len += 1;
        }
    }

    fn submit(&mut self) {
        let query = parse(self.input.value());
        let result = resolve(&query, self.store);
        tracing::debug!(input = self.input.value(), ?result, "resolved query");

        self.rows = project(&result);
        self.state = if result.is_ok() {
            State::Resolved
        } else {
            State::Failed
        };
        self.outcome = Some(result);
    }
}
