//! Tests for key dispatch through the app

mod common;

use common::{key, key_ctrl};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dcol::action::{Action, ActionDispatcher};
use dcol::config::{Config, KeyBinding};
use dcol::controller::{Event, State};
use dcol::App;

// ===================
// Dispatcher
// ===================

#[test]
fn test_default_dispatch() {
    let dispatcher = ActionDispatcher::new(&Config::default());

    assert_eq!(dispatcher.dispatch(key(KeyCode::Enter)), Some(Event::Submit));
    assert_eq!(dispatcher.dispatch(key(KeyCode::Esc)), Some(Event::Cancel));
    assert_eq!(dispatcher.dispatch(key_ctrl('c')), Some(Event::Cancel));
}

#[test]
fn test_unbound_control_keys_are_not_text() {
    let dispatcher = ActionDispatcher::new(&Config::default());

    assert!(!matches!(
        dispatcher.dispatch(key_ctrl('x')),
        Some(Event::CharacterTyped(_))
    ));
    assert_eq!(dispatcher.dispatch(key(KeyCode::F(5))), None);
}

#[test]
fn test_action_names() {
    assert_eq!(Action::from_name("Submit"), Some(Action::Submit));
    assert_eq!(Action::from_name("Cancel"), Some(Action::Cancel));
    assert_eq!(Action::from_name("Refresh"), None);
}

// ===================
// App key handling
// ===================

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_typing_and_submitting() {
    let mut app = App::new(Config::default());
    type_str(&mut app, "buffy,300");
    app.handle_key(key(KeyCode::Enter));

    let model = app.model();
    assert_eq!(model.state, State::Resolved);
    assert_eq!(model.header_label, Some("buffy"));
    assert_eq!(model.accent_color, Some("#ff79c6"));
}

#[test]
fn test_backspace_edits_input() {
    let mut app = App::new(Config::default());
    type_str(&mut app, "reds");
    app.handle_key(key(KeyCode::Backspace));
    app.handle_key(key(KeyCode::Enter));

    assert_eq!(app.model().input_text, "red");
    assert_eq!(app.model().state, State::Resolved);
}

#[test]
fn test_shifted_characters() {
    let mut app = App::new(Config::default());
    type_str(&mut app, "blue,");
    for c in "DEFAULT".chars() {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT));
    }
    app.handle_key(key(KeyCode::Enter));

    assert_eq!(app.model().accent_color, Some("#6272a4"));
}

#[test]
fn test_ctrl_c_quits() {
    let mut app = App::new(Config::default());
    app.handle_key(key_ctrl('c'));
    assert!(app.should_quit());
}

#[test]
fn test_rebound_submit_key() {
    let config = Config {
        bindings: vec![KeyBinding::new("Tab", "Submit")],
        ..Default::default()
    };
    let mut app = App::new(config);
    type_str(&mut app, "green");
    app.handle_key(key(KeyCode::Tab));

    assert_eq!(app.model().state, State::Resolved);
}
