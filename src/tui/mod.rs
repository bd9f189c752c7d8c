pub mod event;
pub mod terminal;
pub mod ui;

pub use event::{read_event, Event};
pub use terminal::Terminal;
pub use ui::render;
