mod dispatcher;
mod types;

pub use dispatcher::ActionDispatcher;
pub use types::Action;
