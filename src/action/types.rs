/// Actions that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Resolve the current input
    Submit,
    /// Quit the application
    Cancel,
}

impl Action {
    /// Parse action from its binding name
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "Submit" => Some(Action::Submit),
            "Cancel" | "Quit" => Some(Action::Cancel),
            _ => None,
        }
    }
}

impl From<Action> for crate::controller::Event {
    fn from(action: Action) -> Self {
        match action {
            Action::Submit => Self::Submit,
            Action::Cancel => Self::Cancel,
        }
    }
}
