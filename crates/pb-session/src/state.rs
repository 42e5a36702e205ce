//! Session navigation states.

/// Position in the menu navigation. The machine only ever occupies one
/// of these three states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Top-level menu: plot lookup plus the catalog subjects.
    Main,
    /// A subject is open; its questions are on offer.
    SubjectSelected(String),
    /// A plot number is expected as free-text input.
    AwaitingPlotNumber,
}

impl SessionState {
    /// Whether the front end should show an input box instead of buttons.
    pub fn expects_free_text(&self) -> bool {
        matches!(self, Self::AwaitingPlotNumber)
    }
}
