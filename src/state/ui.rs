//! View routing and notice state.
//!
//! DESIGN
//! ======
//! The console is a single authenticated page with named panels; `View`
//! picks which one is visible. `notice` is the blocking message surface
//! for failures that are not inline form errors.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Named console panels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Cards,
    Users,
}

/// Console chrome state.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub view: View,
    pub notice: Option<String>,
}

impl UiState {
    /// Back to the default panel; the notice survives so a forced-logout
    /// message stays visible on the login screen.
    pub fn reset(&mut self) {
        self.view = View::Cards;
    }
}
