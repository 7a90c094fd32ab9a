//! Navigation State
//!
//! Mobile-menu flag and active-route tracking, owned locally and passed
//! into presentation components instead of living as ambient globals.

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Mobile menu state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavState {
    pub menu_open: bool,
}

impl NavState {
    /// Open or close the mobile menu
    pub fn toggle(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the mobile menu
    pub fn close(&mut self) {
        self.menu_open = false;
    }
}

/// Whole-shell state: theme, menu, and the active route
///
/// Choosing a route closes the mobile menu, the way the shell's links
/// have always behaved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellState {
    pub theme: Theme,
    pub nav: NavState,
    current_route: String,
}

impl ShellState {
    /// Shell state starting on the given route
    pub fn new(initial_route: impl Into<String>) -> Self {
        Self {
            current_route: initial_route.into(),
            ..Default::default()
        }
    }

    /// The route the shell currently shows
    pub fn current_route(&self) -> &str {
        &self.current_route
    }

    /// Move to a route and close the mobile menu
    pub fn navigate(&mut self, route: impl Into<String>) {
        self.current_route = route.into();
        self.nav.close();
    }

    /// True when the given route is the active one (for link highlighting)
    pub fn is_active(&self, route: &str) -> bool {
        self.current_route == route
    }
}
