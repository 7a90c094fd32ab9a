//! Navigation Shell State
//!
//! Explicit, locally-owned state objects for the responsive shell:
//! theme flag, mobile-menu flag, and active-route tracking. Presentation
//! components receive these by reference; there are no ambient globals
//! and nothing is persisted.

pub mod nav;
pub mod theme;

pub use nav::{NavState, ShellState};
pub use theme::Theme;
