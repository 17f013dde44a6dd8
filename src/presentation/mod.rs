//! Presentation layer handling terminal UI and user input.
//!
//! This module renders the add form, the student table and the status bar
//! with ratatui, and maps crossterm key presses onto application actions.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;
