//! Roster - Student Records Library
//!
//! Keeps an ordered roster of student records, persists it to a local file
//! after every change, and drives a terminal front end built on ratatui.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
