//! Application layer managing state and user workflows.
//!
//! This module sits between the roster domain and the terminal front end:
//! it owns the roster, saves it through the injected repository, and keeps
//! the state the UI renders.

pub mod config;
pub mod form;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use config::*;
pub use form::*;
pub use state::*;
