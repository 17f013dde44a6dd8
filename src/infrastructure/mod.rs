//! Infrastructure layer providing external service integrations.
//!
//! This module contains the file-backed roster repository and the CSV
//! exporter.

pub mod error;
pub mod export;
pub mod persistence;

pub use error::*;
pub use export::*;
pub use persistence::*;
