pub mod models;
pub mod roster;
pub mod services;
pub mod errors;

pub use models::*;
pub use roster::*;
pub use services::*;
pub use errors::*;
