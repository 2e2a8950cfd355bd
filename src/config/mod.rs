//! Application configuration module
//!
//! Handles environment variables and the legacy accessor facade.

mod compat;
mod constants;
mod settings;

pub use compat::Environment;
pub use constants::*;
pub use settings::{environment_variable, Config};
