//! Feedback Config - environment-derived application configuration
//!
//! This crate exposes the configuration the feedback application reads from
//! its environment: the Google Apps Script endpoint feedbacks are submitted
//! to, and the development/production build-mode flags.
//!
//! # Architecture
//!
//! - **config**: the [`Config`] snapshot, its loader, and the legacy
//!   class-style accessor kept for older call sites
//!
//! # Usage
//!
//! ```
//! use feedback_config::Config;
//!
//! let config = Config::from_env();
//! if !config.google_script_url.is_empty() {
//!     // hand the endpoint to the feedback submitter
//! }
//! ```
//!
//! The snapshot is built once at startup and passed down to consumers; it is
//! never re-read or mutated afterwards.

pub mod config;

pub use config::Config;
