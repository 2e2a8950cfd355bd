//! Legacy class-style configuration accessor.
//!
//! Older call sites reached the script URL through a named accessor group
//! instead of the bare config struct. This facade preserves that call
//! pattern while delegating to the one [`Config`] value.

use super::settings::Config;

/// Compatibility facade over a [`Config`] snapshot.
///
/// Purely delegating; holds no state of its own beyond the borrow.
pub struct Environment<'a> {
    config: &'a Config,
}

impl<'a> Environment<'a> {
    /// Wrap an existing snapshot.
    pub const fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// The Google Apps Script URL, as the legacy interface exposed it.
    pub fn google_script_url(&self) -> &str {
        &self.config.google_script_url
    }
}
