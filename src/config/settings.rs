//! Application settings loaded from environment variables.

use std::env;

use serde::{Deserialize, Serialize};

use super::constants::{
    DEV_MODE_VAR, GOOGLE_SCRIPT_URL_VAR, PROD_MODE_VAR, TRUTHY_FLAG_VALUES,
};

/// Application configuration snapshot.
///
/// Built once from the environment at startup and handed down to consumers.
/// Every field has a total default, so construction never fails: a missing
/// variable is indistinguishable from an unset one and resolves to `""` or
/// `false`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Google Apps Script URL for submitting feedbacks; empty if unset
    pub google_script_url: String,
    /// True when the build ran in development mode
    pub is_development: bool,
    /// True when the build ran in production mode
    pub is_production: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads an optional `.env` file first; a missing file is treated the
    /// same as an empty environment. Values are frozen in the returned
    /// snapshot and never re-read.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let config = Self {
            google_script_url: environment_variable(GOOGLE_SCRIPT_URL_VAR),
            is_development: flag(DEV_MODE_VAR),
            is_production: flag(PROD_MODE_VAR),
        };
        tracing::debug!(?config, "environment configuration loaded");
        config
    }
}

/// Read an environment variable, defaulting to the empty string.
///
/// Absence never signals an error: an unset key, a key holding invalid
/// Unicode, and a key set to `""` all yield `""`.
pub fn environment_variable(key: &str) -> String {
    env::var(key).unwrap_or_default()
}

/// Read a build-mode flag: present and truthy means `true`, anything else
/// (unset, empty, `"0"`, `"false"`, ...) means `false`.
fn flag(key: &str) -> bool {
    let value = environment_variable(key);
    TRUTHY_FLAG_VALUES
        .iter()
        .any(|accepted| value.eq_ignore_ascii_case(accepted))
}
