//! Application-wide constants
//!
//! Centralized location for environment variable names and flag parsing.

// =============================================================================
// Environment variable names
// =============================================================================

/// Google Apps Script URL used for submitting feedbacks
pub const GOOGLE_SCRIPT_URL_VAR: &str = "VITE_GOOGLE_SCRIPT_URL";

/// Development build-mode indicator
pub const DEV_MODE_VAR: &str = "DEV";

/// Production build-mode indicator
pub const PROD_MODE_VAR: &str = "PROD";

// =============================================================================
// Flag parsing
// =============================================================================

/// Values accepted as truthy for build-mode flags (case-insensitive)
pub const TRUTHY_FLAG_VALUES: [&str; 4] = ["1", "true", "yes", "on"];
