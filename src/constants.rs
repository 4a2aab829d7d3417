//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// URL of the OpenAPI document to explore (fixed in this version)
pub const DOCS_URL: &str = "https://petstore3.swagger.io/api/v3/openapi.json";

/// Fallback base URL for invocations when no session file exists
pub const DEFAULT_API_URL: &str = "https://petstore3.swagger.io/api/v3";

/// Header carrying the session token on every invocation
pub const API_KEY_HEADER: &str = "apikey";

/// The one user-facing message for any document load failure
pub const DOCS_LOAD_ERROR: &str = "failed to load documentation";

/// Application name
#[allow(dead_code)]
pub const APP_NAME: &str = "Scout TUI";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
