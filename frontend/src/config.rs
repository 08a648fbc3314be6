//! Application configuration.
//!
//! Centralized configuration for the Dashgen frontend. `API_BASE` is read at
//! build time; everything else is a plain constant.

/// Base URL of the analysis backend.
///
/// Set the `API_BASE` environment variable at build time to point at a
/// remote deployment. The empty default means same-origin. The value is
/// joined as-is with the endpoint paths, without trailing-slash
/// normalization.
pub const API_BASE: &str = match option_env!("API_BASE") {
    Some(url) => url,
    None => "",
};

/// File extensions offered by the chooser.
///
/// Advisory only; nothing is rejected client-side and the backend stays the
/// authority on what it can parse.
pub const ACCEPTED_EXTENSIONS: &str = ".csv,.xlsx,.xls";
