//! Shared service state.

use std::path::PathBuf;

/// State shared across route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Directory the report scan reads from.
    pub reports_dir: PathBuf,
}
