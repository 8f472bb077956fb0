// Copyright 2026 Multimodal Eval Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for report aggregation.

use thiserror::Error;

/// The report directory itself could not be enumerated.
///
/// This is the single fatal condition of a scan: the directory is missing,
/// is not a directory, or cannot be listed. Per-file read and parse
/// failures never surface here; they degrade into skipped entries on the
/// scan outcome instead.
#[derive(Debug, Error)]
#[error("cannot list report directory {path}: {source}")]
pub struct DirectoryError {
    /// The location that was attempted, for diagnostics.
    pub path: String,
    /// The underlying I/O failure.
    #[source]
    pub source: std::io::Error,
}
