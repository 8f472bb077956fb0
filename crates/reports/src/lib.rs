// Copyright 2026 Multimodal Eval Contributors
// SPDX-License-Identifier: Apache-2.0

//! Evaluation report aggregation for the multimodal eval dashboard.
//!
//! This crate reads per-run JSON report files out of a directory and
//! turns them into a uniform, newest-first list of summaries. It is the
//! shared core behind the HTTP endpoint and the CLI.
//!
//! # Quick Start
//!
//! ```no_run
//! use multimodal_eval_reports::collect_from_dir;
//!
//! // Scan a report directory
//! let outcome = collect_from_dir("../reports/multimodal_eval")?;
//!
//! // Process results
//! for summary in &outcome.summaries {
//!     println!("{}: {} on {}", summary.slug, summary.model, summary.benchmark);
//! }
//! # Ok::<(), multimodal_eval_reports::DirectoryError>(())
//! ```
//!
//! # Modules
//!
//! - [`model`] - Report document and summary types
//! - [`scan`] - Directory scanning and aggregation
//! - [`source`] - The `ReportSource` capability and its implementations
//! - [`markdown`] - Markdown report generation
//! - [`error`] - The fatal directory error

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod error;
pub mod markdown;
pub mod model;
pub mod scan;
pub mod source;

pub use error::DirectoryError;
pub use model::{EvalRecord, EvalSummary, ReportDocument};
pub use scan::{collect_from_dir, collect_reports, ScanOutcome, SkipReason, SkippedFile};
pub use source::{DirSource, MemorySource, ReportSource, SourceEntry, DEFAULT_REPORTS_DIR};
