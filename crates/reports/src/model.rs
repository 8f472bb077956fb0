// Copyright 2026 Multimodal Eval Contributors
// SPDX-License-Identifier: Apache-2.0

//! Evaluation report types.
//!
//! This module provides the canonical report shapes for the multimodal
//! evaluation dashboard: the on-disk document written by the reporting
//! pipeline, and the decorated summary handed back to callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One evaluated sample within a benchmark run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalRecord {
    /// Identifier of the sample, unique within its report file.
    pub sample_id: String,
    /// The model's textual output; `None` when generation failed.
    #[serde(default)]
    pub response: Option<String>,
    /// Per-sample scores keyed by metric name; keys vary by benchmark.
    pub metrics: HashMap<String, f64>,
}

/// The on-disk shape of one report file, as written by the reporting
/// pipeline.
///
/// `benchmark` and `model` are required; a document missing either is
/// malformed and its file is dropped from the scan. `summary` and
/// `records` default to empty when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Name of the benchmark suite.
    pub benchmark: String,
    /// Identifier of the evaluated model.
    pub model: String,
    /// Aggregate scores across the whole run, keyed by metric name.
    #[serde(default)]
    pub summary: HashMap<String, f64>,
    /// Per-sample records, in file order.
    #[serde(default)]
    pub records: Vec<EvalRecord>,
}

impl ReportDocument {
    /// Decorate this document with its filename-derived slug and the
    /// source file's last-modified time.
    pub fn into_summary(
        self,
        slug: impl Into<String>,
        generated_at: Option<DateTime<Utc>>,
    ) -> EvalSummary {
        EvalSummary {
            benchmark: self.benchmark,
            model: self.model,
            summary: self.summary,
            records: self.records,
            slug: slug.into(),
            generated_at,
        }
    }
}

/// One benchmark-run report decorated with filesystem metadata.
///
/// `slug` is derived from the source filename and is the only handle
/// guaranteed unique within a response payload; `benchmark` and `model`
/// come from file content and may repeat across files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalSummary {
    /// Name of the benchmark suite.
    pub benchmark: String,
    /// Identifier of the evaluated model.
    pub model: String,
    /// Aggregate scores across the whole run, keyed by metric name.
    pub summary: HashMap<String, f64>,
    /// Per-sample records, in file order.
    pub records: Vec<EvalRecord>,
    /// Source filename with the `.json` suffix stripped.
    pub slug: String,
    /// Last-modified time of the source file; `None` when the stat failed.
    pub generated_at: Option<DateTime<Utc>>,
}
