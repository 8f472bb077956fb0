// Copyright 2026 Multimodal Eval Contributors
// SPDX-License-Identifier: Apache-2.0

//! Markdown output generation for evaluation reports.
//!
//! This module provides functionality to render collected report
//! summaries as a markdown table, for pasting into run logs and PRs.

use crate::model::EvalSummary;
use std::fmt::Write;

/// Generate a markdown summary table from collected reports.
pub fn generate_summary(summaries: &[EvalSummary]) -> String {
    let mut output = String::new();

    writeln!(output, "# Evaluation Report Summary").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Generated: {}", chrono::Utc::now().to_rfc3339()).unwrap();
    writeln!(output).unwrap();
    writeln!(output, "## Runs").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "| Run | Benchmark | Model | Generated At | Metrics |").unwrap();
    writeln!(output, "|-----|-----------|-------|--------------|---------|").unwrap();

    for summary in summaries {
        let metrics_short = truncate_preview(metrics_preview(summary));
        let generated = summary
            .generated_at
            .map(|ts| ts.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            output,
            "| {} | {} | {} | {} | {} |",
            summary.slug, summary.benchmark, summary.model, generated, metrics_short
        )
        .unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "---").unwrap();
    writeln!(output, "Total reports: {}", summaries.len()).unwrap();

    output
}

/// Render the summary metrics as `name=value` pairs in key order, so the
/// preview is stable across runs.
fn metrics_preview(summary: &EvalSummary) -> String {
    let mut pairs: Vec<(&String, &f64)> = summary.summary.iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    pairs
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Cap a preview at 50 characters, cutting on a character boundary.
/// Metric names come straight from report files and are not ASCII-only.
fn truncate_preview(preview: String) -> String {
    if preview.chars().count() <= 50 {
        return preview;
    }
    let kept: String = preview.chars().take(47).collect();
    format!("{kept}...")
}
