// Copyright 2026 Multimodal Eval Contributors
// SPDX-License-Identifier: Apache-2.0

//! Directory scanning and report aggregation.
//!
//! [`collect_reports`] turns a [`ReportSource`] listing into parsed
//! [`EvalSummary`] values. The only fatal failure is the listing itself;
//! every per-file problem downgrades to a [`SkippedFile`] entry so one
//! corrupt report cannot hide the rest.

use std::fmt;
use std::path::PathBuf;

use tracing::debug;

use crate::error::DirectoryError;
use crate::model::{EvalSummary, ReportDocument};
use crate::source::{DirSource, ReportSource};

/// Everything a scan produced: parsed summaries plus the files left out.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Successfully parsed summaries in descending filename order.
    pub summaries: Vec<EvalSummary>,
    /// Files that were present but unusable, with the reason each was
    /// dropped. Callers decide whether and how to surface these.
    pub skipped: Vec<SkippedFile>,
}

/// One report file that could not be turned into a summary.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    /// Filename within the report directory.
    pub file: String,
    /// Why the file was dropped.
    pub reason: SkipReason,
}

/// Why a report file was left out of the scan results.
#[derive(Debug, Clone)]
pub enum SkipReason {
    /// The file could not be read at all.
    Unreadable(String),
    /// The contents were not a valid report document.
    Invalid(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable(detail) => write!(f, "unreadable: {detail}"),
            Self::Invalid(detail) => write!(f, "invalid report: {detail}"),
        }
    }
}

/// Collect every parseable report from `source`.
///
/// Regular files whose names end in `.json` (case-sensitive) are read,
/// parsed, and stamped with their last-modified time; everything else in
/// the listing is ignored. Results come back in descending filename
/// order: run files carry sortable names (`run-003.json` sorts after
/// `run-001.json`), so the greatest name is the most recent run. The scan
/// relies on that naming convention rather than on timestamps and does
/// not verify it.
///
/// The only error is a failed listing. A file that cannot be read or
/// parsed is recorded in [`ScanOutcome::skipped`] and the scan moves on;
/// a file whose stat fails still produces a summary, with
/// `generated_at: None`.
pub fn collect_reports(source: &dyn ReportSource) -> Result<ScanOutcome, DirectoryError> {
    let entries = source.list().map_err(|err| DirectoryError {
        path: source.location(),
        source: err,
    })?;

    let mut names: Vec<String> = entries
        .into_iter()
        .filter(|entry| entry.is_file && entry.name.ends_with(".json"))
        .map(|entry| entry.name)
        .collect();
    names.sort_by(|a, b| b.cmp(a));

    debug!(
        location = %source.location(),
        files = names.len(),
        "scanning report files"
    );

    let mut summaries = Vec::new();
    let mut skipped = Vec::new();
    for name in names {
        match load_one(source, &name) {
            Ok(summary) => summaries.push(summary),
            Err(reason) => skipped.push(SkippedFile { file: name, reason }),
        }
    }

    Ok(ScanOutcome { summaries, skipped })
}

/// Scan a directory on disk. Convenience wrapper over [`collect_reports`]
/// with a [`DirSource`].
pub fn collect_from_dir(path: impl Into<PathBuf>) -> Result<ScanOutcome, DirectoryError> {
    collect_reports(&DirSource::new(path))
}

fn load_one(source: &dyn ReportSource, name: &str) -> Result<EvalSummary, SkipReason> {
    let raw = source
        .read(name)
        .map_err(|err| SkipReason::Unreadable(err.to_string()))?;
    let document: ReportDocument =
        serde_json::from_str(&raw).map_err(|err| SkipReason::Invalid(err.to_string()))?;

    let slug = name.strip_suffix(".json").unwrap_or(name).to_string();
    let generated_at = source.modified(name).ok();

    Ok(document.into_summary(slug, generated_at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;
    use chrono::{TimeZone, Utc};

    fn report_json(benchmark: &str) -> String {
        format!(
            r#"{{
                "benchmark": "{benchmark}",
                "model": "omni-12b",
                "summary": {{"accuracy": 0.91}},
                "records": [
                    {{"sample_id": "s-1", "response": "a cat", "metrics": {{"score": 1.0}}}}
                ]
            }}"#
        )
    }

    fn ts(day: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_slug_is_filename_without_extension() {
        let source = MemorySource::new("mem").with_file(
            "vqa-run-001.json",
            report_json("vqa"),
            Some(ts(1)),
        );
        let outcome = collect_reports(&source).unwrap();
        assert_eq!(outcome.summaries.len(), 1);
        assert_eq!(outcome.summaries[0].slug, "vqa-run-001");
    }

    #[test]
    fn test_ignores_non_json_files_and_subdirectories() {
        let source = MemorySource::new("mem")
            .with_file("run-001.json", report_json("vqa"), Some(ts(1)))
            .with_file("notes.txt", "scratch", Some(ts(1)))
            .with_file("run-002.JSON", report_json("vqa"), Some(ts(2)))
            .with_dir("nested.json");
        let outcome = collect_reports(&source).unwrap();
        let slugs: Vec<&str> = outcome.summaries.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, ["run-001"]);
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn test_results_sorted_by_filename_descending() {
        let source = MemorySource::new("mem")
            .with_file("a.json", report_json("vqa"), Some(ts(1)))
            .with_file("c.json", report_json("vqa"), Some(ts(3)))
            .with_file("b.json", report_json("vqa"), Some(ts(2)));
        let outcome = collect_reports(&source).unwrap();
        let slugs: Vec<&str> = outcome.summaries.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, ["c", "b", "a"]);
    }

    #[test]
    fn test_scan_is_idempotent_for_unchanged_source() {
        let source = MemorySource::new("mem")
            .with_file("run-002.json", report_json("ocr"), Some(ts(2)))
            .with_file("run-001.json", report_json("vqa"), Some(ts(1)));

        let first = collect_reports(&source).unwrap();
        let second = collect_reports(&source).unwrap();

        let slugs = |outcome: &ScanOutcome| {
            outcome
                .summaries
                .iter()
                .map(|s| s.slug.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(slugs(&first), slugs(&second));
        assert_eq!(first.skipped.len(), second.skipped.len());
    }

    #[test]
    fn test_broken_file_is_skipped_with_reason() {
        let source = MemorySource::new("mem")
            .with_file("run-002.json", "{not json", Some(ts(2)))
            .with_file("run-001.json", report_json("vqa"), Some(ts(1)));
        let outcome = collect_reports(&source).unwrap();

        assert_eq!(outcome.summaries.len(), 1);
        assert_eq!(outcome.summaries[0].slug, "run-001");
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].file, "run-002.json");
        assert!(matches!(outcome.skipped[0].reason, SkipReason::Invalid(_)));
    }

    #[test]
    fn test_missing_required_field_skips_the_file() {
        let source = MemorySource::new("mem").with_file(
            "run-001.json",
            r#"{"model": "omni-12b"}"#,
            Some(ts(1)),
        );
        let outcome = collect_reports(&source).unwrap();
        assert!(outcome.summaries.is_empty());
        assert!(matches!(outcome.skipped[0].reason, SkipReason::Invalid(_)));
    }

    #[test]
    fn test_unreadable_file_is_skipped_with_reason() {
        let source = MemorySource::new("mem")
            .with_unreadable_file("run-002.json")
            .with_file("run-001.json", report_json("vqa"), Some(ts(1)));
        let outcome = collect_reports(&source).unwrap();

        assert_eq!(outcome.summaries.len(), 1);
        assert_eq!(outcome.skipped.len(), 1);
        assert!(matches!(
            outcome.skipped[0].reason,
            SkipReason::Unreadable(_)
        ));
    }

    #[test]
    fn test_missing_directory_is_the_only_fatal_error() {
        let source = MemorySource::missing("/data/reports/multimodal_eval");
        let err = collect_reports(&source).unwrap_err();
        assert_eq!(err.path, "/data/reports/multimodal_eval");
        assert!(err.to_string().contains("/data/reports/multimodal_eval"));
    }

    #[test]
    fn test_empty_directory_yields_empty_success() {
        let outcome = collect_reports(&MemorySource::new("mem")).unwrap();
        assert!(outcome.summaries.is_empty());
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn test_stat_failure_leaves_generated_at_null() {
        let source = MemorySource::new("mem").with_file("run-001.json", report_json("vqa"), None);
        let outcome = collect_reports(&source).unwrap();

        assert_eq!(outcome.summaries.len(), 1);
        assert!(outcome.summaries[0].generated_at.is_none());
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn test_two_runs_come_back_newest_first_with_fields_intact() {
        let source = MemorySource::new("mem")
            .with_file(
                "run-001.json",
                r#"{"benchmark":"vqa","model":"m1","summary":{"acc":0.8},"records":[]}"#,
                Some(ts(1)),
            )
            .with_file(
                "run-003.json",
                r#"{"benchmark":"vqa","model":"m1","summary":{"acc":0.9},"records":[]}"#,
                Some(ts(3)),
            );
        let outcome = collect_reports(&source).unwrap();

        assert_eq!(outcome.summaries.len(), 2);
        assert_eq!(outcome.summaries[0].slug, "run-003");
        assert_eq!(outcome.summaries[0].summary.get("acc"), Some(&0.9));
        assert_eq!(outcome.summaries[0].generated_at, Some(ts(3)));
        assert_eq!(outcome.summaries[1].slug, "run-001");
        assert_eq!(outcome.summaries[1].summary.get("acc"), Some(&0.8));
        assert_eq!(outcome.summaries[1].benchmark, "vqa");
    }

    #[test]
    fn test_collect_from_dir_scans_real_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("run-001.json"), report_json("vqa")).unwrap();
        std::fs::write(dir.path().join("skip.txt"), "not a report").unwrap();

        let outcome = collect_from_dir(dir.path()).unwrap();
        assert_eq!(outcome.summaries.len(), 1);
        assert_eq!(outcome.summaries[0].slug, "run-001");
        assert!(outcome.summaries[0].generated_at.is_some());
    }

    #[test]
    fn test_collect_from_dir_missing_path_reports_it() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        let err = collect_from_dir(&missing).unwrap_err();
        assert_eq!(err.path, missing.display().to_string());
    }
}
