// Copyright 2026 Multimodal Eval Contributors
// SPDX-License-Identifier: Apache-2.0

//! Service configuration.
//!
//! Settings come from the process environment under the `MULTIMODAL_EVAL`
//! prefix, with fixed defaults for anything unset. Reading the
//! environment happens here and nowhere else; the rest of the service
//! takes resolved values.

use serde::Deserialize;

use multimodal_eval_reports::DEFAULT_REPORTS_DIR;

const DEFAULT_BIND: &str = "127.0.0.1:8807";

/// Resolved service settings.
///
/// # Environment
///
/// - `MULTIMODAL_EVAL_DIR`: report directory to scan. Defaults to
///   `../reports/multimodal_eval`, relative to the working directory.
/// - `MULTIMODAL_EVAL_BIND`: socket address the HTTP server binds.
///   Defaults to `127.0.0.1:8807`.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Report directory to scan.
    pub dir: String,
    /// Socket address the HTTP server binds.
    pub bind: String,
}

impl Settings {
    /// Load settings from the process environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::with_prefix("MULTIMODAL_EVAL"))
    }

    fn from_environment(env: config::Environment) -> Result<Self, config::ConfigError> {
        let cfg = config::Config::builder()
            .set_default("dir", DEFAULT_REPORTS_DIR)?
            .set_default("bind", DEFAULT_BIND)?
            .add_source(env)
            .build()?;
        cfg.try_deserialize()
    }
}
