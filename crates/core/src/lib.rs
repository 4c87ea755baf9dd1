// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod batch;
mod links;
mod render;
mod report;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use batch::{BatchProcessor, BatchReport, BatchRow, BatchRowResult, tokenize};
pub use links::{
    DEFAULT_ISSUE_TRACKER, DEFAULT_PUBLIC_ORIGIN, GUIDELINES_PATH, LinkConfig, PERMALINK_PATH,
    issue_title,
};
pub use render::{batch_html, error_html, html_escape, report_html};
pub use report::{
    NumberAnalysis, Report, ReportBody, ReportRenderer, check_short_number, format_variants,
    replay_as_you_type, validate,
};
