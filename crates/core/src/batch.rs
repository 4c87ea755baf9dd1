// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Batch processing of comma-separated numbers from an uploaded file.
//!
//! Each token is parsed and formatted independently; a token that fails to
//! parse only marks its own row as failed.

use dialscope_domain::{
    Formatted, NumberFormat, NumberParseError, ParsedNumber, PhoneNumberUtil, RegionCode,
};
use tracing::debug;

use crate::render;

/// What was produced for one batch row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchRowResult {
    /// The token parsed; each column is `invalid` unless the number is valid.
    Formatted {
        pretty: Formatted,
        international: Formatted,
    },
    /// The token did not parse.
    Failed(NumberParseError),
}

/// One row of a batch report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRow {
    /// Position of the token in the payload, starting at 1.
    pub id: usize,
    /// The token exactly as it appeared in the payload.
    pub raw_number: String,
    pub result: BatchRowResult,
}

/// The rows of a batch report, in payload order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchReport {
    pub rows: Vec<BatchRow>,
}

impl BatchReport {
    /// Returns the number of rows whose token failed to parse.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| matches!(row.result, BatchRowResult::Failed(_)))
            .count()
    }
}

/// Splits a payload into number tokens.
///
/// Tokens are separated by commas. Empty tokens are skipped and surrounding
/// whitespace is kept as part of the token.
pub fn tokenize(payload: &str) -> impl Iterator<Item = &str> {
    payload.split(',').filter(|token| !token.is_empty())
}

/// Runs the reduced per-row analysis over a batch payload.
#[derive(Clone, Copy)]
pub struct BatchProcessor<'a> {
    phone_util: &'a dyn PhoneNumberUtil,
}

impl<'a> BatchProcessor<'a> {
    /// Creates a batch processor.
    #[must_use]
    pub const fn new(phone_util: &'a dyn PhoneNumberUtil) -> Self {
        Self { phone_util }
    }

    /// Processes and renders the HTML table for `payload`.
    #[must_use]
    pub fn render(&self, payload: &str, region: &RegionCode) -> String {
        render::batch_html(&self.process(payload, region))
    }

    /// Processes every token of `payload` using one shared default region.
    #[must_use]
    pub fn process(&self, payload: &str, region: &RegionCode) -> BatchReport {
        let rows: Vec<BatchRow> = tokenize(payload)
            .enumerate()
            .map(|(index, token)| BatchRow {
                id: index + 1,
                raw_number: token.to_string(),
                result: self.process_token(token, region),
            })
            .collect();

        let report: BatchReport = BatchReport { rows };
        debug!(
            rows = report.rows.len(),
            failed = report.failed_count(),
            region = %region,
            "Processed batch"
        );
        report
    }

    fn process_token(&self, token: &str, region: &RegionCode) -> BatchRowResult {
        let parsed: ParsedNumber = match self
            .phone_util
            .parse_and_keep_raw_input(token, region.as_str())
        {
            Ok(parsed) => parsed,
            Err(err) => return BatchRowResult::Failed(err),
        };

        if !self.phone_util.is_valid_number(&parsed) {
            return BatchRowResult::Formatted {
                pretty: Formatted::Invalid,
                international: Formatted::Invalid,
            };
        }

        BatchRowResult::Formatted {
            pretty: Formatted::Value(
                self.phone_util
                    .format_in_original_format(&parsed, region.as_str()),
            ),
            international: Formatted::Value(
                self.phone_util
                    .format(&parsed, NumberFormat::International),
            ),
        }
    }
}

impl std::fmt::Debug for BatchProcessor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchProcessor").finish_non_exhaustive()
    }
}
