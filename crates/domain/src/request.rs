// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::locale::DisplayLocale;
use crate::region::RegionCode;

/// The normalized input of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// The phone number exactly as entered.
    pub raw_number: String,
    /// The region used to interpret nationally formatted numbers.
    pub default_region: RegionCode,
    /// The locale used for geocoding and carrier names.
    pub display_locale: DisplayLocale,
    /// Comma-separated numbers from an uploaded file, if one was sent.
    pub batch_payload: Option<String>,
}

impl AnalysisRequest {
    /// Creates a single-number request.
    #[must_use]
    pub fn single(
        raw_number: impl Into<String>,
        default_region: RegionCode,
        display_locale: DisplayLocale,
    ) -> Self {
        Self {
            raw_number: raw_number.into(),
            default_region,
            display_locale,
            batch_payload: None,
        }
    }

    /// Returns the batch payload when it is present and non-empty.
    #[must_use]
    pub fn batch(&self) -> Option<&str> {
        self.batch_payload.as_deref().filter(|p| !p.is_empty())
    }
}
