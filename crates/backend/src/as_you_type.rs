// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dialscope_domain::{AsYouTypeFormatter, ParsedNumber, PhoneNumberUtil};

use crate::util::PhoneNumberBackend;

/// As-you-type formatter that reformats everything typed so far.
///
/// Until the accrued input forms a valid number it is echoed back unchanged.
#[derive(Debug, Clone)]
pub struct ReformattingAsYouType {
    backend: PhoneNumberBackend,
    region: String,
    accrued: String,
}

impl ReformattingAsYouType {
    #[must_use]
    pub fn new(backend: PhoneNumberBackend, region: &str) -> Self {
        Self {
            backend,
            region: region.to_string(),
            accrued: String::new(),
        }
    }
}

impl AsYouTypeFormatter for ReformattingAsYouType {
    fn input_digit(&mut self, next: char) -> String {
        self.accrued.push(next);
        self.backend
            .parse_and_keep_raw_input(&self.accrued, &self.region)
            .ok()
            .filter(|parsed: &ParsedNumber| self.backend.is_valid_number(parsed))
            .map_or_else(
                || self.accrued.clone(),
                |parsed| self.backend.format_in_original_format(&parsed, &self.region),
            )
    }
}
