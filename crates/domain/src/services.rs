// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Contracts of the phone number analysis services.
//!
//! The report pipeline never talks to a numbering-plan implementation
//! directly. It receives an [`AnalysisServices`] bundle built once at process
//! start and calls through these traits. Implementations must be stateless
//! or internally synchronized; the only stateful object is the per-request
//! [`AsYouTypeFormatter`].

use std::sync::Arc;

use crate::error::NumberParseError;
use crate::locale::DisplayLocale;
use crate::number::{NumberFormat, NumberType, ParsedNumber, ValidationResult};

/// Parsing, validation and formatting of phone numbers.
pub trait PhoneNumberUtil: Send + Sync {
    /// Parses `raw` using `region` for nationally formatted input, keeping
    /// the raw input on the result.
    ///
    /// # Errors
    ///
    /// Returns a [`NumberParseError`] describing why `raw` is not a number.
    fn parse_and_keep_raw_input(
        &self,
        raw: &str,
        region: &str,
    ) -> Result<ParsedNumber, NumberParseError>;

    /// Cheap length-based plausibility check.
    fn is_possible_number(&self, number: &ParsedNumber) -> bool {
        self.is_possible_number_with_reason(number).is_possible()
    }

    /// Plausibility check with the reason for the result.
    fn is_possible_number_with_reason(&self, number: &ParsedNumber) -> ValidationResult;

    /// Full validation against the numbering plan.
    fn is_valid_number(&self, number: &ParsedNumber) -> bool;

    /// Validation against the numbering plan of `region`.
    fn is_valid_number_for_region(&self, number: &ParsedNumber, region: &str) -> bool;

    /// The category of the number.
    fn get_number_type(&self, number: &ParsedNumber) -> NumberType;

    /// The region the number belongs to, if it can be determined.
    fn get_region_code_for_number(&self, number: &ParsedNumber) -> Option<String>;

    /// Formats the number in one of the whole-number styles.
    fn format(&self, number: &ParsedNumber, format: NumberFormat) -> String;

    /// Formats the number the way it was originally entered, relative to
    /// `region`.
    fn format_in_original_format(&self, number: &ParsedNumber, region: &str) -> String;

    /// Formats the number as it would be dialled from `calling_from`.
    fn format_out_of_country_calling_number(
        &self,
        number: &ParsedNumber,
        calling_from: &str,
    ) -> String;

    /// Creates a fresh as-you-type formatter for `region`.
    fn get_as_you_type_formatter(&self, region: &str) -> Box<dyn AsYouTypeFormatter>;
}

/// Incremental formatting of a number typed one character at a time.
pub trait AsYouTypeFormatter {
    /// Feeds one character and returns the formatted number so far.
    fn input_digit(&mut self, next: char) -> String;
}

/// Checks against short-code numbering spaces (emergency and service codes).
pub trait ShortNumberInfo: Send + Sync {
    fn is_possible_short_number(&self, number: &ParsedNumber) -> bool;

    fn is_valid_short_number(&self, number: &ParsedNumber) -> bool;

    fn is_possible_short_number_for_region(&self, number: &ParsedNumber, region: &str) -> bool;

    fn is_valid_short_number_for_region(&self, number: &ParsedNumber, region: &str) -> bool;
}

/// Geographic descriptions of numbers.
pub trait Geocoder: Send + Sync {
    /// Describes where the number is located, in `locale`'s language.
    fn description_for_number(&self, number: &ParsedNumber, locale: &DisplayLocale) -> String;
}

/// Time zones of numbers.
pub trait TimeZoneMapper: Send + Sync {
    /// The IANA time zones the number may be in.
    fn time_zones_for_number(&self, number: &ParsedNumber) -> Vec<String>;
}

/// Carrier names of numbers.
pub trait CarrierMapper: Send + Sync {
    /// The name of the carrier the number was originally allocated to.
    fn name_for_number(&self, number: &ParsedNumber, locale: &DisplayLocale) -> String;
}

/// Handles to every analysis service, shared across requests.
#[derive(Clone)]
pub struct AnalysisServices {
    pub phone_util: Arc<dyn PhoneNumberUtil>,
    pub short_info: Arc<dyn ShortNumberInfo>,
    pub geocoder: Arc<dyn Geocoder>,
    pub time_zones: Arc<dyn TimeZoneMapper>,
    pub carriers: Arc<dyn CarrierMapper>,
}

impl std::fmt::Debug for AnalysisServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisServices").finish_non_exhaustive()
    }
}
