// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsing, validation and formatting through the `phonenumber` crate.

use dialscope_domain::{
    AsYouTypeFormatter, CountryCodeSource, NumberFormat, NumberParseError, NumberType,
    ParsedNumber, PhoneNumberUtil, ValidationResult,
};
use phonenumber::metadata::{DATABASE, Descriptor, Descriptors, Metadata};
use phonenumber::{Mode, PhoneNumber};
use tracing::debug;

use crate::as_you_type::ReformattingAsYouType;
use crate::convert;

/// Country calling code shared by the North American Numbering Plan.
const NANPA_COUNTRY_CODE: u16 = 1;

/// Phone number utility backed by libphonenumber metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneNumberBackend;

impl PhoneNumberBackend {
    /// Creates the backend.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn main_metadata(country_code: u16) -> Option<&'static Metadata> {
        DATABASE
            .by_code(&country_code)
            .and_then(|regions| regions.into_iter().next())
    }

    /// Returns the international prefix dialled from the region, if it has
    /// a single one or names a preferred one.
    fn international_prefix(metadata: &Metadata) -> Option<&str> {
        if let Some(pattern) = metadata.international_prefix() {
            let prefix: &str = pattern.as_str();
            if is_unique_international_prefix(prefix) {
                return Some(prefix);
            }
        }
        metadata.preferred_international_prefix()
    }

    fn valid_phone(number: &ParsedNumber) -> Option<PhoneNumber> {
        convert::to_phone(number).filter(phonenumber::is_valid)
    }

    /// Formats without metadata when the number cannot be rebuilt.
    fn fallback_format(number: &ParsedNumber, format: NumberFormat) -> String {
        let nsn: String = number.national_significant_number();
        match format {
            NumberFormat::E164 | NumberFormat::International => {
                format!("+{}{nsn}", number.country_code)
            }
            NumberFormat::National => nsn,
        }
    }
}

impl PhoneNumberUtil for PhoneNumberBackend {
    fn parse_and_keep_raw_input(
        &self,
        raw: &str,
        region: &str,
    ) -> Result<ParsedNumber, NumberParseError> {
        let phone: PhoneNumber = convert::parse(convert::region_id(region), raw)?;
        let parsed: ParsedNumber = convert::to_parsed(&phone, raw);
        debug!(
            country_code = parsed.country_code,
            national_number = parsed.national_number,
            source = %parsed.country_code_source,
            "Parsed number"
        );
        Ok(parsed)
    }

    fn is_possible_number_with_reason(&self, number: &ParsedNumber) -> ValidationResult {
        let Some(metadata) = Self::main_metadata(number.country_code) else {
            return ValidationResult::InvalidCountryCode;
        };
        let (possible, local_only): (Vec<u16>, Vec<u16>) = possible_lengths(metadata);
        check_length(
            number.national_significant_number().len(),
            &possible,
            &local_only,
        )
    }

    fn is_valid_number(&self, number: &ParsedNumber) -> bool {
        Self::valid_phone(number).is_some()
    }

    fn is_valid_number_for_region(&self, number: &ParsedNumber, region: &str) -> bool {
        let Some(expected) = convert::region_id(region) else {
            return false;
        };
        Self::valid_phone(number).is_some_and(|phone| phone.country().id() == Some(expected))
    }

    fn get_number_type(&self, number: &ParsedNumber) -> NumberType {
        Self::valid_phone(number).map_or(NumberType::Unknown, |phone| {
            convert::number_type(phone.number_type(&DATABASE))
        })
    }

    fn get_region_code_for_number(&self, number: &ParsedNumber) -> Option<String> {
        convert::to_phone(number)
            .and_then(|phone| phone.country().id())
            .map(convert::region_string)
    }

    fn format(&self, number: &ParsedNumber, format: NumberFormat) -> String {
        let mode: Mode = match format {
            NumberFormat::E164 => Mode::E164,
            NumberFormat::International => Mode::International,
            NumberFormat::National => Mode::National,
        };
        convert::to_phone(number).map_or_else(
            || Self::fallback_format(number, format),
            |phone| phone.format().mode(mode).to_string(),
        )
    }

    fn format_in_original_format(&self, number: &ParsedNumber, region: &str) -> String {
        let formatted: String = match number.country_code_source {
            CountryCodeSource::FromDefaultCountry => self.format(number, NumberFormat::National),
            CountryCodeSource::FromNumberWithIdd if convert::region_id(region).is_some() => {
                self.format_out_of_country_calling_number(number, region)
            }
            CountryCodeSource::FromNumberWithoutPlusSign => self
                .format(number, NumberFormat::International)
                .trim_start_matches('+')
                .to_string(),
            _ => self.format(number, NumberFormat::International),
        };

        // The result must dial the same characters the user entered.
        if number.raw_input.is_empty() || diallable(&formatted) == diallable(&number.raw_input) {
            formatted
        } else {
            number.raw_input.clone()
        }
    }

    fn format_out_of_country_calling_number(
        &self,
        number: &ParsedNumber,
        calling_from: &str,
    ) -> String {
        let Some(origin) = DATABASE.by_id(calling_from) else {
            return self.format(number, NumberFormat::International);
        };

        if origin.country_code() == number.country_code {
            let national: String = self.format(number, NumberFormat::National);
            if number.country_code == NANPA_COUNTRY_CODE {
                return format!("{NANPA_COUNTRY_CODE} {national}");
            }
            return national;
        }

        let international: String = self.format(number, NumberFormat::International);
        match Self::international_prefix(origin) {
            Some(prefix) => format!("{prefix} {}", international.trim_start_matches('+')),
            None => international,
        }
    }

    fn get_as_you_type_formatter(&self, region: &str) -> Box<dyn AsYouTypeFormatter> {
        Box::new(ReformattingAsYouType::new(*self, region))
    }
}

/// Keeps only the characters that are dialled.
fn diallable(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '*' | '#'))
        .collect()
}

/// Whether an international prefix pattern is a single dialable prefix,
/// optionally with a `~` marking a wait for dial tone.
fn is_unique_international_prefix(prefix: &str) -> bool {
    !prefix.is_empty()
        && prefix.split('~').count() <= 2
        && prefix
            .split('~')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}

/// Collects the national and local-only lengths of every number type a
/// region defines.
///
/// A length that is possible nationally for one type is never reported as
/// local-only.
#[must_use]
pub fn possible_lengths(metadata: &Metadata) -> (Vec<u16>, Vec<u16>) {
    let descriptors: &Descriptors = metadata.descriptors();
    let typed: [Option<&Descriptor>; 10] = [
        descriptors.fixed_line(),
        descriptors.mobile(),
        descriptors.toll_free(),
        descriptors.premium_rate(),
        descriptors.shared_cost(),
        descriptors.personal_number(),
        descriptors.voip(),
        descriptors.pager(),
        descriptors.uan(),
        descriptors.voicemail(),
    ];

    let mut possible: Vec<u16> = descriptors.general().possible_length().to_vec();
    let mut local_only: Vec<u16> = descriptors.general().possible_local_length().to_vec();
    for descriptor in typed.into_iter().flatten() {
        possible.extend_from_slice(descriptor.possible_length());
        local_only.extend_from_slice(descriptor.possible_local_length());
    }
    possible.sort_unstable();
    possible.dedup();
    local_only.sort_unstable();
    local_only.dedup();
    local_only.retain(|len| !possible.contains(len));
    (possible, local_only)
}

/// Classifies a national significant number length against the lengths a
/// numbering plan allows.
#[must_use]
pub fn check_length(len: usize, possible: &[u16], local_only: &[u16]) -> ValidationResult {
    let Ok(len) = u16::try_from(len) else {
        return ValidationResult::TooLong;
    };
    let (Some(min), Some(max)) = (possible.iter().min(), possible.iter().max()) else {
        return ValidationResult::InvalidLength;
    };

    if local_only.contains(&len) {
        ValidationResult::IsPossibleLocalOnly
    } else if len < *min {
        ValidationResult::TooShort
    } else if len > *max {
        ValidationResult::TooLong
    } else if possible.contains(&len) {
        ValidationResult::IsPossible
    } else {
        ValidationResult::InvalidLength
    }
}
