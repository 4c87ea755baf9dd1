// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversions between `phonenumber` values and domain values.

use std::panic;

use dialscope_domain::{
    CountryCodeSource, NumberParseError, NumberType, ParseErrorKind, ParsedNumber,
};
use phonenumber::{ParseError, PhoneNumber, Type, country};
use tracing::warn;

/// Resolves a region code to a country identifier.
///
/// Empty input and the unknown-region sentinel resolve to `None`.
#[must_use]
pub fn region_id(region: &str) -> Option<country::Id> {
    region.parse().ok()
}

/// Returns the two-letter code of a country identifier.
#[must_use]
pub fn region_string(id: country::Id) -> String {
    format!("{id:?}")
}

/// Parses `raw` with an optional default region.
///
/// The `phonenumber` parser can panic on some malformed input, so the call
/// is isolated and a panic is reported as `NOT_A_NUMBER`.
pub fn parse(region: Option<country::Id>, raw: &str) -> Result<PhoneNumber, NumberParseError> {
    match panic::catch_unwind(|| phonenumber::parse(region, raw)) {
        Ok(Ok(phone)) => Ok(phone),
        Ok(Err(err)) => Err(parse_error(&err)),
        Err(_) => {
            warn!(number = %raw, "phonenumber parser panicked");
            Err(NumberParseError::with_message(
                ParseErrorKind::NotANumber,
                "The string supplied could not be parsed.",
            ))
        }
    }
}

fn parse_error(err: &ParseError) -> NumberParseError {
    let kind: ParseErrorKind = match err {
        ParseError::InvalidCountryCode => ParseErrorKind::InvalidCountryCode,
        ParseError::TooShortAfterIdd => ParseErrorKind::TooShortAfterIdd,
        ParseError::TooShortNsn => ParseErrorKind::TooShortNsn,
        ParseError::TooLong => ParseErrorKind::TooLong,
        _ => ParseErrorKind::NotANumber,
    };
    NumberParseError::new(kind)
}

/// Copies the fields of a parsed `phonenumber` value.
#[must_use]
pub fn to_parsed(phone: &PhoneNumber, raw: &str) -> ParsedNumber {
    let zeros: u8 = phone.national().zeros();
    ParsedNumber {
        country_code: phone.code().value(),
        national_number: phone.national().value(),
        extension: phone
            .extension()
            .map(|ext| ext.to_string())
            .unwrap_or_default(),
        country_code_source: source(phone.code().source()),
        italian_leading_zero: zeros > 0,
        number_of_leading_zeros: zeros.max(1),
        raw_input: raw.to_string(),
    }
}

/// Rebuilds a `phonenumber` value from a parsed number.
///
/// Returns `None` when the number no longer parses on its own.
#[must_use]
pub fn to_phone(number: &ParsedNumber) -> Option<PhoneNumber> {
    let mut canonical: String = format!(
        "+{}{}",
        number.country_code,
        number.national_significant_number()
    );
    if !number.extension.is_empty() {
        canonical.push_str(" ext. ");
        canonical.push_str(&number.extension);
    }
    parse(None, &canonical).ok()
}

const fn source(source: country::Source) -> CountryCodeSource {
    match source {
        country::Source::Plus => CountryCodeSource::FromNumberWithPlusSign,
        country::Source::Idd => CountryCodeSource::FromNumberWithIdd,
        country::Source::Number => CountryCodeSource::FromNumberWithoutPlusSign,
        country::Source::Default => CountryCodeSource::FromDefaultCountry,
    }
}

#[must_use]
pub const fn number_type(kind: Type) -> NumberType {
    match kind {
        Type::FixedLine => NumberType::FixedLine,
        Type::Mobile => NumberType::Mobile,
        Type::FixedLineOrMobile => NumberType::FixedLineOrMobile,
        Type::TollFree => NumberType::TollFree,
        Type::PremiumRate => NumberType::PremiumRate,
        Type::SharedCost => NumberType::SharedCost,
        Type::Voip => NumberType::Voip,
        Type::PersonalNumber => NumberType::PersonalNumber,
        Type::Pager => NumberType::Pager,
        Type::Uan => NumberType::Uan,
        Type::Voicemail => NumberType::Voicemail,
        _ => NumberType::Unknown,
    }
}
