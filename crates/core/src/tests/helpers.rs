// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Deterministic analysis services for tests.
//!
//! The fakes understand three numbering plans (US, GB and CH) with fixed
//! national number lengths, which is enough to drive every branch of the
//! report pipeline without depending on real metadata.

use std::sync::Arc;

use dialscope_domain::{
    AnalysisRequest, AnalysisServices, AsYouTypeFormatter, CarrierMapper, CountryCodeSource,
    DisplayLocale, Geocoder, NumberFormat, NumberParseError, NumberType, ParseErrorKind,
    ParsedNumber, PhoneNumberUtil, RegionCode, ShortNumberInfo, TimeZoneMapper, ValidationResult,
};

struct Plan {
    country_code: u16,
    region: &'static str,
    nsn_len: usize,
    idd: &'static str,
}

const PLANS: [Plan; 3] = [
    Plan {
        country_code: 1,
        region: "US",
        nsn_len: 10,
        idd: "011",
    },
    Plan {
        country_code: 44,
        region: "GB",
        nsn_len: 10,
        idd: "00",
    },
    Plan {
        country_code: 41,
        region: "CH",
        nsn_len: 9,
        idd: "00",
    },
];

fn plan_for_code(country_code: u16) -> Option<&'static Plan> {
    PLANS.iter().find(|p| p.country_code == country_code)
}

fn plan_for_region(region: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|p| p.region == region)
}

fn nsn(number: &ParsedNumber) -> String {
    number.national_number.to_string()
}

/// Splits `digits` into groups of the given sizes, or returns it unchanged
/// when the sizes do not add up.
fn group(digits: &str, sizes: &[usize], separator: &str) -> String {
    if sizes.iter().sum::<usize>() != digits.len() {
        return digits.to_string();
    }
    let mut parts: Vec<&str> = Vec::new();
    let mut start: usize = 0;
    for size in sizes {
        parts.push(&digits[start..start + size]);
        start += size;
    }
    parts.join(separator)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FakePhoneUtil;

impl FakePhoneUtil {
    fn grouped(number: &ParsedNumber) -> String {
        let digits: String = nsn(number);
        match number.country_code {
            1 => group(&digits, &[3, 3, 4], "-"),
            44 if digits.starts_with('7') => group(&digits, &[4, 6], " "),
            44 => group(&digits, &[2, 4, 4], " "),
            41 => group(&digits, &[2, 3, 2, 2], " "),
            _ => digits,
        }
    }
}

impl PhoneNumberUtil for FakePhoneUtil {
    fn parse_and_keep_raw_input(
        &self,
        raw: &str,
        region: &str,
    ) -> Result<ParsedNumber, NumberParseError> {
        let trimmed: &str = raw.trim();
        let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() || trimmed.chars().any(|c| c.is_ascii_alphabetic()) {
            return Err(NumberParseError::new(ParseErrorKind::NotANumber));
        }

        let (plan, national, source): (&Plan, String, CountryCodeSource) =
            if trimmed.starts_with('+') {
                let plan: &Plan = PLANS
                    .iter()
                    .find(|p| digits.starts_with(&p.country_code.to_string()))
                    .ok_or_else(|| NumberParseError::new(ParseErrorKind::InvalidCountryCode))?;
                let national: String = digits[plan.country_code.to_string().len()..].to_string();
                (plan, national, CountryCodeSource::FromNumberWithPlusSign)
            } else {
                let plan: &Plan = plan_for_region(region)
                    .ok_or_else(|| NumberParseError::new(ParseErrorKind::InvalidCountryCode))?;
                let national: &str = if plan.country_code == 1 {
                    &digits
                } else {
                    digits.strip_prefix('0').unwrap_or(&digits)
                };
                (
                    plan,
                    national.to_string(),
                    CountryCodeSource::FromDefaultCountry,
                )
            };

        if national.len() < 2 {
            return Err(NumberParseError::new(ParseErrorKind::TooShortNsn));
        }
        if national.len() > 17 {
            return Err(NumberParseError::new(ParseErrorKind::TooLong));
        }

        Ok(ParsedNumber {
            country_code: plan.country_code,
            national_number: national
                .parse()
                .map_err(|_| NumberParseError::new(ParseErrorKind::NotANumber))?,
            extension: String::new(),
            country_code_source: source,
            italian_leading_zero: false,
            number_of_leading_zeros: 1,
            raw_input: raw.to_string(),
        })
    }

    fn is_possible_number_with_reason(&self, number: &ParsedNumber) -> ValidationResult {
        let Some(plan) = plan_for_code(number.country_code) else {
            return ValidationResult::InvalidCountryCode;
        };
        let len: usize = nsn(number).len();
        if len < plan.nsn_len {
            ValidationResult::TooShort
        } else if len > plan.nsn_len {
            ValidationResult::TooLong
        } else {
            ValidationResult::IsPossible
        }
    }

    fn is_valid_number(&self, number: &ParsedNumber) -> bool {
        if !self.is_possible_number(number) {
            return false;
        }
        let first: char = nsn(number).chars().next().unwrap_or('0');
        match number.country_code {
            1 => ('2'..='9').contains(&first),
            44 => matches!(first, '2' | '7'),
            41 => matches!(first, '4' | '7'),
            _ => false,
        }
    }

    fn is_valid_number_for_region(&self, number: &ParsedNumber, region: &str) -> bool {
        self.get_region_code_for_number(number).as_deref() == Some(region)
    }

    fn get_number_type(&self, number: &ParsedNumber) -> NumberType {
        if !self.is_valid_number(number) {
            return NumberType::Unknown;
        }
        let mobile: bool = nsn(number).starts_with('7');
        match number.country_code {
            1 => NumberType::FixedLineOrMobile,
            _ if mobile => NumberType::Mobile,
            _ => NumberType::FixedLine,
        }
    }

    fn get_region_code_for_number(&self, number: &ParsedNumber) -> Option<String> {
        if !self.is_valid_number(number) {
            return None;
        }
        plan_for_code(number.country_code).map(|p| p.region.to_string())
    }

    fn format(&self, number: &ParsedNumber, format: NumberFormat) -> String {
        let grouped: String = Self::grouped(number);
        match format {
            NumberFormat::E164 => format!("+{}{}", number.country_code, nsn(number)),
            NumberFormat::International => format!("+{} {grouped}", number.country_code),
            NumberFormat::National if number.country_code == 1 => {
                let digits: String = nsn(number);
                if digits.len() == 10 {
                    format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
                } else {
                    digits
                }
            }
            NumberFormat::National => format!("0{grouped}"),
        }
    }

    fn format_in_original_format(&self, number: &ParsedNumber, _region: &str) -> String {
        match number.country_code_source {
            CountryCodeSource::FromDefaultCountry => self.format(number, NumberFormat::National),
            _ => self.format(number, NumberFormat::International),
        }
    }

    fn format_out_of_country_calling_number(
        &self,
        number: &ParsedNumber,
        calling_from: &str,
    ) -> String {
        let international: String = self.format(number, NumberFormat::International);
        match plan_for_region(calling_from) {
            None => international,
            Some(from) if from.country_code == number.country_code => {
                if from.country_code == 1 {
                    format!("1 {}", Self::grouped(number))
                } else {
                    self.format(number, NumberFormat::National)
                }
            }
            Some(from) => format!("{} {}", from.idd, &international[1..]),
        }
    }

    fn get_as_you_type_formatter(&self, region: &str) -> Box<dyn AsYouTypeFormatter> {
        Box::new(FakeAsYouType {
            region: region.to_string(),
            accrued: String::new(),
        })
    }
}

/// Reformats the accrued input whenever it forms a valid number.
pub struct FakeAsYouType {
    region: String,
    accrued: String,
}

impl AsYouTypeFormatter for FakeAsYouType {
    fn input_digit(&mut self, next: char) -> String {
        self.accrued.push(next);
        let util: FakePhoneUtil = FakePhoneUtil;
        match util.parse_and_keep_raw_input(&self.accrued, &self.region) {
            Ok(parsed) if util.is_valid_number(&parsed) => {
                util.format_in_original_format(&parsed, &self.region)
            }
            _ => self.accrued.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FakeShortNumberInfo;

impl ShortNumberInfo for FakeShortNumberInfo {
    fn is_possible_short_number(&self, number: &ParsedNumber) -> bool {
        (3..=6).contains(&nsn(number).len())
    }

    fn is_valid_short_number(&self, number: &ParsedNumber) -> bool {
        matches!(nsn(number).as_str(), "911" | "112" | "999")
    }

    fn is_possible_short_number_for_region(&self, number: &ParsedNumber, region: &str) -> bool {
        self.is_possible_short_number(number)
            && plan_for_region(region).is_some_and(|p| p.country_code == number.country_code)
    }

    fn is_valid_short_number_for_region(&self, number: &ParsedNumber, region: &str) -> bool {
        matches!(
            (nsn(number).as_str(), region),
            ("911", "US") | ("112" | "999", "GB") | ("112", "CH")
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FakeGeocoder;

impl Geocoder for FakeGeocoder {
    fn description_for_number(&self, number: &ParsedNumber, locale: &DisplayLocale) -> String {
        let digits: String = nsn(number);
        match number.country_code {
            1 if digits.starts_with("650") => String::from("Mountain View, CA"),
            44 if digits.starts_with('2') => String::from("London"),
            41 if locale.language() == "de" => String::from("Zürich"),
            41 => String::from("Zurich"),
            _ => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FakeTimeZoneMapper;

impl TimeZoneMapper for FakeTimeZoneMapper {
    fn time_zones_for_number(&self, number: &ParsedNumber) -> Vec<String> {
        match number.country_code {
            1 => vec![
                String::from("America/Los_Angeles"),
                String::from("America/New_York"),
            ],
            44 => vec![String::from("Europe/London")],
            41 => vec![String::from("Europe/Zurich")],
            _ => vec![String::from("Etc/Unknown")],
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FakeCarrierMapper;

impl CarrierMapper for FakeCarrierMapper {
    fn name_for_number(&self, number: &ParsedNumber, _locale: &DisplayLocale) -> String {
        if number.country_code == 44 && nsn(number).starts_with('7') {
            String::from("Vodafone")
        } else {
            String::new()
        }
    }
}

pub fn create_test_services() -> AnalysisServices {
    AnalysisServices {
        phone_util: Arc::new(FakePhoneUtil),
        short_info: Arc::new(FakeShortNumberInfo),
        geocoder: Arc::new(FakeGeocoder),
        time_zones: Arc::new(FakeTimeZoneMapper),
        carriers: Arc::new(FakeCarrierMapper),
    }
}

pub fn create_test_request(number: &str, region: &str) -> AnalysisRequest {
    AnalysisRequest::single(number, RegionCode::from_input(region), DisplayLocale::english())
}

pub fn create_test_request_with_locale(
    number: &str,
    region: &str,
    locale: DisplayLocale,
) -> AnalysisRequest {
    AnalysisRequest::single(number, RegionCode::from_input(region), locale)
}
