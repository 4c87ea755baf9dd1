// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// How the country calling code of a parsed number was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryCodeSource {
    /// The number started with `+`.
    FromNumberWithPlusSign,
    /// The number started with an international dialling prefix.
    FromNumberWithIdd,
    /// The number started with the country code but no `+`.
    FromNumberWithoutPlusSign,
    /// The country code came from the default region.
    FromDefaultCountry,
    /// The source was not recorded.
    Unspecified,
}

impl CountryCodeSource {
    /// Returns the upper snake case name of this source.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FromNumberWithPlusSign => "FROM_NUMBER_WITH_PLUS_SIGN",
            Self::FromNumberWithIdd => "FROM_NUMBER_WITH_IDD",
            Self::FromNumberWithoutPlusSign => "FROM_NUMBER_WITHOUT_PLUS_SIGN",
            Self::FromDefaultCountry => "FROM_DEFAULT_COUNTRY",
            Self::Unspecified => "UNSPECIFIED",
        }
    }
}

impl std::fmt::Display for CountryCodeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The result of parsing a phone number while keeping the raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber {
    /// The country calling code, e.g. 44.
    pub country_code: u16,
    /// The national significant number without leading zeros.
    pub national_number: u64,
    /// The extension, empty when there is none.
    pub extension: String,
    /// How the country code was determined.
    pub country_code_source: CountryCodeSource,
    /// Whether the national number carries a significant leading zero.
    pub italian_leading_zero: bool,
    /// How many significant leading zeros precede the national number.
    pub number_of_leading_zeros: u8,
    /// The input exactly as it was supplied to the parser.
    pub raw_input: String,
}

impl ParsedNumber {
    /// Returns the national significant number including leading zeros.
    #[must_use]
    pub fn national_significant_number(&self) -> String {
        let mut nsn: String = String::new();
        if self.italian_leading_zero {
            for _ in 0..self.number_of_leading_zeros {
                nsn.push('0');
            }
        }
        nsn.push_str(&self.national_number.to_string());
        nsn
    }
}

/// The category of a phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberType {
    FixedLine,
    Mobile,
    FixedLineOrMobile,
    TollFree,
    PremiumRate,
    SharedCost,
    Voip,
    PersonalNumber,
    Pager,
    Uan,
    Voicemail,
    Unknown,
}

impl NumberType {
    /// Returns the upper snake case name of this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FixedLine => "FIXED_LINE",
            Self::Mobile => "MOBILE",
            Self::FixedLineOrMobile => "FIXED_LINE_OR_MOBILE",
            Self::TollFree => "TOLL_FREE",
            Self::PremiumRate => "PREMIUM_RATE",
            Self::SharedCost => "SHARED_COST",
            Self::Voip => "VOIP",
            Self::PersonalNumber => "PERSONAL_NUMBER",
            Self::Pager => "PAGER",
            Self::Uan => "UAN",
            Self::Voicemail => "VOICEMAIL",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Returns whether carrier information is meaningful for this type.
    ///
    /// Carriers are only attributed to numbers that can be mobile or paging
    /// numbers; fixed-line ranges are not tied to a carrier.
    #[must_use]
    pub const fn has_carrier(&self) -> bool {
        matches!(self, Self::Mobile | Self::FixedLineOrMobile | Self::Pager)
    }
}

impl std::fmt::Display for NumberType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The outcome of a possible-number check with its reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationResult {
    IsPossible,
    IsPossibleLocalOnly,
    InvalidCountryCode,
    TooShort,
    InvalidLength,
    TooLong,
}

impl ValidationResult {
    /// Returns the upper snake case name of this result.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IsPossible => "IS_POSSIBLE",
            Self::IsPossibleLocalOnly => "IS_POSSIBLE_LOCAL_ONLY",
            Self::InvalidCountryCode => "INVALID_COUNTRY_CODE",
            Self::TooShort => "TOO_SHORT",
            Self::InvalidLength => "INVALID_LENGTH",
            Self::TooLong => "TOO_LONG",
        }
    }

    /// Returns whether this result counts as a possible number.
    #[must_use]
    pub const fn is_possible(&self) -> bool {
        matches!(self, Self::IsPossible | Self::IsPossibleLocalOnly)
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A whole-number formatting style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberFormat {
    E164,
    International,
    National,
}
