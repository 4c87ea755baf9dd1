// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// The reason a string could not be parsed as a phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The country calling code was missing or not recognised.
    InvalidCountryCode,
    /// The input did not look like a phone number at all.
    NotANumber,
    /// The number was too short after the international dialling prefix.
    TooShortAfterIdd,
    /// The national significant number was too short.
    TooShortNsn,
    /// The input was too long to be a phone number.
    TooLong,
}

impl ParseErrorKind {
    /// Returns the upper snake case name of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCountryCode => "INVALID_COUNTRY_CODE",
            Self::NotANumber => "NOT_A_NUMBER",
            Self::TooShortAfterIdd => "TOO_SHORT_AFTER_IDD",
            Self::TooShortNsn => "TOO_SHORT_NSN",
            Self::TooLong => "TOO_LONG",
        }
    }

    /// Returns the default human-readable message for this kind.
    #[must_use]
    pub const fn default_message(&self) -> &'static str {
        match self {
            Self::InvalidCountryCode => "Could not interpret numbers after plus-sign.",
            Self::NotANumber => "The string supplied did not seem to be a phone number.",
            Self::TooShortAfterIdd => {
                "Phone number had an IDD, but after this was not long enough to be a viable phone number."
            }
            Self::TooShortNsn => "The string supplied is too short to be a phone number.",
            Self::TooLong => "The string supplied is too long to be a phone number.",
        }
    }
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A phone number could not be parsed.
///
/// Parse failures are ordinary values: the single-number report renders the
/// message in place of every analysis section, and a batch renders it in the
/// affected row only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberParseError {
    /// The reason parsing failed.
    pub kind: ParseErrorKind,
    /// The detail message reported by the parser.
    pub message: String,
}

impl NumberParseError {
    /// Creates a parse error carrying the default message for `kind`.
    #[must_use]
    pub fn new(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            message: String::from(kind.default_message()),
        }
    }

    /// Creates a parse error with a parser-specific message.
    #[must_use]
    pub fn with_message(kind: ParseErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for NumberParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error type: {}. {}", self.kind, self.message)
    }
}

impl std::error::Error for NumberParseError {}
