// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-section analysis results that make up a report.

use crate::number::{NumberType, ValidationResult};

/// A predicate that is only evaluated when its precondition holds.
///
/// `NotApplicable` is distinct from `Evaluated(false)`: the former means the
/// line is omitted from the report, the latter that the check ran and failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Check {
    /// The precondition did not hold, so the predicate was not evaluated.
    #[default]
    NotApplicable,
    /// The predicate was evaluated with the given result.
    Evaluated(bool),
}

impl Check {
    /// Evaluates `predicate` only when `precondition` holds.
    #[must_use]
    pub fn when(precondition: bool, predicate: impl FnOnce() -> bool) -> Self {
        if precondition {
            Self::Evaluated(predicate())
        } else {
            Self::NotApplicable
        }
    }

    /// Returns whether the predicate was evaluated and held.
    #[must_use]
    pub const fn passed(&self) -> bool {
        matches!(self, Self::Evaluated(true))
    }

    /// Returns the evaluated value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<bool> {
        match self {
            Self::NotApplicable => None,
            Self::Evaluated(value) => Some(*value),
        }
    }
}

/// Whether a parsed number is possible, and what follows from that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Possibility {
    /// The number failed the possible-number check.
    ///
    /// Such numbers are reported as invalid with unknown type and region, so
    /// no further lookups are made.
    NotPossible {
        /// Why the number is not possible.
        reason: ValidationResult,
    },
    /// The number passed the possible-number check.
    Possible {
        /// Validity for the default region; only evaluated for valid numbers
        /// when a default region was supplied.
        valid_for_region: Check,
        /// The region the number belongs to, if one could be determined.
        region: Option<String>,
        /// The category of the number.
        number_type: NumberType,
    },
}

/// Validation results for a parsed number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Whether the number is valid. Impossible numbers are always invalid.
    pub is_valid: bool,
    /// The possible-number check and its dependent results.
    pub possibility: Possibility,
}

impl ValidationOutcome {
    /// Returns the number type when it was determined.
    #[must_use]
    pub const fn number_type(&self) -> Option<NumberType> {
        match &self.possibility {
            Possibility::Possible { number_type, .. } => Some(*number_type),
            Possibility::NotPossible { .. } => None,
        }
    }
}

/// Short number results, computed only for numbers that are not valid.
///
/// Each check depends on the one before it: validity only when possible,
/// the region checks only when possible and a default region was supplied,
/// and regional validity only when regionally possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShortNumberOutcome {
    pub is_possible: bool,
    pub is_valid: Check,
    pub is_possible_for_region: Check,
    pub is_valid_for_region: Check,
}

/// One of the fixed formatting variants shown in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatVariant {
    E164,
    Original,
    National,
    International,
    OutOfCountryFromUs,
    OutOfCountryFromCh,
}

impl FormatVariant {
    /// All variants in display order.
    pub const ALL: [Self; 6] = [
        Self::E164,
        Self::Original,
        Self::National,
        Self::International,
        Self::OutOfCountryFromUs,
        Self::OutOfCountryFromCh,
    ];

    /// Returns the row label of this variant.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::E164 => "E164 format",
            Self::Original => "Original format",
            Self::National => "National format",
            Self::International => "International format",
            Self::OutOfCountryFromUs => "Out-of-country format from US",
            Self::OutOfCountryFromCh => "Out-of-country format from CH",
        }
    }

    /// Returns whether this variant is only produced for valid numbers.
    ///
    /// Original and national formats are best-effort and are attempted for
    /// invalid numbers too.
    #[must_use]
    pub const fn requires_valid_number(&self) -> bool {
        !matches!(self, Self::Original | Self::National)
    }
}

/// A formatted string, or the marker for a number that could not be formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formatted {
    Value(String),
    Invalid,
}

impl Formatted {
    /// The text shown for numbers that were not formatted.
    pub const INVALID: &'static str = "invalid";

    /// Returns the formatted text, or `"invalid"`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Value(value) => value,
            Self::Invalid => Self::INVALID,
        }
    }
}

/// The formatting section of a report, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattingOutcome {
    pub variants: Vec<(FormatVariant, Formatted)>,
}

impl FormattingOutcome {
    /// Returns the result for a single variant.
    #[must_use]
    pub fn get(&self, variant: FormatVariant) -> Option<&Formatted> {
        self.variants
            .iter()
            .find(|(v, _)| *v == variant)
            .map(|(_, formatted)| formatted)
    }
}

/// One character fed to the as-you-type formatter and its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsYouTypeStep {
    pub input: char,
    pub output: String,
}

/// The replay of the raw input through an as-you-type formatter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AsYouTypeTrace {
    pub steps: Vec<AsYouTypeStep>,
}

impl AsYouTypeTrace {
    /// Returns the formatter output after the last character, if any.
    #[must_use]
    pub fn final_output(&self) -> Option<&str> {
        self.steps.last().map(|step| step.output.as_str())
    }
}

/// Location, time zone and carrier lookups for a valid number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOutcome {
    /// Geographic description in the display locale.
    pub location: String,
    /// Time zones the number may be in.
    pub time_zones: Vec<String>,
    /// Carrier name; only looked up for mobile and pager numbers.
    pub carrier: Option<String>,
}
