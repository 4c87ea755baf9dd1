// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod locale;
mod number;
mod outcome;
mod region;
mod request;
mod services;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::{NumberParseError, ParseErrorKind};
pub use locale::{DisplayLocale, ENGLISH};
pub use number::{CountryCodeSource, NumberFormat, NumberType, ParsedNumber, ValidationResult};
pub use outcome::{
    AsYouTypeStep, AsYouTypeTrace, Check, FormatVariant, Formatted, FormattingOutcome,
    LookupOutcome, Possibility, ShortNumberOutcome, ValidationOutcome,
};
pub use region::{RegionCode, UNKNOWN_REGION};
pub use request::AnalysisRequest;
pub use services::{
    AnalysisServices, AsYouTypeFormatter, CarrierMapper, Geocoder, PhoneNumberUtil,
    ShortNumberInfo, TimeZoneMapper,
};
