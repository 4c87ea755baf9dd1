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

//! Analysis services backed by the `phonenumber` crate.
//!
//! The crate ships libphonenumber's numbering-plan metadata but none of the
//! geocoding, carrier, time zone or short-number data. Those services answer
//! with libphonenumber's "unknown" results.

mod as_you_type;
mod convert;
mod lookup;
mod util;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use dialscope_domain::AnalysisServices;

pub use as_you_type::ReformattingAsYouType;
pub use lookup::{
    LengthShortNumberInfo, NoCarrierData, NoGeocodingData, NoTimeZoneData, UNKNOWN_TIME_ZONE,
};
pub use util::PhoneNumberBackend;

/// Builds the service bundle used by the server.
#[must_use]
pub fn analysis_services() -> AnalysisServices {
    AnalysisServices {
        phone_util: Arc::new(PhoneNumberBackend::new()),
        short_info: Arc::new(LengthShortNumberInfo),
        geocoder: Arc::new(NoGeocodingData),
        time_zones: Arc::new(NoTimeZoneData),
        carriers: Arc::new(NoCarrierData),
    }
}
