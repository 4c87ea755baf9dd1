// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lookup services without bundled data.

use std::ops::RangeInclusive;

use dialscope_domain::{
    CarrierMapper, DisplayLocale, Geocoder, ParsedNumber, ShortNumberInfo, TimeZoneMapper,
};
use phonenumber::metadata::DATABASE;

/// Lengths of the national significant number a short code can have.
const SHORT_NUMBER_LENGTHS: RangeInclusive<usize> = 3..=6;

/// Time zone reported for numbers with no known zone.
pub const UNKNOWN_TIME_ZONE: &str = "Etc/Unknown";

/// Short-number checks based on length only.
///
/// No short codes are known, so no short number is ever valid.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthShortNumberInfo;

impl ShortNumberInfo for LengthShortNumberInfo {
    fn is_possible_short_number(&self, number: &ParsedNumber) -> bool {
        SHORT_NUMBER_LENGTHS.contains(&number.national_significant_number().len())
    }

    fn is_valid_short_number(&self, _number: &ParsedNumber) -> bool {
        false
    }

    fn is_possible_short_number_for_region(&self, number: &ParsedNumber, region: &str) -> bool {
        self.is_possible_short_number(number)
            && DATABASE
                .by_id(region)
                .is_some_and(|metadata| metadata.country_code() == number.country_code)
    }

    fn is_valid_short_number_for_region(&self, _number: &ParsedNumber, _region: &str) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeocodingData;

impl Geocoder for NoGeocodingData {
    fn description_for_number(&self, _number: &ParsedNumber, _locale: &DisplayLocale) -> String {
        String::new()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoTimeZoneData;

impl TimeZoneMapper for NoTimeZoneData {
    fn time_zones_for_number(&self, _number: &ParsedNumber) -> Vec<String> {
        vec![String::from(UNKNOWN_TIME_ZONE)]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoCarrierData;

impl CarrierMapper for NoCarrierData {
    fn name_for_number(&self, _number: &ParsedNumber, _locale: &DisplayLocale) -> String {
        String::new()
    }
}
