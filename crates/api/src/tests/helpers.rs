// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use dialscope::LinkConfig;
use dialscope_domain::AnalysisServices;

use crate::{FormPart, FormSubmission};

pub const TEST_UPLOAD_LIMIT: usize = 1024;

pub fn create_test_services() -> AnalysisServices {
    dialscope_backend::analysis_services()
}

pub fn create_test_links() -> LinkConfig {
    LinkConfig::default()
}

pub fn create_test_submission(number: &str, country: &str) -> FormSubmission {
    FormSubmission::from_parts(
        [
            FormPart::field("phoneNumber", number),
            FormPart::field("defaultCountry", country),
            FormPart::field("languageCode", ""),
            FormPart::field("regionCode", ""),
        ],
        TEST_UPLOAD_LIMIT,
    )
    .expect("form fields should be accepted")
}

/// Reads a relative permalink back into its query parameters.
pub fn query_pairs(location: &str) -> Vec<(String, String)> {
    let (_, query) = location.split_once('?').expect("location should carry a query");
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}
