// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dialscope::LinkConfig;
use dialscope_domain::{AnalysisRequest, AnalysisServices};

use super::helpers::{
    TEST_UPLOAD_LIMIT, create_test_links, create_test_services, create_test_submission,
    query_pairs,
};
use crate::{Dispatch, FormPart, FormSubmission, SingleNumberQuery, dispatch_get, dispatch_post};

fn get(query: &SingleNumberQuery) -> Dispatch {
    let services: AnalysisServices = create_test_services();
    let links: LinkConfig = create_test_links();
    dispatch_get(&services, &links, query)
}

fn post(submission: &FormSubmission) -> Dispatch {
    let services: AnalysisServices = create_test_services();
    let links: LinkConfig = create_test_links();
    dispatch_post(&services, &links, submission)
}

fn query_for(number: &str, country: &str) -> SingleNumberQuery {
    SingleNumberQuery {
        number: number.to_string(),
        country: country.to_string(),
        geocoding_locale: None,
    }
}

#[test]
fn test_get_renders_report_inline() {
    let Dispatch::Report(html) = get(&query_for("+1 650 253 0000", "us")) else {
        panic!("GET should render a report");
    };

    assert!(html.contains("Phone Number entered: +1 650 253 0000<br>"));
    assert!(html.contains("defaultCountry entered: US<br>"));
    assert!(html.contains("Parsing Result (parseAndKeepRawInput())"));
    assert!(html.contains("<tr><th>E164 format</th><td>+16502530000</td></tr>"));
}

#[test]
fn test_get_reports_valid_number_as_possible_and_valid() {
    let Dispatch::Report(html) = get(&query_for("+1 650 253 0000", "US")) else {
        panic!("GET should render a report");
    };

    assert!(html.contains("<tr><th>Result from isPossibleNumber()</th><td>true</td></tr>"));
    assert!(html.contains("<tr><th>Result from isValidNumber()</th><td>true</td></tr>"));
    assert!(html.contains(
        "<tr><th>Result from isValidNumberForRegion()</th><td>true</td></tr>"
    ));
    assert!(html.contains("<tr><th>Phone Number region</th><td>US</td></tr>"));
    assert!(html.contains("<tr><th>Result from getNumberType()</th><td>"));
    assert!(!html.contains("<tr><th>Result from getNumberType()</th><td>UNKNOWN</td></tr>"));
    assert!(!html.contains("numbers that are not possible"));
}

#[test]
fn test_get_with_empty_number_reports_parse_error() {
    let Dispatch::Report(html) = get(&SingleNumberQuery::default()) else {
        panic!("GET should render a report");
    };

    assert!(html.contains("Error type: "));
    assert!(!html.contains("Validation Results"));
}

#[test]
fn test_get_is_idempotent() {
    let query: SingleNumberQuery = query_for("+44 20 7031 3000", "GB");
    assert_eq!(get(&query), get(&query));
}

#[test]
fn test_post_without_file_redirects_to_permalink() {
    let dispatch: Dispatch = post(&create_test_submission("+1 650 253 0000", "us"));

    assert_eq!(
        dispatch,
        Dispatch::Redirect(String::from(
            "/phonenumberparser?number=%2B1+650+253+0000&country=US"
        ))
    );
}

#[test]
fn test_post_without_country_omits_country_parameter() {
    let dispatch: Dispatch = post(&create_test_submission("+1 650 253 0000", ""));

    assert_eq!(
        dispatch,
        Dispatch::Redirect(String::from("/phonenumberparser?number=%2B1+650+253+0000"))
    );
}

#[test]
fn test_post_with_locale_adds_geocoding_locale() {
    let submission: FormSubmission = FormSubmission::from_parts(
        [
            FormPart::field("phoneNumber", "044 668 18 00"),
            FormPart::field("defaultCountry", "ch"),
            FormPart::field("languageCode", "de"),
            FormPart::field("regionCode", "ch"),
        ],
        TEST_UPLOAD_LIMIT,
    )
    .unwrap();
    let Dispatch::Redirect(location) = post(&submission) else {
        panic!("POST without a file should redirect");
    };

    assert_eq!(
        location,
        "/phonenumberparser?number=044+668+18+00&country=CH&geocodingLocale=de-CH"
    );
}

#[test]
fn test_redirect_round_trips_to_the_same_request() {
    let submission: FormSubmission = FormSubmission::from_parts(
        [
            FormPart::field("phoneNumber", "+41 44 668 18 00 & more"),
            FormPart::field("defaultCountry", "ch"),
            FormPart::field("languageCode", "fr"),
            FormPart::field("regionCode", ""),
        ],
        TEST_UPLOAD_LIMIT,
    )
    .unwrap();
    let Dispatch::Redirect(location) = post(&submission) else {
        panic!("POST without a file should redirect");
    };

    let mut query: SingleNumberQuery = SingleNumberQuery::default();
    for (key, value) in query_pairs(&location) {
        match key.as_str() {
            "number" => query.number = value,
            "country" => query.country = value,
            "geocodingLocale" => query.geocoding_locale = Some(value),
            other => panic!("unexpected parameter {other}"),
        }
    }
    let expected: AnalysisRequest = submission.to_request();

    assert_eq!(query.to_request(), expected);
}

#[test]
fn test_post_with_file_renders_batch() {
    let submission: FormSubmission = FormSubmission::from_parts(
        [
            FormPart::field("phoneNumber", "ignored"),
            FormPart::field("defaultCountry", "us"),
            FormPart::file(
                "fileContents",
                "numbers.txt",
                "+1 650 253 0000,notanumber,+44 20 7031 3000",
            ),
        ],
        TEST_UPLOAD_LIMIT,
    )
    .unwrap();
    let Dispatch::Batch(html) = post(&submission) else {
        panic!("POST with a file should render a batch");
    };

    assert!(html.contains("Results generated from phone numbers in the file provided:"));
    assert!(html.contains("<td align=center>1 </td>"));
    assert!(html.contains("<td align=center>3 </td>"));
    assert_eq!(html.matches("colspan=2").count(), 1);
    assert!(!html.contains("ignored"));
}

#[test]
fn test_post_with_empty_file_redirects() {
    let submission: FormSubmission = FormSubmission::from_parts(
        [
            FormPart::field("phoneNumber", "911"),
            FormPart::field("defaultCountry", "us"),
            FormPart::file("fileContents", "", Vec::new()),
        ],
        TEST_UPLOAD_LIMIT,
    )
    .unwrap();

    assert!(matches!(post(&submission), Dispatch::Redirect(_)));
}
