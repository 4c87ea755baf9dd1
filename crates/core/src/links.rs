// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Permalink and issue-report link construction.
//!
//! Permalink parameters use form-style encoding (`+` for spaces) so that the
//! query parses back to the exact input. The issue link's title and body use
//! strict percent-encoding (`%20` for spaces).

use dialscope_domain::{DisplayLocale, RegionCode};

/// Path of the single-number report page.
pub const PERMALINK_PATH: &str = "/phonenumberparser";

/// Origin used for absolute permalinks unless configured otherwise.
pub const DEFAULT_PUBLIC_ORIGIN: &str = "http://libphonenumber.appspot.com";

/// Endpoint that opens a new pre-filled issue.
pub const DEFAULT_ISSUE_TRACKER: &str = "https://github.com/googlei18n/libphonenumber/issues/new";

/// Where the contributor guidelines live, relative to the site root.
pub const GUIDELINES_PATH: &str = "/";

/// Bases used to build links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
    public_origin: String,
    issue_tracker: String,
}

impl LinkConfig {
    /// Creates a link configuration.
    ///
    /// # Arguments
    ///
    /// * `public_origin` - Scheme and host used for absolute permalinks
    /// * `issue_tracker` - URL of the "new issue" page
    #[must_use]
    pub fn new(public_origin: impl Into<String>, issue_tracker: impl Into<String>) -> Self {
        Self {
            public_origin: public_origin.into().trim_end_matches('/').to_string(),
            issue_tracker: issue_tracker.into(),
        }
    }

    /// Returns a link configuration with a different public origin.
    #[must_use]
    pub fn with_public_origin(self, public_origin: impl Into<String>) -> Self {
        Self::new(public_origin, self.issue_tracker)
    }

    /// Returns a stable URL that reproduces the report for the given input.
    ///
    /// The `country` parameter is only present when a region was entered, and
    /// `geocodingLocale` only when the locale is not plain English, so links
    /// for the common case stay short.
    #[must_use]
    pub fn permalink(
        &self,
        number: &str,
        region: &RegionCode,
        locale: &DisplayLocale,
        absolute: bool,
    ) -> String {
        let mut link: String = if absolute {
            format!("{}{PERMALINK_PATH}", self.public_origin)
        } else {
            String::from(PERMALINK_PATH)
        };

        link.push_str("?number=");
        link.push_str(&form_encode(number));
        if !region.is_empty() {
            link.push_str("&country=");
            link.push_str(&form_encode(region.as_str()));
        }
        if !locale.is_default_english() {
            link.push_str("&geocodingLocale=");
            link.push_str(&form_encode(&locale.to_language_tag()));
        }
        link
    }

    /// Returns a link that opens a new issue pre-filled with a report template
    /// for this number.
    #[must_use]
    pub fn issue_link(&self, number: &str, region: &RegionCode, locale: &DisplayLocale) -> String {
        let title: String = issue_title(number, region);
        let body: String = self.issue_body(number, region, locale);
        format!(
            "{}?title={}&body={}",
            self.issue_tracker,
            urlencoding::encode(&title),
            urlencoding::encode(&body)
        )
    }

    fn issue_body(&self, number: &str, region: &RegionCode, locale: &DisplayLocale) -> String {
        let mut body: String = String::from(
            "Please read the \"guidelines for contributing\" (linked above) and fill \
             in the template below.\n\n",
        );
        body.push_str("Country/region affected (e.g., \"US\"): ");
        body.push_str(region.as_str());
        body.push_str("\n\n");
        body.push_str("Example number(s) affected (\"+1 555 555-1234\"): ");
        body.push_str(number);
        body.push_str("\n\n");
        body.push_str(
            "The phone number range(s) to which the issue applies (\"+1 555 555-XXXX\"): \n\n",
        );
        body.push_str(
            "The type of the number(s) (\"fixed-line\", \"mobile\", \"short code\", etc.): \n\n",
        );
        body.push_str(
            "The cost, if applicable (\"toll-free\", \"premium rate\", \"shared cost\"): \n\n",
        );
        body.push_str(
            "Supporting evidence (for example, national numbering plan, announcement from mobile \
             carrier, news article): **IMPORTANT - anything posted here is made public. \
             Read the guidelines first!** \n\n",
        );
        body.push_str("[link to demo](");
        body.push_str(&self.permalink(number, region, locale, true));
        body.push_str(")\n\n");
        body
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PUBLIC_ORIGIN, DEFAULT_ISSUE_TRACKER)
    }
}

/// Returns the title of a new validation issue for `number`.
///
/// The region is appended in parentheses only when one was actually supplied.
#[must_use]
pub fn issue_title(number: &str, region: &RegionCode) -> String {
    if region.is_specified() {
        format!("Validation issue with {number} ({region})")
    } else {
        format!("Validation issue with {number}")
    }
}

/// Form-style encoding: alphanumerics and `*-._` pass through, spaces become
/// `+`, everything else is percent-encoded as UTF-8.
fn form_encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
