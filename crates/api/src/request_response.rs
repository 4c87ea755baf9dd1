// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request inputs and dispatch outcomes.

use dialscope_domain::{AnalysisRequest, DisplayLocale, ENGLISH, RegionCode};
use serde::Deserialize;

use crate::error::UploadError;

/// Query parameters of the single-number report page.
///
/// Every parameter is optional; a missing `geocodingLocale`, or one that is
/// not a well-formed language tag, means English.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SingleNumberQuery {
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, rename = "geocodingLocale")]
    pub geocoding_locale: Option<String>,
}

impl SingleNumberQuery {
    /// Normalizes the query into an analysis request.
    #[must_use]
    pub fn to_request(&self) -> AnalysisRequest {
        AnalysisRequest::single(
            self.number.clone(),
            RegionCode::from_input(&self.country),
            DisplayLocale::from_tag_or_english(self.geocoding_locale.as_deref()),
        )
    }
}

/// One part of a multipart form body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    /// The form field name.
    pub name: String,
    /// The file name, present only for file parts.
    pub file_name: Option<String>,
    /// The raw part body.
    pub data: Vec<u8>,
}

impl FormPart {
    /// Creates a plain form field part.
    #[must_use]
    pub fn field(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            file_name: None,
            data: value.as_bytes().to_vec(),
        }
    }

    /// Creates a file part.
    #[must_use]
    pub fn file(name: &str, file_name: &str, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.to_string(),
            file_name: Some(file_name.to_string()),
            data: data.into(),
        }
    }

    /// Returns whether this part carries an uploaded file.
    #[must_use]
    pub const fn is_file(&self) -> bool {
        self.file_name.is_some()
    }

    fn text(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

/// The fields of a submitted form, normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    pub phone_number: String,
    /// Upper-cased.
    pub default_country: String,
    /// Lower-cased; may be empty.
    pub language_code: String,
    /// Upper-cased.
    pub region_code: String,
    /// Text of the uploaded file, if a file part was sent.
    pub file_contents: Option<String>,
}

impl FormSubmission {
    /// Reads a submission from its multipart parts.
    ///
    /// Unknown fields are ignored. When several files are sent the last one
    /// wins.
    ///
    /// # Arguments
    ///
    /// * `parts` - The multipart parts in body order
    /// * `upload_limit` - Largest accepted file size in bytes
    ///
    /// # Errors
    ///
    /// Returns `UploadError::SizeExceeded` if a file part is larger than
    /// `upload_limit`.
    pub fn from_parts<I>(parts: I, upload_limit: usize) -> Result<Self, UploadError>
    where
        I: IntoIterator<Item = FormPart>,
    {
        let mut submission: Self = Self::default();

        for part in parts {
            if part.is_file() {
                if part.data.len() > upload_limit {
                    return Err(UploadError::SizeExceeded {
                        limit: upload_limit,
                    });
                }
                submission.file_contents = Some(part.text());
                continue;
            }

            match part.name.as_str() {
                "phoneNumber" => submission.phone_number = part.text(),
                "defaultCountry" => submission.default_country = part.text().to_uppercase(),
                "languageCode" => submission.language_code = part.text().to_lowercase(),
                "regionCode" => submission.region_code = part.text().to_uppercase(),
                _ => {}
            }
        }

        Ok(submission)
    }

    /// Returns the display locale built from `languageCode` and `regionCode`.
    #[must_use]
    pub fn display_locale(&self) -> DisplayLocale {
        let language: &str = if self.language_code.is_empty() {
            ENGLISH
        } else {
            &self.language_code
        };
        DisplayLocale::new(language, &self.region_code)
    }

    /// Normalizes the submission into an analysis request.
    #[must_use]
    pub fn to_request(&self) -> AnalysisRequest {
        AnalysisRequest {
            raw_number: self.phone_number.clone(),
            default_region: RegionCode::from_input(&self.default_country),
            display_locale: self.display_locale(),
            batch_payload: self.file_contents.clone(),
        }
    }
}

/// What the server sends back for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// A single-number report page.
    Report(String),
    /// A batch result page.
    Batch(String),
    /// A redirect to the given relative location.
    Redirect(String),
}
