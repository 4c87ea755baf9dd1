// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use thiserror::Error;

/// A multipart submission could not be read.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UploadError {
    /// The uploaded file exceeds the configured size limit.
    #[error("The uploaded file exceeds the limit of {limit} bytes")]
    SizeExceeded { limit: usize },

    /// The request body is not a readable multipart form.
    #[error("The submitted form could not be read: {reason}")]
    Malformed { reason: String },
}

impl UploadError {
    /// Returns the title shown on the error page.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::SizeExceeded { .. } => "Upload too large",
            Self::Malformed { .. } => "Malformed upload",
        }
    }
}
