// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// The region code libphonenumber uses for "unknown region".
pub const UNKNOWN_REGION: &str = "ZZ";

/// A default dialing region as entered by the user.
///
/// The text is kept verbatim (after the caller's case folding) so it can be
/// echoed back in links and report headers. An empty code and the `ZZ`
/// sentinel both mean that no default region was supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RegionCode {
    code: String,
}

impl RegionCode {
    /// Creates a region code from already-normalized text.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// Creates a region code from user input, upper-casing it.
    #[must_use]
    pub fn from_input(input: &str) -> Self {
        Self {
            code: input.to_uppercase(),
        }
    }

    /// Returns the code as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Returns whether the code is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Returns whether a real default region was supplied.
    #[must_use]
    pub fn is_specified(&self) -> bool {
        !self.code.is_empty() && self.code != UNKNOWN_REGION
    }
}

impl std::fmt::Display for RegionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl From<&str> for RegionCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}
