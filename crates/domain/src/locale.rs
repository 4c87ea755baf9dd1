// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// The language code used when no display language is given.
pub const ENGLISH: &str = "en";

/// Language tag emitted for a locale whose language is not well formed.
const UNDETERMINED: &str = "und";

/// The locale used to display geocoding and carrier names.
///
/// Only the language and region subtags are modelled; script, variant and
/// extension subtags of a parsed tag are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayLocale {
    language: String,
    region: String,
}

impl DisplayLocale {
    /// Creates a locale, lower-casing the language and upper-casing the region.
    #[must_use]
    pub fn new(language: &str, region: &str) -> Self {
        Self {
            language: language.to_lowercase(),
            region: region.to_uppercase(),
        }
    }

    /// The default display locale: English with no region.
    #[must_use]
    pub fn english() -> Self {
        Self::new(ENGLISH, "")
    }

    /// Parses a BCP-47 style language tag such as `de`, `de-CH` or `zh-Hant-TW`.
    ///
    /// Returns `None` when the tag does not start with a well-formed language
    /// subtag.
    #[must_use]
    pub fn parse_language_tag(tag: &str) -> Option<Self> {
        let mut subtags = tag.split('-');
        let language: &str = subtags.next().filter(|s| is_language_subtag(s))?;

        let mut region: &str = "";
        for subtag in subtags {
            if is_script_subtag(subtag) {
                continue;
            }
            if is_region_subtag(subtag) {
                region = subtag;
            }
            break;
        }

        Some(Self::new(language, region))
    }

    /// Parses a language tag, falling back to English when it is absent or
    /// unparseable.
    #[must_use]
    pub fn from_tag_or_english(tag: Option<&str>) -> Self {
        tag.and_then(Self::parse_language_tag)
            .unwrap_or_else(Self::english)
    }

    /// Returns the lower-cased language subtag.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the upper-cased region subtag, possibly empty.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Returns whether this is the default English locale with no region.
    #[must_use]
    pub fn is_default_english(&self) -> bool {
        self.language == ENGLISH && self.region.is_empty()
    }

    /// Renders the locale as a language tag, e.g. `en`, `de-CH` or `und-FR`.
    #[must_use]
    pub fn to_language_tag(&self) -> String {
        let language: &str = if is_language_subtag(&self.language) {
            &self.language
        } else {
            UNDETERMINED
        };
        if is_region_subtag(&self.region) {
            format!("{language}-{}", self.region)
        } else {
            language.to_string()
        }
    }
}

impl Default for DisplayLocale {
    fn default() -> Self {
        Self::english()
    }
}

impl std::fmt::Display for DisplayLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_language_tag())
    }
}

fn is_language_subtag(s: &str) -> bool {
    matches!(s.len(), 2 | 3 | 5..=8) && s.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_script_subtag(s: &str) -> bool {
    s.len() == 4 && s.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_region_subtag(s: &str) -> bool {
    (s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic()))
        || (s.len() == 3 && s.chars().all(|c| c.is_ascii_digit()))
}
