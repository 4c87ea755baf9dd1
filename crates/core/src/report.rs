// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Single-number report construction.

use dialscope_domain::{
    AnalysisRequest, AnalysisServices, AsYouTypeFormatter, AsYouTypeStep, AsYouTypeTrace, Check,
    FormatVariant, Formatted, FormattingOutcome, LookupOutcome, NumberFormat, NumberParseError,
    NumberType, ParsedNumber, PhoneNumberUtil, Possibility, RegionCode, ShortNumberInfo,
    ShortNumberOutcome, ValidationOutcome,
};
use tracing::debug;

use crate::links::LinkConfig;
use crate::render;

/// Every section computed for a number that parsed successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberAnalysis {
    pub parsed: ParsedNumber,
    pub validation: ValidationOutcome,
    /// Present only when the number is not valid.
    pub short_number: Option<ShortNumberOutcome>,
    pub formatting: FormattingOutcome,
    pub as_you_type: AsYouTypeTrace,
    /// Present only when the number is valid.
    pub lookups: Option<LookupOutcome>,
    pub issue_link: String,
}

/// The body of a single-number report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportBody {
    /// Parsing failed; nothing else was computed.
    ParseFailed(NumberParseError),
    /// Parsing succeeded.
    Analysed(Box<NumberAnalysis>),
}

/// A complete single-number report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The input the report was built from.
    pub request: AnalysisRequest,
    pub body: ReportBody,
}

impl Report {
    /// Returns the analysis, if the number parsed.
    #[must_use]
    pub fn analysis(&self) -> Option<&NumberAnalysis> {
        match &self.body {
            ReportBody::Analysed(analysis) => Some(analysis),
            ReportBody::ParseFailed(_) => None,
        }
    }
}

/// Builds single-number reports from injected analysis services.
#[derive(Debug, Clone, Copy)]
pub struct ReportRenderer<'a> {
    services: &'a AnalysisServices,
    links: &'a LinkConfig,
}

impl<'a> ReportRenderer<'a> {
    /// Creates a renderer over shared service handles.
    #[must_use]
    pub const fn new(services: &'a AnalysisServices, links: &'a LinkConfig) -> Self {
        Self { services, links }
    }

    /// Builds and renders the HTML report for `request`.
    #[must_use]
    pub fn render(&self, request: &AnalysisRequest) -> String {
        render::report_html(&self.build_report(request))
    }

    /// Runs the analysis pipeline for `request`.
    ///
    /// A parse failure is the only condition that stops the pipeline; every
    /// later precondition only decides whether a section is present.
    #[must_use]
    pub fn build_report(&self, request: &AnalysisRequest) -> Report {
        let phone_util: &dyn PhoneNumberUtil = self.services.phone_util.as_ref();
        let region: &RegionCode = &request.default_region;

        let body: ReportBody =
            match phone_util.parse_and_keep_raw_input(&request.raw_number, region.as_str()) {
                Ok(parsed) => ReportBody::Analysed(Box::new(self.analyse(request, parsed))),
                Err(err) => {
                    debug!(number = %request.raw_number, error = %err, "Number did not parse");
                    ReportBody::ParseFailed(err)
                }
            };

        Report {
            request: request.clone(),
            body,
        }
    }

    fn analyse(&self, request: &AnalysisRequest, parsed: ParsedNumber) -> NumberAnalysis {
        let phone_util: &dyn PhoneNumberUtil = self.services.phone_util.as_ref();
        let region: &RegionCode = &request.default_region;

        let validation: ValidationOutcome = validate(phone_util, &parsed, region);
        let short_number: Option<ShortNumberOutcome> = (!validation.is_valid)
            .then(|| check_short_number(self.services.short_info.as_ref(), &parsed, region));
        let formatting: FormattingOutcome =
            format_variants(phone_util, &parsed, region, validation.is_valid);
        let as_you_type: AsYouTypeTrace = replay_as_you_type(
            phone_util.get_as_you_type_formatter(region.as_str()),
            &request.raw_number,
        );
        let lookups: Option<LookupOutcome> = validation
            .is_valid
            .then(|| self.look_up(request, &parsed, &validation));
        let issue_link: String =
            self.links
                .issue_link(&request.raw_number, region, &request.display_locale);

        NumberAnalysis {
            parsed,
            validation,
            short_number,
            formatting,
            as_you_type,
            lookups,
            issue_link,
        }
    }

    fn look_up(
        &self,
        request: &AnalysisRequest,
        parsed: &ParsedNumber,
        validation: &ValidationOutcome,
    ) -> LookupOutcome {
        let carrier: Option<String> = validation
            .number_type()
            .filter(NumberType::has_carrier)
            .map(|_| {
                self.services
                    .carriers
                    .name_for_number(parsed, &request.display_locale)
            });

        LookupOutcome {
            location: self
                .services
                .geocoder
                .description_for_number(parsed, &request.display_locale),
            time_zones: self.services.time_zones.time_zones_for_number(parsed),
            carrier,
        }
    }
}

/// Computes the validation section.
///
/// Validity is computed even for impossible numbers because the short-number
/// and formatting sections depend on it.
#[must_use]
pub fn validate(
    phone_util: &dyn PhoneNumberUtil,
    parsed: &ParsedNumber,
    region: &RegionCode,
) -> ValidationOutcome {
    let is_valid: bool = phone_util.is_valid_number(parsed);

    let possibility: Possibility = if phone_util.is_possible_number(parsed) {
        Possibility::Possible {
            valid_for_region: Check::when(is_valid && region.is_specified(), || {
                phone_util.is_valid_number_for_region(parsed, region.as_str())
            }),
            region: phone_util.get_region_code_for_number(parsed),
            number_type: phone_util.get_number_type(parsed),
        }
    } else {
        Possibility::NotPossible {
            reason: phone_util.is_possible_number_with_reason(parsed),
        }
    };

    ValidationOutcome {
        is_valid,
        possibility,
    }
}

/// Computes the short-number section following its dependency chain.
#[must_use]
pub fn check_short_number(
    short_info: &dyn ShortNumberInfo,
    parsed: &ParsedNumber,
    region: &RegionCode,
) -> ShortNumberOutcome {
    let is_possible: bool = short_info.is_possible_short_number(parsed);
    let is_valid: Check = Check::when(is_possible, || short_info.is_valid_short_number(parsed));
    let is_possible_for_region: Check = Check::when(is_possible && region.is_specified(), || {
        short_info.is_possible_short_number_for_region(parsed, region.as_str())
    });
    let is_valid_for_region: Check = Check::when(is_possible_for_region.passed(), || {
        short_info.is_valid_short_number_for_region(parsed, region.as_str())
    });

    ShortNumberOutcome {
        is_possible,
        is_valid,
        is_possible_for_region,
        is_valid_for_region,
    }
}

/// Computes every formatting variant in display order.
#[must_use]
pub fn format_variants(
    phone_util: &dyn PhoneNumberUtil,
    parsed: &ParsedNumber,
    region: &RegionCode,
    is_valid: bool,
) -> FormattingOutcome {
    let variants: Vec<(FormatVariant, Formatted)> = FormatVariant::ALL
        .into_iter()
        .map(|variant| {
            if variant.requires_valid_number() && !is_valid {
                return (variant, Formatted::Invalid);
            }
            let text: String = match variant {
                FormatVariant::E164 => phone_util.format(parsed, NumberFormat::E164),
                FormatVariant::Original => {
                    phone_util.format_in_original_format(parsed, region.as_str())
                }
                FormatVariant::National => phone_util.format(parsed, NumberFormat::National),
                FormatVariant::International => {
                    phone_util.format(parsed, NumberFormat::International)
                }
                FormatVariant::OutOfCountryFromUs => {
                    phone_util.format_out_of_country_calling_number(parsed, "US")
                }
                FormatVariant::OutOfCountryFromCh => {
                    phone_util.format_out_of_country_calling_number(parsed, "CH")
                }
            };
            (variant, Formatted::Value(text))
        })
        .collect();

    FormattingOutcome { variants }
}

/// Feeds `raw_number` through `formatter` one character at a time.
///
/// The formatter must be freshly created for this replay.
#[must_use]
pub fn replay_as_you_type(
    mut formatter: Box<dyn AsYouTypeFormatter>,
    raw_number: &str,
) -> AsYouTypeTrace {
    let steps: Vec<AsYouTypeStep> = raw_number
        .chars()
        .map(|input| AsYouTypeStep {
            input,
            output: formatter.input_digit(input),
        })
        .collect();

    AsYouTypeTrace { steps }
}
