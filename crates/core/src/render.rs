// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTML rendering of reports.
//!
//! Every value that originates from user input or from the analysis services
//! is escaped before it is written.

use dialscope_domain::{
    AsYouTypeTrace, Check, FormattingOutcome, LookupOutcome, ParsedNumber, Possibility,
    ShortNumberOutcome, ValidationOutcome,
};

use crate::batch::{BatchReport, BatchRowResult};
use crate::links::GUIDELINES_PATH;
use crate::report::{NumberAnalysis, Report, ReportBody};

const STYLESHEET: &str = "/stylesheets/main.css";

/// Escapes text for inclusion in HTML element content or attribute values.
#[must_use]
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders a single-number report page.
#[must_use]
pub fn report_html(report: &Report) -> String {
    let request = &report.request;
    let mut out: String = String::from("<!DOCTYPE html>\n<html><head>");
    out.push_str(&format!(
        "<link type=\"text/css\" rel=\"stylesheet\" href=\"{STYLESHEET}\" />"
    ));
    out.push_str("</head><body>");
    out.push_str(&format!(
        "Phone Number entered: {}<br>",
        html_escape(&request.raw_number)
    ));
    out.push_str(&format!(
        "defaultCountry entered: {}<br>",
        html_escape(request.default_region.as_str())
    ));
    out.push_str(&format!(
        "Language entered: {}<br>",
        html_escape(&request.display_locale.to_language_tag())
    ));

    match &report.body {
        ReportBody::ParseFailed(err) => out.push_str(&html_escape(&err.to_string())),
        ReportBody::Analysed(analysis) => push_analysis(&mut out, analysis),
    }

    out.push_str("</body></html>\n");
    out
}

/// Renders the table page for a batch upload.
#[must_use]
pub fn batch_html(report: &BatchReport) -> String {
    let mut out: String = String::from(
        "<!DOCTYPE html>\n<html><head><title>Results generated from phone numbers in the file \
         provided:</title></head><body>",
    );
    out.push_str("<table align=center border=1>");
    out.push_str("<tr>");
    for heading in [
        "ID",
        "Raw phone number",
        "Pretty formatting",
        "International format",
    ] {
        out.push_str(&format!("<th align=center>{heading}</th>"));
    }
    out.push_str("</tr>");

    for row in &report.rows {
        out.push_str("<tr>");
        out.push_str(&format!("<td align=center>{} </td>\n", row.id));
        out.push_str(&format!(
            "<td align=center>{} </td>\n",
            html_escape(&row.raw_number)
        ));
        match &row.result {
            BatchRowResult::Formatted {
                pretty,
                international,
            } => {
                out.push_str(&format!(
                    "<td align=center>{} </td>\n",
                    html_escape(pretty.as_str())
                ));
                out.push_str(&format!(
                    "<td align=center>{} </td>\n",
                    html_escape(international.as_str())
                ));
            }
            BatchRowResult::Failed(err) => {
                out.push_str(&format!(
                    "<td align=center colspan=2>{} </td>\n",
                    html_escape(&err.to_string())
                ));
            }
        }
        out.push_str("</tr>");
    }

    out.push_str("</table></body></html>\n");
    out
}

/// Renders an error page for a request that could not be handled.
#[must_use]
pub fn error_html(title: &str, message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html><head><title>{}</title>\
         <link type=\"text/css\" rel=\"stylesheet\" href=\"{STYLESHEET}\" />\
         </head><body><b style=\"color:red\">{}</b>: {}</body></html>\n",
        html_escape(title),
        html_escape(title),
        html_escape(message)
    )
}

fn push_analysis(out: &mut String, analysis: &NumberAnalysis) {
    push_parse_fields(out, &analysis.parsed);
    push_validation(out, &analysis.validation);
    if let Some(short_number) = &analysis.short_number {
        push_short_number(out, short_number);
    }
    push_formatting(out, &analysis.formatting);
    push_as_you_type(out, &analysis.as_you_type);
    if let Some(lookups) = &analysis.lookups {
        push_lookups(out, lookups);
    }
    out.push_str(&format!(
        "<b style=\"color:red\">File an issue</b>: by clicking on \
         <a target=\"_blank\" href=\"{}\">this link</a>, I confirm that I \
         have read the <a target=\"_blank\" href=\"{GUIDELINES_PATH}\">contributor's \
         guidelines</a>.",
        html_escape(&analysis.issue_link)
    ));
}

fn open_table(out: &mut String, caption: &str) {
    out.push_str("<div><table border=1>");
    out.push_str(&format!("<tr><td colspan=2>{caption}</td></tr>"));
}

fn close_table(out: &mut String) {
    out.push_str("</table></div>");
}

fn push_line(out: &mut String, title: &str, data: &str) {
    let data: String = if data.is_empty() {
        String::from("&nbsp;")
    } else {
        html_escape(data)
    };
    out.push_str(&format!("<tr><th>{}</th><td>{data}</td></tr>", html_escape(title)));
}

fn push_check(out: &mut String, title: &str, check: Check) {
    if let Some(value) = check.value() {
        push_line(out, title, &value.to_string());
    }
}

fn push_parse_fields(out: &mut String, parsed: &ParsedNumber) {
    open_table(out, "Parsing Result (parseAndKeepRawInput())");
    push_line(out, "country_code", &parsed.country_code.to_string());
    push_line(out, "national_number", &parsed.national_number.to_string());
    push_line(out, "extension", &parsed.extension);
    push_line(
        out,
        "country_code_source",
        parsed.country_code_source.as_str(),
    );
    push_line(
        out,
        "italian_leading_zero",
        &parsed.italian_leading_zero.to_string(),
    );
    push_line(out, "raw_input", &parsed.raw_input);
    close_table(out);
}

fn push_validation(out: &mut String, validation: &ValidationOutcome) {
    open_table(out, "Validation Results");
    match &validation.possibility {
        Possibility::NotPossible { reason } => {
            push_line(out, "Result from isPossibleNumber()", "false");
            push_line(
                out,
                "Result from isPossibleNumberWithReason()",
                reason.as_str(),
            );
            out.push_str(
                "<tr><td colspan=2>Note: numbers that are not possible have type UNKNOWN, \
                 an unknown region, and are considered invalid.</td></tr>",
            );
        }
        Possibility::Possible {
            valid_for_region,
            region,
            number_type,
        } => {
            push_line(out, "Result from isPossibleNumber()", "true");
            push_line(
                out,
                "Result from isValidNumber()",
                &validation.is_valid.to_string(),
            );
            push_check(out, "Result from isValidNumberForRegion()", *valid_for_region);
            push_line(out, "Phone Number region", region.as_deref().unwrap_or(""));
            push_line(out, "Result from getNumberType()", number_type.as_str());
        }
    }
    close_table(out);
}

fn push_short_number(out: &mut String, short_number: &ShortNumberOutcome) {
    open_table(out, "Short Number Results");
    push_line(
        out,
        "Result from isPossibleShortNumber()",
        &short_number.is_possible.to_string(),
    );
    push_check(out, "Result from isValidShortNumber()", short_number.is_valid);
    push_check(
        out,
        "Result from isPossibleShortNumberForRegion()",
        short_number.is_possible_for_region,
    );
    push_check(
        out,
        "Result from isValidShortNumberForRegion()",
        short_number.is_valid_for_region,
    );
    close_table(out);
}

fn push_formatting(out: &mut String, formatting: &FormattingOutcome) {
    open_table(out, "Formatting Results");
    for (variant, formatted) in &formatting.variants {
        push_line(out, variant.label(), formatted.as_str());
    }
    close_table(out);
}

fn push_as_you_type(out: &mut String, trace: &AsYouTypeTrace) {
    open_table(out, "AsYouTypeFormatter Results");
    for step in &trace.steps {
        push_line(
            out,
            &format!("Char entered: '{}' Output: ", step.input),
            &step.output,
        );
    }
    close_table(out);
}

fn push_lookups(out: &mut String, lookups: &LookupOutcome) {
    open_table(out, "PhoneNumberOfflineGeocoder Results");
    push_line(out, "Location", &lookups.location);
    close_table(out);

    open_table(out, "PhoneNumberToTimeZonesMapper Results");
    push_line(
        out,
        "Time zone(s)",
        &format!("[{}]", lookups.time_zones.join(", ")),
    );
    close_table(out);

    if let Some(carrier) = &lookups.carrier {
        open_table(out, "PhoneNumberToCarrierMapper Results");
        push_line(out, "Carrier", carrier);
        close_table(out);
    }
}
