// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dialscope::{BatchProcessor, LinkConfig, ReportRenderer};
use dialscope_domain::{AnalysisRequest, AnalysisServices};
use tracing::info;

use crate::request_response::{Dispatch, FormSubmission, SingleNumberQuery};

/// Handles a GET of the report page.
///
/// The report is always rendered inline, even for an empty number.
#[must_use]
pub fn dispatch_get(
    services: &AnalysisServices,
    links: &LinkConfig,
    query: &SingleNumberQuery,
) -> Dispatch {
    let request: AnalysisRequest = query.to_request();
    info!(
        number = %request.raw_number,
        country = %request.default_region,
        locale = %request.display_locale,
        "Rendering report"
    );

    Dispatch::Report(ReportRenderer::new(services, links).render(&request))
}

/// Handles a form submission.
///
/// A non-empty uploaded file is processed as a batch with the submitted
/// default country. Anything else redirects to the permalink of the entered
/// number so that the report URL can be shared.
#[must_use]
pub fn dispatch_post(
    services: &AnalysisServices,
    links: &LinkConfig,
    submission: &FormSubmission,
) -> Dispatch {
    let request: AnalysisRequest = submission.to_request();

    if let Some(payload) = request.batch() {
        info!(
            bytes = payload.len(),
            country = %request.default_region,
            "Processing uploaded batch"
        );
        let processor: BatchProcessor<'_> = BatchProcessor::new(services.phone_util.as_ref());
        return Dispatch::Batch(processor.render(payload, &request.default_region));
    }

    let location: String = links.permalink(
        &request.raw_number,
        &request.default_region,
        &request.display_locale,
        false,
    );
    info!(location = %location, "Redirecting form submission");
    Dispatch::Redirect(location)
}
