// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Router,
    extract::{
        DefaultBodyLimit, Multipart, Query, State as AxumState,
        multipart::{MultipartError, MultipartRejection},
    },
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use dialscope::{DEFAULT_PUBLIC_ORIGIN, LinkConfig, PERMALINK_PATH, error_html};
use dialscope_api::{
    Dispatch, FormPart, FormSubmission, SingleNumberQuery, UploadError, dispatch_get,
    dispatch_post,
};
use dialscope_domain::AnalysisServices;
use std::sync::Arc;
use tracing::{info, warn};

/// Largest accepted uploaded file, in bytes.
const DEFAULT_UPLOAD_LIMIT: usize = 50_000;

/// Room in the request body for the form fields and multipart framing.
const FORM_OVERHEAD: usize = 16 * 1024;

const STYLESHEET: &str = "body { font-family: sans-serif; }\n\
table { border-collapse: collapse; margin: 0.5em 0; }\n\
th, td { padding: 2px 6px; text-align: left; }\n";

/// Dialscope Server - inspects phone numbers with libphonenumber metadata
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Scheme and host used in absolute permalinks, such as the demo link in
    /// issue reports
    #[arg(long, default_value = DEFAULT_PUBLIC_ORIGIN)]
    public_origin: String,

    /// Largest accepted uploaded file, in bytes
    #[arg(long, default_value_t = DEFAULT_UPLOAD_LIMIT)]
    upload_limit: usize,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The analysis services used for every request.
    services: AnalysisServices,
    /// Bases for permalinks and issue links.
    links: Arc<LinkConfig>,
    /// Largest accepted uploaded file, in bytes.
    upload_limit: usize,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The page title.
    title: &'static str,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Html(error_html(self.title, &self.message))).into_response()
    }
}

impl From<UploadError> for HttpError {
    fn from(err: UploadError) -> Self {
        warn!(error = %err, "Rejected form submission");
        let status: StatusCode = match err {
            UploadError::SizeExceeded { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            UploadError::Malformed { .. } => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            title: err.title(),
            message: err.to_string(),
        }
    }
}

/// Maps a multipart read failure onto an upload error.
fn upload_error(status: StatusCode, reason: String, upload_limit: usize) -> UploadError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        UploadError::SizeExceeded {
            limit: upload_limit,
        }
    } else {
        UploadError::Malformed { reason }
    }
}

fn multipart_error(err: &MultipartError, upload_limit: usize) -> UploadError {
    upload_error(err.status(), err.body_text(), upload_limit)
}

/// Converts a dispatch outcome into an HTTP response.
fn dispatch_response(dispatch: Dispatch) -> Response {
    match dispatch {
        Dispatch::Report(html) | Dispatch::Batch(html) => Html(html).into_response(),
        Dispatch::Redirect(location) => {
            (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
        }
    }
}

/// Handler for GET requests of the report page.
async fn handle_report(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<SingleNumberQuery>,
) -> Response {
    dispatch_response(dispatch_get(&app_state.services, &app_state.links, &query))
}

/// Handler for form submissions.
async fn handle_submission(
    AxumState(app_state): AxumState<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, HttpError> {
    let upload_limit: usize = app_state.upload_limit;
    let multipart: Multipart = multipart.map_err(|rejection| {
        upload_error(rejection.status(), rejection.body_text(), upload_limit)
    })?;

    let parts: Vec<FormPart> = read_parts(multipart, upload_limit).await?;
    let submission: FormSubmission = FormSubmission::from_parts(parts, upload_limit)?;

    Ok(dispatch_response(dispatch_post(
        &app_state.services,
        &app_state.links,
        &submission,
    )))
}

/// Reads every part of a multipart body.
async fn read_parts(
    mut multipart: Multipart,
    upload_limit: usize,
) -> Result<Vec<FormPart>, UploadError> {
    let mut parts: Vec<FormPart> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| multipart_error(&err, upload_limit))?
    {
        let name: String = field.name().unwrap_or_default().to_string();
        let file_name: Option<String> = field.file_name().map(str::to_string);
        let data: Vec<u8> = field
            .bytes()
            .await
            .map_err(|err| multipart_error(&err, upload_limit))?
            .to_vec();
        parts.push(FormPart {
            name,
            file_name,
            data,
        });
    }

    Ok(parts)
}

/// Handler for the page stylesheet.
async fn handle_stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], STYLESHEET)
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    let body_limit: usize = app_state.upload_limit.saturating_add(FORM_OVERHEAD);

    Router::new()
        .route("/", get(handle_report).post(handle_submission))
        .route(PERMALINK_PATH, get(handle_report).post(handle_submission))
        .route("/stylesheets/main.css", get(handle_stylesheet))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Dialscope Server");

    let links: LinkConfig = LinkConfig::default().with_public_origin(args.public_origin);
    let app_state: AppState = AppState {
        services: dialscope_backend::analysis_services(),
        links: Arc::new(links),
        upload_limit: args.upload_limit,
    };
    info!(upload_limit = args.upload_limit, "Analysis services ready");

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
