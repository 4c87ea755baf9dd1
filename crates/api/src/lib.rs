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

//! Request dispatch.
//!
//! Turns raw GET queries and multipart form submissions into analysis
//! requests and decides what the server sends back. Nothing in this crate
//! depends on the HTTP framework.

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::UploadError;
pub use handlers::{dispatch_get, dispatch_post};
pub use request_response::{Dispatch, FormPart, FormSubmission, SingleNumberQuery};
