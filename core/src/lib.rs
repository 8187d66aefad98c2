//! Client core for the study planner's subjects API.
//!
//! # Overview
//! Two layers sit on top of a small HTTP/JSON contract (`GET /subjects`,
//! `POST /subjects`, `DELETE /subjects/{id}`):
//!
//! - `SubjectService`, the resource client: builds requests with
//!   `SubjectClient`, hands them to a `Transport`, parses the responses.
//! - `SubjectController`, the view controller: owns the list, the draft
//!   form, the busy flag and the error message, and resyncs the list from
//!   the server after every mutation.
//!
//! # Design
//! - `SubjectClient` is sans-IO (host-does-IO pattern): `build_*` produces
//!   an `HttpRequest`, `parse_*` consumes an `HttpResponse`.
//! - `Transport` is the only seam that performs I/O; `UreqTransport` is the
//!   production implementation.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod service;
pub mod transport;
pub mod types;

pub use client::SubjectClient;
pub use config::ClientConfig;
pub use controller::{Outcome, SubjectController, ViewState};
pub use error::{RequestError, ValidationError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::SubjectService;
pub use transport::{Transport, UreqTransport};
pub use types::{Difficulty, DraftField, Subject, SubjectDraft, SubjectId};
