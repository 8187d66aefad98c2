//! Stateless HTTP request builder and response parser for the subjects API.
//!
//! # Design
//! `SubjectClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. `SubjectService` glues the two halves to a `Transport`.

use serde::de::DeserializeOwned;

use crate::error::RequestError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Subject, SubjectDraft, SubjectId};

const JSON: &str = "application/json";

/// Synchronous, stateless client for the subjects API.
#[derive(Debug, Clone)]
pub struct SubjectClient {
    base_url: String,
}

impl SubjectClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_subjects(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/subjects", self.base_url),
            headers: vec![accept_json()],
            body: None,
        }
    }

    pub fn build_create_subject(&self, draft: &SubjectDraft) -> Result<HttpRequest, RequestError> {
        let body = serde_json::to_string(draft).map_err(|e| RequestError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/subjects", self.base_url),
            headers: vec![accept_json(), ("content-type".to_string(), JSON.to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_subject(&self, id: &SubjectId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/subjects/{id}", self.base_url),
            headers: vec![accept_json()],
            body: None,
        }
    }

    pub fn parse_list_subjects(&self, response: HttpResponse) -> Result<Vec<Subject>, RequestError> {
        decode(response)
    }

    pub fn parse_create_subject(&self, response: HttpResponse) -> Result<Subject, RequestError> {
        decode(response)
    }

    /// Any 2xx counts as deleted; the body is ignored.
    pub fn parse_delete_subject(&self, response: HttpResponse) -> Result<(), RequestError> {
        check_status(&response)
    }
}

fn accept_json() -> (String, String) {
    ("accept".to_string(), JSON.to_string())
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, RequestError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| RequestError::DeserializationError(e.to_string()))
}

/// Every non-2xx status is a failure; the body is kept as the diagnostic payload.
fn check_status(response: &HttpResponse) -> Result<(), RequestError> {
    if response.is_success() {
        return Ok(());
    }
    Err(RequestError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
