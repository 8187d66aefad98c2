//! Resource client for the subjects collection.
//!
//! Composes `SubjectClient` (request building and response parsing) with a
//! `Transport`. Failures are logged here with everything the server or the
//! transport reported, then handed back to the caller unchanged.

use tracing::{debug, error};

use crate::client::SubjectClient;
use crate::error::RequestError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{Subject, SubjectDraft, SubjectId};

/// Async list/create/delete over a fixed base URL.
#[derive(Debug, Clone)]
pub struct SubjectService<T> {
    client: SubjectClient,
    transport: T,
}

impl<T: Transport> SubjectService<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: SubjectClient::new(base_url),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub async fn list_subjects(&self) -> Result<Vec<Subject>, RequestError> {
        let req = self.client.build_list_subjects();
        let result = self.round_trip(req, |c, resp| c.parse_list_subjects(resp)).await;
        if let Ok(subjects) = &result {
            debug!(count = subjects.len(), "fetched subjects");
        }
        result
    }

    pub async fn create_subject(&self, draft: &SubjectDraft) -> Result<Subject, RequestError> {
        let req = self.client.build_create_subject(draft).inspect_err(log_failure)?;
        let subject = self.round_trip(req, |c, resp| c.parse_create_subject(resp)).await?;
        debug!(id = %subject.id(), "created subject");
        Ok(subject)
    }

    pub async fn delete_subject(&self, id: &SubjectId) -> Result<(), RequestError> {
        let req = self.client.build_delete_subject(id);
        self.round_trip(req, |c, resp| c.parse_delete_subject(resp)).await?;
        debug!(%id, "deleted subject");
        Ok(())
    }

    async fn round_trip<R>(
        &self,
        req: HttpRequest,
        parse: impl FnOnce(&SubjectClient, HttpResponse) -> Result<R, RequestError>,
    ) -> Result<R, RequestError> {
        let response = self.transport.execute(req).await.inspect_err(log_failure)?;
        parse(&self.client, response).inspect_err(log_failure)
    }
}

fn log_failure(err: &RequestError) {
    match err {
        RequestError::HttpError { status, body } => error!(status, body = %body, "API error"),
        RequestError::TransportError(msg) => error!(error = %msg, "no response received"),
        other => error!(error = %other, "request error"),
    }
}
