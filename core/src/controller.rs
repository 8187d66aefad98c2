//! View controller for the subjects screen.
//!
//! # Overview
//! `SubjectController` owns the whole view state: the subject list, the
//! draft being edited, a single busy flag and at most one error message.
//! Views read it through accessors (or a `watch` subscription) and change it
//! only by calling controller operations.
//!
//! # Design
//! - Every network operation runs `idle -> busy -> idle`. The busy flag is
//!   global and stays set across a mutation and the refetch that follows it.
//! - After any successful mutation the list is refetched and replaced
//!   wholesale; nothing is patched locally.
//! - A new attempt clears the previous error as soon as it starts. An error
//!   message is only ever published together with the return to idle.
//! - Underlying causes are logged; the user only sees a fixed,
//!   operation-scoped message.

use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::error::ValidationError;
use crate::service::SubjectService;
use crate::transport::Transport;
use crate::types::{DraftField, Subject, SubjectDraft, SubjectId};

pub const FETCH_FAILED: &str = "Failed to fetch subjects";
pub const ADD_FAILED: &str = "Failed to add subject";
pub const DELETE_FAILED: &str = "Failed to delete subject";

/// Snapshot of everything the view renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub subjects: Vec<Subject>,
    pub draft: SubjectDraft,
    pub is_busy: bool,
    pub last_error: Option<String>,
}

/// Result of a controller operation that may touch the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The operation succeeded. A follow-up refetch may still have failed;
    /// check `last_error`.
    Completed,
    /// The request failed and `last_error` was set.
    Failed,
    /// The draft did not pass its required-field checks; nothing was sent.
    Rejected(ValidationError),
    /// The user did not confirm; nothing was sent.
    Declined,
    /// The operation had already run and is not repeatable.
    Skipped,
}

pub struct SubjectController<T> {
    service: SubjectService<T>,
    state: ViewState,
    updates: watch::Sender<ViewState>,
    initialized: bool,
}

impl<T: Transport> SubjectController<T> {
    pub fn new(service: SubjectService<T>) -> Self {
        let state = ViewState::default();
        let (updates, _) = watch::channel(state.clone());
        Self {
            service,
            state,
            updates,
            initialized: false,
        }
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.state.subjects
    }

    pub fn draft(&self) -> &SubjectDraft {
        &self.state.draft
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_busy
    }

    pub fn last_error(&self) -> Option<&str> {
        self.state.last_error.as_deref()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Receive a fresh `ViewState` snapshot after every change.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.updates.subscribe()
    }

    /// Initial fetch. Only the first call does anything.
    pub async fn initialize(&mut self) -> Outcome {
        if self.initialized {
            debug!("controller already initialized");
            return Outcome::Skipped;
        }
        self.initialized = true;
        self.refresh().await
    }

    /// Refetch the whole collection from the server.
    pub async fn refresh(&mut self) -> Outcome {
        self.begin();
        let outcome = self.reload().await;
        self.finish();
        outcome
    }

    pub fn update_draft_field(&mut self, field: DraftField) {
        self.state.draft.apply(field);
        self.publish();
    }

    pub fn add_draft_chapter_slot(&mut self) {
        self.state.draft.push_chapter();
        self.publish();
    }

    /// Returns `false` when `index` is past the last chapter.
    pub fn update_draft_chapter(&mut self, index: usize, value: String) -> bool {
        let updated = self.state.draft.set_chapter(index, value);
        if updated {
            self.publish();
        }
        updated
    }

    pub fn remove_draft_chapter(&mut self, index: usize) -> Option<String> {
        let removed = self.state.draft.remove_chapter(index);
        if removed.is_some() {
            self.publish();
        }
        removed
    }

    /// Validate and create the draft, then resync the list.
    ///
    /// The draft is reset only when the create request succeeds.
    pub async fn submit_draft(&mut self) -> Outcome {
        if let Err(reason) = self.state.draft.validate() {
            debug!(%reason, "draft rejected");
            return Outcome::Rejected(reason);
        }

        self.begin();
        let outcome = match self.service.create_subject(&self.state.draft).await {
            Ok(subject) => {
                info!(id = %subject.id(), name = subject.name(), "subject added");
                self.reload().await;
                self.state.draft = SubjectDraft::default();
                Outcome::Completed
            }
            Err(err) => {
                error!(error = %err, "error adding subject");
                self.state.last_error = Some(ADD_FAILED.to_string());
                Outcome::Failed
            }
        };
        self.finish();
        outcome
    }

    /// Delete a subject once `confirm` agrees, then resync the list.
    ///
    /// A declined confirmation leaves the state untouched.
    pub async fn remove_subject(&mut self, id: &SubjectId, confirm: impl FnOnce(&SubjectId) -> bool) -> Outcome {
        if !confirm(id) {
            debug!(%id, "deletion declined");
            return Outcome::Declined;
        }

        self.begin();
        let outcome = match self.service.delete_subject(id).await {
            Ok(()) => {
                info!(%id, "subject deleted");
                self.reload().await;
                Outcome::Completed
            }
            Err(err) => {
                error!(error = %err, %id, "error deleting subject");
                self.state.last_error = Some(DELETE_FAILED.to_string());
                Outcome::Failed
            }
        };
        self.finish();
        outcome
    }

    /// List fetch shared by `refresh` and the post-mutation resync. Leaves
    /// the busy flag alone.
    async fn reload(&mut self) -> Outcome {
        match self.service.list_subjects().await {
            Ok(subjects) => {
                self.state.subjects = subjects;
                self.state.last_error = None;
                Outcome::Completed
            }
            Err(err) => {
                error!(error = %err, "error fetching subjects");
                self.state.last_error = Some(FETCH_FAILED.to_string());
                Outcome::Failed
            }
        }
    }

    fn begin(&mut self) {
        self.state.is_busy = true;
        self.state.last_error = None;
        self.publish();
    }

    fn finish(&mut self) {
        self.state.is_busy = false;
        self.publish();
    }

    fn publish(&self) {
        self.updates.send_replace(self.state.clone());
    }
}
