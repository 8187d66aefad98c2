//! Domain DTOs for the study subjects API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any schema drift between the two crates.
//!
//! `Subject` can only be obtained by deserializing a server response, so an
//! `id` is never minted on the client. New subjects start life as a
//! `SubjectDraft`, which has no `id` field at all.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Server-assigned subject identifier.
///
/// Backends disagree on whether ids are strings or integers, so both JSON
/// representations are accepted. The id is kept as text since the client only
/// ever echoes it back in a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawSubjectId", into = "String")]
pub struct SubjectId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSubjectId {
    Text(String),
    Number(i64),
}

impl From<RawSubjectId> for SubjectId {
    fn from(raw: RawSubjectId) -> Self {
        match raw {
            RawSubjectId::Text(s) => SubjectId(s),
            RawSubjectId::Number(n) => SubjectId(n.to_string()),
        }
    }
}

impl SubjectId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SubjectId {
    fn from(s: String) -> Self {
        SubjectId(s)
    }
}

impl From<&str> for SubjectId {
    fn from(s: &str) -> Self {
        SubjectId(s.to_string())
    }
}

impl From<SubjectId> for String {
    fn from(id: SubjectId) -> Self {
        id.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Difficulty rating on a 1 (easy) to 5 (difficult) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Difficulty(value as u8))
        } else {
            Err(ValidationError::DifficultyOutOfRange(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty(3)
    }
}

impl TryFrom<i64> for Difficulty {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Difficulty::new(value)
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> Self {
        d.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted study subject as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    id: SubjectId,
    name: String,
    #[serde(default)]
    chapters: Vec<String>,
    exam_date: String,
    difficulty: Difficulty,
}

impl Subject {
    pub fn id(&self) -> &SubjectId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chapters(&self) -> &[String] {
        &self.chapters
    }

    /// ISO `YYYY-MM-DD` date, exactly as the server sent it.
    pub fn exam_date(&self) -> &str {
        &self.exam_date
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// Request payload for creating a subject, edited in place by the form.
///
/// Empty strings mean "not filled in yet". Individual chapter entries are
/// allowed to be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectDraft {
    pub name: String,
    pub chapters: Vec<String>,
    pub exam_date: String,
    pub difficulty: Difficulty,
}

/// A single scalar form field of a `SubjectDraft` together with its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    Name(String),
    ExamDate(String),
    Difficulty(Difficulty),
}

impl SubjectDraft {
    pub fn apply(&mut self, field: DraftField) {
        match field {
            DraftField::Name(name) => self.name = name,
            DraftField::ExamDate(date) => self.exam_date = date,
            DraftField::Difficulty(difficulty) => self.difficulty = difficulty,
        }
    }

    /// Append an empty chapter slot at the end.
    pub fn push_chapter(&mut self) {
        self.chapters.push(String::new());
    }

    /// Overwrite the chapter at `index`. Returns `false` if there is no such slot.
    pub fn set_chapter(&mut self, index: usize, value: String) -> bool {
        match self.chapters.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Remove the chapter at `index`, shifting later entries left.
    pub fn remove_chapter(&mut self, index: usize) -> Option<String> {
        if index < self.chapters.len() {
            Some(self.chapters.remove(index))
        } else {
            None
        }
    }

    /// Presence checks required before a draft may be submitted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.exam_date.is_empty() {
            return Err(ValidationError::MissingExamDate);
        }
        if self.chapters.is_empty() {
            return Err(ValidationError::NoChapters);
        }
        Ok(())
    }
}
