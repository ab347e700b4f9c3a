//! Domain entities. Pure data structures for the core business.
//!
//! Field names match the persisted JSON encoding of the `users` and `events` lists.

use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Registered account. `email` is the identity key; `password` is compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub password: String,
}

impl User {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Exact match on both fields. No case folding, no hashing.
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

/// Opaque event identifier. Generated once at creation and never changed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Fresh random id (UUID v4).
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A comment left on an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Author email.
    pub user: String,
    pub text: String,
}

/// Community event record.
///
/// `attendees` and `comments` only grow. Duplicate attendees are allowed
/// (each RSVP appends).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    /// Free-form, expected `YYYY-MM-DD` but not validated.
    pub date: String,
    #[serde(default)]
    pub attendees: Vec<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Event {
    /// Builds a new event from a validated draft with a fresh id and no attendees/comments.
    pub fn from_draft(draft: &EventDraft) -> Result<Self, DomainError> {
        draft.validate()?;
        Ok(Self {
            id: EventId::generate(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            date: draft.date.clone(),
            attendees: Vec::new(),
            comments: Vec::new(),
        })
    }

    /// Replaces title/description/date. Attendees and comments are left as they are.
    pub fn apply_draft(&mut self, draft: &EventDraft) -> Result<(), DomainError> {
        draft.validate()?;
        self.title = draft.title.clone();
        self.description = draft.description.clone();
        self.date = draft.date.clone();
        Ok(())
    }

    /// Draft preloaded with this event's editable fields.
    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            date: self.date.clone(),
        }
    }
}

/// Which draft field a form edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
    Date,
}

/// Unpersisted event fields being edited in the create or update form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: String,
}

impl EventDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            date: date.into(),
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Title => self.title = value,
            DraftField::Description => self.description = value,
            DraftField::Date => self.date = value,
        }
    }

    /// Title and date are required; description may be empty.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.is_empty() {
            return Err(DomainError::Validation("title is required".into()));
        }
        if self.date.is_empty() {
            return Err(DomainError::Validation("date is required".into()));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
