//! Shared value types for the validation engine.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Outcome of a single validator call.
///
/// `Invalid` carries the user-facing (Spanish) message that the caller
/// shows verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum Verdict {
    Valid,
    Invalid(String),
}

impl Verdict {
    /// Build a verdict from a predicate and a lazily built message.
    pub fn check(ok: bool, message: impl FnOnce() -> String) -> Self {
        if ok {
            Verdict::Valid
        } else {
            Verdict::Invalid(message())
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// The rejection message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(msg) => Some(msg),
        }
    }

    /// Convert into a `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<(), CoreError> {
        match self {
            Verdict::Valid => Ok(()),
            Verdict::Invalid(msg) => Err(CoreError::Validation(msg)),
        }
    }
}

/// Which rule set applies to identity-dependent fields.
///
/// Students (and scholarship beneficiaries) are identified by an
/// institutional code, enrolled in a 4-digit academic plan and use the
/// institutional mailbox. Staff are identified by their national ID,
/// belong to a dependency area and may use any mailbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    Student,
    Staff,
}

/// One entry of a dropdown list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption<T> {
    pub value: T,
    pub label: String,
}

impl<T> SelectOption<T> {
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}
