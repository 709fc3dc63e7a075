//! Domain-level errors

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single problem found while validating a provider payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    /// Dotted path of the offending field (e.g. `main.temp`, `list[2].wind`)
    pub path: String,
    /// Why the field was rejected
    pub reason: String,
}

impl FieldIssue {
    /// Create a new field issue
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Issue for a required field that is absent
    pub fn missing(path: impl Into<String>) -> Self {
        Self::new(path, "required field is missing")
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}

/// Payload validation failed
///
/// Carries every issue that was found, each with the path of its field.
/// A snapshot is never partially constructed when this error is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed: {}", join_issues(.issues))]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Create a validation error from collected issues
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    /// Create a validation error with a single issue
    pub fn single(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(vec![FieldIssue::new(path, reason)])
    }

    /// All issues
    #[must_use]
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Whether any issue was reported for the given path
    #[must_use]
    pub fn has_issue_at(&self, path: &str) -> bool {
        self.issues.iter().any(|issue| issue.path == path)
    }
}
