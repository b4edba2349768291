//! Typed contact request handed off to the submission collaborator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A "Get in Touch" submission as collected by the contact modal.
///
/// `address` and `service` are optional free text; everything else is
/// required, see [`ContactRequest::validate`]. The transport that actually
/// delivers an accepted request lives outside this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub service: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("please tell us your name")]
    MissingName,
    #[error("that email address does not look right")]
    InvalidEmail,
    #[error("please add a short message")]
    MissingMessage,
}

impl ContactRequest {
    /// Check the required fields, reporting the first problem found in form
    /// order.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }

    /// Serialize for the delivery collaborator.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Just enough of a check to catch typos: one `@`, a non-empty local part,
/// a dotted domain. Real verification belongs to the mail system.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
