use serde::{Deserialize, Serialize};

use crate::domain::DraftField;

/// Mutable contents of the contact form.
///
/// Cleared after a successful submission; left untouched on failure so the
/// visitor can resubmit without retyping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Name => self.name = value,
            DraftField::Email => self.email = value,
            DraftField::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// Template parameters sent with both delivery stages.
    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

/// Wire shape of a contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_updates_only_named_field() {
        let mut draft = ContactDraft::default();
        draft.set(DraftField::Email, "ada@example.com");
        assert_eq!(draft.email, "ada@example.com");
        assert!(draft.name.is_empty());
        assert!(!draft.is_empty());
    }

    #[test]
    fn payload_uses_template_field_names() {
        let draft = ContactDraft::new("Ada", "ada@example.com", "Hello");
        let payload = draft.payload();
        assert_eq!(payload.from_name, "Ada");
        assert_eq!(payload.from_email, "ada@example.com");
        assert_eq!(payload.message, "Hello");
    }

    #[test]
    fn clear_resets_every_field() {
        let mut draft = ContactDraft::new("Ada", "ada@example.com", "Hello");
        draft.clear();
        assert!(draft.is_empty());
    }
}
