//! Contact model and its validation.

use crate::domain::{EmailAddress, Field, RawValue, ValidationError};
use serde::Serialize;
use std::fmt;

/// Unvalidated contact input.
///
/// A draft is what a prompt or a CSV row produces; it only becomes a
/// [`Contact`] through [`Contact::from_draft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: RawValue,
    pub phone: RawValue,
    /// `None` and an empty string are both "no email".
    pub email: Option<RawValue>,
}

impl ContactDraft {
    /// Create a draft without an email.
    pub fn new(name: impl Into<RawValue>, phone: impl Into<RawValue>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: None,
        }
    }

    /// Attach an email candidate.
    pub fn with_email(mut self, email: impl Into<RawValue>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// A validated, immutable contact.
///
/// Name and phone are never empty; the email, when present, is syntactically
/// valid. Serializes as one `name,phone,email` record, which is how CSV
/// export writes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    name: String,
    phone: String,
    email: Option<EmailAddress>,
}

impl Contact {
    /// Validate text values into a contact.
    ///
    /// # Errors
    ///
    /// See [`Contact::from_draft`].
    pub fn new(name: &str, phone: &str, email: Option<&str>) -> Result<Self, ValidationError> {
        let draft = ContactDraft {
            name: name.into(),
            phone: phone.into(),
            email: email.map(RawValue::from),
        };
        Self::from_draft(draft)
    }

    /// Validate a draft into a contact.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// name is text, phone is text, email (if any) is text, name is not
    /// empty, phone is not empty, email (if non-empty) is well formed.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first failing check.
    pub fn from_draft(draft: ContactDraft) -> Result<Self, ValidationError> {
        let name = draft
            .name
            .into_text()
            .ok_or(ValidationError::NotText(Field::Name))?;
        let phone = draft
            .phone
            .into_text()
            .ok_or(ValidationError::NotText(Field::Phone))?;
        let email = draft
            .email
            .map(|raw| raw.into_text().ok_or(ValidationError::NotText(Field::Email)))
            .transpose()?;

        if name.is_empty() {
            return Err(ValidationError::EmptyField(Field::Name));
        }
        if phone.is_empty() {
            return Err(ValidationError::EmptyField(Field::Phone));
        }

        let email = email
            .filter(|email| !email.is_empty())
            .map(EmailAddress::new)
            .transpose()?;

        Ok(Self { name, phone, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }
}

// name / phone / email
impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "🧑 {} / ☎ {}", self.name, self.phone)?;
        if let Some(email) = &self.email {
            write!(f, " / 📧 {}", email)?;
        }
        Ok(())
    }
}
