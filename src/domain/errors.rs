//! Domain validation errors.

use std::fmt;

/// A contact field, as named in validation messages and CSV headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
}

impl Field {
    /// Lower-case field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while building a contact from raw input.
///
/// Every variant carries a cause and a suggested fix; `Display` joins them as
/// `"<cause>; <solution>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value for the field is not text (not valid UTF-8).
    NotText(Field),

    /// Name or phone is empty.
    EmptyField(Field),

    /// The email is present and non-empty but not a valid address.
    MalformedEmail,
}

impl ValidationError {
    /// What went wrong.
    pub fn cause(&self) -> String {
        match self {
            Self::NotText(field) => format!("{} value is not text", field),
            Self::EmptyField(field) => format!("{} is empty", field),
            Self::MalformedEmail => "email is malformed".to_string(),
        }
    }

    /// How the user can fix it.
    pub fn solution(&self) -> String {
        match self {
            Self::NotText(field) => format!("make sure {} value is valid UTF-8 text", field),
            Self::EmptyField(field) => format!("please provide a non-empty {}", field),
            Self::MalformedEmail => "please provide a valid email".to_string(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; {}", self.cause(), self.solution())
    }
}

impl std::error::Error for ValidationError {}
