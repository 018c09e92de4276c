use std::{fmt, sync::LazyLock};

use regex::Regex;

use crate::EMAIL_REGEX;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_REGEX).expect("EMAIL_REGEX does not compile"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required(Field),
    InvalidEmail,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            Self::Required(field) => *field,
            Self::InvalidEmail => Field::Email,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required(field) => write!(f, "{field} is required"),
            Self::InvalidEmail => write!(f, "Please enter a valid email address"),
        }
    }
}

// contact form contents
//
// the form is never sent anywhere; validation only drives the inline messages
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::Required(Field::Name));
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::Required(Field::Email));
        } else if !EMAIL.is_match(email) {
            errors.push(FieldError::InvalidEmail);
        }

        if self.message.trim().is_empty() {
            errors.push(FieldError::Required(Field::Message));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    pub fn clear(&mut self) {
        *self = ContactForm::default();
    }
}

// first error reported for a field, if any
pub fn error_for(errors: &[FieldError], field: Field) -> Option<&FieldError> {
    errors.iter().find(|err| err.field() == field)
}
