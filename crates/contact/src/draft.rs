use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::{Validate, ValidationError};

/// Characters, an `@`, characters, a dot, characters. No whitespace anywhere.
pub static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

/// The unsaved content of the contact form.
#[derive(Validate, Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "email_address"))]
    pub email: String,
    #[validate(custom(function = "not_blank"))]
    pub subject: String,
    #[validate(custom(function = "not_blank"))]
    pub message: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::from("This field is required"));
        return Err(error);
    }

    Ok(())
}

fn email_address(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;

    if !EMAIL_PATTERN.is_match(value) {
        let mut error = ValidationError::new("email_format");
        error.message = Some(Cow::from("Please enter a valid email address"));
        return Err(error);
    }

    Ok(())
}

impl ContactDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// One flag per field, raised when that field fails validation.
    pub fn field_errors(&self) -> FieldFlags {
        let Err(errors) = self.validate() else {
            return FieldFlags::default();
        };

        let failed = errors.field_errors();
        let mut flags = FieldFlags::default();
        for field in Field::VARIANTS {
            flags.set(*field, failed.contains_key(field.as_ref()));
        }

        flags
    }

    pub fn is_valid(&self) -> bool {
        !self.field_errors().any()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Four booleans, one per form field. Used for validation errors and for the
/// set of fields the user has edited.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldFlags {
    pub name: bool,
    pub email: bool,
    pub subject: bool,
    pub message: bool,
}

pub type FieldErrors = FieldFlags;

impl FieldFlags {
    pub fn get(&self, field: Field) -> bool {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Subject => self.subject,
            Field::Message => self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: bool) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn any(&self) -> bool {
        self.name || self.email || self.subject || self.message
    }

    /// Keeps only the flags also raised in `mask`.
    pub fn masked_by(&self, mask: &FieldFlags) -> FieldFlags {
        FieldFlags {
            name: self.name && mask.name,
            email: self.email && mask.email,
            subject: self.subject && mask.subject,
            message: self.message && mask.message,
        }
    }
}
