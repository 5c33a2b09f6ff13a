use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Submission outcome shown above the contact form.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Deserialize,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Idle,
    Success,
    Error,
}

impl Status {
    pub fn is_idle(&self) -> bool {
        *self == Status::Idle
    }

    pub fn is_success(&self) -> bool {
        *self == Status::Success
    }

    pub fn is_error(&self) -> bool {
        *self == Status::Error
    }
}
