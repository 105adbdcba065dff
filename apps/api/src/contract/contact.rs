//! Contact form submission contract.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{expect_object, read_string, Contract, ValidationError};

const NAME_REQUIRED: &str = "Name is required";
const EMAIL_INVALID: &str = "Invalid email address";
const MESSAGE_REQUIRED: &str = "Message is required";

// Leading dot and consecutive dots are rejected separately in
// `is_valid_email`; the regex crate has no lookahead.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .unwrap()
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Contract for ContactSubmission {
    fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let obj = expect_object(value)?;

        let name = read_string(obj, "name")?;
        if name.is_empty() {
            return Err(ValidationError::new("name", NAME_REQUIRED));
        }

        let email = read_string(obj, "email")?;
        if !is_valid_email(&email) {
            return Err(ValidationError::new("email", EMAIL_INVALID));
        }

        let message = read_string(obj, "message")?;
        if message.is_empty() {
            return Err(ValidationError::new("message", MESSAGE_REQUIRED));
        }

        Ok(Self {
            name,
            email,
            message,
        })
    }
}

pub fn is_valid_email(email: &str) -> bool {
    if email.starts_with('.') || email.contains("..") {
        return false;
    }
    EMAIL_REGEX.is_match(email)
}
