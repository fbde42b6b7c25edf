use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::MIN_MESSAGE_LEN;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters long";
pub const SUBMIT_FAILED: &str = "Failed to send message. Please try again or contact us directly.";

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Name,
    Email,
    Message,
}

impl Field {
    /// Maps the `name` attribute of a form control to its field.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Field::Title),
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "message" => Some(Field::Message),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// The error slot this field reports into. Title is never validated.
    pub fn error_key(self) -> Option<ErrorKey> {
        match self {
            Field::Title => None,
            Field::Name => Some(ErrorKey::Name),
            Field::Email => Some(ErrorKey::Email),
            Field::Message => Some(ErrorKey::Message),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Title => self.title = value,
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKey {
    Name,
    Email,
    Message,
    Submit,
}

impl ErrorKey {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKey::Name => "name",
            ErrorKey::Email => "email",
            ErrorKey::Message => "message",
            ErrorKey::Submit => "submit",
        }
    }
}

/// Field errors keyed by slot. An empty set means the form may be sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<ErrorKey, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit_failed() -> Self {
        let mut errors = Self::new();
        errors.insert(ErrorKey::Submit, SUBMIT_FAILED);
        errors
    }

    pub fn insert(&mut self, key: ErrorKey, message: impl Into<String>) {
        self.0.insert(key, message.into());
    }

    pub fn remove(&mut self, key: ErrorKey) -> Option<String> {
        self.0.remove(&key)
    }

    pub fn get(&self, key: ErrorKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: ErrorKey) -> bool {
        self.0.contains_key(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (ErrorKey, &str)> {
        self.0.iter().map(|(key, message)| (*key, message.as_str()))
    }

    /// Comma separated slot names, for logs that must not carry user input.
    pub fn keys_summary(&self) -> String {
        self.0
            .keys()
            .map(|key| key.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub fn is_email_shaped(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

pub fn validate(form: &FormState) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if form.name.trim().is_empty() {
        errors.insert(ErrorKey::Name, NAME_REQUIRED);
    }

    if form.email.trim().is_empty() {
        errors.insert(ErrorKey::Email, EMAIL_REQUIRED);
    } else if !is_email_shaped(&form.email) {
        errors.insert(ErrorKey::Email, EMAIL_INVALID);
    }

    let message = form.message.trim();
    if message.is_empty() {
        errors.insert(ErrorKey::Message, MESSAGE_REQUIRED);
    } else if message.chars().count() < MIN_MESSAGE_LEN {
        errors.insert(ErrorKey::Message, MESSAGE_TOO_SHORT);
    }

    errors
}
