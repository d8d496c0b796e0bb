//! Contact form validation
//!
//! Each field walks Untouched -> Valid | Invalid on blur, and back to
//! Untouched on the next input. Labels are part of the field definition.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Basic `local@domain.tld` shape
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{label} is required")]
    Required { label: &'static str },

    #[error("Please enter a valid email address")]
    MalformedEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
}

/// Static description of one form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// `name` attribute; the error element is `{name}-error`
    pub name: &'static str,
    /// Human-readable label used in messages
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

/// The contact section's fields
pub const CONTACT_FIELDS: [FieldDef; 4] = [
    FieldDef {
        name: "name",
        label: "Name",
        kind: FieldKind::Text,
        required: true,
    },
    FieldDef {
        name: "email",
        label: "Email",
        kind: FieldKind::Email,
        required: true,
    },
    FieldDef {
        name: "subject",
        label: "Subject",
        kind: FieldKind::Text,
        required: false,
    },
    FieldDef {
        name: "message",
        label: "Message",
        kind: FieldKind::TextArea,
        required: true,
    },
];

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Validate one value against its field definition
pub fn validate(def: &FieldDef, value: &str) -> Result<(), ValidationError> {
    if def.required && value.trim().is_empty() {
        return Err(ValidationError::Required { label: def.label });
    }
    if def.kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
        return Err(ValidationError::MalformedEmail);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Untouched,
    Valid,
    Invalid(ValidationError),
}

impl FieldState {
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            FieldState::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub def: FieldDef,
    pub value: String,
    pub state: FieldState,
}

impl Field {
    pub fn new(def: FieldDef) -> Self {
        Self {
            def,
            value: String::new(),
            state: FieldState::Untouched,
        }
    }

    /// Blur: settle to Valid or Invalid
    pub fn check(&mut self) -> &FieldState {
        self.state = match validate(&self.def, &self.value) {
            Ok(()) => FieldState::Valid,
            Err(err) => FieldState::Invalid(err),
        };
        &self.state
    }

    /// Input: take the value, drop any shown error
    pub fn input(&mut self, value: &str) {
        self.value = value.to_string();
        self.state = FieldState::Untouched;
    }
}

/// Form values and per-field validation state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub fields: Vec<Field>,
}

impl FormState {
    pub fn new(defs: &[FieldDef]) -> Self {
        Self {
            fields: defs.iter().copied().map(Field::new).collect(),
        }
    }

    pub fn contact() -> Self {
        Self::new(&CONTACT_FIELDS)
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.def.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.def.name == name)
    }

    /// Validate every field; true when none is invalid
    pub fn check_all(&mut self) -> bool {
        self.fields
            .iter_mut()
            .map(|f| f.check().error().is_none())
            .fold(true, |ok, field_ok| ok && field_ok)
    }

    /// Empty every value and forget all validation
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.state = FieldState::Untouched;
        }
    }
}
