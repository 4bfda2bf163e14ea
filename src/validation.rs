//! Request validation
//!
//! Rules are declared on the transfer objects with `validator` derives.
//! This module turns the resulting `ValidationErrors` into an ordered list
//! of violations and a single `AppError::Validation` message.

use std::borrow::Cow;

use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

use crate::error::{AppError, AppResult};

/// Field names of a transfer object in declaration order.
///
/// `validator` reports errors in a map, so this order is what keeps the
/// joined message stable.
pub trait FieldOrder {
    const FIELDS: &'static [&'static str];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    EmptyField,
    OutOfRange,
    InvalidFormat,
}

impl ViolationKind {
    fn from_code(code: &str) -> Self {
        match code {
            "empty" => ViolationKind::EmptyField,
            "range" => ViolationKind::OutOfRange,
            _ => ViolationKind::InvalidFormat,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub kind: ViolationKind,
    pub message: String,
}

/// Rejects empty and whitespace-only strings
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("empty"));
    }
    Ok(())
}

/// Empty addresses and malformed ones are reported under different codes
pub fn well_formed_email(value: &str) -> Result<(), ValidationError> {
    let (code, message) = if value.is_empty() {
        ("empty", "Email should not be empty")
    } else if !value.validate_email() {
        ("email", "Email should be valid")
    } else {
        return Ok(());
    };

    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    Err(err)
}

/// Every violation of `dto`, ordered by field declaration
pub fn violations<T: Validate + FieldOrder>(dto: &T) -> Vec<Violation> {
    match dto.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => collect::<T>(&errors),
    }
}

fn collect<T: FieldOrder>(errors: &ValidationErrors) -> Vec<Violation> {
    let by_field = errors.field_errors();

    T::FIELDS
        .iter()
        .filter_map(|field| {
            by_field
                .iter()
                .find(|(name, _)| AsRef::<str>::as_ref(name) == *field)
                .map(|(_, errs)| (*field, *errs))
        })
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| Violation {
                field,
                kind: ViolationKind::from_code(&err.code),
                message: err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string()),
            })
        })
        .collect()
}

/// Joins violations as `field - message`, separated by `"; "`
pub fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{} - {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Fails with `AppError::Validation` listing every violation found
pub fn ensure_valid<T: Validate + FieldOrder>(dto: &T) -> AppResult<()> {
    let found = violations(dto);
    if found.is_empty() {
        return Ok(());
    }
    Err(AppError::Validation(describe(&found)))
}
