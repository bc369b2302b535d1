//! Error types for store operations and schema validation.

use std::error::Error;
use std::fmt;

use crate::mirror::MirrorError;

/// A single failed schema constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The offending field.
    pub field: &'static str,
    /// The constraint it violated.
    pub constraint: String,
}

/// Input failed a record schema's constraints.
///
/// Carries every violation found, not just the first, so a caller can fix
/// a payload in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Entity name of the schema that rejected the input.
    pub entity: &'static str,
    /// All violated constraints, in field order.
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub(crate) fn new(entity: &'static str) -> Self {
        Self {
            entity,
            violations: Vec::new(),
        }
    }

    pub(crate) fn reject(&mut self, field: &'static str, constraint: impl Into<String>) {
        self.violations.push(Violation {
            field,
            constraint: constraint.into(),
        });
    }

    /// Resolve to `value` if no violations were recorded.
    pub(crate) fn ok<T>(self, value: T) -> Result<T, ValidationError> {
        if self.violations.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}:", self.entity)?;
        for (i, v) in self.violations.iter().enumerate() {
            let sep = if i == 0 { "" } else { ";" };
            write!(f, "{} {} {}", sep, v.field, v.constraint)?;
        }
        Ok(())
    }
}

impl Error for ValidationError {}

/// Error type for store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Input failed the record schema.
    Validation(ValidationError),
    /// No record carries the requested identifier.
    NotFound { id: String },
    /// Positional index outside `[0, len)`.
    OutOfRange { index: i64, len: usize },
    /// Random selection requested on an empty collection.
    EmptyStore,
    /// The persistence mirror failed.
    Mirror(MirrorError),
    /// Store lock poisoned by a panicking writer.
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Validation(e) => write!(f, "{}", e),
            StoreError::NotFound { id } => write!(f, "no record with id {}", id),
            StoreError::OutOfRange { index, len } => {
                write!(f, "index {} out of range (len {})", index, len)
            }
            StoreError::EmptyStore => write!(f, "store is empty"),
            StoreError::Mirror(e) => write!(f, "mirror error: {}", e),
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StoreError::Validation(e) => Some(e),
            StoreError::Mirror(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Validation(err)
    }
}

impl From<MirrorError> for StoreError {
    fn from(err: MirrorError) -> Self {
        StoreError::Mirror(err)
    }
}

impl StoreError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::Validation(_) => 422,
            StoreError::NotFound { .. } => 404,
            StoreError::OutOfRange { .. } => 404,
            StoreError::EmptyStore => 404,
            StoreError::Mirror(_) => 500,
            StoreError::LockPoisoned(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display_lists_every_violation() {
        let mut err = ValidationError::new("Book");
        err.reject("name", "required");
        err.reject("price", "must be a number");
        let msg = err.to_string();
        assert!(msg.contains("invalid Book"));
        assert!(msg.contains("name required"));
        assert!(msg.contains("price must be a number"));
    }

    #[test]
    fn ok_passes_value_through_without_violations() {
        let err = ValidationError::new("Book");
        assert_eq!(err.ok(7).unwrap(), 7);
    }

    #[test]
    fn status_codes() {
        let not_found = StoreError::NotFound { id: "x".into() };
        assert_eq!(not_found.status_code(), 404);
        let out_of_range = StoreError::OutOfRange { index: -1, len: 0 };
        assert_eq!(out_of_range.status_code(), 404);
        assert_eq!(StoreError::EmptyStore.status_code(), 404);
        let invalid = StoreError::Validation(ValidationError::new("Item"));
        assert_eq!(invalid.status_code(), 422);
    }

    #[test]
    fn out_of_range_reports_index_and_len() {
        let err = StoreError::OutOfRange { index: 5, len: 2 };
        assert_eq!(err.to_string(), "index 5 out of range (len 2)");
    }
}
