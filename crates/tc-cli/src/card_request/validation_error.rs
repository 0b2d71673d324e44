use std::fmt;

use thiserror::Error;

/// A single rejected command-line value
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("invalid position for {field}: '{value}' (must be 'top', 'bottom', or a number)")]
    InvalidPosition { field: &'static str, value: String },

    #[error("value too long for {field}: {length} characters (max {max}): '{value}'")]
    ValueTooLong {
        field: &'static str,
        value: String,
        length: usize,
        max: usize,
    },

    #[error("invalid value for {field}: '{value}' must start with http")]
    InvalidUrl { field: &'static str, value: String },

    #[error("invalid keep-from-source value for {field}: '{value}' (expected one of: {expected})")]
    InvalidKeepFromSource {
        field: &'static str,
        value: String,
        expected: String,
    },
}

impl ValidationError {
    /// Command-line flag the rejected value was given for
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidPosition { field, .. }
            | ValidationError::ValueTooLong { field, .. }
            | ValidationError::InvalidUrl { field, .. }
            | ValidationError::InvalidKeepFromSource { field, .. } => field,
        }
    }
}

/// Every validation failure from one invocation, in flag order
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
