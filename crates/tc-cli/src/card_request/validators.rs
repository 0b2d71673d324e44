//! Per-field rules applied to raw command-line values.
//!
//! Each function is pure; none of them touch the network.

use crate::card_request::{KeepFromSource, Position, ValidationError};

pub const MAX_MIME_TYPE_LENGTH: usize = 256;

pub(crate) const POS_FLAG: &str = "--pos";
pub(crate) const MIME_TYPE_FLAG: &str = "--mimeType";
pub(crate) const URL_SOURCE_FLAG: &str = "--urlSource";
pub(crate) const KEEP_FROM_SOURCE_FLAG: &str = "--keepFromSource";

/// `top`, `bottom`, or a finite float
pub fn validate_position(value: &str) -> Result<Position, ValidationError> {
    match value {
        "top" => Ok(Position::Top),
        "bottom" => Ok(Position::Bottom),
        _ => match value.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(Position::Number(n)),
            _ => Err(ValidationError::InvalidPosition {
                field: POS_FLAG,
                value: value.to_string(),
            }),
        },
    }
}

/// Reject values longer than `max` characters
pub fn validate_bounded(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<String, ValidationError> {
    let length = value.chars().count();
    if length > max {
        return Err(ValidationError::ValueTooLong {
            field,
            value: value.to_string(),
            length,
            max,
        });
    }
    Ok(value.to_string())
}

pub fn validate_mime_type(value: &str) -> Result<String, ValidationError> {
    validate_bounded(MIME_TYPE_FLAG, value, MAX_MIME_TYPE_LENGTH)
}

/// Only checks the literal `http` prefix; the URL itself is not parsed.
pub fn validate_url_source(value: &str) -> Result<String, ValidationError> {
    if !value.starts_with("http") {
        return Err(ValidationError::InvalidUrl {
            field: URL_SOURCE_FLAG,
            value: value.to_string(),
        });
    }
    Ok(value.to_string())
}

/// One unknown token rejects the whole set.
pub fn validate_keep_from_source<S: AsRef<str>>(
    tokens: &[S],
) -> Result<Vec<KeepFromSource>, ValidationError> {
    tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            KeepFromSource::parse(token).ok_or_else(|| ValidationError::InvalidKeepFromSource {
                field: KEEP_FROM_SOURCE_FLAG,
                value: token.to_string(),
                expected: KeepFromSource::expected(),
            })
        })
        .collect()
}
