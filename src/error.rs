use std::fmt;

use crate::tag::TypeTag;

/// Errors raised by the strict and checked entry points.
///
/// The total API (`convert`, `to_*`, `get`) never produces these.
#[derive(Debug, Clone, PartialEq)]
pub enum VariantError {
    /// A strict conversion found a different kind than the one requested.
    TypeError {
        message: String,
        found: TypeTag,
        hint: Option<String>,
        code: Option<u32>,
    },
    PathNotFound {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when text handed to an explicit JSON parse is not valid JSON.
    JsonError {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// The conversion table permits `from -> to` but no routine handles it.
    UnhandledConversion {
        from: TypeTag,
        to: TypeTag,
        code: Option<u32>,
    },
}

impl fmt::Display for VariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantError::TypeError { message, found, hint, code } =>
                write!(f, "[VARIANT] Type Error ({}): {}{}{}",
                    found, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            VariantError::PathNotFound { path, hint, code } =>
                write!(f, "[VARIANT] Path '{}' not found{}{}",
                    path,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            VariantError::JsonError { message, line, column, hint, code } =>
                write!(f, "[VARIANT] JSON Error at {}:{}: {}{}{}",
                    line, column, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            VariantError::UnhandledConversion { from, to, code } =>
                write!(f, "[VARIANT] Internal Error: conversion '{}' -> '{}' is permitted but not handled{}",
                    from, to,
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
        }
    }
}

impl std::error::Error for VariantError {}

impl From<serde_json::Error> for VariantError {
    fn from(e: serde_json::Error) -> Self {
        VariantError::JsonError {
            message: e.to_string(),
            line: e.line(),
            column: e.column(),
            hint: Some("Check the input is a complete JSON document".into()),
            code: Some(501),
        }
    }
}

impl VariantError {
    /// Helper for strict conversion mismatches.
    pub fn type_error(expected: &str, found: TypeTag, code: u32) -> Self {
        VariantError::TypeError {
            message: format!("Expected {}, got {}", expected, found),
            found,
            hint: Some(format!("Use convert() or the to_* methods to coerce a {} value", found)),
            code: Some(code),
        }
    }

    pub fn path_not_found(path: &str) -> Self {
        VariantError::PathNotFound {
            path: path.to_string(),
            hint: Some("Check that every segment names an existing key or index".into()),
            code: Some(304),
        }
    }

    /// Stable numeric code, if any.
    pub fn code(&self) -> Option<u32> {
        match self {
            VariantError::TypeError { code, .. }
            | VariantError::PathNotFound { code, .. }
            | VariantError::JsonError { code, .. }
            | VariantError::UnhandledConversion { code, .. } => *code,
        }
    }
}
