use std::num::{ParseFloatError, ParseIntError};

use crate::kind::FieldKind;

/// Failure to convert one raw value into one field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    #[error("unsupported kind '{type_name}'")]
    UnsupportedKind { type_name: String },

    #[error("invalid boolean {value:?}")]
    InvalidBool { value: String },

    #[error("invalid integer {value:?}: {source}")]
    Int { value: String, source: ParseIntError },

    #[error("value {value:?} out of range for {kind}")]
    OutOfRange { value: String, kind: FieldKind },

    #[error("invalid float {value:?}: {source}")]
    Float { value: String, source: ParseFloatError },

    #[error("float {value:?} out of range")]
    FloatRange { value: String },
}

impl ConvertError {
    pub fn is_unsupported_kind(&self) -> bool {
        matches!(self, Self::UnsupportedKind { .. })
    }
}

/// Binding stopped at the field with external key `key`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("field '{key}': {source}")]
pub struct BindError {
    key: String,
    source: ConvertError,
}

impl BindError {
    pub fn new(key: impl Into<String>, source: ConvertError) -> Self {
        Self { key: key.into(), source }
    }

    /// External key of the failing field.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn cause(&self) -> &ConvertError {
        &self.source
    }

    pub fn into_cause(self) -> ConvertError {
        self.source
    }
}
