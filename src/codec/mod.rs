//! Polymorphic wire codec for platform resource descriptors.
//!
//! Each resource family (connections, credentials, gateways, connection
//! parameters) is a closed tagged-variant type. Decoding runs in two
//! passes: first the discriminator field alone is read and resolved
//! through an explicit lookup table kept separate from the variants'
//! field schemas, then the remaining fields are decoded against the
//! resolved variant. Unknown extra fields within a known variant are
//! ignored for forward compatibility with additive API changes; an
//! unknown discriminator value always fails loud. Encoding writes the
//! discriminator first, then the variant's fixed attribute list,
//! omitting unset optionals entirely — absent fields are never emitted
//! as `null`.
//!
//! The codec is stateless and reentrant: every call operates only on
//! its own input. Field names follow the external API's camelCase
//! convention exactly; this is a compatibility boundary.

pub mod connection;
pub mod credentials;
pub mod gateway;

use std::fmt::{Display, Formatter};

use serde_json::{Map, Value};

/// Codec result alias.
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// Recoverable per-payload decode failure.
///
/// Never brings the process down; callers map it to a client-facing
/// failure response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The discriminator value is not in the family's lookup table.
    UnknownDiscriminator {
        /// The unrecognized wire value.
        value: String,
    },
    /// A field required by the resolved variant is absent (or null).
    MissingRequiredField {
        /// Variant whose schema requires the field.
        variant: &'static str,
        /// The missing wire field name.
        field: &'static str,
    },
    /// A field is present but holds the wrong JSON kind.
    TypeMismatch {
        /// The offending wire field name.
        field: &'static str,
        /// Description of the expected kind.
        expected: &'static str,
    },
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownDiscriminator { value } => {
                write!(f, "unknown discriminator value '{value}'")
            }
            Self::MissingRequiredField { variant, field } => {
                write!(f, "variant {variant} requires field '{field}'")
            }
            Self::TypeMismatch { field, expected } => {
                write!(f, "field '{field}' must be {expected}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Resolve a discriminator value through a family's lookup table.
fn lookup<K: Copy>(table: &[(&str, K)], value: &str) -> DecodeResult<K> {
    table
        .iter()
        .find(|(name, _)| *name == value)
        .map(|(_, kind)| *kind)
        .ok_or_else(|| DecodeError::UnknownDiscriminator {
            value: value.to_owned(),
        })
}

/// View a payload as a JSON object.
fn as_object<'a>(value: &'a Value, field: &'static str) -> DecodeResult<&'a Map<String, Value>> {
    value.as_object().ok_or(DecodeError::TypeMismatch {
        field,
        expected: "an object",
    })
}

/// Fetch a required nested value, treating explicit null as missing.
fn required<'a>(
    map: &'a Map<String, Value>,
    variant: &'static str,
    field: &'static str,
) -> DecodeResult<&'a Value> {
    match map.get(field) {
        None | Some(Value::Null) => Err(DecodeError::MissingRequiredField { variant, field }),
        Some(value) => Ok(value),
    }
}

/// Read a required string field. Absent and explicit-null are treated
/// identically as missing.
fn require_str(
    map: &Map<String, Value>,
    variant: &'static str,
    field: &'static str,
) -> DecodeResult<String> {
    match map.get(field) {
        None | Some(Value::Null) => Err(DecodeError::MissingRequiredField { variant, field }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(DecodeError::TypeMismatch {
            field,
            expected: "a string",
        }),
    }
}

/// Read an optional string field. Absent and explicit-null both
/// normalize to `None`.
fn optional_str(map: &Map<String, Value>, field: &'static str) -> DecodeResult<Option<String>> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(DecodeError::TypeMismatch {
            field,
            expected: "a string",
        }),
    }
}

/// Read a required unsigned integer field.
fn require_u64(
    map: &Map<String, Value>,
    variant: &'static str,
    field: &'static str,
) -> DecodeResult<u64> {
    match map.get(field) {
        None | Some(Value::Null) => Err(DecodeError::MissingRequiredField { variant, field }),
        Some(value) => value.as_u64().ok_or(DecodeError::TypeMismatch {
            field,
            expected: "an unsigned integer",
        }),
    }
}

/// Read an optional unsigned integer field.
fn optional_u64(map: &Map<String, Value>, field: &'static str) -> DecodeResult<Option<u64>> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .map(Some)
            .ok_or(DecodeError::TypeMismatch {
                field,
                expected: "an unsigned integer",
            }),
    }
}

/// Read an optional boolean field.
fn optional_bool(map: &Map<String, Value>, field: &'static str) -> DecodeResult<Option<bool>> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(DecodeError::TypeMismatch {
            field,
            expected: "a boolean",
        }),
    }
}
