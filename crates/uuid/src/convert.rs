//! Shape-aware casts between stored and application values.
//!
//! Document fields holding UUIDs may contain a single value or an array of values, and callers
//! may hand over either representation. [`get_uuid`] and [`set_uuid`] accept any [`Bson`] and
//! dispatch on its variant, so one pair of functions serves scalar fields and bulk key lists
//! alike.

use crate::{codec, BinaryUuid, UuidError, UuidResult};
use bson::{Bson, Document};

/// Converts a stored value into its application form.
///
/// - Falsy values (`Null`, `Undefined`, `""`, `false`, numeric zero) yield `None`.
/// - A non-empty array yields an array of decoded strings in the same order. Falsy elements
///   become `Null`.
/// - A binary, or a binary-like document whose `buffer` is a binary, yields its decoded string.
///
/// # Errors
///
/// Returns [`UuidError::Cast`] for any other shape, including an empty array and array
/// elements that are neither binary nor falsy.
pub fn get_uuid(value: &Bson) -> UuidResult<Option<Bson>> {
    if is_falsy(value) {
        return Ok(None);
    }

    match value {
        Bson::Array(items) if !items.is_empty() => items
            .iter()
            .map(decode_element)
            .collect::<UuidResult<Vec<_>>>()
            .map(|decoded| Some(Bson::Array(decoded))),
        other => decode_value(other).map(|text| Some(Bson::String(text))),
    }
}

/// Converts an application value into its storage form.
///
/// - A binary is returned unchanged, whatever its subtype.
/// - An array has each non-empty string element encoded; other elements pass through.
/// - A non-empty string is encoded.
/// - Anything else is returned unchanged.
pub fn set_uuid(value: Bson) -> Bson {
    match value {
        binary @ Bson::Binary(_) => binary,
        Bson::Array(items) => Bson::Array(items.into_iter().map(encode_value).collect()),
        other => encode_value(other),
    }
}

/// Encodes an optional string, treating `None` and `""` as absent.
pub fn to_binary_uuid(text: Option<&str>) -> Option<BinaryUuid> {
    text.filter(|t| !t.is_empty()).map(codec::encode)
}

/// Decodes an optional binary UUID.
pub fn to_string_uuid(binary: Option<&BinaryUuid>) -> Option<String> {
    binary.map(BinaryUuid::to_text)
}

/// Returns the `buffer` field of a binary-like document.
///
/// The field must be present and truthy; `{buffer: null}` or `{buffer: ""}` is not binary-like.
pub fn binary_like_buffer(doc: &Document) -> Option<&Bson> {
    doc.get("buffer").filter(|buffer| !is_falsy(buffer))
}

fn encode_value(value: Bson) -> Bson {
    match value {
        Bson::String(text) if !text.is_empty() => codec::encode(&text).into(),
        other => other,
    }
}

fn decode_element(value: &Bson) -> UuidResult<Bson> {
    if is_falsy(value) {
        return Ok(Bson::Null);
    }
    decode_value(value).map(Bson::String)
}

fn decode_value(value: &Bson) -> UuidResult<String> {
    match value {
        Bson::Binary(binary) => Ok(codec::decode(&binary.bytes)),
        Bson::Document(doc) => match binary_like_buffer(doc) {
            Some(Bson::Binary(binary)) => Ok(codec::decode(&binary.bytes)),
            _ => Err(cast_error(value)),
        },
        other => Err(cast_error(other)),
    }
}

fn cast_error(value: &Bson) -> UuidError {
    tracing::warn!(
        element_type = ?value.element_type(),
        "cannot decode non-binary value as UUID"
    );
    UuidError::Cast(format!("{:?}", value.element_type()))
}

fn is_falsy(value: &Bson) -> bool {
    match value {
        Bson::Null | Bson::Undefined => true,
        Bson::Boolean(b) => !b,
        Bson::String(s) => s.is_empty(),
        Bson::Int32(n) => *n == 0,
        Bson::Int64(n) => *n == 0,
        Bson::Double(d) => *d == 0.0 || d.is_nan(),
        _ => false,
    }
}
