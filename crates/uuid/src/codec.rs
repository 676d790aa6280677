//! Conversion between the textual and binary UUID forms.

use crate::{BinaryUuid, UuidError, UuidResult};

/// Byte ranges of the five hex groups, in order.
const GROUPS: [(usize, usize); 5] = [(0, 4), (4, 6), (6, 8), (8, 10), (10, 16)];

/// Offsets of the hyphens in the 36-character form.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// Encodes a UUID string into its binary form.
///
/// Every `-` is stripped and the remaining characters are read as hex digit pairs. Decoding stops
/// at the first pair that is not valid hex and an odd trailing digit is dropped, so malformed input
/// produces a truncated buffer rather than an error.
///
/// Use [`encode_strict`] when the input comes from outside the process.
pub fn encode(text: &str) -> BinaryUuid {
    let normalized = text.replace('-', "");
    let valid = normalized
        .bytes()
        .take_while(u8::is_ascii_hexdigit)
        .count()
        & !1;
    // The prefix is even-length ASCII hex, so decoding cannot fail.
    let bytes = hex::decode(&normalized[..valid]).unwrap_or_default();
    BinaryUuid::from_vec(bytes)
}

/// Encodes a UUID string, rejecting anything that is not a well-formed UUID.
///
/// Accepts the 36-character hyphenated form (8-4-4-4-12) or the 32-character simple form. Hex
/// digits may be upper- or lowercase.
///
/// # Errors
///
/// Returns [`UuidError::InvalidInput`] if `text` has the wrong length, misplaced hyphens or
/// non-hex characters.
pub fn encode_strict(text: &str) -> UuidResult<BinaryUuid> {
    let simple = match text.len() {
        36 if is_hyphenated(text) => text.replace('-', ""),
        32 if text.bytes().all(|b| b.is_ascii_hexdigit()) => text.to_owned(),
        _ => {
            return Err(UuidError::InvalidInput(format!(
                "UUID must be 36 hyphenated or 32 plain hex characters, got: '{}'",
                text
            )))
        }
    };

    let mut bytes = [0u8; 16];
    hex::decode_to_slice(&simple, &mut bytes)
        .map_err(|e| UuidError::InvalidInput(format!("Invalid UUID '{}': {}", text, e)))?;
    Ok(BinaryUuid::from_bytes(bytes))
}

/// Returns true if `text` is in the canonical textual form.
///
/// This is a purely syntactic check:
/// - Exactly 36 bytes long
/// - Hyphens at offsets 8, 13, 18 and 23
/// - Lowercase hex characters (`0-9` and `a-f`) everywhere else
pub fn is_canonical(text: &str) -> bool {
    text.len() == 36
        && text.bytes().enumerate().all(|(i, b)| {
            if HYPHENS.contains(&i) {
                b == b'-'
            } else {
                matches!(b, b'0'..=b'9' | b'a'..=b'f')
            }
        })
}

fn is_hyphenated(text: &str) -> bool {
    text.bytes().enumerate().all(|(i, b)| {
        if HYPHENS.contains(&i) {
            b == b'-'
        } else {
            b.is_ascii_hexdigit()
        }
    })
}

/// Decodes a binary UUID into the canonical hyphenated form.
///
/// The subtype of the source is irrelevant; only the bytes are read. Group ranges are clamped to
/// the buffer length, so a short buffer yields short (or empty) groups and bytes past the 16th
/// are ignored.
pub fn decode(bytes: impl AsRef<[u8]>) -> String {
    let bytes = bytes.as_ref();
    let len = bytes.len();

    let mut text = String::with_capacity(36);
    for (i, &(start, end)) in GROUPS.iter().enumerate() {
        if i > 0 {
            text.push('-');
        }
        text.push_str(&hex::encode(&bytes[start.min(len)..end.min(len)]));
    }
    text
}
