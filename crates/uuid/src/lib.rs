//! Binary UUID codec and generation utilities.
//!
//! Document stores keep UUIDs as a 16-byte BSON binary tagged with the UUID subtype (`0x04`),
//! while application code works with the familiar hyphenated string form.
//!
//! This crate provides:
//! - A value type ([`BinaryUuid`]) holding the storage representation.
//! - The codec between the two representations ([`encode`], [`decode`], [`encode_strict`]).
//! - Generators for fresh v1 (time-based) and v4 (random) identifiers ([`v1`], [`v4`],
//!   [`UuidGenerator`]).
//! - Shape-aware cast helpers over [`bson::Bson`] values ([`get_uuid`], [`set_uuid`]).
//!
//! ## Textual form
//! - Length: 36
//! - Groups: 8-4-4-4-12 lowercase hex characters separated by `-`
//! - Example: `123e4567-e89b-12d3-a456-426614174000`
//!
//! ## Binary form
//! The hex groups map onto fixed byte ranges of the 16-byte buffer:
//!
//! | Group | Bytes    |
//! |-------|----------|
//! | 1     | `[0,4)`  |
//! | 2     | `[4,6)`  |
//! | 3     | `[6,8)`  |
//! | 4     | `[8,10)` |
//! | 5     | `[10,16)`|
//!
//! Notes:
//! - [`encode`] is lenient. Hyphens are stripped and hex decoding stops at the first invalid
//!   pair, so malformed input yields a truncated value instead of an error. Use
//!   [`encode_strict`] for externally supplied identifiers.
//! - Decoding ignores the binary subtype.
//!
//! ## Example
//!
//! ```
//! use uuid_codec::{decode, encode};
//!
//! let binary = encode("123e4567-e89b-12d3-a456-426614174000");
//! assert_eq!(binary.as_bytes()[0], 0x12);
//! assert_eq!(decode(&binary), "123e4567-e89b-12d3-a456-426614174000");
//! ```

mod binary;
mod codec;
mod config;
mod convert;
mod generator;

// Re-export public types
pub use binary::BinaryUuid;
pub use codec::{decode, encode, encode_strict, is_canonical};
pub use config::{node_id_from_env_value, GeneratorConfig};
pub use convert::{binary_like_buffer, get_uuid, set_uuid, to_binary_uuid, to_string_uuid};
pub use generator::{v1, v4, UuidGenerator};

/// Error type for UUID operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A value could not be cast to or from a UUID
    #[error("Unable to cast value to UUID: {0}")]
    Cast(String),
}

/// Result type for UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;
