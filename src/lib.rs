//! # bson-uuid
//!
//! Store UUIDs as 16-byte BSON binaries (subtype `0x04`) while handing canonical hyphenated
//! strings to application code.
//!
//! This crate gathers the public surface of the workspace:
//! - [`get_uuid`] / [`set_uuid`]: cast a stored value (scalar or array) to its application form,
//!   and back.
//! - [`v1`] / [`v4`]: generate fresh identifiers, already in binary form.
//! - [`inject_uuid`] / [`UuidSchemaType`]: register the `UUID` field type with a mapping
//!   framework's type namespace.
//! - [`util`]: the generators together with the typed codec helpers.
//!
//! **No persistence concerns**: reading and writing documents belongs to the caller's database
//! driver; this crate only converts values.
//!
//! ```
//! use bson_uuid::bson::Bson;
//! use bson_uuid::{get_uuid, set_uuid};
//!
//! let stored = set_uuid(Bson::String("123e4567-e89b-12d3-a456-426614174000".into()));
//! assert!(matches!(stored, Bson::Binary(_)));
//!
//! let text = get_uuid(&stored).unwrap();
//! assert_eq!(text, Some(Bson::String("123e4567-e89b-12d3-a456-426614174000".into())));
//! ```

// Re-exported so callers build values against the same `bson` version.
pub use bson;

pub use uuid_codec::{
    BinaryUuid, GeneratorConfig, UuidError, UuidGenerator, UuidResult, get_uuid, set_uuid, v1,
    v4,
};
pub use uuid_schema::{
    SchemaType, SchemaTypeConstructor, SchemaTypeOptions, SchemaTypeRegistry, TypeNamespace,
    UuidSchemaType, inject_uuid,
};

/// Generators and typed codec helpers.
pub mod util {
    pub use uuid_codec::{
        decode, encode, encode_strict, is_canonical, node_id_from_env_value, to_binary_uuid,
        to_string_uuid, v1, v4,
    };
}
