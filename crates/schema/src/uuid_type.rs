//! The `UUID` schema type.

use crate::{SchemaType, SchemaTypeOptions, TypeNamespace};
use bson::Bson;
use uuid_codec::{binary_like_buffer, decode, set_uuid, UuidError, UuidResult};

/// Field type storing UUIDs as BSON binaries and exposing them as strings.
///
/// The cast hook converts in whichever direction the inbound value needs:
///
/// | Inbound                            | Result                      |
/// |------------------------------------|-----------------------------|
/// | binary (any subtype)               | decoded hyphenated string   |
/// | string                             | UUID binary                 |
/// | document with a truthy `buffer`    | unchanged                   |
/// | anything else                      | [`UuidError::Cast`]         |
#[derive(Clone, Debug)]
pub struct UuidSchemaType {
    path: String,
    options: SchemaTypeOptions,
}

impl UuidSchemaType {
    /// Name the type is registered under.
    pub const NAME: &'static str = "UUID";

    pub fn new(path: impl Into<String>, options: SchemaTypeOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    fn construct(path: &str, options: SchemaTypeOptions) -> Box<dyn SchemaType> {
        Box::new(Self::new(path, options))
    }
}

impl SchemaType for UuidSchemaType {
    fn path(&self) -> &str {
        &self.path
    }

    fn instance(&self) -> &'static str {
        Self::NAME
    }

    fn options(&self) -> &SchemaTypeOptions {
        &self.options
    }

    fn cast(&self, value: Bson) -> UuidResult<Bson> {
        match value {
            Bson::Binary(binary) => Ok(Bson::String(decode(&binary.bytes))),
            text @ Bson::String(_) => Ok(set_uuid(text)),
            Bson::Document(doc) if binary_like_buffer(&doc).is_some() => Ok(Bson::Document(doc)),
            other => {
                tracing::warn!(
                    path = %self.path,
                    element_type = ?other.element_type(),
                    "unable to cast value to UUID"
                );
                Err(UuidError::Cast(format!(
                    "{:?} at path '{}'",
                    other.element_type(),
                    self.path
                )))
            }
        }
    }
}

/// Registers [`UuidSchemaType`] in `namespace` under the name `UUID`.
///
/// Calling this again simply replaces the earlier registration.
pub fn inject_uuid<N>(namespace: &mut N)
where
    N: TypeNamespace + ?Sized,
{
    namespace.register_schema_type(UuidSchemaType::NAME, UuidSchemaType::construct);
    tracing::debug!(name = UuidSchemaType::NAME, "registered schema type");
}
