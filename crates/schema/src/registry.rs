//! Field-type seams shared with the mapping framework.

use bson::Bson;
use std::collections::HashMap;
use std::fmt;
use uuid_codec::UuidResult;

/// A field type understood by the mapping framework.
pub trait SchemaType: Send + Sync + fmt::Debug {
    /// Document path of the field this instance is bound to.
    fn path(&self) -> &str;

    /// Name of the type, as registered in the namespace.
    fn instance(&self) -> &'static str;

    fn options(&self) -> &SchemaTypeOptions;

    /// Casts an inbound value, in either direction, for this field.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::Cast`](uuid_codec::UuidError::Cast) if the value has a shape the type
    /// cannot handle.
    fn cast(&self, value: Bson) -> UuidResult<Bson>;
}

/// Builds a schema type bound to a field path.
pub type SchemaTypeConstructor = fn(path: &str, options: SchemaTypeOptions) -> Box<dyn SchemaType>;

/// Per-field options carried for the framework. Schema types store them but do not interpret them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchemaTypeOptions {
    pub required: bool,
    pub index: bool,
    pub default: Option<Bson>,
}

/// A namespace of named schema types.
///
/// Registering a name that is already present replaces the previous constructor.
pub trait TypeNamespace {
    fn register_schema_type(&mut self, name: &str, constructor: SchemaTypeConstructor);
}

/// In-process [`TypeNamespace`] keyed by type name.
#[derive(Clone, Debug, Default)]
pub struct SchemaTypeRegistry {
    types: HashMap<String, SchemaTypeConstructor>,
}

impl SchemaTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<SchemaTypeConstructor> {
        self.types.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Builds the type registered under `name`, bound to `path`.
    ///
    /// Returns `None` if no type of that name is registered.
    pub fn instantiate(
        &self,
        name: &str,
        path: &str,
        options: SchemaTypeOptions,
    ) -> Option<Box<dyn SchemaType>> {
        self.get(name).map(|constructor| constructor(path, options))
    }

    /// Registered type names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeNamespace for SchemaTypeRegistry {
    fn register_schema_type(&mut self, name: &str, constructor: SchemaTypeConstructor) {
        if self.types.insert(name.to_owned(), constructor).is_some() {
            tracing::debug!(name, "replaced existing schema type");
        }
    }
}
