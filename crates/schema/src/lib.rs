//! # UUID schema type
//!
//! Integration between the binary UUID codec and an object-document mapping framework.
//!
//! The framework is an external collaborator. It is represented here by two seams:
//! - [`SchemaType`]: a field type whose `cast` hook the framework calls when moving a value
//!   between application memory and storage.
//! - [`TypeNamespace`]: the framework's registry of named field types.
//!
//! [`inject_uuid`] installs [`UuidSchemaType`] under the name `UUID`. Registration is explicit
//! and happens once during application start-up; nothing is registered at load time.
//!
//! ```
//! use uuid_schema::{inject_uuid, SchemaTypeOptions, SchemaTypeRegistry};
//!
//! let mut registry = SchemaTypeRegistry::new();
//! inject_uuid(&mut registry);
//!
//! let field = registry
//!     .instantiate("UUID", "owner_id", SchemaTypeOptions::default())
//!     .unwrap();
//! assert_eq!(field.instance(), "UUID");
//! ```

mod registry;
mod uuid_type;

pub use registry::{
    SchemaType, SchemaTypeConstructor, SchemaTypeOptions, SchemaTypeRegistry, TypeNamespace,
};
pub use uuid_type::{inject_uuid, UuidSchemaType};
