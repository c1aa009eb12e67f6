//! # Extension Descriptors
//!
//! This crate holds the documentable metadata of a pluggable extension as an
//! immutable snapshot: its qualified name, extension type, deprecation notice,
//! relationships and property descriptors.
//!
//! A descriptor is produced once from a live component (see
//! [`ConfigurableComponent`]) or deserialized from JSON, handed to a
//! documentation writer, and then discarded.
//!
//! ## Ordering
//!
//! Some collections are declared as sets and carry no order of their own:
//!
//! | Collection | Container | Serialized order |
//! |------------|-----------|------------------|
//! | relationships | `HashSet` | by name |
//! | property dependencies | `Vec` (unordered) | by referenced property name |
//! | dependent values | `HashSet` | lexicographic |
//! | resource types | `HashSet` | by type name |
//! | property descriptors | `Vec` | declaration order |
//! | deprecation alternatives | `Vec` | declaration order |
//!
//! Writers impose the serialized order themselves; this crate only exposes the
//! `sorted_*` helpers that do it.
//!
//! ## Example
//!
//! ```
//! use extdoc_descriptor::{
//!     ExtensionDescriptor, ExtensionType, PropertyDescriptor, Relationship, ResourceCardinality,
//!     ResourceType,
//! };
//!
//! let descriptor = ExtensionDescriptor::new("org.example.FetchFile", ExtensionType::Processor)
//!     .with_relationship(Relationship::new("success", "Fetched without errors"))
//!     .with_property(PropertyDescriptor::new("Directory"))
//!     .with_property(
//!         PropertyDescriptor::new("File Path")
//!             .depends_on("Directory", [] as [&str; 0])
//!             .identifies_external_resource(
//!                 ResourceCardinality::Single,
//!                 [ResourceType::File, ResourceType::Url],
//!             ),
//!     );
//!
//! assert_eq!(descriptor.property_descriptors().len(), 2);
//! ```

pub mod component;
pub mod extension;
pub mod property;
pub mod relationship;
pub mod verification;

pub use component::ConfigurableComponent;
pub use extension::{DeprecationNotice, ExtensionDescriptor, ExtensionType};
pub use property::{
    PropertyDependency, PropertyDescriptor, ResourceCardinality, ResourceDefinition, ResourceType,
};
pub use relationship::Relationship;
pub use verification::{
    ConfigVerificationResult, ConfigurationContext, VerifiableComponent, VerificationOutcome,
};
