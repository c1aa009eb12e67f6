//! # Extension Documentation XML Writer
//!
//! This crate renders an [`ExtensionDescriptor`](extdoc_descriptor::ExtensionDescriptor)
//! as a canonical XML document for generated documentation.
//!
//! ## Features
//!
//! - **Deterministic**: relationships, dependencies, dependent values and
//!   resource types are sorted right before they are written, so the same
//!   descriptor always yields byte-identical output.
//! - **Streaming**: elements are written as quick-xml events in a single
//!   depth-first pass with no backtracking.
//! - **All or nothing**: the document is released to the sink only after the
//!   root element closes with every element balanced. A failed write leaves
//!   no unterminated elements behind.
//!
//! ## Ordering
//!
//! | Element | Order |
//! |---------|-------|
//! | `relationship` | by name |
//! | `property` | declaration order |
//! | `dependency` | by `propertyName` |
//! | `value` | lexicographic |
//! | `resourceType` | by type name |
//! | `alternative` | declaration order |
//!
//! ## Examples
//!
//! ```
//! use extdoc_descriptor::{ExtensionDescriptor, ExtensionType, Relationship};
//! use extdoc_xml::{DocumentationWriter, WriterOptions, XmlDocumentationWriter};
//!
//! let descriptor = ExtensionDescriptor::new("org.example.Split", ExtensionType::Processor)
//!     .with_relationship(Relationship::new("split", "Fragments"))
//!     .with_relationship(Relationship::new("original", "Input"));
//!
//! let mut writer = XmlDocumentationWriter::with_options(Vec::new(), WriterOptions::pretty());
//! writer.write(&descriptor)?;
//!
//! let xml = String::from_utf8(writer.into_inner()).unwrap();
//! assert!(xml.find("original").unwrap() < xml.find("split").unwrap());
//! # Ok::<(), extdoc_xml::SerializationError>(())
//! ```

pub mod error;
pub mod json;
pub mod schema;
pub mod stream;
pub mod writer;

pub use error::{Result, SerializationError};
pub use stream::{ElementStream, WriterOptions};
pub use writer::{
    DocumentationWriter, XmlDocumentationWriter, to_xml_string, to_xml_vec, to_xml_writer,
};
