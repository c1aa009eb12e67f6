//! XML documentation writer for extension descriptors.
//!
//! The writer walks an [`ExtensionDescriptor`] depth first and emits each
//! element through an [`ElementStream`]. Collections that arrive as sets are
//! sorted immediately before they are emitted; declaration-ordered
//! collections are written as given.

use crate::error::Result;
use crate::schema;
use crate::stream::{ElementStream, WriterOptions};
use extdoc_descriptor::{
    DeprecationNotice, ExtensionDescriptor, PropertyDependency, PropertyDescriptor,
    ResourceDefinition,
};
use std::io::Write;
use tracing::debug;

/// Serialize an extension descriptor to an XML string.
///
/// # Examples
///
/// ```
/// use extdoc_descriptor::{ExtensionDescriptor, ExtensionType};
/// use extdoc_xml::to_xml_string;
///
/// let descriptor = ExtensionDescriptor::new("org.example.Minimal", ExtensionType::Processor);
/// let xml = to_xml_string(&descriptor)?;
///
/// assert_eq!(
///     xml,
///     "<extension><name>org.example.Minimal</name><type>PROCESSOR</type>\
///      <relationships></relationships><properties></properties></extension>"
/// );
/// # Ok::<(), extdoc_xml::SerializationError>(())
/// ```
pub fn to_xml_string(descriptor: &ExtensionDescriptor) -> Result<String> {
    let buffer = to_xml_vec(descriptor)?;
    String::from_utf8(buffer).map_err(|e| e.to_string().into())
}

/// Serialize an extension descriptor to an XML byte vector.
pub fn to_xml_vec(descriptor: &ExtensionDescriptor) -> Result<Vec<u8>> {
    render(descriptor, &WriterOptions::default())
}

/// Serialize an extension descriptor to an XML writer.
pub fn to_xml_writer<W: Write>(descriptor: &ExtensionDescriptor, writer: W) -> Result<()> {
    XmlDocumentationWriter::new(writer).write(descriptor)
}

/// Produces documentation for one extension descriptor per call.
pub trait DocumentationWriter {
    fn write(&mut self, descriptor: &ExtensionDescriptor) -> Result<()>;
}

/// Writes extension documentation as XML to a sink.
///
/// Each call to [`DocumentationWriter::write`] renders a complete document
/// in memory and hands it to the sink in one piece. A sink should receive a
/// single document.
pub struct XmlDocumentationWriter<W: Write> {
    sink: W,
    options: WriterOptions,
}

impl<W: Write> XmlDocumentationWriter<W> {
    /// Creates a writer producing compact XML without a declaration.
    pub fn new(sink: W) -> Self {
        Self::with_options(sink, WriterOptions::default())
    }

    pub fn with_options(sink: W, options: WriterOptions) -> Self {
        Self { sink, options }
    }

    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> DocumentationWriter for XmlDocumentationWriter<W> {
    fn write(&mut self, descriptor: &ExtensionDescriptor) -> Result<()> {
        let document = render(descriptor, &self.options)?;

        self.sink.write_all(&document)?;
        self.sink.flush()?;

        debug!(
            extension = %descriptor.qualified_name(),
            bytes = document.len(),
            "Wrote extension documentation"
        );
        Ok(())
    }
}

/// Renders the complete document, releasing it only when every element has
/// been closed.
fn render(descriptor: &ExtensionDescriptor, options: &WriterOptions) -> Result<Vec<u8>> {
    let mut stream = ElementStream::new(options)?;
    write_extension(&mut stream, descriptor)?;
    stream.finish()
}

fn write_extension(stream: &mut ElementStream, descriptor: &ExtensionDescriptor) -> Result<()> {
    debug!(
        extension = %descriptor.qualified_name(),
        extension_type = %descriptor.extension_type(),
        relationships = descriptor.relationships().len(),
        properties = descriptor.property_descriptors().len(),
        "Writing extension documentation"
    );

    stream.element(schema::EXTENSION, |s| {
        s.text_element(schema::NAME, descriptor.qualified_name())?;
        s.text_element(schema::TYPE, descriptor.extension_type().as_str())?;

        if let Some(notice) = descriptor.deprecation_notice() {
            write_deprecation_notice(s, notice)?;
        }

        write_relationships(s, descriptor)?;
        write_properties(s, descriptor.property_descriptors())
    })
}

fn write_deprecation_notice(stream: &mut ElementStream, notice: &DeprecationNotice) -> Result<()> {
    stream.element(schema::DEPRECATION_NOTICE, |s| {
        match notice.reason() {
            Some(reason) => s.text_element(schema::REASON, reason)?,
            None => s.empty_element(schema::REASON)?,
        }

        // Author-supplied order is meaningful here.
        s.element(schema::ALTERNATIVES, |s| {
            for alternative in notice.alternatives() {
                s.text_element(schema::ALTERNATIVE, alternative)?;
            }
            Ok(())
        })
    })
}

fn write_relationships(stream: &mut ElementStream, descriptor: &ExtensionDescriptor) -> Result<()> {
    stream.element(schema::RELATIONSHIPS, |s| {
        for relationship in descriptor.sorted_relationships() {
            s.element(schema::RELATIONSHIP, |s| {
                s.text_element(schema::NAME, relationship.name())?;
                s.text_element(schema::DESCRIPTION, relationship.description())
            })?;
        }
        Ok(())
    })
}

fn write_properties(stream: &mut ElementStream, properties: &[PropertyDescriptor]) -> Result<()> {
    stream.element(schema::PROPERTIES, |s| {
        for property in properties {
            write_property(s, property)?;
        }
        Ok(())
    })
}

fn write_property(stream: &mut ElementStream, property: &PropertyDescriptor) -> Result<()> {
    stream.element(schema::PROPERTY, |s| {
        s.text_element(schema::NAME, property.name())?;

        if !property.dependencies().is_empty() {
            s.element(schema::DEPENDENCIES, |s| {
                for dependency in property.sorted_dependencies() {
                    write_dependency(s, dependency)?;
                }
                Ok(())
            })?;
        }

        if let Some(definition) = property.resource_definition() {
            write_resource_definition(s, definition)?;
        }

        Ok(())
    })
}

fn write_dependency(stream: &mut ElementStream, dependency: &PropertyDependency) -> Result<()> {
    stream.element(schema::DEPENDENCY, |s| {
        s.text_element(schema::PROPERTY_NAME, dependency.property_name())?;

        if !dependency.is_unconditional() {
            s.element(schema::DEPENDENT_VALUES, |s| {
                for value in dependency.sorted_values() {
                    s.text_element(schema::VALUE, value)?;
                }
                Ok(())
            })?;
        }

        Ok(())
    })
}

fn write_resource_definition(
    stream: &mut ElementStream,
    definition: &ResourceDefinition,
) -> Result<()> {
    stream.element(schema::RESOURCE_DEFINITION, |s| {
        s.text_element(schema::CARDINALITY, definition.cardinality().as_str())?;
        s.element(schema::RESOURCE_TYPES, |s| {
            for resource_type in definition.sorted_resource_types() {
                s.text_element(schema::RESOURCE_TYPE, resource_type.as_str())?;
            }
            Ok(())
        })
    })
}
