//! JSON input and output for extension descriptors.
//!
//! Descriptors extracted in another process are exchanged as JSON and
//! rendered with the XML writer.
use crate::error::Result;
use extdoc_descriptor::ExtensionDescriptor;
use std::io::Read;

/// Deserialize an extension descriptor from a JSON string.
///
/// # Examples
///
/// ```
/// use extdoc_xml::json::descriptor_from_json_str;
///
/// let json = r#"{"qualifiedName": "org.example.Minimal", "extensionType": "PROCESSOR"}"#;
/// let descriptor = descriptor_from_json_str(json)?;
/// assert_eq!(descriptor.qualified_name(), "org.example.Minimal");
/// # Ok::<(), extdoc_xml::SerializationError>(())
/// ```
pub fn descriptor_from_json_str(s: &str) -> Result<ExtensionDescriptor> {
    Ok(serde_json::from_str(s)?)
}

/// Deserialize an extension descriptor from a JSON reader.
pub fn descriptor_from_json_reader<R: Read>(reader: R) -> Result<ExtensionDescriptor> {
    Ok(serde_json::from_reader(reader)?)
}

/// Serialize an extension descriptor to a pretty-printed JSON string.
pub fn descriptor_to_json_string_pretty(descriptor: &ExtensionDescriptor) -> Result<String> {
    Ok(serde_json::to_string_pretty(descriptor)?)
}
