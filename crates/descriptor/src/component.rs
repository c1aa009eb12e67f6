//! The surface a live extension exposes for documentation.
//!
//! Documentation writers never talk to components directly; they take the
//! snapshot produced by [`ExtensionDescriptor::from_component`].

use crate::extension::{DeprecationNotice, ExtensionDescriptor, ExtensionType};
use crate::property::PropertyDescriptor;
use crate::relationship::Relationship;
use std::collections::HashSet;
use tracing::debug;

/// A configurable extension whose metadata can be documented.
pub trait ConfigurableComponent {
    /// Fully qualified name of the implementation type.
    fn qualified_name(&self) -> String;

    fn extension_type(&self) -> ExtensionType;

    fn deprecation_notice(&self) -> Option<DeprecationNotice> {
        None
    }

    fn relationships(&self) -> HashSet<Relationship> {
        HashSet::new()
    }

    /// Supported property descriptors in declaration order.
    fn property_descriptors(&self) -> Vec<PropertyDescriptor> {
        Vec::new()
    }
}

impl ExtensionDescriptor {
    /// Takes a snapshot of a component's documentable metadata.
    pub fn from_component(component: &dyn ConfigurableComponent) -> Self {
        let descriptor = Self {
            qualified_name: component.qualified_name(),
            extension_type: component.extension_type(),
            deprecation_notice: component.deprecation_notice(),
            relationships: component.relationships(),
            property_descriptors: component.property_descriptors(),
        };

        debug!(
            extension = %descriptor.qualified_name,
            extension_type = %descriptor.extension_type,
            relationships = descriptor.relationships.len(),
            properties = descriptor.property_descriptors.len(),
            "Extracted extension descriptor"
        );

        descriptor
    }
}
