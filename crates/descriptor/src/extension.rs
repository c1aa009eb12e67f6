//! The top-level extension descriptor.

use crate::property::PropertyDescriptor;
use crate::relationship::{self, Relationship};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Category of a pluggable extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtensionType {
    Processor,
    ControllerService,
    ReportingTask,
    FlowAnalysisRule,
    ParameterProvider,
    FlowRegistryClient,
}

impl ExtensionType {
    /// Returns the name written to documentation, e.g. `CONTROLLER_SERVICE`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtensionType::Processor => "PROCESSOR",
            ExtensionType::ControllerService => "CONTROLLER_SERVICE",
            ExtensionType::ReportingTask => "REPORTING_TASK",
            ExtensionType::FlowAnalysisRule => "FLOW_ANALYSIS_RULE",
            ExtensionType::ParameterProvider => "PARAMETER_PROVIDER",
            ExtensionType::FlowRegistryClient => "FLOW_REGISTRY_CLIENT",
        }
    }
}

impl fmt::Display for ExtensionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marks an extension as deprecated.
///
/// An absent `reason` is kept distinct from an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeprecationNotice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Suggested replacements, in author-supplied order.
    #[serde(default)]
    pub alternatives: Vec<String>,
}

impl DeprecationNotice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_alternative(mut self, alternative: impl Into<String>) -> Self {
        self.alternatives.push(alternative.into());
        self
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }
}

/// Point-in-time snapshot of an extension's documentable metadata.
///
/// Construct one with [`ExtensionDescriptor::new`] and the `with_*` methods,
/// from a live component with [`ExtensionDescriptor::from_component`], or by
/// deserializing JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionDescriptor {
    /// Fully qualified name of the implementation type.
    pub qualified_name: String,

    pub extension_type: ExtensionType,

    /// Present only if the extension is deprecated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_notice: Option<DeprecationNotice>,

    /// Unordered; see [`ExtensionDescriptor::sorted_relationships`].
    #[serde(default)]
    pub relationships: HashSet<Relationship>,

    /// Declaration order.
    #[serde(default)]
    pub property_descriptors: Vec<PropertyDescriptor>,
}

impl ExtensionDescriptor {
    pub fn new(qualified_name: impl Into<String>, extension_type: ExtensionType) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            extension_type,
            deprecation_notice: None,
            relationships: HashSet::new(),
            property_descriptors: Vec::new(),
        }
    }

    pub fn with_deprecation_notice(mut self, notice: DeprecationNotice) -> Self {
        self.deprecation_notice = Some(notice);
        self
    }

    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.relationships.insert(relationship);
        self
    }

    pub fn with_relationships<I>(mut self, relationships: I) -> Self
    where
        I: IntoIterator<Item = Relationship>,
    {
        self.relationships.extend(relationships);
        self
    }

    /// Appends a property descriptor after those already declared.
    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.property_descriptors.push(property);
        self
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn extension_type(&self) -> ExtensionType {
        self.extension_type
    }

    pub fn deprecation_notice(&self) -> Option<&DeprecationNotice> {
        self.deprecation_notice.as_ref()
    }

    pub fn relationships(&self) -> &HashSet<Relationship> {
        &self.relationships
    }

    pub fn property_descriptors(&self) -> &[PropertyDescriptor] {
        &self.property_descriptors
    }

    /// Returns the relationships ordered by name.
    pub fn sorted_relationships(&self) -> Vec<&Relationship> {
        relationship::sorted_relationships(&self.relationships)
    }
}
