//! Property descriptors, their dependencies and external resource definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A configuration property declared by an extension.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    /// Property name, unique within its descriptor.
    pub name: String,

    /// Properties this one depends on. Treated as unordered.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<PropertyDependency>,

    /// Present only if the property value identifies an external resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_definition: Option<ResourceDefinition>,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Declares that this property is only relevant when `property_name` is
    /// set, optionally restricted to the given values.
    ///
    /// An empty value set makes the dependency unconditional.
    pub fn depends_on<I, S>(mut self, property_name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies
            .push(PropertyDependency::new(property_name, values));
        self
    }

    /// Declares that the property value identifies an external resource of one
    /// of the given types.
    pub fn identifies_external_resource<I>(
        mut self,
        cardinality: ResourceCardinality,
        resource_types: I,
    ) -> Self
    where
        I: IntoIterator<Item = ResourceType>,
    {
        self.resource_definition = Some(ResourceDefinition::new(cardinality, resource_types));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dependencies(&self) -> &[PropertyDependency] {
        &self.dependencies
    }

    pub fn resource_definition(&self) -> Option<&ResourceDefinition> {
        self.resource_definition.as_ref()
    }

    /// Returns the dependencies ordered by referenced property name.
    pub fn sorted_dependencies(&self) -> Vec<&PropertyDependency> {
        let mut sorted: Vec<&PropertyDependency> = self.dependencies.iter().collect();
        sorted.sort_by(|a, b| {
            a.property_name
                .cmp(&b.property_name)
                .then_with(|| a.sorted_values().cmp(&b.sorted_values()))
        });
        sorted
    }
}

/// A precondition that a property is only relevant when another property is
/// set, or set to one of `dependent_values`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDependency {
    /// Name of the property depended upon.
    pub property_name: String,

    /// Values of the referenced property that satisfy the dependency. Empty
    /// means any value.
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    pub dependent_values: HashSet<String>,
}

impl PropertyDependency {
    pub fn new<I, S>(property_name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            property_name: property_name.into(),
            dependent_values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    pub fn dependent_values(&self) -> &HashSet<String> {
        &self.dependent_values
    }

    pub fn is_unconditional(&self) -> bool {
        self.dependent_values.is_empty()
    }

    /// Returns the dependent values in lexicographic order.
    pub fn sorted_values(&self) -> Vec<&str> {
        let mut values: Vec<&str> = self.dependent_values.iter().map(String::as_str).collect();
        values.sort_unstable();
        values
    }
}

/// Declares that a property identifies an external resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDefinition {
    pub cardinality: ResourceCardinality,

    /// Acceptable resource kinds. Unordered.
    #[serde(default)]
    pub resource_types: HashSet<ResourceType>,
}

impl ResourceDefinition {
    pub fn new<I>(cardinality: ResourceCardinality, resource_types: I) -> Self
    where
        I: IntoIterator<Item = ResourceType>,
    {
        Self {
            cardinality,
            resource_types: resource_types.into_iter().collect(),
        }
    }

    pub fn cardinality(&self) -> ResourceCardinality {
        self.cardinality
    }

    pub fn resource_types(&self) -> &HashSet<ResourceType> {
        &self.resource_types
    }

    /// Returns the resource types ordered by type name.
    ///
    /// The order follows [`ResourceType::as_str`], not the variant declaration
    /// order.
    pub fn sorted_resource_types(&self) -> Vec<ResourceType> {
        let mut types: Vec<ResourceType> = self.resource_types.iter().copied().collect();
        types.sort_unstable_by_key(|t| t.as_str());
        types
    }
}

/// Whether a property may reference one or many resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceCardinality {
    Single,
    Multiple,
}

impl ResourceCardinality {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceCardinality::Single => "SINGLE",
            ResourceCardinality::Multiple => "MULTIPLE",
        }
    }
}

impl fmt::Display for ResourceCardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of external resource a property may identify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    /// A file on the local filesystem.
    File,
    /// A directory on the local filesystem.
    Directory,
    /// Inline text.
    Text,
    /// A URL.
    Url,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::File => "FILE",
            ResourceType::Directory => "DIRECTORY",
            ResourceType::Text => "TEXT",
            ResourceType::Url => "URL",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
