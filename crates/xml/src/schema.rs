//! Element names of the extension documentation schema.
//!
//! ```text
//! extension
//!   name
//!   type
//!   deprecationNotice?
//!     reason
//!     alternatives
//!       alternative*
//!   relationships
//!     relationship*
//!       name
//!       description
//!   properties
//!     property*
//!       name
//!       dependencies?
//!         dependency*
//!           propertyName
//!           dependentValues?
//!             value*
//!       resourceDefinition?
//!         cardinality
//!         resourceTypes
//!           resourceType*
//! ```

pub const EXTENSION: &str = "extension";
pub const NAME: &str = "name";
pub const TYPE: &str = "type";

pub const DEPRECATION_NOTICE: &str = "deprecationNotice";
pub const REASON: &str = "reason";
pub const ALTERNATIVES: &str = "alternatives";
pub const ALTERNATIVE: &str = "alternative";

pub const RELATIONSHIPS: &str = "relationships";
pub const RELATIONSHIP: &str = "relationship";
pub const DESCRIPTION: &str = "description";

pub const PROPERTIES: &str = "properties";
pub const PROPERTY: &str = "property";
pub const DEPENDENCIES: &str = "dependencies";
pub const DEPENDENCY: &str = "dependency";
pub const PROPERTY_NAME: &str = "propertyName";
pub const DEPENDENT_VALUES: &str = "dependentValues";
pub const VALUE: &str = "value";

pub const RESOURCE_DEFINITION: &str = "resourceDefinition";
pub const CARDINALITY: &str = "cardinality";
pub const RESOURCE_TYPES: &str = "resourceTypes";
pub const RESOURCE_TYPE: &str = "resourceType";
