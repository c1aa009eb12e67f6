//! Configuration verification contract.
//!
//! Verification is a more expensive check than validation. It may open
//! network connections or touch external systems, and it only runs when the
//! component is fully inactive and its configuration has already passed
//! validation. The framework does not run lifecycle hooks before calling
//! [`VerifiableComponent::verify`]; any setup the check needs belongs in the
//! implementation.
//!
//! Documentation writers never consume this contract.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Prospective configuration handed to a verification run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurationContext {
    properties: HashMap<String, String>,
}

impl ConfigurationContext {
    pub fn new(properties: HashMap<String, String>) -> Self {
        Self { properties }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Returns the raw configured value, without variable resolution.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }
}

/// Outcome of a single verification step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationOutcome {
    Successful,
    Failed,
    Skipped,
}

impl fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationOutcome::Successful => write!(f, "SUCCESSFUL"),
            VerificationOutcome::Failed => write!(f, "FAILED"),
            VerificationOutcome::Skipped => write!(f, "SKIPPED"),
        }
    }
}

/// Result of one step of a verification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigVerificationResult {
    pub step_name: String,
    pub outcome: VerificationOutcome,
    pub explanation: String,
}

impl ConfigVerificationResult {
    pub fn successful(step_name: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self::new(step_name, VerificationOutcome::Successful, explanation)
    }

    pub fn failed(step_name: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self::new(step_name, VerificationOutcome::Failed, explanation)
    }

    pub fn skipped(step_name: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self::new(step_name, VerificationOutcome::Skipped, explanation)
    }

    fn new(
        step_name: impl Into<String>,
        outcome: VerificationOutcome,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            step_name: step_name.into(),
            outcome,
            explanation: explanation.into(),
        }
    }
}

/// A component that can check a prospective configuration before it is
/// activated.
///
/// Implementations log through `tracing`; callers that want to keep
/// verification output apart from normal component logs should run `verify`
/// inside a dedicated span.
pub trait VerifiableComponent {
    /// Verifies `context`, returning one result per step performed, in the
    /// order the steps ran.
    ///
    /// `variables` resolve variable references in property values.
    fn verify(
        &self,
        context: &ConfigurationContext,
        variables: &HashMap<String, String>,
    ) -> Vec<ConfigVerificationResult>;
}
