//! A named bundle of resources and exported outputs.

use std::collections::BTreeMap;

use repldata_cfn::{Output, Resource, Template};
use repldata_core::{LogicalId, StackName};
use tracing::debug;

use crate::error::{CompositionError, CompositionResult};

/// A stack under composition: resources and outputs keyed by logical ID.
///
/// Logical IDs are unique per stack across resources and outputs; a clash is
/// a composition error, not a silent overwrite.
#[derive(Debug)]
pub struct Stack {
    name: StackName,
    description: Option<String>,
    resources: BTreeMap<LogicalId, Resource>,
    outputs: BTreeMap<LogicalId, Output>,
}

impl Stack {
    /// Create an empty stack.
    ///
    /// # Errors
    /// Returns an error if `name` is not a valid stack name.
    pub fn new(name: &str) -> CompositionResult<Self> {
        Ok(Self {
            name: StackName::new(name)?,
            description: None,
            resources: BTreeMap::new(),
            outputs: BTreeMap::new(),
        })
    }

    /// Set the template description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The stack name.
    #[must_use]
    pub fn name(&self) -> &StackName {
        &self.name
    }

    /// Number of resources declared so far.
    #[must_use]
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// Add a resource under the given logical ID.
    ///
    /// # Errors
    /// Returns an error if the ID is invalid or already taken in this stack.
    pub fn add_resource(&mut self, id: &str, resource: Resource) -> CompositionResult<LogicalId> {
        let id = LogicalId::new(id)?;
        if self.resources.contains_key(&id) || self.outputs.contains_key(&id) {
            return Err(CompositionError::DuplicateLogicalId {
                stack: self.name.to_string(),
                id: id.to_string(),
            });
        }
        debug!(stack = %self.name, id = %id, kind = resource.kind.type_name(), "resource added");
        self.resources.insert(id.clone(), resource);
        Ok(id)
    }

    /// Add an output under the given logical ID.
    ///
    /// # Errors
    /// Returns an error if the ID is invalid or already taken in this stack.
    pub fn add_output(&mut self, id: &str, output: Output) -> CompositionResult<LogicalId> {
        let id = LogicalId::new(id)?;
        if self.resources.contains_key(&id) || self.outputs.contains_key(&id) {
            return Err(CompositionError::DuplicateLogicalId {
                stack: self.name.to_string(),
                id: id.to_string(),
            });
        }
        self.outputs.insert(id.clone(), output);
        Ok(id)
    }

    /// Names this stack exports for other stacks to import.
    #[must_use]
    pub fn export_names(&self) -> Vec<String> {
        self.outputs
            .values()
            .filter_map(|output| output.export.as_ref().map(|e| e.name.clone()))
            .collect()
    }

    /// Convert the stack into its template document.
    #[must_use]
    pub fn into_template(self) -> Template {
        Template {
            description: self.description,
            resources: self.resources,
            outputs: self.outputs,
            ..Template::default()
        }
    }
}
