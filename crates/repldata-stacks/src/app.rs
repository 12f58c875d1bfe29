//! The app: an ordered collection of stacks and their synthesis.
//!
//! Stacks register in dependency order; synthesis re-checks that order by
//! resolving every `Fn::ImportValue` against the exports of earlier stacks,
//! so a group consuming a handle that was never produced fails the whole
//! composition instead of emitting an undeployable graph.

use std::collections::BTreeSet;

use repldata_core::StackName;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{CompositionError, CompositionResult};
use crate::stack::Stack;

/// A synthesized stack: its name and template document as JSON.
#[derive(Debug, Clone)]
pub struct SynthesizedStack {
    /// The stack name (also the template file stem).
    pub name: StackName,
    /// The template document.
    pub template: Value,
}

/// An ordered collection of stacks forming one deployable composition.
#[derive(Debug, Default)]
pub struct App {
    stacks: Vec<Stack>,
}

impl App {
    /// Create an empty app.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered stacks.
    #[must_use]
    pub fn stack_count(&self) -> usize {
        self.stacks.len()
    }

    /// Register a stack. Stacks must be registered in dependency order:
    /// producers of exported handles before their consumers.
    ///
    /// # Errors
    /// Returns an error if a stack with the same name is already registered.
    pub fn add_stack(&mut self, stack: Stack) -> CompositionResult<()> {
        if self.stacks.iter().any(|s| s.name() == stack.name()) {
            return Err(CompositionError::DuplicateStackName {
                name: stack.name().to_string(),
            });
        }
        debug!(stack = %stack.name(), "stack registered");
        self.stacks.push(stack);
        Ok(())
    }

    /// Synthesize every stack into its template document.
    ///
    /// # Errors
    /// Returns [`CompositionError::UnresolvedImport`] if a stack imports an
    /// export no earlier stack produced, or a serialization error if a
    /// template cannot be rendered.
    pub fn synth(self) -> CompositionResult<Vec<SynthesizedStack>> {
        let mut available_exports: BTreeSet<String> = BTreeSet::new();
        let mut synthesized = Vec::with_capacity(self.stacks.len());

        for stack in self.stacks {
            let name = stack.name().clone();
            let exports = stack.export_names();
            let template = serde_json::to_value(stack.into_template()).map_err(|source| {
                CompositionError::Serialize {
                    stack: name.to_string(),
                    source,
                }
            })?;

            for import in collect_imports(&template) {
                if !available_exports.contains(&import) {
                    return Err(CompositionError::UnresolvedImport {
                        stack: name.to_string(),
                        export: import,
                    });
                }
            }
            available_exports.extend(exports);

            info!(stack = %name, "stack synthesized");
            synthesized.push(SynthesizedStack { name, template });
        }

        Ok(synthesized)
    }
}

/// Every `Fn::ImportValue` name referenced anywhere in a template.
fn collect_imports(template: &Value) -> BTreeSet<String> {
    let mut imports = BTreeSet::new();
    walk(template, &mut imports);
    imports
}

fn walk(value: &Value, imports: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(name)) = map.get("Fn::ImportValue") {
                imports.insert(name.clone());
            }
            for nested in map.values() {
                walk(nested, imports);
            }
        }
        Value::Array(items) => {
            for nested in items {
                walk(nested, imports);
            }
        }
        _ => {}
    }
}
