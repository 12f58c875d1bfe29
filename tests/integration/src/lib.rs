//! Whole-app assertions for the replication data platform.
//!
//! These tests run the real entry composition end to end and inspect the
//! synthesized CloudFormation JSON — the same documents the provisioning
//! engine would receive.

use serde_json::Value;

/// Synthesize the full platform composition into `(stack name, template)`
/// pairs, in registration order.
#[must_use]
pub fn synth_platform() -> Vec<(String, Value)> {
    repldata_stacks::replication_data_app()
        .expect("composition should succeed")
        .synth()
        .expect("synthesis should succeed")
        .into_iter()
        .map(|stack| (stack.name.to_string(), stack.template))
        .collect()
}

/// The logical IDs and bodies of every resource of the given type in a
/// template.
#[must_use]
pub fn resources_of_type<'a>(template: &'a Value, type_name: &str) -> Vec<(&'a String, &'a Value)> {
    template["Resources"]
        .as_object()
        .map(|resources| {
            resources
                .iter()
                .filter(|(_, resource)| resource["Type"] == type_name)
                .collect()
        })
        .unwrap_or_default()
}

mod test_composition;
mod test_posture;
mod test_replication;
