//! Replication configuration and role coverage tests.

#[cfg(test)]
mod tests {
    use repldata_stacks::{
        CompositionError, DataSinkStack, ReplicationSourceStack, SINK_B_STACK, SINK_C_STACK,
        SOURCE_A_STACK,
    };
    use serde_json::{Value, json};

    use crate::synth_platform;

    /// The source template of the full platform composition.
    fn source_template() -> Value {
        synth_platform()
            .into_iter()
            .find(|(name, _)| name == SOURCE_A_STACK)
            .map(|(_, template)| template)
            .expect("source stack should be synthesized")
    }

    #[test]
    fn test_should_emit_one_rule_per_destination_with_sequential_priorities() {
        for count in 1..=5 {
            let sinks: Vec<_> = (0..count)
                .map(|i| DataSinkStack::new(&format!("PriorityOrderSink{i}")).unwrap())
                .collect();
            let destinations: Vec<_> = sinks.iter().map(|s| s.bucket().clone()).collect();
            let source = ReplicationSourceStack::new("PriorityOrderSource", &destinations).unwrap();

            let template = serde_json::to_value(source.into_stack().into_template()).unwrap();
            let rules = template["Resources"]["MasterBucket"]["Properties"]
                ["ReplicationConfiguration"]["Rules"]
                .as_array()
                .unwrap()
                .clone();

            assert_eq!(rules.len(), count);
            for (index, (rule, destination)) in rules.iter().zip(&destinations).enumerate() {
                assert_eq!(rule["Priority"].as_u64(), Some(index as u64 + 1));
                assert_eq!(
                    rule["Destination"]["Bucket"],
                    json!({"Fn::ImportValue": destination.export_name()})
                );
            }
        }
    }

    #[test]
    fn test_should_refuse_empty_destination_list() {
        let err = ReplicationSourceStack::new("EmptySource", &[]).unwrap_err();
        assert!(matches!(err, CompositionError::NoReplicationBuckets));
    }

    #[test]
    fn test_should_replicate_master_into_both_sinks() {
        let template = source_template();
        let rules = template["Resources"]["MasterBucket"]["Properties"]
            ["ReplicationConfiguration"]["Rules"]
            .as_array()
            .unwrap()
            .clone();

        assert_eq!(rules.len(), 2);
        for (rule, (priority, sink)) in
            rules.iter().zip([(1, SINK_B_STACK), (2, SINK_C_STACK)])
        {
            assert_eq!(rule["Priority"].as_u64(), Some(priority));
            assert_eq!(rule["Status"], "Enabled");
            assert_eq!(rule["Filter"]["Prefix"], "");
            assert_eq!(rule["DeleteMarkerReplication"]["Status"], "Enabled");
            assert_eq!(
                rule["Destination"]["Bucket"]["Fn::ImportValue"],
                format!("{sink}-ReferenceDataBucket-Arn")
            );
        }
    }

    #[test]
    fn test_should_cover_exactly_master_and_destinations_in_role_policy() {
        let template = source_template();
        let statements = template["Resources"]["ReplicationRole"]["Properties"]["Policies"][0]
            ["PolicyDocument"]["Statement"]
            .as_array()
            .unwrap()
            .clone();

        // Source bucket, source objects, one statement per destination.
        assert_eq!(statements.len(), 4);

        assert_eq!(
            statements[0]["Action"],
            json!(["s3:GetReplicationConfiguration", "s3:ListBucket"])
        );
        assert_eq!(
            statements[0]["Resource"],
            json!([{"Fn::GetAtt": ["MasterBucket", "Arn"]}])
        );

        assert_eq!(
            statements[1]["Resource"],
            json!([{"Fn::Join": ["", [{"Fn::GetAtt": ["MasterBucket", "Arn"]}, "/*"]]}])
        );

        for (statement, sink) in statements[2..].iter().zip([SINK_B_STACK, SINK_C_STACK]) {
            assert_eq!(
                statement["Action"],
                json!([
                    "s3:ReplicateObject",
                    "s3:ReplicateDelete",
                    "s3:ReplicateTags",
                    "s3:GetObjectVersionTagging",
                    "s3:ObjectOwnerOverrideToBucketOwner"
                ])
            );
            assert_eq!(
                statement["Resource"],
                json!([{"Fn::Join": ["", [
                    {"Fn::ImportValue": format!("{sink}-ReferenceDataBucket-Arn")},
                    "/*"
                ]]}])
            );
        }
    }

    #[test]
    fn test_should_trust_s3_and_keep_service_role_path() {
        let template = source_template();
        let role = &template["Resources"]["ReplicationRole"]["Properties"];
        assert_eq!(
            role["AssumeRolePolicyDocument"]["Statement"][0]["Principal"],
            json!({"Service": "s3.amazonaws.com"})
        );
        assert_eq!(role["Path"], "/service-role/");
    }

    #[test]
    fn test_should_leave_cross_account_destination_fields_unset() {
        let template = source_template();
        let rules = template["Resources"]["MasterBucket"]["Properties"]
            ["ReplicationConfiguration"]["Rules"]
            .as_array()
            .unwrap()
            .clone();
        for rule in rules {
            assert!(rule["Destination"].get("Account").is_none());
            assert!(rule["Destination"].get("AccessControlTranslation").is_none());
        }
    }
}
