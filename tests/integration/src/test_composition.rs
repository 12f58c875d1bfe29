//! Entry composition and cross-stack wiring tests.

#[cfg(test)]
mod tests {
    use repldata_stacks::{
        App, CompositionError, DataSinkStack, ReplicationSourceStack, SINK_B_STACK, SINK_C_STACK,
        SOURCE_A_STACK,
    };

    use crate::{resources_of_type, synth_platform};

    #[test]
    fn test_should_synthesize_sinks_before_source() {
        let names: Vec<_> = synth_platform().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, [SINK_B_STACK, SINK_C_STACK, SOURCE_A_STACK]);
    }

    #[test]
    fn test_should_export_sink_bucket_arns() {
        for (name, template) in synth_platform() {
            if name == SOURCE_A_STACK {
                continue;
            }
            assert_eq!(
                template["Outputs"]["ReferenceDataBucketArn"]["Export"]["Name"],
                format!("{name}-ReferenceDataBucket-Arn")
            );
        }
    }

    #[test]
    fn test_should_declare_expected_resources_per_stack() {
        for (name, template) in synth_platform() {
            let buckets = resources_of_type(&template, "AWS::S3::Bucket").len();
            let roles = resources_of_type(&template, "AWS::IAM::Role").len();
            if name == SOURCE_A_STACK {
                assert_eq!((buckets, roles), (2, 1), "unexpected resources in {name}");
            } else {
                assert_eq!((buckets, roles), (1, 0), "unexpected resources in {name}");
            }
        }
    }

    #[test]
    fn test_should_abort_when_source_registered_without_sinks() {
        let sink = DataSinkStack::new("UnregisteredSink").unwrap();
        let source =
            ReplicationSourceStack::new("OrphanSource", &[sink.bucket().clone()]).unwrap();

        let mut app = App::new();
        app.add_stack(source.into_stack()).unwrap();

        let err = app.synth().unwrap_err();
        assert!(matches!(
            err,
            CompositionError::UnresolvedImport { ref export, .. }
                if export == "UnregisteredSink-ReferenceDataBucket-Arn"
        ));
    }
}
