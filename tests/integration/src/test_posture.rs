//! Bucket access-posture tests.
//!
//! The posture invariant holds for every bucket in every stack, regardless
//! of which resource group created it.

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{resources_of_type, synth_platform};

    #[test]
    fn test_should_block_public_access_on_every_bucket() {
        for (stack, template) in synth_platform() {
            for (id, bucket) in resources_of_type(&template, "AWS::S3::Bucket") {
                assert_eq!(
                    bucket["Properties"]["PublicAccessBlockConfiguration"],
                    json!({
                        "BlockPublicAcls": true,
                        "BlockPublicPolicy": true,
                        "IgnorePublicAcls": true,
                        "RestrictPublicBuckets": true
                    }),
                    "bucket {id} in stack {stack} is not fully blocked"
                );
            }
        }
    }

    #[test]
    fn test_should_encrypt_and_enforce_ownership_on_every_bucket() {
        for (stack, template) in synth_platform() {
            for (id, bucket) in resources_of_type(&template, "AWS::S3::Bucket") {
                let properties = &bucket["Properties"];
                assert_eq!(
                    properties["BucketEncryption"]["ServerSideEncryptionConfiguration"][0]
                        ["ServerSideEncryptionByDefault"]["SSEAlgorithm"],
                    "AES256",
                    "bucket {id} in stack {stack} is not SSE-S3 encrypted"
                );
                assert_eq!(
                    properties["OwnershipControls"]["Rules"][0]["ObjectOwnership"],
                    "BucketOwnerEnforced",
                    "bucket {id} in stack {stack} does not enforce ownership"
                );
            }
        }
    }

    #[test]
    fn test_should_attach_tls_only_policy_to_every_bucket() {
        for (stack, template) in synth_platform() {
            let buckets = resources_of_type(&template, "AWS::S3::Bucket");
            let policies = resources_of_type(&template, "AWS::S3::BucketPolicy");
            assert_eq!(
                buckets.len(),
                policies.len(),
                "stack {stack} has buckets without a policy"
            );

            for (id, _) in buckets {
                let policy = &template["Resources"][format!("{id}Policy")];
                assert_eq!(policy["Type"], "AWS::S3::BucketPolicy");
                assert_eq!(policy["Properties"]["Bucket"], json!({"Ref": id}));

                let statement = &policy["Properties"]["PolicyDocument"]["Statement"][0];
                assert_eq!(statement["Effect"], "Deny");
                assert_eq!(statement["Principal"], "*");
                assert_eq!(statement["Action"], json!(["s3:*"]));
                assert_eq!(statement["Condition"]["Bool"]["aws:SecureTransport"], "false");
            }
        }
    }

    #[test]
    fn test_should_mark_every_bucket_for_deletion_with_its_stack() {
        for (_, template) in synth_platform() {
            for (_, bucket) in resources_of_type(&template, "AWS::S3::Bucket") {
                assert_eq!(bucket["DeletionPolicy"], "Delete");
            }
        }
    }
}
