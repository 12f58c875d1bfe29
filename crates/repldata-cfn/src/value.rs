//! String-valued template expressions.
//!
//! A [`StrValue`] is either a literal string or one of the CloudFormation
//! intrinsic functions this workspace emits (`Ref`, `Fn::GetAtt`,
//! `Fn::ImportValue`, `Fn::Join`). Intrinsics are what turn the in-memory
//! resource graph into real inter-resource references: same-template
//! references resolve through `Ref`/`Fn::GetAtt`, cross-stack references
//! through `Fn::ImportValue` against another stack's export.

use repldata_core::LogicalId;
use serde::Serialize;

/// A string-valued property: a literal or an intrinsic reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StrValue {
    /// A plain literal string.
    Lit(String),

    /// `{"Ref": "<logical-id>"}` — the referenced resource's default value
    /// (for a bucket, its name).
    Ref {
        /// Logical ID of the referenced resource.
        #[serde(rename = "Ref")]
        target: LogicalId,
    },

    /// `{"Fn::GetAtt": ["<logical-id>", "<attribute>"]}` — an attribute of a
    /// resource in the same template.
    GetAtt {
        /// Logical ID and attribute name.
        #[serde(rename = "Fn::GetAtt")]
        target: (LogicalId, String),
    },

    /// `{"Fn::ImportValue": "<export-name>"}` — a value exported by another
    /// stack.
    ImportValue {
        /// Name of the export to import.
        #[serde(rename = "Fn::ImportValue")]
        name: String,
    },

    /// `{"Fn::Join": ["<sep>", [...]]}` — concatenation of nested values.
    Join {
        /// Separator and the parts to join.
        #[serde(rename = "Fn::Join")]
        parts: (String, Vec<StrValue>),
    },
}

impl StrValue {
    /// A literal string value.
    #[must_use]
    pub fn lit(value: impl Into<String>) -> Self {
        Self::Lit(value.into())
    }

    /// A `Ref` to a resource in the same template.
    #[must_use]
    pub fn reference(target: &LogicalId) -> Self {
        Self::Ref {
            target: target.clone(),
        }
    }

    /// A `Fn::GetAtt` on a resource in the same template.
    #[must_use]
    pub fn get_att(target: &LogicalId, attribute: impl Into<String>) -> Self {
        Self::GetAtt {
            target: (target.clone(), attribute.into()),
        }
    }

    /// A `Fn::ImportValue` of another stack's export.
    #[must_use]
    pub fn import(name: impl Into<String>) -> Self {
        Self::ImportValue { name: name.into() }
    }

    /// A `Fn::Join` with an empty separator.
    #[must_use]
    pub fn concat(parts: Vec<StrValue>) -> Self {
        Self::Join {
            parts: (String::new(), parts),
        }
    }
}

impl From<&str> for StrValue {
    fn from(value: &str) -> Self {
        Self::lit(value)
    }
}

impl From<String> for StrValue {
    fn from(value: String) -> Self {
        Self::Lit(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_should_serialize_literal_as_plain_string() {
        let value = serde_json::to_value(StrValue::lit("hello")).unwrap();
        assert_eq!(value, json!("hello"));
    }

    #[test]
    fn test_should_serialize_ref() {
        let id = LogicalId::new("MasterBucket").unwrap();
        let value = serde_json::to_value(StrValue::reference(&id)).unwrap();
        assert_eq!(value, json!({"Ref": "MasterBucket"}));
    }

    #[test]
    fn test_should_serialize_get_att() {
        let id = LogicalId::new("MasterBucket").unwrap();
        let value = serde_json::to_value(StrValue::get_att(&id, "Arn")).unwrap();
        assert_eq!(value, json!({"Fn::GetAtt": ["MasterBucket", "Arn"]}));
    }

    #[test]
    fn test_should_serialize_import_value() {
        let value = serde_json::to_value(StrValue::import("SinkB-Bucket-Arn")).unwrap();
        assert_eq!(value, json!({"Fn::ImportValue": "SinkB-Bucket-Arn"}));
    }

    #[test]
    fn test_should_serialize_join_with_nested_intrinsics() {
        let id = LogicalId::new("MasterBucket").unwrap();
        let value = serde_json::to_value(StrValue::concat(vec![
            StrValue::get_att(&id, "Arn"),
            StrValue::lit("/*"),
        ]))
        .unwrap();
        assert_eq!(
            value,
            json!({"Fn::Join": ["", [{"Fn::GetAtt": ["MasterBucket", "Arn"]}, "/*"]]})
        );
    }
}
