//! `AWS::IAM::Role` and policy document types.
//!
//! Policy documents double as role trust policies (statements with a
//! principal and no resources) and as permission policies (statements with
//! resources and no principal), matching how IAM itself reuses the document
//! shape.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use typed_builder::TypedBuilder;

use crate::StrValue;

/// Policy language version emitted on every document.
const POLICY_VERSION: &str = "2012-10-17";

/// Action S3 requires on a role it assumes.
const ASSUME_ROLE_ACTION: &str = "sts:AssumeRole";

/// Effect of a policy statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Effect {
    /// The statement grants access.
    Allow,
    /// The statement denies access.
    Deny,
}

impl Effect {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Allow => "Allow",
            Self::Deny => "Deny",
        }
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Principal of a policy statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    /// An AWS service principal (e.g. `s3.amazonaws.com`).
    Service(String),
    /// Any principal (`"*"`).
    Any,
}

// `Any` serializes as the bare string `"*"`, not as a map, so the impl is
// written by hand.
impl Serialize for Principal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Any => serializer.serialize_str("*"),
            Self::Service(service) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("Service", service)?;
                map.end()
            }
        }
    }
}

/// Condition block: operator -> condition key -> value.
pub type Conditions = BTreeMap<String, BTreeMap<String, String>>;

/// A single policy statement.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyStatement {
    /// Allow or deny.
    pub effect: Effect,

    /// Principal the statement applies to (trust and resource policies only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<Principal>,

    /// Actions the statement covers.
    pub action: Vec<String>,

    /// Resources the statement covers; omitted in trust policies.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resource: Vec<StrValue>,

    /// Optional condition block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Conditions>,
}

impl PolicyStatement {
    /// An allow statement over the given actions and resources.
    #[must_use]
    pub fn allow(
        actions: impl IntoIterator<Item = impl Into<String>>,
        resources: Vec<StrValue>,
    ) -> Self {
        Self {
            effect: Effect::Allow,
            principal: None,
            action: actions.into_iter().map(Into::into).collect(),
            resource: resources,
            condition: None,
        }
    }

    /// A deny statement over the given actions and resources.
    #[must_use]
    pub fn deny(
        actions: impl IntoIterator<Item = impl Into<String>>,
        resources: Vec<StrValue>,
    ) -> Self {
        Self {
            effect: Effect::Deny,
            principal: None,
            action: actions.into_iter().map(Into::into).collect(),
            resource: resources,
            condition: None,
        }
    }

    /// Attach a principal to this statement.
    #[must_use]
    pub fn with_principal(mut self, principal: Principal) -> Self {
        self.principal = Some(principal);
        self
    }

    /// Attach a single condition (`operator`, `key`, `value`) to this
    /// statement.
    #[must_use]
    pub fn with_condition(
        mut self,
        operator: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let mut keys = BTreeMap::new();
        keys.insert(key.into(), value.into());
        self.condition
            .get_or_insert_with(BTreeMap::new)
            .insert(operator.into(), keys);
        self
    }
}

/// An IAM policy document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    /// Policy language version (always `2012-10-17`).
    pub version: String,
    /// Ordered statements.
    pub statement: Vec<PolicyStatement>,
}

impl PolicyDocument {
    /// A document holding the given statements.
    #[must_use]
    pub fn new(statements: Vec<PolicyStatement>) -> Self {
        Self {
            version: POLICY_VERSION.to_owned(),
            statement: statements,
        }
    }

    /// A trust policy allowing the given service to assume the role.
    #[must_use]
    pub fn service_trust(service: impl Into<String>) -> Self {
        Self::new(vec![
            PolicyStatement::allow([ASSUME_ROLE_ACTION], Vec::new())
                .with_principal(Principal::Service(service.into())),
        ])
    }
}

/// An inline policy attached to a role.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RolePolicy {
    /// Name of the inline policy, unique within the role.
    pub policy_name: String,
    /// The permission document.
    pub policy_document: PolicyDocument,
}

/// Properties of an `AWS::IAM::Role`.
#[derive(Debug, Clone, Serialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct RoleProperties {
    /// Trust policy: who may assume the role.
    pub assume_role_policy_document: PolicyDocument,

    /// Role path.
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Role description.
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Inline permission policies.
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub policies: Vec<RolePolicy>,
}
