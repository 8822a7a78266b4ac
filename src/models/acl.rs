//! ACL token and policy records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An ACL token
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct AclToken {
    #[serde(rename = "AccessorID", skip_serializing_if = "Option::is_none")]
    pub accessor_id: Option<String>,
    /// The secret presented as `X-Nomad-Token`
    #[serde(rename = "SecretID", skip_serializing_if = "Option::is_none")]
    pub secret_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// "client" or "management"
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policies: Option<Vec<String>>,
    #[serde(default)]
    pub global: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_index: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_index: Option<u64>,
}

/// An ACL policy: a named set of rules
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct AclPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// HCL rule document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_index: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_index: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acl_token_deserialization() {
        let json = r#"{
            "AccessorID": "b780e702",
            "SecretID": "3f4a0fcd",
            "Name": "Bootstrap Token",
            "Type": "management",
            "Global": true,
            "CreateTime": "2021-03-12T17:01:19.941979Z",
            "CreateIndex": 7
        }"#;

        let token: AclToken = serde_json::from_str(json).unwrap();
        assert_eq!(token.accessor_id.as_deref(), Some("b780e702"));
        assert_eq!(token.token_type.as_deref(), Some("management"));
        assert!(token.global);
    }
}
