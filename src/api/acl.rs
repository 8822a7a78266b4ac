//! ACL token and policy endpoints

use serde_json::json;

use crate::error::Result;
use crate::http::Http;
use crate::models::{AclPolicy, AclToken};

/// Handle for the ACL token endpoints
pub struct AclTokens<'a> {
    http: &'a Http,
}

impl<'a> AclTokens<'a> {
    pub(crate) fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// Activate ACLs, returning the initial management token
    pub async fn bootstrap(&self) -> Result<AclToken> {
        self.http.post("acl/bootstrap").recv().await
    }

    /// List all tokens
    pub async fn list(&self) -> Result<Vec<AclToken>> {
        self.http.get("acl/tokens").recv().await
    }

    /// Create a token; `token_type` is "client" or "management"
    pub async fn create(
        &self,
        token_type: &str,
        name: Option<&str>,
        policies: &[String],
        global: Option<bool>,
    ) -> Result<AclToken> {
        self.http
            .post("acl/token")
            .json(&json!({
                "Name": name,
                "Type": token_type,
                "Policies": policies,
                "Global": global,
            }))
            .recv()
            .await
    }

    /// Read a token by accessor ID; unknown IDs map to `None`
    pub async fn read(&self, accessor_id: &str) -> Result<Option<AclToken>> {
        self.http
            .get(&format!("acl/token/{}", accessor_id))
            .recv_optional()
            .await
    }

    /// Read the token used by this client
    pub async fn self_token(&self) -> Result<Option<AclToken>> {
        self.http.get("acl/token/self").recv_optional().await
    }

    /// Delete a token by accessor ID
    pub async fn delete(&self, accessor_id: &str) -> Result<()> {
        self.http
            .delete(&format!("acl/token/{}", accessor_id))
            .recv_unit()
            .await
    }
}

/// Handle for the ACL policy endpoints
pub struct AclPolicies<'a> {
    http: &'a Http,
}

impl<'a> AclPolicies<'a> {
    pub(crate) fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// List policies, optionally filtered by name prefix
    pub async fn list(&self, prefix: Option<&str>) -> Result<Vec<AclPolicy>> {
        self.http
            .get("acl/policies")
            .query_opt("prefix", prefix)
            .recv()
            .await
    }

    /// Read a policy; unknown names map to `None`
    pub async fn read(&self, name: &str) -> Result<Option<AclPolicy>> {
        self.http
            .get(&format!("acl/policy/{}", name))
            .recv_optional()
            .await
    }

    /// Create or update a policy; `rules` is an HCL rule document
    pub async fn upsert(&self, name: &str, description: Option<&str>, rules: &str) -> Result<()> {
        self.http
            .post(&format!("acl/policy/{}", name))
            .json(&json!({
                "Name": name,
                "Description": description,
                "Rules": rules,
            }))
            .recv_unit()
            .await
    }

    /// Delete a policy
    pub async fn delete(&self, name: &str) -> Result<()> {
        self.http
            .delete(&format!("acl/policy/{}", name))
            .recv_unit()
            .await
    }
}
