use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Opaque bearer token issued by the remote org.
///
/// Deliberately opaque: `Debug` and `Serialize` never reveal the
/// underlying string, so sessions can be logged or echoed in status
/// events without leaking credentials. The collaborator that signs
/// outbound requests calls [`AccessToken::reveal`].
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token. Only the request-signing collaborator should call
    /// this; the value must not travel into logs or status events.
    pub fn reveal(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

impl Serialize for AccessToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("<redacted>")
    }
}

/// Live session handle for one authenticated tenant.
///
/// At most one live session exists per tenant id; re-authentication
/// replaces the handle wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantSession {
    /// Unique tenant identifier (the remote org id).
    pub tenant_id: String,
    /// Instance endpoint every subsequent API call is addressed to.
    pub endpoint_url: String,
    /// Opaque access token scoping those calls.
    pub access_token: AccessToken,
    /// When authentication completed.
    pub authenticated_at: DateTime<Utc>,
}

impl TenantSession {
    pub fn new(
        tenant_id: impl Into<String>,
        endpoint_url: impl Into<String>,
        access_token: AccessToken,
    ) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            endpoint_url: endpoint_url.into(),
            access_token,
            authenticated_at: Utc::now(),
        }
    }
}
