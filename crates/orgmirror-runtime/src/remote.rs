// Collaborator seams for the remote org.
//
// The network mechanics live behind these traits; the runtime only
// needs an answer on whether authentication succeeded and a token to
// address subsequent calls with.

use crate::Result;
use orgmirror_types::{AccessToken, RawObjectDescribe, TenantSession};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Credentials presented to the remote org for password authentication.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Login endpoint (production, sandbox, or prerelease host).
    pub endpoint_url: String,
    pub username: String,
    pub password: String,
    /// Security token some orgs require alongside the password. Empty
    /// when the org does not issue one.
    #[serde(default)]
    pub security_token: String,
}

impl LoginRequest {
    /// Password as sent on the wire: the security token, when present,
    /// is appended to the password.
    pub fn wire_password(&self) -> String {
        if self.security_token.is_empty() {
            self.password.clone()
        } else {
            format!("{}{}", self.password, self.security_token)
        }
    }

    /// Copy of this request with the secrets blanked, safe to echo back
    /// to the presentation layer in status events.
    pub fn scrubbed(&self) -> LoginRequest {
        LoginRequest {
            endpoint_url: self.endpoint_url.clone(),
            username: self.username.clone(),
            password: String::new(),
            security_token: String::new(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("endpoint_url", &self.endpoint_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("security_token", &"<redacted>")
            .finish()
    }
}

/// Successful authentication outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSuccess {
    /// Tenant (org) identifier the session is keyed by.
    pub tenant_id: String,
    /// Instance endpoint subsequent calls go to (may differ from the
    /// login endpoint).
    pub endpoint_url: String,
    pub access_token: AccessToken,
}

/// Performs the authentication handshake against the remote org.
pub trait Authenticator {
    async fn login(&self, request: &LoginRequest) -> Result<AuthSuccess>;

    /// Expire the remote session. The caller invalidates the local
    /// registry entry only after this succeeds.
    async fn logout(&self, session: &TenantSession) -> Result<()>;
}

/// Fetches object metadata using an authenticated session.
pub trait MetadataFetcher {
    /// Names of all objects visible to the session (global describe).
    async fn describe_global(&self, session: &TenantSession) -> Result<Vec<String>>;

    /// Full describe for one object.
    async fn describe_object(
        &self,
        session: &TenantSession,
        object_name: &str,
    ) -> Result<RawObjectDescribe>;
}
