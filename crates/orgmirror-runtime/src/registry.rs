use crate::{Error, Result};
use orgmirror_types::TenantSession;
use std::collections::HashMap;

/// Mapping from tenant id to live session handle.
///
/// Single source of truth scoping every metadata/API operation to an
/// authenticated tenant. One live session per tenant: `put` overwrites
/// on re-authentication, `invalidate` drops the handle so the token is
/// no longer retrievable. The remote side owns session lifetime; there
/// is no TTL here.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<String, TenantSession>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a session under its tenant id, replacing any existing
    /// handle for that tenant. Never fails.
    pub fn put(&mut self, session: TenantSession) {
        self.sessions.insert(session.tenant_id.clone(), session);
    }

    /// Resolve the live session for a tenant.
    ///
    /// The sole failure mode of the registry: an unknown or invalidated
    /// tenant surfaces `SessionNotFound` rather than an empty handle,
    /// so no authenticated call is ever attempted without credentials.
    pub fn get(&self, tenant_id: &str) -> Result<&TenantSession> {
        self.sessions
            .get(tenant_id)
            .ok_or_else(|| Error::SessionNotFound(tenant_id.to_string()))
    }

    /// Drop a tenant's session. Idempotent; the only sanctioned way to
    /// end a session locally (called on explicit logout).
    pub fn invalidate(&mut self, tenant_id: &str) {
        self.sessions.remove(tenant_id);
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgmirror_types::AccessToken;

    fn session(tenant: &str, token: &str) -> TenantSession {
        TenantSession::new(tenant, "https://na1.example.test", AccessToken::new(token))
    }

    #[test]
    fn test_get_after_put_returns_stored_handle() {
        let mut registry = SessionRegistry::new();
        registry.put(session("org-1", "tok-1"));

        let handle = registry.get("org-1").unwrap();
        assert_eq!(handle.endpoint_url, "https://na1.example.test");
        assert_eq!(handle.access_token.reveal(), "tok-1");
    }

    #[test]
    fn test_get_unknown_tenant_fails() {
        let registry = SessionRegistry::new();

        match registry.get("never-seen") {
            Err(Error::SessionNotFound(tenant)) => assert_eq!(tenant, "never-seen"),
            other => panic!("expected SessionNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_get_after_invalidate_fails() {
        let mut registry = SessionRegistry::new();
        registry.put(session("org-1", "tok-1"));
        registry.invalidate("org-1");

        assert!(matches!(
            registry.get("org-1"),
            Err(Error::SessionNotFound(_))
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_invalidate_is_idempotent() {
        let mut registry = SessionRegistry::new();
        registry.invalidate("org-1");
        registry.invalidate("org-1");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_reauthentication_overwrites() {
        let mut registry = SessionRegistry::new();
        registry.put(session("org-1", "old-token"));
        registry.put(session("org-1", "new-token"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("org-1").unwrap().access_token.reveal(), "new-token");
    }
}
