//! In-memory collaborators for service-level tests.

use crate::fixtures;
use orgmirror_runtime::{
    AuthSuccess, Authenticator, Error, EventSink, LogEvent, LoginRequest, MetadataFetcher, Result,
    StatusEvent,
};
use orgmirror_types::{AccessToken, RawObjectDescribe, TenantSession};
use std::collections::HashMap;
use std::sync::Mutex;

/// Remote org stand-in implementing both collaborator traits over an
/// in-memory describe map. Resolves everything immediately; the service
/// under test supplies the ordering guarantees.
#[derive(Debug)]
pub struct FakeOrg {
    password: String,
    describes: HashMap<String, RawObjectDescribe>,
}

impl FakeOrg {
    pub const TENANT_ID: &'static str = "00D000000000001";
    pub const TOKEN: &'static str = "fake-access-token";
    pub const ENDPOINT: &'static str = "https://na1.example.test";

    /// An org accepting "correct-password" and exposing the Account and
    /// Contact fixtures.
    pub fn standard() -> Self {
        let mut describes = HashMap::new();
        describes.insert("Account".to_string(), fixtures::account_describe());
        describes.insert("Contact".to_string(), fixtures::contact_describe());
        Self {
            password: "correct-password".to_string(),
            describes,
        }
    }

    /// Register (or replace) the describe served for a requested name.
    /// The payload's own `name` may differ from the key on purpose, to
    /// exercise response-name keying.
    pub fn with_describe(mut self, requested_as: &str, describe: RawObjectDescribe) -> Self {
        self.describes.insert(requested_as.to_string(), describe);
        self
    }

    fn check_session(&self, session: &TenantSession) -> Result<()> {
        if session.access_token.reveal() == Self::TOKEN {
            Ok(())
        } else {
            Err(Error::Fetch("invalid session".to_string()))
        }
    }
}

impl Authenticator for FakeOrg {
    async fn login(&self, request: &LoginRequest) -> Result<AuthSuccess> {
        if request.wire_password() == self.password {
            Ok(AuthSuccess {
                tenant_id: Self::TENANT_ID.to_string(),
                endpoint_url: Self::ENDPOINT.to_string(),
                access_token: AccessToken::new(Self::TOKEN),
            })
        } else {
            Err(Error::Auth("invalid username or password".to_string()))
        }
    }

    async fn logout(&self, session: &TenantSession) -> Result<()> {
        self.check_session(session)
            .map_err(|_| Error::Auth("no such session".to_string()))
    }
}

impl MetadataFetcher for FakeOrg {
    async fn describe_global(&self, session: &TenantSession) -> Result<Vec<String>> {
        self.check_session(session)?;
        Ok(self.describes.keys().cloned().collect())
    }

    async fn describe_object(
        &self,
        session: &TenantSession,
        object_name: &str,
    ) -> Result<RawObjectDescribe> {
        self.check_session(session)?;
        self.describes
            .get(object_name)
            .cloned()
            .ok_or_else(|| Error::Fetch(format!("no such object: {}", object_name)))
    }
}

/// Sink capturing every emitted event for later assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    statuses: Mutex<Vec<StatusEvent>>,
    logs: Mutex<Vec<LogEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn statuses(&self) -> Vec<StatusEvent> {
        self.statuses.lock().expect("sink lock").clone()
    }

    pub fn logs(&self) -> Vec<LogEvent> {
        self.logs.lock().expect("sink lock").clone()
    }
}

impl EventSink for RecordingSink {
    fn status(&self, event: StatusEvent) {
        self.statuses.lock().expect("sink lock").push(event);
    }

    fn log(&self, event: LogEvent) {
        self.logs.lock().expect("sink lock").push(event);
    }
}

/// Lets a test hand the service a borrowed sink and keep inspecting it.
impl EventSink for &RecordingSink {
    fn status(&self, event: StatusEvent) {
        <RecordingSink as EventSink>::status(self, event);
    }

    fn log(&self, event: LogEvent) {
        <RecordingSink as EventSink>::log(self, event);
    }
}
