use crate::error::{Error, Result};
use crate::events::{EventSink, LogChannel, LogEvent, StatusEvent};
use crate::registry::SessionRegistry;
use crate::remote::{Authenticator, LoginRequest, MetadataFetcher};
use futures::future::try_join_all;
use orgmirror_schema::normalize;
use orgmirror_types::{CanonicalSchema, TenantSession};
use serde_json::{Value, json};

const SENDER: &str = "org-service";

/// Drives the login -> describe fan-out -> schema draft workflow.
///
/// Owns the session registry and the single most recent proposed
/// schema. Every failure is emitted to the sink and returned to the
/// caller; none of them destroy registry state or the current draft.
pub struct OrgService<A, F, S> {
    auth: A,
    fetcher: F,
    sink: S,
    registry: SessionRegistry,
    draft: Option<CanonicalSchema>,
}

impl<A, F, S> OrgService<A, F, S>
where
    A: Authenticator,
    F: MetadataFetcher,
    S: EventSink,
{
    pub fn new(auth: A, fetcher: F, sink: S) -> Self {
        Self {
            auth,
            fetcher,
            sink,
            registry: SessionRegistry::new(),
            draft: None,
        }
    }

    /// Authenticate against the remote org and register the session.
    ///
    /// Returns the tenant id the session was keyed under. The echoed
    /// request in the emitted status event is scrubbed of credentials
    /// in both outcomes.
    pub async fn login(&mut self, request: LoginRequest) -> Result<String> {
        let echoed = to_value_or_null(&request.scrubbed());

        match self.auth.login(&request).await {
            Ok(success) => {
                let tenant_id = success.tenant_id.clone();
                self.sink.log(LogEvent::new(
                    SENDER,
                    LogChannel::Info,
                    format!(
                        "Connected org {} for user {}",
                        tenant_id, request.username
                    ),
                ));
                // AuthSuccess serializes its token redacted, so the
                // response value is safe to hand to the sink.
                let response = to_value_or_null(&success);
                self.registry.put(TenantSession::new(
                    success.tenant_id,
                    success.endpoint_url,
                    success.access_token,
                ));
                self.sink
                    .status(StatusEvent::success("Login Successful", response, echoed));
                Ok(tenant_id)
            }
            Err(err) => {
                self.sink.log(LogEvent::new(
                    SENDER,
                    LogChannel::Error,
                    format!("Login failed: {}", err),
                ));
                self.sink.status(StatusEvent::failure(
                    "Login Failed",
                    json!(err.to_string()),
                    echoed,
                ));
                Err(err)
            }
        }
    }

    /// Expire the remote session, then invalidate the local handle.
    ///
    /// The registry entry survives a failed remote logout so the caller
    /// can retry; local invalidation happens only after the remote side
    /// confirmed expiry.
    pub async fn logout(&mut self, tenant_id: &str) -> Result<()> {
        let echoed = json!({ "tenantId": tenant_id });
        let session = self.resolve(tenant_id, "Logout Failed", &echoed)?;

        if let Err(err) = self.auth.logout(&session).await {
            self.sink.log(LogEvent::new(
                SENDER,
                LogChannel::Error,
                format!("Logout failed: {}", err),
            ));
            self.sink.status(StatusEvent::failure(
                "Logout Failed",
                json!(err.to_string()),
                echoed,
            ));
            return Err(err);
        }

        self.registry.invalidate(tenant_id);
        self.sink
            .status(StatusEvent::success("Logout Successful", json!({}), echoed));
        Ok(())
    }

    /// Names of every object visible to the tenant's session.
    pub async fn list_objects(&self, tenant_id: &str) -> Result<Vec<String>> {
        let echoed = json!({ "tenantId": tenant_id });
        let session = self.resolve(tenant_id, "Describe Global Failed", &echoed)?;

        match self.fetcher.describe_global(&session).await {
            Ok(names) => {
                self.sink.status(StatusEvent::success(
                    "Describe Global Successful",
                    json!(names),
                    echoed,
                ));
                Ok(names)
            }
            Err(err) => {
                self.sink.status(StatusEvent::failure(
                    "Describe Global Failed",
                    json!(err.to_string()),
                    echoed,
                ));
                Err(err)
            }
        }
    }

    /// Fetch describes for the requested objects and rebuild the draft.
    ///
    /// Fan-out/fan-in: one concurrent describe per object, joined as a
    /// unit. If any single fetch fails the whole refresh fails and the
    /// previous draft stays in place; a schema silently missing objects
    /// is worse than no schema. Results are keyed by the name each
    /// response reports, not by request position.
    pub async fn refresh_schema(
        &mut self,
        tenant_id: &str,
        objects: &[String],
    ) -> Result<&CanonicalSchema> {
        let echoed = json!({ "tenantId": tenant_id, "objects": objects });
        let session = self.resolve(tenant_id, "Describe Objects Failed", &echoed)?;

        let fetched = try_join_all(
            objects
                .iter()
                .map(|name| self.fetcher.describe_object(&session, name)),
        )
        .await;

        let describes = match fetched {
            Ok(describes) => describes,
            Err(err) => {
                self.sink.status(StatusEvent::failure(
                    "Describe Objects Failed",
                    json!(err.to_string()),
                    echoed,
                ));
                return Err(err);
            }
        };

        let schema = normalize(&describes);
        let response = json!({
            "objects": describes.iter().map(|d| d.name.as_str()).collect::<Vec<_>>(),
            "schema": schema,
        });
        self.sink
            .status(StatusEvent::success("Processed Objects", response, echoed));

        Ok(&*self.draft.insert(schema))
    }

    /// The most recent proposed schema, if any refresh has completed.
    /// Superseded wholesale by the next successful refresh.
    pub fn draft(&self) -> Option<&CanonicalSchema> {
        self.draft.as_ref()
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    fn resolve(&self, tenant_id: &str, failure: &str, echoed: &Value) -> Result<TenantSession> {
        match self.registry.get(tenant_id) {
            Ok(session) => Ok(session.clone()),
            Err(err) => {
                self.sink.status(StatusEvent::failure(
                    failure,
                    json!(err.to_string()),
                    echoed.clone(),
                ));
                Err(err)
            }
        }
    }
}

fn to_value_or_null<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}
