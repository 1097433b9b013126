//! Runtime orchestration for orgmirror.
//!
//! Owns the session registry (tenant id -> live session handle), the
//! collaborator seams for authentication and metadata fetching, and the
//! service that drives login -> describe fan-out -> schema draft.

pub mod config;
pub mod error;
pub mod events;
pub mod registry;
pub mod remote;
pub mod service;

pub use config::{Config, OrgProfile, resolve_data_path};
pub use error::{Error, Result};
pub use events::{EventSink, LogChannel, LogEvent, NullSink, StatusEvent};
pub use registry::SessionRegistry;
pub use remote::{AuthSuccess, Authenticator, LoginRequest, MetadataFetcher};
pub use service::OrgService;
