//! Testing infrastructure for orgmirror integration tests.
//!
//! - `fixtures`: canned describe payloads, including the Account
//!   scenario exercised throughout the test suites
//! - `mocks`: in-memory collaborators (`FakeOrg`, `RecordingSink`)
//!   standing in for the remote org and the presentation layer

pub mod fixtures;
pub mod mocks;
