//! Schema normalization: vendor describe records in, canonical schema out.
//!
//! The pipeline is a pure transformation with no failure mode. Whatever
//! the remote API returns for an object, `normalize` produces a
//! canonical entry for it; unknown field type tags pass through with
//! only the base attributes.

pub mod extract;
pub mod normalize;
pub mod parse;

pub use extract::{FieldExtras, extras_for};
pub use normalize::normalize;
pub use parse::describes_from_value;
