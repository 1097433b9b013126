pub mod describe;
pub mod schema;
pub mod session;

pub use describe::*;
pub use schema::*;
pub use session::*;
