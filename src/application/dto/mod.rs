//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so infrastructure (HTTP) can
//! serialize/deserialize without pulling serde into the domain model.

pub mod actor;
pub mod coercion;
pub mod roll;
pub mod sheet;

pub use actor::*;
pub use roll::*;
pub use sheet::*;
