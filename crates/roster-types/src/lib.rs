//! Foundation types for Roster.
//!
//! Every other Roster crate depends on `roster-types`.
//!
//! # Key Types
//!
//! - [`UserId`] — UUID v4 identifier assigned once, at insert time
//! - [`User`] — a stored user record (id, name, age)
//! - [`UserFields`] — the mutable part of a record, as received from a caller

pub mod error;
pub mod identity;
pub mod user;

pub use error::TypeError;
pub use identity::UserId;
pub use user::{User, UserFields};
