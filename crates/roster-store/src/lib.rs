//! In-memory user collection for Roster.
//!
//! The store keeps user records in insertion order. Listing returns them in
//! that order, updates replace a record in place, and removal closes the gap.
//!
//! # Modules
//!
//! - [`error`] — Error types for store operations
//! - [`locate`] — Pure id lookup over a slice of users
//! - [`traits`] — The [`UserStore`] trait defining the storage interface
//! - [`memory`] — [`InMemoryUserStore`], a `RwLock`-guarded `Vec`
//!
//! # Design Rules
//!
//! 1. Ids are generated by the store on insert; callers never choose them.
//! 2. An id never changes once assigned.
//! 3. Lookup and the mutation that depends on it happen under one write lock.
//! 4. A missing id fails before anything is mutated.

pub mod error;
pub mod locate;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use locate::locate;
pub use memory::InMemoryUserStore;
pub use traits::UserStore;
