//! HTTP server for Roster.
//!
//! Exposes the in-memory user collection as a JSON REST API:
//!
//! | Route | Effect |
//! |---|---|
//! | `GET /users` | list all users |
//! | `POST /users` | insert a user, respond 201 with the full list |
//! | `PUT /users/:id` | replace name and age, respond with the updated user |
//! | `DELETE /users/:id` | remove the user, respond 204 |
//!
//! Unknown ids answer 404 with `{"error": "User not found"}`.

pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use extract::{UserBody, UserIdParam};
pub use router::{build_router, AppState};
pub use server::RosterServer;
