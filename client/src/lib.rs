//! Bloglist API client
//!
//! A thin client over the Bloglist HTTP API. Authentication state lives in
//! an explicit [`Session`] value: it is loaded from and stored to persistent
//! storage only at session boundaries (login, logout, startup) and passed to
//! each call that needs it, never held in module-global state.

mod api;
mod error;
mod session;

pub use api::BlogApi;
pub use error::ClientError;
pub use session::Session;
