//! Session state for the travel assistant.
//!
//! An in-memory map from session id to [`Session`](ta_domain::profile::Session)
//! with write-through to one pretty-printed JSON document per session.

pub mod document;
pub mod session_id;
pub mod store;

pub use document::SessionFiles;
pub use session_id::{is_valid_session_id, new_session_id, resolve_session_id};
pub use store::SessionStore;
