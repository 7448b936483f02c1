//! Prompt assembly and reply post-processing for the travel assistant.
//!
//! Everything here is a pure function of the language table, the session
//! snapshot and the raw model output.

pub mod builder;
pub mod injection;
pub mod normalize;
pub mod policy;

pub use builder::PromptBuilder;
pub use normalize::normalize;
pub use policy::should_request_contact;
