pub mod config;
pub mod error;
pub mod language;
pub mod message;
pub mod profile;
pub mod trace;
