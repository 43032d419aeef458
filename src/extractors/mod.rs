//! Request extractors.

pub mod session;

pub use session::{AdminSession, SessionRejection, SESSION_COOKIE};
