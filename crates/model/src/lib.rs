pub mod chat;
pub mod progress;
pub mod quiz;
pub mod wire;

pub use chrono::{DateTime, Utc};

/// All persisted instants are stored in UTC and rendered as RFC 3339.
pub type Timestamp = DateTime<Utc>;
