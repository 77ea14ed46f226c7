//! Re-exports of the third party crates shared across the LinkedIn crates,
//! so every member pins the same versions.

pub use chrono;
pub use env_logger;
pub use log;
pub use serde_json;
pub use url;
