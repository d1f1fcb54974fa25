//! Notification sink adapters.
//!
//! - `logging` - Logs descriptors (worker binary stand-in transport)
//! - `recording` - Captures descriptors for test assertions

pub mod logging;
pub mod recording;

pub use logging::LoggingSink;
pub use recording::RecordingSink;
