//! Application layer - services composing the domain over the ports.
//!
//! - `registry` - Many-to-many subscription index over the `SetStore` port
//! - `dispatcher` - Fans domain events out to live subscribers

pub mod dispatcher;
pub mod registry;

pub use dispatcher::EventDispatcher;
pub use registry::{SubscriptionRegistry, DEFAULT_SESSION_TTL};
