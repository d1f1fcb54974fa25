//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the core and the outside world. Adapters implement these ports.
//!
//! - `SetStore` - Shared set-store backing the subscription indexes
//! - `NotificationSink` - Delivery transport for notification descriptors

mod notification_sink;
mod set_store;

pub use notification_sink::{DeliveryError, NotificationSink};
pub use set_store::{SetStore, StoreError};
