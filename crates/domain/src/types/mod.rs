//! Domain types and models

pub mod event;
pub mod property;
pub mod scalar;
pub mod timestamp;
pub mod wire;

pub use event::Event;
pub use property::{EventProperty, PropertyKind};
pub use scalar::Scalar;
pub use timestamp::{parse_timestamp, Timestamp, WIRE_TIMESTAMP_FORMAT};
pub use wire::WireEvent;
