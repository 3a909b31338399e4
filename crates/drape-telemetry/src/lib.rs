//! # drape-telemetry
//!
//! Event bus for simulation telemetry. Frame timing, contact counts,
//! energy and degenerate-spring reports are emitted as structured
//! events and consumed by pluggable sinks.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
