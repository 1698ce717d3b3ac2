//! Observability utilities.
//!
//! Library code logs through `tracing` macros only; binaries and tests call
//! [`init_tracing`] once to install a subscriber.

mod subscriber;

pub use subscriber::{init_tracing, TracingConfig};
