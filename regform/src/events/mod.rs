//! Event sinks for registration activity.
//!
//! The registration log reports every submission outcome to an
//! [`EventSink`]. Sinks decide whether to drop, log or collect the events.

mod sink;

pub use sink::{CollectingEventSink, EventSink, LoggingEventSink, NoOpEventSink};

/// Event emitted when a submission is accepted and appended.
pub const REGISTRATION_ACCEPTED: &str = "registration.accepted";

/// Event emitted when a submission fails validation.
pub const REGISTRATION_REJECTED: &str = "registration.rejected";
