//! Observability.
//!
//! Structured `tracing` events are emitted by the transport, factories and
//! bindings; `logging` installs the subscriber that renders them.

pub mod logging;
