//! Core types shared across wh3 facilities
//!
//! This crate holds the canonical schema constants used by the logging
//! facility and by every layer that emits structured events:
//!
//! - **Field keys**: component, op, event, durations, row counts
//! - **Event names**: start, end, end_error

pub mod schema;
