//! Command implementations for the `feedback-relay` binary.

pub mod send;
