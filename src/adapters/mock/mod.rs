//! Mock adapters for testing.

pub mod bridge;

pub use bridge::{MockBridge, MockResult, RecordedInvocation};
