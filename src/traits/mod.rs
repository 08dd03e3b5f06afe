//! Trait abstractions for dependency injection and testability.
//!
//! The client's sole external boundary is the [`CommandBridge`] trait: a
//! generic named-command invocation into the backend process. Production
//! code talks to the backend through it, and tests substitute the mock
//! adapter without touching the network.

pub mod bridge;

pub use bridge::{invoke_typed, CommandBridge, InvokeError};
