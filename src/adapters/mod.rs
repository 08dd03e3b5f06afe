//! Adapter implementations of the core traits.
//!
//! This module contains the concrete implementations of the
//! [`CommandBridge`](crate::traits::CommandBridge) trait:
//!
//! - [`HttpBridge`] - Production bridge speaking HTTP to the backend daemon
//! - [`mock::MockBridge`] - Configurable recording mock for tests

pub mod http_bridge;
pub mod mock;

pub use http_bridge::HttpBridge;
