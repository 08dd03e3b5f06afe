//! Client-side state for the TUI.
//!
//! This module contains the state containers the screens render from:
//! - [`Remote`] - a subscription cell for backend-loaded data
//! - [`LibraryFilters`] / [`CollectionMembership`] - library view filtering
//! - [`SessionTimer`] - the active-session elapsed counter
//! - day/week aggregation over loaded sessions
//!
//! Stores hold data; they never talk to the backend themselves. The app
//! layer spawns fetches and feeds results back in, so state stays
//! single-threaded and synchronous.

pub mod aggregate;
pub mod library;
pub mod remote;
pub mod timer;

pub use aggregate::{day_totals, week_totals, DayTotals, WeekTotals};
pub use library::{filter_books, CollectionMembership, LibraryFilters};
pub use remote::Remote;
pub use timer::SessionTimer;
