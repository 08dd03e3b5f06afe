//! Subscription cell for backend-loaded data.
//!
//! [`Remote<T>`] holds one backend-loaded value along with its loading and
//! error state, and guards against stale responses: every load is tagged
//! with a generation token, and a result arriving for an older generation
//! is ignored. This is what prevents a slow `list_books` response from
//! clobbering the list after the user has already changed filters.

use std::fmt::Display;

/// One backend-loaded value with `{data, loading, error}` state and a
/// stale-response guard.
///
/// Lifecycle: call [`begin`](Remote::begin) when starting a fetch and hand
/// the returned token to the fetch task; when the result comes back, call
/// [`resolve`](Remote::resolve) with that token. A resolve whose token no
/// longer matches (because a newer fetch has begun, or the cell was reset)
/// is dropped on the floor.
#[derive(Debug, Clone)]
pub struct Remote<T> {
    data: Option<T>,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            generation: 0,
        }
    }
}

impl<T> Remote<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a fetch: marks the cell loading, clears any prior error, and
    /// returns the generation token the eventual result must carry.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Apply a fetch result, if it is not stale.
    ///
    /// On failure the error's display string is stored and any previously
    /// loaded data is kept, so the screen can keep rendering the old list
    /// next to the error line.
    pub fn resolve<E: Display>(&mut self, generation: u64, result: Result<T, E>) {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "dropping stale fetch result"
            );
            return;
        }
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
    }

    /// Clear the cell entirely, invalidating any in-flight fetch.
    ///
    /// Used when the subscribed key goes away (e.g. the detail view's id
    /// becomes none).
    pub fn reset(&mut self) {
        self.generation += 1;
        self.data = None;
        self.loading = false;
        self.error = None;
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl<T> Remote<Vec<T>> {
    /// The loaded list, or an empty slice while nothing has arrived.
    pub fn items(&self) -> &[T] {
        self.data.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_sets_loading_and_clears_error() {
        let mut cell: Remote<Vec<i32>> = Remote::new();
        cell.begin();
        cell.resolve(1, Err::<Vec<i32>, _>("boom"));
        assert_eq!(cell.error(), Some("boom"));

        cell.begin();
        assert!(cell.is_loading());
        assert_eq!(cell.error(), None);
    }

    #[test]
    fn test_resolve_success_stores_data() {
        let mut cell: Remote<Vec<i32>> = Remote::new();
        let gen = cell.begin();
        cell.resolve(gen, Ok::<_, String>(vec![1, 2, 3]));
        assert!(!cell.is_loading());
        assert_eq!(cell.items(), &[1, 2, 3]);
    }

    #[test]
    fn test_stale_resolve_is_ignored() {
        let mut cell: Remote<Vec<i32>> = Remote::new();
        let stale = cell.begin();
        let fresh = cell.begin();

        // Fresh result lands first
        cell.resolve(fresh, Ok::<_, String>(vec![2]));
        // Late response from the earlier fetch must not overwrite it
        cell.resolve(stale, Ok::<_, String>(vec![1]));

        assert_eq!(cell.items(), &[2]);
    }

    #[test]
    fn test_stale_error_is_ignored() {
        let mut cell: Remote<Vec<i32>> = Remote::new();
        let stale = cell.begin();
        let fresh = cell.begin();
        cell.resolve(fresh, Ok::<_, String>(vec![7]));
        cell.resolve(stale, Err::<Vec<i32>, _>("late failure"));
        assert_eq!(cell.error(), None);
        assert_eq!(cell.items(), &[7]);
    }

    #[test]
    fn test_failure_keeps_previous_data() {
        let mut cell: Remote<Vec<i32>> = Remote::new();
        let gen = cell.begin();
        cell.resolve(gen, Ok::<_, String>(vec![1]));

        let gen = cell.begin();
        cell.resolve(gen, Err::<Vec<i32>, _>("offline"));

        assert_eq!(cell.items(), &[1]);
        assert_eq!(cell.error(), Some("offline"));
    }

    #[test]
    fn test_reset_invalidates_in_flight_fetch() {
        let mut cell: Remote<i32> = Remote::new();
        let gen = cell.begin();
        cell.reset();
        cell.resolve(gen, Ok::<_, String>(42));
        assert_eq!(cell.data(), None);
        assert!(!cell.is_loading());
    }
}
