//! Library view filtering.
//!
//! The library screen loads the unarchived book list once and filters it
//! client-side: status equality, type equality, case-insensitive substring
//! match on title or author, and collection membership. The predicates are
//! independent, so the order they are applied in never changes the result
//! set.

use std::collections::HashMap;

use crate::models::{Book, BookStatus, BookType};

/// Client-side filters for the library view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LibraryFilters {
    pub status: Option<BookStatus>,
    pub book_type: Option<BookType>,
    /// Case-insensitive substring matched against title and author.
    pub search: String,
    pub collection: Option<i64>,
}

impl LibraryFilters {
    pub fn is_active(&self) -> bool {
        self.status.is_some()
            || self.book_type.is_some()
            || !self.search.trim().is_empty()
            || self.collection.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// book id → collection ids, filled in one book at a time as the per-book
/// membership listings come back.
///
/// A book with no entry yet is treated as matching any collection filter:
/// the view prefers briefly showing a book that will be filtered out over
/// hiding one that should be visible while its membership loads.
#[derive(Debug, Clone, Default)]
pub struct CollectionMembership {
    entries: HashMap<i64, Vec<i64>>,
}

impl CollectionMembership {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the loaded collection ids for a book.
    pub fn insert(&mut self, book_id: i64, collection_ids: Vec<i64>) {
        self.entries.insert(book_id, collection_ids);
    }

    /// Drop everything (used when the book list itself reloads).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_loaded(&self, book_id: i64) -> bool {
        self.entries.contains_key(&book_id)
    }

    /// Whether a book passes a collection filter.
    ///
    /// Unloaded membership is provisionally a match; once loaded, the book
    /// must actually belong to the collection.
    pub fn matches(&self, book_id: Option<i64>, collection_id: i64) -> bool {
        let Some(book_id) = book_id else {
            return true;
        };
        match self.entries.get(&book_id) {
            Some(ids) => ids.contains(&collection_id),
            None => true,
        }
    }
}

/// Apply the library filters to an already-loaded book list.
///
/// Each predicate narrows independently; books are returned in their
/// original order.
pub fn filter_books<'a>(
    books: &'a [Book],
    filters: &LibraryFilters,
    membership: &CollectionMembership,
) -> Vec<&'a Book> {
    let query = filters.search.trim().to_lowercase();

    books
        .iter()
        .filter(|book| match filters.status {
            Some(status) => book.status == status,
            None => true,
        })
        .filter(|book| match filters.book_type {
            Some(book_type) => book.book_type == book_type,
            None => true,
        })
        .filter(|book| {
            if query.is_empty() {
                return true;
            }
            book.title.to_lowercase().contains(&query)
                || book
                    .author
                    .as_ref()
                    .is_some_and(|author| author.to_lowercase().contains(&query))
        })
        .filter(|book| match filters.collection {
            Some(collection_id) => membership.matches(book.id, collection_id),
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn book(id: i64, title: &str, author: Option<&str>, status: BookStatus) -> Book {
        Book {
            id: Some(id),
            title: title.to_string(),
            author: author.map(str::to_string),
            genre: None,
            book_type: BookType::Paper,
            isbn: None,
            publication_year: None,
            total_pages: None,
            total_minutes: None,
            current_page_text: 0,
            current_minutes_audio: 0,
            status,
            is_archived: false,
            is_wishlist: false,
            cover_url: None,
            url: None,
            added_at: Utc::now(),
            updated_at: Utc::now(),
            status_changed_at: None,
            progress_percentage: 0.0,
        }
    }

    fn shelf() -> Vec<Book> {
        vec![
            book(1, "Dune", Some("Frank Herbert"), BookStatus::Reading),
            book(2, "Emma", Some("Jane Austen"), BookStatus::Completed),
            book(3, "Dune Messiah", Some("Frank Herbert"), BookStatus::NotStarted),
        ]
    }

    fn ids(books: &[&Book]) -> Vec<i64> {
        books.iter().filter_map(|b| b.id).collect()
    }

    #[test]
    fn test_is_active_and_clear() {
        let mut filters = LibraryFilters::default();
        assert!(!filters.is_active());

        // Whitespace-only search is not a filter
        filters.search = "  ".to_string();
        assert!(!filters.is_active());

        filters.collection = Some(10);
        assert!(filters.is_active());

        filters.clear();
        assert!(!filters.is_active());
        assert_eq!(filters, LibraryFilters::default());
    }

    #[test]
    fn test_no_filters_returns_everything() {
        let books = shelf();
        let result = filter_books(&books, &LibraryFilters::default(), &CollectionMembership::new());
        assert_eq!(ids(&result), vec![1, 2, 3]);
    }

    #[test]
    fn test_status_filter() {
        let books = shelf();
        let filters = LibraryFilters {
            status: Some(BookStatus::Reading),
            ..Default::default()
        };
        let result = filter_books(&books, &filters, &CollectionMembership::new());
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn test_search_matches_title_and_author_case_insensitively() {
        let books = shelf();
        let filters = LibraryFilters {
            search: "dune".to_string(),
            ..Default::default()
        };
        let result = filter_books(&books, &filters, &CollectionMembership::new());
        assert_eq!(ids(&result), vec![1, 3]);

        let filters = LibraryFilters {
            search: "AUSTEN".to_string(),
            ..Default::default()
        };
        let result = filter_books(&books, &filters, &CollectionMembership::new());
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn test_unloaded_membership_is_provisionally_visible() {
        let books = shelf();
        let filters = LibraryFilters {
            collection: Some(10),
            ..Default::default()
        };
        // Nothing loaded yet: everything stays visible
        let result = filter_books(&books, &filters, &CollectionMembership::new());
        assert_eq!(ids(&result), vec![1, 2, 3]);
    }

    #[test]
    fn test_loaded_membership_includes_and_excludes() {
        let books = shelf();
        let filters = LibraryFilters {
            collection: Some(10),
            ..Default::default()
        };
        let mut membership = CollectionMembership::new();
        membership.insert(1, vec![10]);
        membership.insert(2, vec![11]);
        // Book 3 still loading

        let result = filter_books(&books, &filters, &membership);
        assert_eq!(ids(&result), vec![1, 3]);
    }

    #[test]
    fn test_predicates_commute() {
        let books = shelf();
        let mut membership = CollectionMembership::new();
        membership.insert(1, vec![10]);
        membership.insert(2, vec![10]);
        membership.insert(3, vec![11]);

        let combined = LibraryFilters {
            status: Some(BookStatus::Reading),
            search: "herbert".to_string(),
            collection: Some(10),
            ..Default::default()
        };
        let all_at_once = ids(&filter_books(&books, &combined, &membership));

        // Apply one predicate at a time, in a different order, re-filtering
        // the shrinking set each time.
        let step1 = LibraryFilters {
            collection: Some(10),
            ..Default::default()
        };
        let step2 = LibraryFilters {
            search: "herbert".to_string(),
            ..Default::default()
        };
        let step3 = LibraryFilters {
            status: Some(BookStatus::Reading),
            ..Default::default()
        };
        let mut survivors: Vec<Book> = filter_books(&books, &step1, &membership)
            .into_iter()
            .cloned()
            .collect();
        survivors = filter_books(&survivors, &step2, &membership)
            .into_iter()
            .cloned()
            .collect();
        let sequential = ids(&filter_books(&survivors, &step3, &membership));

        assert_eq!(all_at_once, sequential);
        assert_eq!(all_at_once, vec![1]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let books = shelf();
        let filters = LibraryFilters {
            search: "dune".to_string(),
            ..Default::default()
        };
        let membership = CollectionMembership::new();
        let once: Vec<Book> = filter_books(&books, &filters, &membership)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_books(&once, &filters, &membership);
        assert_eq!(ids(&twice), vec![1, 3]);
    }
}
