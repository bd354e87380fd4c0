// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Pure state transitions over the book collection.
//!
//! Each function takes the current collection and returns the next one;
//! nothing here touches storage.

use super::book::Book;
use super::id::BookId;

/// Collection with `book` appended at the end.
pub fn with_book_added(books: &[Book], book: Book) -> Vec<Book> {
    let mut next = books.to_vec();
    next.push(book);
    next
}

/// Collection with the book sharing `book.id` replaced. Returns `None` when
/// no such book exists.
pub fn with_book_replaced(books: &[Book], book: Book) -> Option<Vec<Book>> {
    let position = books.iter().position(|b| b.id == book.id)?;
    let mut next = books.to_vec();
    next[position] = book;
    Some(next)
}

/// Collection without the book `id`. Returns `None` when it is absent.
pub fn without_book(books: &[Book], id: BookId) -> Option<Vec<Book>> {
    if !books.iter().any(|b| b.id == id) {
        return None;
    }
    Some(books.iter().filter(|b| b.id != id).cloned().collect())
}

pub fn find_book(books: &[Book], id: BookId) -> Option<&Book> {
    books.iter().find(|b| b.id == id)
}

/// Highest identifier stored anywhere in the collection.
pub fn max_id(books: &[Book]) -> u64 {
    books.iter().map(Book::max_id).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::Page;
    use crate::models::id::PageId;
    use chrono::Utc;

    fn book(id: u64) -> Book {
        Book::new(
            BookId(id),
            format!("book {}", id),
            Utc::now(),
            Page::blank(PageId(id + 100)),
        )
    }

    #[test]
    fn added_books_keep_insertion_order() {
        let books = with_book_added(&[book(1)], book(2));
        let ids: Vec<u64> = books.iter().map(|b| b.id.0).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn replace_targets_matching_id_only() {
        let books = vec![book(1), book(2)];
        let edited = book(2).with_page_appended(Page::blank(PageId(900)));
        let next = with_book_replaced(&books, edited).unwrap();
        assert_eq!(next[0], books[0]);
        assert_eq!(next[1].page_count(), 2);
        assert!(with_book_replaced(&books, book(3)).is_none());
    }

    #[test]
    fn removing_absent_book_reports_none() {
        let books = vec![book(1)];
        assert!(without_book(&books, BookId(5)).is_none());
        assert!(without_book(&books, BookId(1)).unwrap().is_empty());
    }

    #[test]
    fn max_id_spans_all_books() {
        assert_eq!(max_id(&[book(1), book(4)]), 104);
        assert_eq!(max_id(&[]), 0);
    }
}
