// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Book repository.
//!
//! Owns the in-memory book collection and writes it through to the
//! persistent store after every change. The in-memory collection is
//! authoritative: a failed write never rolls back an accepted change.

use crate::models::book::{validate_name, Book, BookNameError, Page};
use crate::models::id::{BookId, IdGenerator};
use crate::models::library;
use crate::store::PersistentStore;
use chrono::{DateTime, Utc};

/// Application state shared by both screens.
pub struct BookRepository {
    store: PersistentStore,
    key: String,
    books: Vec<Book>,
    ids: IdGenerator,
}

impl BookRepository {
    /// Load the collection stored under `key`, starting empty when nothing
    /// usable is stored.
    pub fn open(store: PersistentStore, key: impl Into<String>) -> Self {
        let key = key.into();
        let books: Vec<Book> = store.load(&key, Vec::new());
        let ids = IdGenerator::starting_after(library::max_id(&books));
        log::info!("Loaded {} book(s) from '{}'", books.len(), key);
        Self {
            store,
            key,
            books,
            ids,
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn find(&self, id: BookId) -> Option<&Book> {
        library::find_book(&self.books, id)
    }

    /// Identifier source shared by every entity in the collection.
    pub fn ids(&mut self) -> &mut IdGenerator {
        &mut self.ids
    }

    /// Create a book with one blank page and append it to the collection.
    pub fn create(&mut self, name: &str) -> Result<BookId, BookNameError> {
        self.create_at(name, Utc::now())
    }

    pub fn create_at(
        &mut self,
        name: &str,
        created_at: DateTime<Utc>,
    ) -> Result<BookId, BookNameError> {
        let name = validate_name(name)?;
        let id = self.ids.book_id();
        let first_page = Page::blank(self.ids.page_id());
        let book = Book::new(id, name, created_at, first_page);
        log::info!("Created book '{}' ({})", book.name, id);
        self.commit(library::with_book_added(&self.books, book));
        Ok(id)
    }

    /// Replace the stored version of `book`. Unknown books are ignored.
    pub fn update(&mut self, book: Book) -> bool {
        let id = book.id;
        match library::with_book_replaced(&self.books, book) {
            Some(next) => {
                self.commit(next);
                true
            }
            None => {
                log::debug!("Ignoring update for missing book {}", id);
                false
            }
        }
    }

    /// Remove book `id`. Removing an absent book is a no-op.
    pub fn delete(&mut self, id: BookId) -> bool {
        match library::without_book(&self.books, id) {
            Some(next) => {
                log::info!("Deleted book {}", id);
                self.commit(next);
                true
            }
            None => false,
        }
    }

    fn commit(&mut self, next: Vec<Book>) {
        self.books = next;
        self.store.save(&self.key, &self.books);
    }
}
