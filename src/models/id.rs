// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Identifier types and their generator.
//!
//! Identifiers are millisecond timestamps, but the generator never hands out
//! the same value twice: when the clock has not advanced (or went backwards)
//! the previous value plus one is used instead.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(
    /// Identifier of a book, unique across the collection.
    BookId
);
id_type!(
    /// Identifier of a page, unique within its book.
    PageId
);
id_type!(
    /// Identifier of a sticker, unique within its page.
    StickerId
);

/// Monotonic identifier source.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Create a generator that will only return values above `floor`.
    pub fn starting_after(floor: u64) -> Self {
        Self { last: floor }
    }

    /// Next raw identifier, derived from the current wall clock.
    pub fn next_raw(&mut self) -> u64 {
        let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
        self.next_at(now)
    }

    fn next_at(&mut self, now_ms: u64) -> u64 {
        self.last = now_ms.max(self.last + 1);
        self.last
    }

    pub fn book_id(&mut self) -> BookId {
        BookId(self.next_raw())
    }

    pub fn page_id(&mut self) -> PageId {
        PageId(self.next_raw())
    }

    pub fn sticker_id(&mut self) -> StickerId {
        StickerId(self.next_raw())
    }
}
