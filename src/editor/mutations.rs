// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Page-level edits.
//!
//! Every helper takes the current book and returns a new book with exactly
//! one page changed, ready to be handed to the repository as a whole.
//! `None` means there was nothing to change.

use crate::models::book::{Book, Frame, Page, Sticker, StickerPatch};
use crate::models::id::{PageId, StickerId};
use rand::Rng;

/// Bounds of the random position given to a new sticker, in percent.
pub const SPAWN_MIN_PERCENT: f64 = 20.0;
pub const SPAWN_MAX_PERCENT: f64 = 80.0;

/// Book with an empty page appended at the end.
pub fn append_blank_page(book: &Book, page_id: PageId) -> Book {
    book.with_page_appended(Page::blank(page_id))
}

/// Book with `data_uri` as the photo of page `page_index`.
pub fn attach_photo(book: &Book, page_index: usize, data_uri: String) -> Option<Book> {
    book.with_page(page_index, |page| page.image = Some(data_uri))
}

/// A new sticker placed somewhere around the middle of the page.
pub fn spawn_sticker<R: Rng>(id: StickerId, emoji: &str, rng: &mut R) -> Sticker {
    Sticker {
        id,
        emoji: emoji.to_string(),
        x: rng.random_range(SPAWN_MIN_PERCENT..SPAWN_MAX_PERCENT),
        y: rng.random_range(SPAWN_MIN_PERCENT..SPAWN_MAX_PERCENT),
    }
}

pub fn add_sticker(book: &Book, page_index: usize, sticker: Sticker) -> Option<Book> {
    book.with_page(page_index, |page| page.stickers.push(sticker))
}

/// Book with `patch` merged into sticker `id`. `None` if the sticker is
/// not on that page.
pub fn update_sticker(
    book: &Book,
    page_index: usize,
    id: StickerId,
    patch: StickerPatch,
) -> Option<Book> {
    book.page(page_index)?.sticker(id)?;
    book.with_page(page_index, |page| {
        page.stickers = page
            .stickers
            .iter()
            .map(|s| if s.id == id { s.merged(patch) } else { s.clone() })
            .collect();
    })
}

/// Book without sticker `id`. `None` if the sticker is not on that page.
pub fn delete_sticker(book: &Book, page_index: usize, id: StickerId) -> Option<Book> {
    book.page(page_index)?.sticker(id)?;
    book.with_page(page_index, |page| page.stickers.retain(|s| s.id != id))
}

pub fn select_frame(book: &Book, page_index: usize, frame: Frame) -> Option<Book> {
    book.with_page(page_index, |page| page.frame = Some(frame))
}
