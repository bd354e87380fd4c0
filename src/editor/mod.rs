// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The "inside a book" editor.
//!
//! `ScrapbookEditor` holds only interaction state: which book is open, which
//! page is shown, the sticker being dragged and the last measured page
//! rectangle. Book contents always come from the repository passed into
//! each call, and every edit goes back to it as a whole new book.

pub mod drag;
pub mod mutations;
pub mod navigator;
pub mod view;

use crate::io::photo::{DecodedPhoto, PhotoDecoder, PhotoFile, PhotoTarget};
use crate::models::book::{Book, Frame, StickerPatch};
use crate::models::catalog::is_known_sticker;
use crate::models::id::{BookId, StickerId};
use crate::repository::BookRepository;
use crate::util::geometry::{PageRect, PixelPoint};
use drag::{PointerCapture, StickerDragController, StickerHit};
use navigator::{ClickOutcome, ClickTarget, PageNavigator, PageTurnCue};
use rand::Rng;
use std::time::Instant;

/// Page-turn feedback used by the app: remembers when the page last
/// changed so the page badge can flash.
#[derive(Debug, Default)]
pub struct FlipCue {
    turned_at: Option<Instant>,
}

impl FlipCue {
    pub fn turned_at(&self) -> Option<Instant> {
        self.turned_at
    }
}

impl PageTurnCue for FlipCue {
    fn page_turned(&mut self, _from: usize, _to: usize) {
        self.turned_at = Some(Instant::now());
    }
}

pub struct ScrapbookEditor {
    book_id: BookId,
    navigator: PageNavigator,
    drag: StickerDragController<PointerCapture>,
    page_rect: Option<PageRect>,
}

impl ScrapbookEditor {
    /// Open `book_id` on its first page.
    pub fn open(book_id: BookId) -> Self {
        log::info!("Opened book {}", book_id);
        Self {
            book_id,
            navigator: PageNavigator::new(),
            drag: StickerDragController::new(PointerCapture::default()),
            page_rect: None,
        }
    }

    pub fn book_id(&self) -> BookId {
        self.book_id
    }

    pub fn navigator(&self) -> &PageNavigator {
        &self.navigator
    }

    #[cfg(test)]
    pub fn current_page(&self) -> usize {
        self.navigator.current()
    }

    /// The open book, `None` once it has been deleted.
    pub fn book<'a>(&mut self, repo: &'a BookRepository) -> Option<&'a Book> {
        let book = repo.find(self.book_id)?;
        self.navigator.clamp_to(book.page_count());
        Some(book)
    }

    /// Record the on-screen bounds of the current page.
    pub fn measure(&mut self, rect: Option<PageRect>) {
        self.page_rect = rect;
    }

    #[cfg(test)]
    pub fn page_rect(&self) -> Option<PageRect> {
        self.page_rect
    }

    fn page_changed(&mut self) {
        self.drag.end();
        self.page_rect = None;
    }

    pub fn go_to_page(&mut self, repo: &BookRepository, index: usize, cue: &mut dyn PageTurnCue) -> bool {
        let Some(count) = repo.find(self.book_id).map(Book::page_count) else {
            return false;
        };
        let turned = self.navigator.go_to_page(index, count, cue);
        if turned {
            self.page_changed();
        }
        turned
    }

    pub fn previous_page(&mut self, repo: &BookRepository, cue: &mut dyn PageTurnCue) -> bool {
        let Some(count) = repo.find(self.book_id).map(Book::page_count) else {
            return false;
        };
        let turned = self.navigator.previous(count, cue);
        if turned {
            self.page_changed();
        }
        turned
    }

    pub fn next_page(&mut self, repo: &BookRepository, cue: &mut dyn PageTurnCue) -> bool {
        let Some(count) = repo.find(self.book_id).map(Book::page_count) else {
            return false;
        };
        let turned = self.navigator.next(count, cue);
        if turned {
            self.page_changed();
        }
        turned
    }

    /// Append an empty page and show it.
    pub fn add_new_page(&mut self, repo: &mut BookRepository, cue: &mut dyn PageTurnCue) -> bool {
        let page_id = repo.ids().page_id();
        let Some(book) = repo.find(self.book_id) else {
            return false;
        };
        let next = mutations::append_blank_page(book, page_id);
        let count = next.page_count();
        repo.update(next);
        log::info!("Added page {} to book {}", count, self.book_id);

        if self.navigator.show_appended_page(count, cue) {
            self.page_changed();
        }
        true
    }

    /// Click-zone navigation for a click at `screen_x` on the page.
    pub fn click_page(
        &mut self,
        repo: &mut BookRepository,
        target: ClickTarget,
        screen_x: f64,
        cue: &mut dyn PageTurnCue,
    ) -> ClickOutcome {
        let (Some(rect), Some(count)) = (
            self.page_rect,
            repo.find(self.book_id).map(Book::page_count),
        ) else {
            return ClickOutcome::Ignored;
        };

        let outcome = self.navigator.click(target, screen_x, rect, count, cue);
        match outcome {
            ClickOutcome::Turned(_) => self.page_changed(),
            ClickOutcome::AppendPage => {
                self.add_new_page(repo, cue);
            }
            ClickOutcome::Ignored => {}
        }
        outcome
    }

    fn replace_book<F>(&self, repo: &mut BookRepository, edit: F) -> bool
    where
        F: FnOnce(&Book, usize) -> Option<Book>,
    {
        let next = match repo.find(self.book_id) {
            Some(book) => edit(book, self.navigator.current()),
            None => None,
        };
        match next {
            Some(book) => repo.update(book),
            None => false,
        }
    }

    /// Place `emoji` at a random spot near the middle of the current page.
    pub fn add_sticker<R: Rng>(
        &mut self,
        repo: &mut BookRepository,
        emoji: &str,
        rng: &mut R,
    ) -> Option<StickerId> {
        if !is_known_sticker(emoji) {
            log::warn!("Ignoring sticker '{}': not in the palette", emoji);
            return None;
        }
        let sticker = mutations::spawn_sticker(repo.ids().sticker_id(), emoji, rng);
        let id = sticker.id;
        self.replace_book(repo, |book, page| mutations::add_sticker(book, page, sticker))
            .then_some(id)
    }

    pub fn update_sticker(&mut self, repo: &mut BookRepository, id: StickerId, patch: StickerPatch) -> bool {
        self.replace_book(repo, |book, page| mutations::update_sticker(book, page, id, patch))
    }

    pub fn delete_sticker(&mut self, repo: &mut BookRepository, id: StickerId) -> bool {
        if self.drag.dragging_sticker() == Some(id) {
            self.drag.end();
        }
        self.replace_book(repo, |book, page| mutations::delete_sticker(book, page, id))
    }

    pub fn select_frame(&mut self, repo: &mut BookRepository, frame: Frame) -> bool {
        self.replace_book(repo, |book, page| mutations::select_frame(book, page, frame))
    }

    /// Queue `file` as the photo of the page shown right now.
    pub fn request_photo(&self, decoder: &mut PhotoDecoder, file: PhotoFile) -> bool {
        decoder.submit(
            file,
            PhotoTarget {
                book: self.book_id,
                page_index: self.navigator.current(),
            },
        )
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.surface().is_attached()
    }

    pub fn dragging_sticker(&self) -> Option<StickerId> {
        self.drag.dragging_sticker()
    }

    /// Pointer-down on a sticker of the current page.
    pub fn start_drag(
        &mut self,
        repo: &BookRepository,
        id: StickerId,
        hit: StickerHit,
        pointer: PixelPoint,
    ) -> bool {
        let Some(sticker) = repo
            .find(self.book_id)
            .and_then(|book| book.page(self.navigator.current()))
            .and_then(|page| page.sticker(id))
        else {
            return false;
        };
        self.drag.start(sticker, hit, pointer, self.page_rect)
    }

    /// Pointer move anywhere on the surface while dragging.
    /// Unchanged positions are not written back.
    pub fn drag_to(&mut self, repo: &mut BookRepository, pointer: PixelPoint) -> bool {
        let Some(moved) = self.drag.drag_to(pointer, self.page_rect) else {
            return false;
        };
        let unchanged = repo
            .find(self.book_id)
            .and_then(|book| book.page(self.navigator.current()))
            .and_then(|page| page.sticker(moved.sticker))
            .is_some_and(|sticker| sticker.x == moved.x && sticker.y == moved.y);
        if unchanged {
            return false;
        }
        self.update_sticker(repo, moved.sticker, moved.patch())
    }

    /// Pointer release anywhere.
    pub fn end_drag(&mut self) {
        self.drag.end();
    }
}

/// Store a finished photo on the page it was requested for. The book may
/// have been closed or deleted in the meantime; deleted books are skipped.
pub fn apply_photo(repo: &mut BookRepository, photo: DecodedPhoto) -> bool {
    let target = photo.target;
    let next = repo
        .find(target.book)
        .and_then(|book| mutations::attach_photo(book, target.page_index, photo.data_uri));
    match next {
        Some(book) => {
            log::info!("Attached photo to page {} of book {}", target.page_index + 1, target.book);
            repo.update(book)
        }
        None => {
            log::warn!("Dropping photo for missing page {} of book {}", target.page_index + 1, target.book);
            false
        }
    }
}
