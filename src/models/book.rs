// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Book, page and sticker data structures.
//!
//! Books are treated as values: every edit produces a new `Book` with
//! exactly one page (or sticker) replaced, and the whole book is handed back
//! to the repository. The page list is private so that a book can never be
//! observed without at least one page.

use super::id::{BookId, PageId, StickerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest accepted book name, in characters.
pub const MAX_NAME_CHARS: usize = 50;

/// Reasons a submitted book name is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookNameError {
    #[error("book name is empty")]
    Empty,
    #[error("book name is {0} characters long, the limit is {MAX_NAME_CHARS}")]
    TooLong(usize),
}

/// Trim a user-supplied name and check it against the naming rules.
pub fn validate_name(raw: &str) -> Result<String, BookNameError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(BookNameError::Empty);
    }
    let len = name.chars().count();
    if len > MAX_NAME_CHARS {
        return Err(BookNameError::TooLong(len));
    }
    Ok(name.to_string())
}

/// Decorative frame drawn around a page photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frame {
    #[default]
    None,
    Heart,
    Star,
    Rainbow,
    Flower,
    Party,
}

impl Frame {
    pub const ALL: [Frame; 6] = [
        Frame::None,
        Frame::Heart,
        Frame::Star,
        Frame::Rainbow,
        Frame::Flower,
        Frame::Party,
    ];
}

/// An emoji placed on a page, positioned in percent of the page size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sticker {
    pub id: StickerId,
    pub emoji: String,
    pub x: f64,
    pub y: f64,
}

/// Partial sticker update. Unset fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StickerPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl StickerPatch {
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }
}

impl Sticker {
    /// Return a copy with the patch applied.
    pub fn merged(&self, patch: StickerPatch) -> Sticker {
        Sticker {
            id: self.id,
            emoji: self.emoji.clone(),
            x: patch.x.unwrap_or(self.x),
            y: patch.y.unwrap_or(self.y),
        }
    }
}

/// One page of a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PageRecord", into = "PageRecord")]
pub struct Page {
    pub id: PageId,
    /// Photo encoded as a data URI.
    pub image: Option<String>,
    pub frame: Option<Frame>,
    pub stickers: Vec<Sticker>,
}

impl Page {
    /// A page with no photo, no frame and no stickers.
    pub fn blank(id: PageId) -> Self {
        Self {
            id,
            image: None,
            frame: None,
            stickers: Vec::new(),
        }
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Selected frame, `Frame::None` when nothing was chosen yet.
    pub fn frame_or_default(&self) -> Frame {
        self.frame.unwrap_or_default()
    }

    pub fn sticker(&self, id: StickerId) -> Option<&Sticker> {
        self.stickers.iter().find(|s| s.id == id)
    }
}

/// Stored shape of a page. `hasImage` is written for readers of the raw
/// data but is recomputed from `image` when loading.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageRecord {
    id: PageId,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    has_image: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    frame: Option<Frame>,
    #[serde(default)]
    stickers: Vec<Sticker>,
}

impl From<PageRecord> for Page {
    fn from(record: PageRecord) -> Self {
        Self {
            id: record.id,
            image: record.image,
            frame: record.frame,
            stickers: record.stickers,
        }
    }
}

impl From<Page> for PageRecord {
    fn from(page: Page) -> Self {
        Self {
            id: page.id,
            has_image: page.image.is_some(),
            image: page.image,
            frame: page.frame,
            stickers: page.stickers,
        }
    }
}

/// A named scrapbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "BookRecord")]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pages: Vec<Page>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookRecord {
    id: BookId,
    name: String,
    created_at: DateTime<Utc>,
    pages: Vec<Page>,
}

impl TryFrom<BookRecord> for Book {
    type Error = String;

    fn try_from(record: BookRecord) -> Result<Self, Self::Error> {
        if record.pages.is_empty() {
            return Err(format!("book {} has no pages", record.id));
        }
        Ok(Self {
            id: record.id,
            name: record.name,
            created_at: record.created_at,
            pages: record.pages,
        })
    }
}

impl Book {
    /// Create a book holding a single page.
    pub fn new(id: BookId, name: String, created_at: DateTime<Utc>, first_page: Page) -> Self {
        Self {
            id,
            name,
            created_at,
            pages: vec![first_page],
        }
    }

    #[cfg(test)]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Return a new book with `page` appended after the last page.
    pub fn with_page_appended(&self, page: Page) -> Book {
        let mut next = self.clone();
        next.pages.push(page);
        next
    }

    /// Return a new book where the page at `index` is replaced by the result
    /// of `edit`. `None` when the index is out of range.
    pub fn with_page<F>(&self, index: usize, edit: F) -> Option<Book>
    where
        F: FnOnce(&mut Page),
    {
        if index >= self.pages.len() {
            return None;
        }
        let mut next = self.clone();
        edit(&mut next.pages[index]);
        Some(next)
    }

    /// Highest identifier used by the book or anything inside it.
    pub fn max_id(&self) -> u64 {
        self.pages
            .iter()
            .flat_map(|page| {
                std::iter::once(page.id.0).chain(page.stickers.iter().map(|s| s.id.0))
            })
            .fold(self.id.0, u64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        let mut page = Page::blank(PageId(2));
        page.stickers.push(Sticker {
            id: StickerId(3),
            emoji: "🐱".to_string(),
            x: 40.0,
            y: 60.0,
        });
        Book::new(BookId(1), "Trip".to_string(), Utc::now(), page)
    }

    #[test]
    fn names_are_trimmed_and_limited() {
        assert_eq!(validate_name("  Summer Trip ").unwrap(), "Summer Trip");
        assert_eq!(validate_name("   "), Err(BookNameError::Empty));
        assert_eq!(validate_name(&"a".repeat(50)).unwrap().len(), 50);
        assert_eq!(
            validate_name(&"a".repeat(51)),
            Err(BookNameError::TooLong(51))
        );
    }

    #[test]
    fn name_limit_counts_characters_not_bytes() {
        let name = "🌸".repeat(MAX_NAME_CHARS);
        assert!(validate_name(&name).is_ok());
    }

    #[test]
    fn page_record_carries_has_image() {
        let mut page = Page::blank(PageId(7));
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["hasImage"], false);
        assert!(json.get("frame").is_none());

        page.image = Some("data:image/png;base64,AAAA".to_string());
        page.frame = Some(Frame::Rainbow);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["hasImage"], true);
        assert_eq!(json["frame"], "rainbow");
    }

    #[test]
    fn has_image_is_recomputed_on_load() {
        let json = r#"{"id": 1, "image": null, "hasImage": true}"#;
        let page: Page = serde_json::from_str(json).unwrap();
        assert!(!page.has_image());
        assert!(page.stickers.is_empty());
    }

    #[test]
    fn book_uses_camel_case_fields() {
        let json = serde_json::to_value(sample_book()).unwrap();
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["pages"][0]["stickers"][0]["emoji"], "🐱");
    }

    #[test]
    fn book_without_pages_is_rejected() {
        let json = r#"{"id": 1, "name": "x", "createdAt": "2024-05-01T10:00:00Z", "pages": []}"#;
        assert!(serde_json::from_str::<Book>(json).is_err());
    }

    #[test]
    fn with_page_replaces_only_the_target() {
        let book = sample_book().with_page_appended(Page::blank(PageId(4)));
        let edited = book
            .with_page(1, |page| page.frame = Some(Frame::Star))
            .unwrap();

        assert_eq!(edited.page(0), book.page(0));
        assert_eq!(edited.page(1).unwrap().frame, Some(Frame::Star));
        assert_eq!(book.page(1).unwrap().frame, None);
        assert!(book.with_page(2, |_| {}).is_none());
    }

    #[test]
    fn merged_patch_keeps_unset_fields() {
        let sticker = sample_book().page(0).unwrap().stickers[0].clone();
        let moved = sticker.merged(StickerPatch {
            x: Some(10.0),
            y: None,
        });
        assert_eq!(moved.x, 10.0);
        assert_eq!(moved.y, 60.0);
        assert_eq!(moved.emoji, sticker.emoji);
    }

    #[test]
    fn max_id_covers_nested_ids() {
        assert_eq!(sample_book().max_id(), 3);
    }
}
