// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Declarative description of the editor screen.
//!
//! Everything the page view paints that depends on state is computed here,
//! so the egui code only lays it out.

use super::navigator::PageNavigator;
use crate::models::book::{Book, Frame, Page};

/// Hint shown on the right edge of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextHint {
    Forward,
    AddPage,
}

impl NextHint {
    pub fn symbol(self) -> &'static str {
        match self {
            NextHint::Forward => "→",
            NextHint::AddPage => "+",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    pub title: &'a str,
    pub page: &'a Page,
    pub page_index: usize,
    pub page_count: usize,
    pub show_back_hint: bool,
    pub next_hint: NextHint,
    pub frame: Frame,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

impl<'a> PageView<'a> {
    /// Describe the page of `book` selected by `navigator`.
    pub fn describe(book: &'a Book, navigator: &PageNavigator) -> Option<Self> {
        let page_index = navigator.current();
        let page = book.page(page_index)?;
        let page_count = book.page_count();
        let can_go_next = navigator.can_go_next(page_count);
        Some(Self {
            title: &book.name,
            page,
            page_index,
            page_count,
            show_back_hint: navigator.can_go_previous(),
            next_hint: if can_go_next {
                NextHint::Forward
            } else {
                NextHint::AddPage
            },
            frame: page.frame_or_default(),
            can_go_previous: navigator.can_go_previous(),
            can_go_next,
        })
    }

    /// Badge in the page corner, e.g. "Page 2".
    pub fn badge(&self) -> String {
        format!("Page {}", self.page_index + 1)
    }

    /// Position label under the page, e.g. "Page 2 of 5".
    pub fn position_label(&self) -> String {
        format!("Page {} of {}", self.page_index + 1, self.page_count)
    }
}
