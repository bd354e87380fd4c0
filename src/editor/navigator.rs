// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Page navigation state machine.
//!
//! Tracks the page shown for the open book and interprets clicks on the
//! page surface: the left half turns back, the right half turns forward or,
//! on the last page, asks for a new page to be appended.

use crate::util::geometry::PageRect;

/// Feedback fired whenever the visible page changes.
pub trait PageTurnCue {
    fn page_turned(&mut self, from: usize, to: usize);
}

/// What a click on the page landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Bare page surface, eligible for click-zone navigation.
    Surface,
    Photo,
    UploadArea,
    Sticker,
}

/// Outcome of a click on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored,
    Turned(usize),
    /// The caller must append a page and then call
    /// [`PageNavigator::show_appended_page`].
    AppendPage,
}

#[derive(Debug, Clone, Default)]
pub struct PageNavigator {
    current: usize,
}

impl PageNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Move to `index`. Out-of-range indices and the current index are
    /// ignored. Returns whether the page changed.
    pub fn go_to_page(&mut self, index: usize, page_count: usize, cue: &mut dyn PageTurnCue) -> bool {
        if index >= page_count || index == self.current {
            return false;
        }
        let from = self.current;
        self.current = index;
        cue.page_turned(from, index);
        log::debug!("Turned page {} -> {}", from + 1, index + 1);
        true
    }

    pub fn can_go_previous(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_next(&self, page_count: usize) -> bool {
        self.current + 1 < page_count
    }

    /// Previous-page control; does nothing on the first page.
    pub fn previous(&mut self, page_count: usize, cue: &mut dyn PageTurnCue) -> bool {
        match self.current.checked_sub(1) {
            Some(index) => self.go_to_page(index, page_count, cue),
            None => false,
        }
    }

    /// Next-page control; does nothing on the last page.
    pub fn next(&mut self, page_count: usize, cue: &mut dyn PageTurnCue) -> bool {
        self.go_to_page(self.current + 1, page_count, cue)
    }

    /// Interpret a click at absolute `screen_x` on the page `rect`.
    pub fn click(
        &mut self,
        target: ClickTarget,
        screen_x: f64,
        rect: PageRect,
        page_count: usize,
        cue: &mut dyn PageTurnCue,
    ) -> ClickOutcome {
        if target != ClickTarget::Surface {
            return ClickOutcome::Ignored;
        }

        if rect.is_left_half(screen_x) {
            if self.previous(page_count, cue) {
                ClickOutcome::Turned(self.current)
            } else {
                ClickOutcome::Ignored
            }
        } else if self.can_go_next(page_count) {
            self.next(page_count, cue);
            ClickOutcome::Turned(self.current)
        } else {
            ClickOutcome::AppendPage
        }
    }

    /// Show the page that was just appended, `page_count` being the new
    /// length of the book.
    pub fn show_appended_page(&mut self, page_count: usize, cue: &mut dyn PageTurnCue) -> bool {
        match page_count.checked_sub(1) {
            Some(last) => self.go_to_page(last, page_count, cue),
            None => false,
        }
    }

    /// Pull the index back into range, e.g. after the book was replaced by
    /// an older snapshot.
    pub fn clamp_to(&mut self, page_count: usize) {
        if self.current >= page_count {
            self.current = page_count.saturating_sub(1);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Default)]
    pub(crate) struct RecordingCue {
        pub(crate) turns: Vec<(usize, usize)>,
    }

    impl PageTurnCue for RecordingCue {
        fn page_turned(&mut self, from: usize, to: usize) {
            self.turns.push((from, to));
        }
    }

    fn rect() -> PageRect {
        PageRect::new(0.0, 0.0, 600.0, 400.0).unwrap()
    }

    #[test]
    fn go_to_page_ignores_invalid_targets() {
        let mut nav = PageNavigator::new();
        let mut cue = RecordingCue::default();
        assert!(!nav.go_to_page(0, 3, &mut cue));
        assert!(!nav.go_to_page(3, 3, &mut cue));
        assert!(nav.go_to_page(2, 3, &mut cue));
        assert_eq!(nav.current(), 2);
        assert_eq!(cue.turns, vec![(0, 2)]);
    }

    #[test]
    fn right_half_turns_forward_then_appends() {
        let mut nav = PageNavigator::new();
        let mut cue = RecordingCue::default();

        assert_eq!(
            nav.click(ClickTarget::Surface, 450.0, rect(), 2, &mut cue),
            ClickOutcome::Turned(1)
        );
        assert_eq!(
            nav.click(ClickTarget::Surface, 450.0, rect(), 2, &mut cue),
            ClickOutcome::AppendPage
        );
        assert!(nav.show_appended_page(3, &mut cue));
        assert_eq!(nav.current(), 2);
    }

    #[test]
    fn left_half_on_first_page_does_nothing() {
        let mut nav = PageNavigator::new();
        let mut cue = RecordingCue::default();
        assert_eq!(
            nav.click(ClickTarget::Surface, 10.0, rect(), 2, &mut cue),
            ClickOutcome::Ignored
        );
        assert!(cue.turns.is_empty());
    }

    #[test]
    fn left_half_turns_back() {
        let mut nav = PageNavigator::new();
        let mut cue = RecordingCue::default();
        nav.go_to_page(1, 2, &mut cue);
        assert_eq!(
            nav.click(ClickTarget::Surface, 100.0, rect(), 2, &mut cue),
            ClickOutcome::Turned(0)
        );
    }

    #[test]
    fn clicks_on_interactive_regions_are_ignored() {
        let mut nav = PageNavigator::new();
        let mut cue = RecordingCue::default();
        for target in [
            ClickTarget::Photo,
            ClickTarget::UploadArea,
            ClickTarget::Sticker,
        ] {
            assert_eq!(nav.click(target, 500.0, rect(), 1, &mut cue), ClickOutcome::Ignored);
        }
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn explicit_controls_stop_at_boundaries() {
        let mut nav = PageNavigator::new();
        let mut cue = RecordingCue::default();
        assert!(!nav.previous(2, &mut cue));
        assert!(nav.next(2, &mut cue));
        assert!(!nav.next(2, &mut cue));
        assert_eq!(nav.current(), 1);
        assert!(!nav.can_go_next(2));
        assert!(nav.can_go_previous());
    }

    #[test]
    fn clamp_keeps_index_valid() {
        let mut nav = PageNavigator::new();
        let mut cue = RecordingCue::default();
        nav.go_to_page(4, 5, &mut cue);
        nav.clamp_to(2);
        assert_eq!(nav.current(), 1);
    }
}
