// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Home screen: create, list, open and delete books.

use crate::models::book::{validate_name, Book, MAX_NAME_CHARS};
use crate::models::id::BookId;
use std::time::{Duration, Instant};

/// How long the "Creating..." state lasts before the book appears.
pub const CREATE_DELAY: Duration = Duration::from_millis(500);
/// How long the success banner stays up.
pub const SUCCESS_BANNER: Duration = Duration::from_secs(2);

/// One row of the book list.
#[derive(Debug, Clone, PartialEq)]
pub struct BookSummary {
    pub id: BookId,
    pub name: String,
    pub pages_label: String,
}

impl BookSummary {
    pub fn from_book(book: &Book) -> Self {
        let count = book.page_count();
        Self {
            id: book.id,
            name: book.name.clone(),
            pages_label: format!("{} page{}", count, if count == 1 { "" } else { "s" }),
        }
    }
}

/// Result of home screen interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    None,
    Open(BookId),
    Delete(BookId),
}

struct PendingCreation {
    name: String,
    ready_at: Instant,
}

#[derive(Default)]
pub struct HomeScreen {
    name_input: String,
    creating: Option<PendingCreation>,
    success_until: Option<Instant>,
    confirm_delete: Option<(BookId, String)>,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_creating(&self) -> bool {
        self.creating.is_some()
    }

    /// Whether anything on the screen is waiting on the clock.
    pub fn is_animating(&self) -> bool {
        self.creating.is_some() || self.success_until.is_some()
    }

    /// Submit the typed name. Invalid names and double submits are ignored.
    pub fn submit(&mut self, now: Instant) -> bool {
        if self.creating.is_some() {
            return false;
        }
        match validate_name(&self.name_input) {
            Ok(name) => {
                self.creating = Some(PendingCreation {
                    name,
                    ready_at: now + CREATE_DELAY,
                });
                true
            }
            Err(e) => {
                log::debug!("Not creating book: {}", e);
                false
            }
        }
    }

    /// Name of the book to create once the creation delay has passed.
    pub fn poll_creation(&mut self, now: Instant) -> Option<String> {
        if self.success_until.is_some_and(|until| now >= until) {
            self.success_until = None;
        }

        let ready = self.creating.as_ref().is_some_and(|p| now >= p.ready_at);
        if !ready {
            return None;
        }
        let pending = self.creating.take()?;
        self.name_input.clear();
        self.success_until = Some(now + SUCCESS_BANNER);
        Some(pending.name)
    }

    pub fn shows_success(&self, now: Instant) -> bool {
        self.success_until.is_some_and(|until| now < until)
    }

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: BookId, name: &str) {
        self.confirm_delete = Some((id, name.to_string()));
    }

    /// Close the confirmation dialog. Returns the book to delete when the
    /// user confirmed.
    pub fn resolve_delete(&mut self, confirmed: bool) -> Option<BookId> {
        let (id, _) = self.confirm_delete.take()?;
        confirmed.then_some(id)
    }

    /// Display the home screen.
    pub fn show(&mut self, ui: &mut egui::Ui, books: &[Book]) -> HomeAction {
        let mut action = HomeAction::None;
        let now = Instant::now();
        let accent = egui::Color32::from_rgb(255, 105, 180);

        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.heading(
                egui::RichText::new("📚 THE MEMORY CHAPTER 📚")
                    .size(32.0)
                    .color(accent),
            );
            ui.label(
                egui::RichText::new("Create memories with photos!")
                    .size(16.0)
                    .weak(),
            );
            ui.add_space(24.0);

            ui.label("✨ Give your scrapbook a special name ✨");
            let creating = self.is_creating();
            let input = ui.add_enabled(
                !creating,
                egui::TextEdit::singleline(&mut self.name_input)
                    .char_limit(MAX_NAME_CHARS)
                    .hint_text("A Journey to remember...")
                    .desired_width(320.0),
            );
            let entered = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            let can_submit = !creating && !self.name_input.trim().is_empty();
            let label = if creating {
                "⏳ Creating..."
            } else {
                "🎨 Create a new Chapter 🎨"
            };
            let clicked = ui
                .add_enabled(can_submit, egui::Button::new(egui::RichText::new(label).size(18.0)))
                .clicked();
            if (clicked || entered) && can_submit {
                self.submit(now);
            }
            if creating {
                ui.spinner();
            }

            if self.shows_success(now) {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("🎉 Memory created successfully! 🎉")
                        .size(16.0)
                        .color(egui::Color32::from_rgb(46, 139, 87)),
                );
            }

            if !books.is_empty() {
                ui.add_space(24.0);
                ui.heading(egui::RichText::new("📖 My Memory 📖").color(accent));
                ui.add_space(8.0);

                egui::ScrollArea::vertical().show(ui, |ui| {
                    for summary in books.iter().map(BookSummary::from_book) {
                        ui.horizontal(|ui| {
                            let open = ui.add(
                                egui::Button::new(egui::RichText::new(&summary.name).size(18.0))
                                    .min_size(egui::vec2(280.0, 36.0)),
                            );
                            ui.label(egui::RichText::new(&summary.pages_label).weak());
                            let delete = ui.button("🗑").on_hover_text("Delete this book");

                            if delete.clicked() {
                                self.request_delete(summary.id, &summary.name);
                            } else if open.clicked() {
                                action = HomeAction::Open(summary.id);
                            }
                        });
                    }
                });
            }
        });

        // Confirmation dialog for deletes
        if let Some((_, name)) = &self.confirm_delete {
            let prompt = format!("Are you sure you want to delete \"{}\"?", name);
            let mut decision = None;
            egui::Window::new("Delete book?")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ui.ctx(), |ui| {
                    ui.label(prompt);
                    ui.horizontal(|ui| {
                        if ui.button("Delete").clicked() {
                            decision = Some(true);
                        }
                        if ui.button("Cancel").clicked() {
                            decision = Some(false);
                        }
                    });
                });

            if let Some(confirmed) = decision {
                if let Some(id) = self.resolve_delete(confirmed) {
                    action = HomeAction::Delete(id);
                }
            }
        }

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::Page;
    use crate::models::id::PageId;
    use chrono::Utc;

    fn typed(name: &str) -> HomeScreen {
        let mut home = HomeScreen::new();
        home.name_input = name.to_string();
        home
    }

    #[test]
    fn creation_waits_for_the_delay() {
        let start = Instant::now();
        let mut home = typed("  Summer Trip ");
        assert!(home.submit(start));
        assert!(home.is_creating());
        assert!(!home.submit(start));

        assert_eq!(home.poll_creation(start + Duration::from_millis(100)), None);
        let created = home.poll_creation(start + CREATE_DELAY);
        assert_eq!(created.as_deref(), Some("Summer Trip"));
        assert!(home.name_input.is_empty());
        assert!(!home.is_creating());
    }

    #[test]
    fn success_banner_expires() {
        let start = Instant::now();
        let mut home = typed("Trip");
        home.submit(start);
        let created_at = start + CREATE_DELAY;
        home.poll_creation(created_at);

        assert!(home.shows_success(created_at));
        home.poll_creation(created_at + SUCCESS_BANNER);
        assert!(!home.shows_success(created_at + SUCCESS_BANNER));
        assert!(!home.is_animating());
    }

    #[test]
    fn blank_names_are_not_submitted() {
        let mut home = typed("   ");
        assert!(!home.submit(Instant::now()));
        assert!(!home.is_creating());
    }

    #[test]
    fn declining_delete_keeps_the_book() {
        let mut home = HomeScreen::new();
        home.request_delete(BookId(3), "Trip");
        assert_eq!(home.resolve_delete(false), None);
        assert_eq!(home.resolve_delete(true), None);

        home.request_delete(BookId(3), "Trip");
        assert_eq!(home.resolve_delete(true), Some(BookId(3)));
    }

    #[test]
    fn summary_pluralizes_pages() {
        let book = Book::new(BookId(1), "Trip".to_string(), Utc::now(), Page::blank(PageId(2)));
        assert_eq!(BookSummary::from_book(&book).pages_label, "1 page");
        let book = book.with_page_appended(Page::blank(PageId(3)));
        assert_eq!(BookSummary::from_book(&book).pages_label, "2 pages");
    }
}
