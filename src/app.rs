// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait. It routes between the home screen and the editor,
//! feeds finished background work back into the repository and dispatches
//! UI actions to the editor.

use crate::editor::navigator::PageTurnCue;
use crate::editor::view::PageView;
use crate::editor::{apply_photo, FlipCue, ScrapbookEditor};
use crate::io::media::PhotoTextures;
use crate::io::photo::{PhotoDecoder, PhotoFile};
use crate::models::id::BookId;
use crate::repository::BookRepository;
use crate::ui::home::{HomeAction, HomeScreen};
use crate::ui::page::{PageAction, PageInteraction};
use crate::ui::palette::{PaletteAction, StickerPalette};
use crate::ui::toolbar::ToolbarAction;
use crate::ui::{floating_decorations, page, palette, toolbar};
use std::time::Instant;

/// Main application state.
pub struct ScrapbookApp {
    /// Book collection, written through to storage
    repo: BookRepository,

    /// Home screen form and dialogs
    home: HomeScreen,

    /// Open book, if any
    editor: Option<ScrapbookEditor>,

    /// Background photo encoding
    photos: PhotoDecoder,

    /// Decoded page photos
    textures: PhotoTextures,

    sticker_palette: StickerPalette,

    cue: FlipCue,
}

impl ScrapbookApp {
    pub fn new(repo: BookRepository) -> Self {
        Self {
            repo,
            home: HomeScreen::new(),
            editor: None,
            photos: PhotoDecoder::new(),
            textures: PhotoTextures::default(),
            sticker_palette: StickerPalette::default(),
            cue: FlipCue::default(),
        }
    }

    fn open_book(&mut self, id: BookId) {
        if self.repo.find(id).is_some() {
            self.textures.clear();
            self.editor = Some(ScrapbookEditor::open(id));
        }
    }

    fn close_book(&mut self) {
        if let Some(editor) = self.editor.take() {
            log::info!("Closed book {}", editor.book_id());
        }
        self.textures.clear();
    }

    /// Apply completed background work: finished photos and the delayed
    /// book creation.
    fn poll_background(&mut self, ctx: &egui::Context) {
        for photo in self.photos.poll() {
            apply_photo(&mut self.repo, photo);
        }

        if let Some(name) = self.home.poll_creation(Instant::now()) {
            if let Err(e) = self.repo.create(&name) {
                log::error!("Could not create book: {}", e);
            }
        }

        if self.photos.is_busy() || self.home.is_animating() {
            ctx.request_repaint();
        }
    }

    fn pick_photo() -> Option<PhotoFile> {
        rfd::FileDialog::new()
            .add_filter("Images", &["jpg", "jpeg", "png", "gif", "bmp", "webp"])
            .pick_file()
            .map(PhotoFile::from_path)
    }

    fn show_home(&mut self, ctx: &egui::Context) {
        let action = egui::CentralPanel::default()
            .show(ctx, |ui| self.home.show(ui, self.repo.books()))
            .inner;

        match action {
            HomeAction::Open(id) => self.open_book(id),
            HomeAction::Delete(id) => {
                self.repo.delete(id);
            }
            HomeAction::None => {}
        }
    }

    fn show_editor(&mut self, ctx: &egui::Context) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        // The book may have been deleted while open
        let Some(book) = editor.book(&self.repo) else {
            self.close_book();
            return;
        };
        let Some(view) = PageView::describe(book, editor.navigator()) else {
            self.close_book();
            return;
        };

        // Header
        let header_action = egui::TopBottomPanel::top("header")
            .show(ctx, |ui| toolbar::show_header(ui, view.title))
            .inner;

        // Palettes (right side)
        let palette_action = egui::SidePanel::right("palettes")
            .default_width(280.0)
            .show(ctx, |ui| {
                let sticker = self.sticker_palette.show(ui);
                ui.add_space(16.0);
                let frame = palette::show_frames(ui, view.frame);
                match sticker {
                    PaletteAction::None => frame,
                    picked => picked,
                }
            })
            .inner;

        // Page navigation (bottom)
        let nav_action = egui::TopBottomPanel::bottom("navigation")
            .show(ctx, |ui| toolbar::show_navigation(ui, &view))
            .inner;

        // Main page (center)
        let photo = self.textures.get(ctx, view.page);
        let interaction = PageInteraction {
            capture_attached: editor.is_dragging(),
            dragging: editor.dragging_sticker(),
            turned_at: self.cue.turned_at(),
        };
        let (page_action, measured) = egui::CentralPanel::default()
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| page::show(ui, &view, photo.as_ref(), &interaction))
                    .inner
            })
            .inner;
        editor.measure(measured);

        let cue: &mut dyn PageTurnCue = &mut self.cue;
        let repo = &mut self.repo;

        match palette_action {
            PaletteAction::AddSticker(emoji) => {
                editor.add_sticker(repo, emoji, &mut rand::rng());
            }
            PaletteAction::SelectFrame(frame) => {
                editor.select_frame(repo, frame);
            }
            PaletteAction::None => {}
        }

        match nav_action {
            ToolbarAction::Previous => {
                editor.previous_page(repo, cue);
            }
            ToolbarAction::Next => {
                editor.next_page(repo, cue);
            }
            ToolbarAction::AddPage => {
                editor.add_new_page(repo, cue);
            }
            ToolbarAction::BackHome | ToolbarAction::None => {}
        }

        match page_action {
            PageAction::Clicked { target, screen_x } => {
                editor.click_page(repo, target, screen_x, cue);
            }
            PageAction::PickPhoto => {
                if let Some(file) = Self::pick_photo() {
                    editor.request_photo(&mut self.photos, file);
                }
            }
            PageAction::DroppedPhoto(file) => {
                editor.request_photo(&mut self.photos, file);
            }
            PageAction::StartDrag {
                sticker,
                hit,
                pointer,
            } => {
                editor.start_drag(repo, sticker, hit, pointer);
            }
            PageAction::DragTo(pointer) => {
                editor.drag_to(repo, pointer);
            }
            PageAction::EndDrag => editor.end_drag(),
            PageAction::DeleteSticker(id) => {
                editor.delete_sticker(repo, id);
            }
            PageAction::None => {}
        }

        if header_action == ToolbarAction::BackHome {
            self.close_book();
        }
    }
}

impl eframe::App for ScrapbookApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_background(ctx);

        if self.editor.is_some() {
            self.show_editor(ctx);
        } else {
            self.show_home(ctx);
        }

        floating_decorations(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use crate::editor::drag::StickerHit;
    use crate::models::book::StickerPatch;
    use crate::models::id::StickerId;
    use crate::ui::home;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use crate::store::PersistentStore;

    fn app() -> ScrapbookApp {
        app_on(&MemoryStore::new())
    }

    fn app_on(medium: &MemoryStore) -> ScrapbookApp {
        let store = PersistentStore::new(Box::new(medium.clone()));
        ScrapbookApp::new(BookRepository::open(store, "scrapbooks"))
    }

    fn run_frame(app: &mut ScrapbookApp, ctx: &egui::Context, events: Vec<egui::Event>) {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1024.0, 768.0))),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.show_editor(ctx));
    }

    fn primary(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    /// Open a fresh one-page book holding a single 💖 and lay it out.
    fn editor_with_sticker(app: &mut ScrapbookApp, ctx: &egui::Context) -> StickerId {
        let book = app.repo.create("Trip").unwrap();
        app.open_book(book);
        let editor = app.editor.as_mut().unwrap();
        let sticker = editor
            .add_sticker(&mut app.repo, "💖", &mut StdRng::seed_from_u64(1))
            .unwrap();
        for _ in 0..3 {
            run_frame(app, ctx, Vec::new());
        }
        sticker
    }

    fn sticker_screen_pos(app: &mut ScrapbookApp, id: StickerId) -> egui::Pos2 {
        let editor = app.editor.as_mut().unwrap();
        let sticker = editor.book(&app.repo).unwrap().page(0).unwrap().sticker(id).unwrap();
        editor.page_rect().unwrap().percent_to_screen(sticker.x, sticker.y)
    }

    #[test]
    fn opening_unknown_book_stays_home() {
        let mut app = app();
        app.open_book(BookId(42));
        assert!(app.editor.is_none());
    }

    #[test]
    fn deleting_open_book_closes_editor() {
        let mut app = app();
        let id = app.repo.create("Trip").unwrap();
        app.open_book(id);
        assert!(app.editor.is_some());

        app.repo.delete(id);
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.show_editor(ctx));
        assert!(app.editor.is_none());
    }

    #[test]
    fn home_summary_matches_repository() {
        let mut app = app();
        app.repo.create("Summer Trip").unwrap();
        let summaries: Vec<_> = app.repo.books().iter().map(home::BookSummary::from_book).collect();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].pages_label, "1 page");
    }

    #[test]
    fn held_still_sticker_is_not_rewritten() {
        let medium = MemoryStore::new();
        let mut app = app_on(&medium);
        let ctx = egui::Context::default();
        let id = editor_with_sticker(&mut app, &ctx);
        let pos = sticker_screen_pos(&mut app, id);

        let editor = app.editor.as_mut().unwrap();
        assert!(editor.start_drag(&app.repo, id, StickerHit::Body, pos.into()));
        run_frame(&mut app, &ctx, vec![egui::Event::PointerMoved(pos), primary(pos, true)]);
        run_frame(&mut app, &ctx, Vec::new());
        let writes = medium.write_count();

        for _ in 0..30 {
            run_frame(&mut app, &ctx, Vec::new());
        }
        assert_eq!(medium.write_count(), writes);
        assert!(app.editor.as_ref().unwrap().is_dragging());
    }

    #[test]
    fn delete_control_removes_sticker_without_turning_page() {
        let mut app = app();
        let ctx = egui::Context::default();
        let id = editor_with_sticker(&mut app, &ctx);
        let editor = app.editor.as_mut().unwrap();
        editor.update_sticker(&mut app.repo, id, StickerPatch::position(90.0, 90.0));
        run_frame(&mut app, &ctx, Vec::new());

        let cross = page::delete_control_rect(sticker_screen_pos(&mut app, id)).center();
        run_frame(&mut app, &ctx, vec![egui::Event::PointerMoved(cross), primary(cross, true)]);
        run_frame(&mut app, &ctx, vec![primary(cross, false)]);

        let editor = app.editor.as_ref().unwrap();
        let book = app.repo.find(editor.book_id()).unwrap();
        assert_eq!(book.page_count(), 1);
        assert!(book.page(0).unwrap().stickers.is_empty());
        assert_eq!(editor.current_page(), 0);
        assert!(!editor.is_dragging());
    }
}
