// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Sticker and frame palettes.

use crate::models::book::Frame;
use crate::models::catalog::STICKER_CATEGORIES;

/// Result of palette interaction.
pub enum PaletteAction {
    None,
    AddSticker(&'static str),
    SelectFrame(Frame),
}

/// Sticker palette with one tab per category.
#[derive(Default)]
pub struct StickerPalette {
    active_category: usize,
}

impl StickerPalette {
    pub fn show(&mut self, ui: &mut egui::Ui) -> PaletteAction {
        let mut action = PaletteAction::None;

        ui.heading("🎨 Add Stickers 🎨");
        ui.horizontal_wrapped(|ui| {
            for (index, category) in STICKER_CATEGORIES.iter().enumerate() {
                let tab = ui
                    .selectable_label(self.active_category == index, category.icon)
                    .on_hover_text(category.name);
                if tab.clicked() {
                    self.active_category = index;
                }
            }
        });

        ui.separator();

        let category = &STICKER_CATEGORIES[self.active_category.min(STICKER_CATEGORIES.len() - 1)];
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);
            for emoji in category.stickers {
                let button = egui::Button::new(egui::RichText::new(*emoji).size(24.0))
                    .min_size(egui::vec2(40.0, 40.0));
                if ui.add(button).clicked() {
                    action = PaletteAction::AddSticker(*emoji);
                }
            }
        });

        action
    }
}

/// Frame palette highlighting the frame of the current page.
pub fn show_frames(ui: &mut egui::Ui, current: Frame) -> PaletteAction {
    let mut action = PaletteAction::None;

    ui.heading("🖼 Photo Frames 🖼");
    ui.label(egui::RichText::new("Choose a frame for your photo!").italics().weak());

    egui::Grid::new("frame-grid").num_columns(2).spacing([8.0, 8.0]).show(ui, |ui| {
        for (index, frame) in Frame::ALL.iter().enumerate() {
            let text = format!("{}  {}", frame.emoji(), frame.label());
            if ui.selectable_label(current == *frame, text).clicked() {
                action = PaletteAction::SelectFrame(*frame);
            }
            if index % 2 == 1 {
                ui.end_row();
            }
        }
    });

    action
}
