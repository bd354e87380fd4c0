// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor header and page navigation bar.

use crate::editor::view::PageView;

/// Result of toolbar interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    None,
    BackHome,
    Previous,
    Next,
    AddPage,
}

/// Display the header with the back button and book title.
pub fn show_header(ui: &mut egui::Ui, title: &str) -> ToolbarAction {
    let mut action = ToolbarAction::None;
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.button("← Back to Home").clicked() {
            action = ToolbarAction::BackHome;
        }

        ui.separator();

        ui.heading(egui::RichText::new(title).strong());
    });
    action
}

/// Display previous/next buttons around the page position label.
pub fn show_navigation(ui: &mut egui::Ui, view: &PageView<'_>) -> ToolbarAction {
    let mut action = ToolbarAction::None;
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 12.0;

        // Disabled at the boundaries; only click zones add pages implicitly
        if ui
            .add_enabled(view.can_go_previous, egui::Button::new("← Previous Page"))
            .clicked()
        {
            action = ToolbarAction::Previous;
        }

        ui.separator();
        ui.label(view.position_label());
        if ui.button("+ Add New Page").clicked() {
            action = ToolbarAction::AddPage;
        }
        ui.separator();

        if ui
            .add_enabled(view.can_go_next, egui::Button::new("Next Page →"))
            .clicked()
        {
            action = ToolbarAction::Next;
        }
    });
    action
}
