// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the scrapbook application.

pub mod home;
pub mod page;
pub mod palette;
pub mod toolbar;

use crate::models::catalog::FLOATING_DECORATIONS;

/// Paint the slowly bobbing background emoji.
pub fn floating_decorations(ctx: &egui::Context) {
    let screen = ctx.screen_rect();
    let time = ctx.input(|i| i.time) as f32;
    let painter = ctx.layer_painter(egui::LayerId::background());

    let anchors = [
        egui::pos2(0.08, 0.2),
        egui::pos2(0.92, 0.3),
        egui::pos2(0.12, 0.85),
    ];
    for (index, (emoji, anchor)) in FLOATING_DECORATIONS.iter().zip(anchors).enumerate() {
        let bob = ((time + index as f32 * 0.5) * 1.5).sin() * 10.0;
        let pos = egui::pos2(
            screen.left() + anchor.x * screen.width(),
            screen.top() + anchor.y * screen.height() + bob,
        );
        painter.text(
            pos,
            egui::Align2::CENTER_CENTER,
            *emoji,
            egui::FontId::proportional(36.0),
            egui::Color32::from_rgba_unmultiplied(255, 182, 193, 110),
        );
    }
    ctx.request_repaint_after(std::time::Duration::from_millis(50));
}
