// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Page canvas.
//!
//! Paints the current page (photo or upload area, frame, stickers,
//! navigation hints) and turns pointer input into a [`PageAction`].

use crate::editor::drag::StickerHit;
use crate::editor::navigator::ClickTarget;
use crate::editor::view::PageView;
use crate::io::photo::PhotoFile;
use crate::models::book::Frame;
use crate::models::id::StickerId;
use crate::util::geometry::{PageRect, PixelPoint};
use std::time::Instant;

const PAGE_ASPECT: f32 = 4.0 / 3.0;
const MAX_PAGE_WIDTH: f32 = 760.0;
const STICKER_SIZE: f32 = 44.0;
const DELETE_SIZE: f32 = 16.0;
const FLIP_FLASH_SECS: f32 = 0.6;

/// Result of page interaction.
pub enum PageAction {
    None,
    Clicked { target: ClickTarget, screen_x: f64 },
    PickPhoto,
    DroppedPhoto(PhotoFile),
    StartDrag {
        sticker: StickerId,
        hit: StickerHit,
        pointer: PixelPoint,
    },
    DragTo(PixelPoint),
    EndDrag,
    DeleteSticker(StickerId),
}

/// Interaction state the canvas needs from the editor.
pub struct PageInteraction {
    pub capture_attached: bool,
    pub dragging: Option<StickerId>,
    pub turned_at: Option<Instant>,
}

/// Display the page and handle pointer interactions. Also returns the
/// measured page rectangle.
pub fn show(
    ui: &mut egui::Ui,
    view: &PageView<'_>,
    photo: Option<&egui::TextureHandle>,
    interaction: &PageInteraction,
) -> (PageAction, Option<PageRect>) {
    let mut action = PageAction::None;

    // Fit a 4:3 page into the available space
    let available = ui.available_size();
    let width = available.x.min(MAX_PAGE_WIDTH).min(available.y * PAGE_ASPECT).max(1.0);
    let size = egui::vec2(width, width / PAGE_ASPECT);
    let (page_rect, page_response) = ui.allocate_exact_size(size, egui::Sense::click());

    let painter = ui.painter_at(page_rect);
    painter.rect(
        page_rect,
        egui::Rounding::same(16.0),
        egui::Color32::from_rgb(255, 250, 240),
        egui::Stroke::new(3.0, egui::Color32::from_rgb(255, 182, 193)),
    );

    // Photo slot
    let content_rect = page_rect.shrink2(egui::vec2(width * 0.12, size.y * 0.14));
    let photo_rect = match photo {
        Some(texture) => fit_rect(content_rect, texture.size_vec2()),
        None => content_rect,
    };
    let photo_response = ui.interact(photo_rect, ui.id().with("page-photo"), egui::Sense::click());
    let file_hovering = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());

    if let Some(texture) = photo {
        painter.image(
            texture.id(),
            photo_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
        draw_frame(&painter, photo_rect, view.frame);
    } else {
        draw_upload_area(&painter, photo_rect, file_hovering || photo_response.hovered());
    }
    if photo_response.clicked() {
        action = PageAction::PickPhoto;
    }

    if let Some(file) = ui
        .ctx()
        .input(|i| i.raw.dropped_files.first().and_then(PhotoFile::from_dropped))
    {
        action = PageAction::DroppedPhoto(file);
    }

    // Navigation hints and page badge
    let hint_font = egui::FontId::proportional(28.0);
    let hint_color = egui::Color32::from_rgba_unmultiplied(255, 105, 180, 160);
    if view.show_back_hint {
        painter.text(
            egui::pos2(page_rect.left() + 24.0, page_rect.center().y),
            egui::Align2::CENTER_CENTER,
            "←",
            hint_font.clone(),
            hint_color,
        );
    }
    painter.text(
        egui::pos2(page_rect.right() - 24.0, page_rect.center().y),
        egui::Align2::CENTER_CENTER,
        view.next_hint.symbol(),
        hint_font,
        hint_color,
    );

    let flash = interaction
        .turned_at
        .map(|t| t.elapsed().as_secs_f32())
        .filter(|elapsed| *elapsed < FLIP_FLASH_SECS);
    let badge_color = match flash {
        Some(elapsed) => {
            ui.ctx().request_repaint();
            let t = elapsed / FLIP_FLASH_SECS;
            egui::Color32::from_rgb(255, (105.0 + 100.0 * t) as u8, 180)
        }
        None => egui::Color32::from_rgb(255, 105, 180),
    };
    painter.text(
        egui::pos2(page_rect.center().x, page_rect.top() + 18.0),
        egui::Align2::CENTER_CENTER,
        view.badge(),
        egui::FontId::proportional(16.0),
        badge_color,
    );

    // Stickers
    let measured = PageRect::from_egui(page_rect);
    let mut sticker_rects = Vec::with_capacity(view.page.stickers.len());
    if let Some(rect) = measured {
        for sticker in &view.page.stickers {
            let center = rect.percent_to_screen(sticker.x, sticker.y);
            let body_rect = egui::Rect::from_center_size(center, egui::vec2(STICKER_SIZE, STICKER_SIZE));
            let delete_rect = delete_control_rect(center);
            sticker_rects.push(body_rect);

            let body = ui.interact(
                body_rect,
                ui.id().with(("sticker", sticker.id)),
                egui::Sense::click_and_drag(),
            );
            let delete = ui.interact(
                delete_rect,
                ui.id().with(("sticker-delete", sticker.id)),
                egui::Sense::click(),
            );

            let is_dragged = interaction.dragging == Some(sticker.id);
            let scale = if is_dragged || body.hovered() { 1.15 } else { 1.0 };
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                &sticker.emoji,
                egui::FontId::proportional(32.0 * scale),
                egui::Color32::WHITE,
            );

            if body.hovered() || delete.hovered() || is_dragged {
                painter.circle_filled(delete_rect.center(), DELETE_SIZE / 2.0, egui::Color32::from_rgb(255, 99, 132));
                painter.text(
                    delete_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "×",
                    egui::FontId::proportional(12.0),
                    egui::Color32::WHITE,
                );
            }

            if delete.clicked() {
                action = PageAction::DeleteSticker(sticker.id);
            } else if body.drag_started() && !interaction.capture_attached {
                if let Some(origin) = ui.ctx().input(|i| i.pointer.press_origin()) {
                    let hit = if delete_rect.contains(origin) {
                        StickerHit::DeleteControl
                    } else {
                        StickerHit::Body
                    };
                    action = PageAction::StartDrag {
                        sticker: sticker.id,
                        hit,
                        pointer: origin.into(),
                    };
                }
            }
        }
    }

    // While a drag is captured, follow the pointer across the whole surface
    if interaction.capture_attached {
        let (latest, moved, released) = ui.ctx().input(|i| {
            (
                i.pointer.latest_pos(),
                i.pointer.delta() != egui::Vec2::ZERO,
                i.pointer.any_released() || !i.pointer.any_down(),
            )
        });
        if released {
            action = PageAction::EndDrag;
        } else if let (true, Some(pos)) = (moved, latest) {
            action = PageAction::DragTo(pos.into());
        }
    } else if page_response.clicked() {
        if let Some(pos) = page_response.interact_pointer_pos() {
            let target = if photo_rect.contains(pos) {
                if view.page.has_image() {
                    ClickTarget::Photo
                } else {
                    ClickTarget::UploadArea
                }
            } else if sticker_rects.iter().any(|r| r.contains(pos)) {
                ClickTarget::Sticker
            } else {
                ClickTarget::Surface
            };
            action = PageAction::Clicked {
                target,
                screen_x: pos.x as f64,
            };
        }
    }

    (action, measured)
}

/// The "×" control of a sticker centred at `center`, on its top-right corner.
pub(crate) fn delete_control_rect(center: egui::Pos2) -> egui::Rect {
    let corner = center + egui::vec2(STICKER_SIZE / 2.0 - 4.0, -STICKER_SIZE / 2.0 + 4.0);
    egui::Rect::from_center_size(corner, egui::vec2(DELETE_SIZE, DELETE_SIZE))
}

/// Largest rect with the image's aspect ratio that fits inside `bounds`.
fn fit_rect(bounds: egui::Rect, image_size: egui::Vec2) -> egui::Rect {
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return bounds;
    }
    let img_aspect = image_size.x / image_size.y;
    let bounds_aspect = bounds.width() / bounds.height();

    let (display_width, display_height) = if img_aspect > bounds_aspect {
        // Image is wider - fit to width
        (bounds.width(), bounds.width() / img_aspect)
    } else {
        // Image is taller - fit to height
        (bounds.height() * img_aspect, bounds.height())
    };
    egui::Rect::from_center_size(bounds.center(), egui::vec2(display_width, display_height))
}

fn draw_upload_area(painter: &egui::Painter, rect: egui::Rect, highlighted: bool) {
    let (fill, stroke) = if highlighted {
        (egui::Color32::from_rgb(255, 228, 240), egui::Color32::from_rgb(255, 105, 180))
    } else {
        (egui::Color32::from_rgb(255, 240, 245), egui::Color32::from_rgb(255, 182, 193))
    };
    painter.rect(rect, egui::Rounding::same(12.0), fill, egui::Stroke::new(2.0, stroke));

    let center = rect.center();
    let text_color = egui::Color32::from_rgb(199, 21, 133);
    painter.text(
        center - egui::vec2(0.0, 36.0),
        egui::Align2::CENTER_CENTER,
        "📷",
        egui::FontId::proportional(40.0),
        text_color,
    );
    painter.text(
        center + egui::vec2(0.0, 8.0),
        egui::Align2::CENTER_CENTER,
        "Add Your Photo Here!",
        egui::FontId::proportional(20.0),
        text_color,
    );
    painter.text(
        center + egui::vec2(0.0, 34.0),
        egui::Align2::CENTER_CENTER,
        "Click or drag & drop an image",
        egui::FontId::proportional(13.0),
        egui::Color32::from_gray(140),
    );
}

fn frame_color(frame: Frame) -> Option<egui::Color32> {
    match frame {
        Frame::None => None,
        Frame::Heart => Some(egui::Color32::from_rgb(255, 105, 180)),
        Frame::Star => Some(egui::Color32::from_rgb(255, 215, 0)),
        Frame::Rainbow => Some(egui::Color32::from_rgb(255, 0, 0)),
        Frame::Flower => Some(egui::Color32::from_rgb(255, 182, 193)),
        Frame::Party => Some(egui::Color32::from_rgb(147, 112, 219)),
    }
}

/// Draw the decorative frame around a photo.
fn draw_frame(painter: &egui::Painter, rect: egui::Rect, frame: Frame) {
    let Some(color) = frame_color(frame) else {
        return;
    };

    if frame == Frame::Rainbow {
        let bands = [
            egui::Color32::from_rgb(255, 0, 0),
            egui::Color32::from_rgb(255, 165, 0),
            egui::Color32::from_rgb(255, 255, 0),
            egui::Color32::from_rgb(0, 200, 0),
            egui::Color32::from_rgb(0, 0, 255),
            egui::Color32::from_rgb(128, 0, 128),
        ];
        for (i, band) in bands.iter().enumerate() {
            painter.rect_stroke(
                rect.expand(2.0 + i as f32 * 2.0),
                egui::Rounding::same(8.0),
                egui::Stroke::new(2.0, *band),
            );
        }
    } else {
        painter.rect_stroke(rect.expand(4.0), egui::Rounding::same(8.0), egui::Stroke::new(6.0, color));
    }

    for corner in [rect.left_top(), rect.right_top(), rect.left_bottom(), rect.right_bottom()] {
        painter.text(
            corner,
            egui::Align2::CENTER_CENTER,
            frame.emoji(),
            egui::FontId::proportional(22.0),
            color,
        );
    }
}
