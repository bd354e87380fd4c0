// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Sticker drag-positioning state machine.
//!
//! A drag starts on a sticker body, then follows the pointer anywhere on the
//! interaction surface until the pointer is released. Entering the dragging
//! state attaches exactly one listener set to the surface; every way out of
//! it (release, a new drag, dropping the controller) detaches that set.

use crate::models::book::{Sticker, StickerPatch};
use crate::models::id::StickerId;
use crate::util::geometry::{clamp_drag_percent, PageRect, PixelPoint};

/// Surface-wide pointer listeners used while a sticker is being dragged.
pub trait DragSurface {
    fn attach(&mut self);
    fn detach(&mut self);
}

/// Listener set of the egui page surface. While attached, the page view
/// routes every pointer move and release to the controller, wherever the
/// pointer is.
#[derive(Debug, Default)]
pub struct PointerCapture {
    attached: bool,
}

impl PointerCapture {
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

impl DragSurface for PointerCapture {
    fn attach(&mut self) {
        debug_assert!(!self.attached, "pointer capture attached twice");
        self.attached = true;
    }

    fn detach(&mut self) {
        debug_assert!(self.attached, "pointer capture detached while idle");
        self.attached = false;
    }
}

/// Part of a sticker that received the pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickerHit {
    Body,
    DeleteControl,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging {
        sticker: StickerId,
        /// Pointer position minus the sticker's pixel offset in the page.
        anchor_offset: PixelPoint,
    },
}

/// New clamped position for a dragged sticker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickerMove {
    pub sticker: StickerId,
    pub x: f64,
    pub y: f64,
}

impl StickerMove {
    pub fn patch(&self) -> StickerPatch {
        StickerPatch::position(self.x, self.y)
    }
}

pub struct StickerDragController<S: DragSurface> {
    state: DragState,
    surface: S,
}

impl<S: DragSurface> StickerDragController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            state: DragState::Idle,
            surface,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn dragging_sticker(&self) -> Option<StickerId> {
        match self.state {
            DragState::Dragging { sticker, .. } => Some(sticker),
            DragState::Idle => None,
        }
    }

    /// Begin dragging `sticker`. Pointer-downs on the delete control and
    /// pointer-downs before the page has been measured are ignored.
    pub fn start(
        &mut self,
        sticker: &Sticker,
        hit: StickerHit,
        pointer: PixelPoint,
        rect: Option<PageRect>,
    ) -> bool {
        if hit == StickerHit::DeleteControl {
            return false;
        }
        let Some(rect) = rect else {
            return false;
        };

        self.end();

        let offset = rect.percent_to_offset(sticker.x, sticker.y);
        self.state = DragState::Dragging {
            sticker: sticker.id,
            anchor_offset: PixelPoint::new(pointer.x - offset.x, pointer.y - offset.y),
        };
        self.surface.attach();
        log::debug!("Started dragging sticker {}", sticker.id);
        true
    }

    /// Follow the pointer. Returns the clamped position to store, or `None`
    /// when idle or when the page rectangle is unknown.
    pub fn drag_to(&mut self, pointer: PixelPoint, rect: Option<PageRect>) -> Option<StickerMove> {
        let DragState::Dragging {
            sticker,
            anchor_offset,
        } = self.state
        else {
            return None;
        };
        let rect = rect?;

        let offset = PixelPoint::new(pointer.x - anchor_offset.x, pointer.y - anchor_offset.y);
        let (x, y) = rect.offset_to_percent(offset);
        Some(StickerMove {
            sticker,
            x: clamp_drag_percent(x),
            y: clamp_drag_percent(y),
        })
    }

    /// Release the current drag, if any.
    pub fn end(&mut self) {
        if let DragState::Dragging { sticker, .. } = self.state {
            self.state = DragState::Idle;
            self.surface.detach();
            log::debug!("Stopped dragging sticker {}", sticker);
        }
    }
}

impl<S: DragSurface> Drop for StickerDragController<S> {
    fn drop(&mut self) {
        self.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct CountingSurface {
        live: Rc<Cell<i32>>,
        attaches: Rc<Cell<u32>>,
    }

    impl DragSurface for CountingSurface {
        fn attach(&mut self) {
            self.live.set(self.live.get() + 1);
            self.attaches.set(self.attaches.get() + 1);
        }

        fn detach(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    fn sticker(x: f64, y: f64) -> Sticker {
        Sticker {
            id: StickerId(9),
            emoji: "💖".to_string(),
            x,
            y,
        }
    }

    fn rect() -> Option<PageRect> {
        PageRect::new(100.0, 50.0, 400.0, 200.0)
    }

    #[test]
    fn drag_follows_pointer_relative_to_grab_point() {
        let mut drag = StickerDragController::new(CountingSurface::default());
        // Sticker at 50%/50% sits 200px/100px into the page.
        assert!(drag.start(&sticker(50.0, 50.0), StickerHit::Body, PixelPoint::new(310.0, 160.0), rect()));

        let moved = drag.drag_to(PixelPoint::new(350.0, 180.0), rect()).unwrap();
        assert_eq!(moved.sticker, StickerId(9));
        assert!((moved.x - 60.0).abs() < 1e-9);
        assert!((moved.y - 60.0).abs() < 1e-9);
    }

    #[test]
    fn positions_are_clamped_per_axis() {
        let mut drag = StickerDragController::new(CountingSurface::default());
        drag.start(&sticker(50.0, 50.0), StickerHit::Body, PixelPoint::new(300.0, 150.0), rect());

        // Raw x would be 120%, raw y would be -10%.
        let moved = drag.drag_to(PixelPoint::new(580.0, 30.0), rect()).unwrap();
        assert_eq!(moved.x, 90.0);
        assert_eq!(moved.y, 5.0);
    }

    #[test]
    fn unknown_rect_ignores_moves() {
        let mut drag = StickerDragController::new(CountingSurface::default());
        drag.start(&sticker(50.0, 50.0), StickerHit::Body, PixelPoint::new(300.0, 150.0), rect());
        assert!(drag.drag_to(PixelPoint::new(320.0, 150.0), None).is_none());
        assert!(drag.dragging_sticker().is_some());
    }

    #[test]
    fn idle_controller_emits_nothing() {
        let mut drag = StickerDragController::new(CountingSurface::default());
        assert!(drag.drag_to(PixelPoint::new(1.0, 1.0), rect()).is_none());
    }

    #[test]
    fn delete_control_never_starts_a_drag() {
        let surface = CountingSurface::default();
        let mut drag = StickerDragController::new(surface.clone());
        let started = drag.start(
            &sticker(50.0, 50.0),
            StickerHit::DeleteControl,
            PixelPoint::new(300.0, 150.0),
            rect(),
        );
        assert!(!started);
        assert_eq!(drag.state(), DragState::Idle);
        assert_eq!(surface.attaches.get(), 0);
    }

    #[test]
    fn repeated_drags_do_not_leak_listeners() {
        let surface = CountingSurface::default();
        let mut drag = StickerDragController::new(surface.clone());
        for _ in 0..3 {
            drag.start(&sticker(30.0, 30.0), StickerHit::Body, PixelPoint::new(200.0, 100.0), rect());
            assert_eq!(surface.live.get(), 1);
            drag.end();
            assert_eq!(surface.live.get(), 0);
        }
        drag.end();
        assert_eq!(surface.live.get(), 0);
        assert_eq!(surface.attaches.get(), 3);
    }

    #[test]
    fn restarting_replaces_previous_listener_set() {
        let surface = CountingSurface::default();
        let mut drag = StickerDragController::new(surface.clone());
        drag.start(&sticker(30.0, 30.0), StickerHit::Body, PixelPoint::new(200.0, 100.0), rect());
        drag.start(&sticker(60.0, 60.0), StickerHit::Body, PixelPoint::new(340.0, 170.0), rect());
        assert_eq!(surface.live.get(), 1);
    }

    #[test]
    fn teardown_while_dragging_detaches() {
        let surface = CountingSurface::default();
        {
            let mut drag = StickerDragController::new(surface.clone());
            drag.start(&sticker(30.0, 30.0), StickerHit::Body, PixelPoint::new(200.0, 100.0), rect());
        }
        assert_eq!(surface.live.get(), 0);
    }

    #[test]
    fn pointer_capture_tracks_attachment() {
        let mut drag = StickerDragController::new(PointerCapture::default());
        drag.start(&sticker(30.0, 30.0), StickerHit::Body, PixelPoint::new(200.0, 100.0), rect());
        assert!(drag.surface().is_attached());
        drag.end();
        assert!(!drag.surface().is_attached());
    }
}
