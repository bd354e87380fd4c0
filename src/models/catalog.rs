// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Static sticker and frame catalogs.

use super::book::Frame;

/// A named group of stickers shown as one palette tab.
pub struct StickerCategory {
    pub icon: &'static str,
    pub name: &'static str,
    pub stickers: &'static [&'static str],
}

pub const STICKER_CATEGORIES: &[StickerCategory] = &[
    StickerCategory {
        icon: "💖",
        name: "Hearts",
        stickers: &["💖", "💕", "💗", "💓", "💝", "❤️", "🧡", "💛", "💚", "💙", "💜"],
    },
    StickerCategory {
        icon: "🐾",
        name: "Animals",
        stickers: &["🐱", "🐶", "🐰", "🦄", "🐸", "🐻", "🐼", "🐨", "🦊"],
    },
    StickerCategory {
        icon: "🍕",
        name: "Food",
        stickers: &["🍕", "🎂", "🍦", "🍪", "🍎", "🍌", "🍓", "🍒", "🍩"],
    },
    StickerCategory {
        icon: "🌈",
        name: "Nature",
        stickers: &["🌈", "⭐", "🌸", "🌻", "🌺", "🦋", "🌙", "☀️"],
    },
    StickerCategory {
        icon: "😊",
        name: "Faces",
        stickers: &["😊", "😍", "😎", "😂", "🤗", "😘", "🥰", "🤩"],
    },
    StickerCategory {
        icon: "🎉",
        name: "Party",
        stickers: &["🎉", "🎈", "🎁", "🎊", "🎀", "🎵", "🎶"],
    },
];

/// Emoji floating in the background of both screens.
pub const FLOATING_DECORATIONS: [&str; 3] = ["🌈", "⭐", "🎈"];

impl Frame {
    pub fn label(self) -> &'static str {
        match self {
            Frame::None => "No Frame",
            Frame::Heart => "Heart",
            Frame::Star => "Star",
            Frame::Rainbow => "Rainbow",
            Frame::Flower => "Flower",
            Frame::Party => "Party",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Frame::None => "⬜",
            Frame::Heart => "💖",
            Frame::Star => "⭐",
            Frame::Rainbow => "🌈",
            Frame::Flower => "🌸",
            Frame::Party => "🎉",
        }
    }
}

/// Whether `emoji` appears in any sticker category.
pub fn is_known_sticker(emoji: &str) -> bool {
    STICKER_CATEGORIES
        .iter()
        .any(|category| category.stickers.contains(&emoji))
}
