// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Photo display.
//!
//! Pages store their photo as a data URI. This module turns those URIs back
//! into pixels and keeps one egui texture per page so photos are only
//! decoded when they change.

use crate::models::book::Page;
use crate::models::id::PageId;
use anyhow::{anyhow, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Split a base64 data URI into its media type and decoded bytes.
pub fn decode_data_uri(uri: &str) -> Result<(String, Vec<u8>)> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| anyhow!("not a data URI"))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| anyhow!("data URI has no payload"))?;
    let media_type = header
        .strip_suffix(";base64")
        .ok_or_else(|| anyhow!("data URI is not base64 encoded"))?;
    let bytes = STANDARD
        .decode(payload)
        .context("data URI payload is not valid base64")?;
    Ok((media_type.to_string(), bytes))
}

/// Decode a photo data URI into an egui image.
pub fn load_color_image(uri: &str) -> Result<egui::ColorImage> {
    let (_, bytes) = decode_data_uri(uri)?;
    let img = image::load_from_memory(&bytes).context("Failed to decode photo")?;
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

fn fingerprint(uri: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    uri.hash(&mut hasher);
    hasher.finish()
}

/// Per-page texture cache.
#[derive(Default)]
pub struct PhotoTextures {
    textures: HashMap<PageId, (u64, Option<egui::TextureHandle>)>,
}

impl PhotoTextures {
    /// Texture for the page photo, decoding it on first use or after it
    /// changed. `None` when the page has no photo or it cannot be decoded.
    pub fn get(&mut self, ctx: &egui::Context, page: &Page) -> Option<egui::TextureHandle> {
        let uri = page.image.as_deref()?;
        let key = fingerprint(uri);

        if let Some((cached, texture)) = self.textures.get(&page.id) {
            if *cached == key {
                return texture.clone();
            }
        }

        let texture = match load_color_image(uri) {
            Ok(color_image) => Some(ctx.load_texture(
                format!("page-photo-{}", page.id),
                color_image,
                egui::TextureOptions::LINEAR,
            )),
            Err(e) => {
                log::error!("Cannot display photo of page {}: {:#}", page.id, e);
                None
            }
        };
        self.textures.insert(page.id, (key, texture.clone()));
        texture
    }

    /// Forget every cached texture, e.g. when leaving a book.
    pub fn clear(&mut self) {
        self.textures.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::photo::to_data_uri;
    use std::io::Cursor;

    fn png_bytes() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([255, 0, 0, 255]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn data_uri_round_trips_bytes() {
        let uri = to_data_uri("image/png", b"\x89PNG");
        let (media_type, bytes) = decode_data_uri(&uri).unwrap();
        assert_eq!(media_type, "image/png");
        assert_eq!(bytes, b"\x89PNG");
    }

    #[test]
    fn malformed_uris_are_rejected() {
        assert!(decode_data_uri("http://example.com/a.png").is_err());
        assert!(decode_data_uri("data:image/png;base64").is_err());
        assert!(decode_data_uri("data:image/png,AAAA").is_err());
        assert!(decode_data_uri("data:image/png;base64,@@@").is_err());
    }

    #[test]
    fn png_photo_decodes_to_pixels() {
        let uri = to_data_uri("image/png", &png_bytes());
        let color_image = load_color_image(&uri).unwrap();
        assert_eq!(color_image.size, [3, 2]);
        assert_eq!(color_image.pixels[0], egui::Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn garbage_image_fails_to_decode() {
        let uri = to_data_uri("image/png", b"not a png");
        assert!(load_color_image(&uri).is_err());
    }
}
