// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Photo intake.
//!
//! Photos arrive as file handles from the file dialog or from files dropped
//! onto the window. Only the declared media type is checked here; encoding
//! to a data URI happens on a background thread and the result is collected
//! by polling from the UI loop.

use crate::models::id::BookId;
use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// Where the bytes of a [`PhotoFile`] live.
#[derive(Debug, Clone)]
enum PhotoSource {
    Path(PathBuf),
    Bytes(Arc<[u8]>),
}

/// A file-like handle: name, declared media type and a way to its bytes.
#[derive(Debug, Clone)]
pub struct PhotoFile {
    pub name: String,
    pub media_type: String,
    source: PhotoSource,
}

impl PhotoFile {
    /// Handle for a file on disk, typed from its extension.
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            media_type: media_type_for_name(&path),
            name,
            source: PhotoSource::Path(path),
        }
    }

    pub fn from_bytes(name: impl Into<String>, media_type: impl Into<String>, bytes: Arc<[u8]>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            source: PhotoSource::Bytes(bytes),
        }
    }

    /// Handle for a file dropped onto the window. Platforms that do not
    /// report a media type fall back to the file extension.
    pub fn from_dropped(file: &egui::DroppedFile) -> Option<Self> {
        let declared = |name: &str| {
            if file.mime.is_empty() {
                media_type_for_name(Path::new(name))
            } else {
                file.mime.clone()
            }
        };

        if let Some(bytes) = &file.bytes {
            let media_type = declared(&file.name);
            return Some(Self::from_bytes(file.name.clone(), media_type, bytes.clone()));
        }
        let path = file.path.clone()?;
        let mut photo = Self::from_path(path);
        if !file.mime.is_empty() {
            photo.media_type = file.mime.clone();
        }
        Some(photo)
    }

    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }

    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        match &self.source {
            PhotoSource::Path(path) => {
                std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
            }
            PhotoSource::Bytes(bytes) => Ok(bytes.to_vec()),
        }
    }
}

/// Media type implied by a file name's extension.
pub fn media_type_for_name(path: &Path) -> String {
    image::ImageFormat::from_path(path)
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|_| UNKNOWN_MEDIA_TYPE.to_string())
}

pub fn to_data_uri(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", media_type, STANDARD.encode(bytes))
}

/// Page a photo was requested for, fixed when the request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoTarget {
    pub book: BookId,
    pub page_index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPhoto {
    pub target: PhotoTarget,
    pub data_uri: String,
}

/// Background photo encoder.
pub struct PhotoDecoder {
    sender: Sender<(PhotoTarget, Result<String>)>,
    receiver: Receiver<(PhotoTarget, Result<String>)>,
    in_flight: usize,
}

impl Default for PhotoDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PhotoDecoder {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            sender,
            receiver,
            in_flight: 0,
        }
    }

    /// Start encoding `file` for `target`. Files that are not declared as
    /// images are ignored and `false` is returned.
    pub fn submit(&mut self, file: PhotoFile, target: PhotoTarget) -> bool {
        if !file.is_image() {
            log::warn!("Ignoring '{}' ({}): not an image", file.name, file.media_type);
            return false;
        }

        let sender = self.sender.clone();
        self.in_flight += 1;
        std::thread::spawn(move || {
            let result = file
                .read_bytes()
                .map(|bytes| to_data_uri(&file.media_type, &bytes));
            let _ = sender.send((target, result));
        });
        true
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    /// Collect every photo finished since the last poll.
    pub fn poll(&mut self) -> Vec<DecodedPhoto> {
        let mut done = Vec::new();
        while let Ok((target, result)) = self.receiver.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            match result {
                Ok(data_uri) => done.push(DecodedPhoto { target, data_uri }),
                Err(e) => log::error!("Failed to load photo for page {}: {:#}", target.page_index + 1, e),
            }
        }
        done
    }
}
