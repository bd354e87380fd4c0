// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application settings.

use directories::ProjectDirs;
use std::path::PathBuf;

/// Storage key holding the book collection.
pub const BOOKS_KEY: &str = "scrapbooks";

pub const APP_NAME: &str = "The Memory Chapter";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub window_title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    pub books_key: String,
    pub data_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: APP_NAME.to_string(),
            inner_size: [1280.0, 800.0],
            min_inner_size: [800.0, 600.0],
            books_key: BOOKS_KEY.to_string(),
            data_dir: default_data_dir(),
        }
    }
}

/// Per-user data directory, or `.memory-chapter` in the working directory
/// when the platform reports no home directory.
fn default_data_dir() -> PathBuf {
    ProjectDirs::from("", "", "memory-chapter")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".memory-chapter"))
}
