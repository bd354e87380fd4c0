// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The Memory Chapter
//!
//! A scrapbook editor: named books of pages, each page holding a photo,
//! a decorative frame and freely placed emoji stickers.

mod app;
mod config;
mod editor;
mod io;
mod models;
mod repository;
mod store;
mod ui;
mod util;

use anyhow::Result;
use app::ScrapbookApp;
use config::AppConfig;
use repository::BookRepository;
use store::{file::FileStore, PersistentStore};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = AppConfig::default();
    log::info!("Using data directory {}", config.data_dir.display());

    let store = PersistentStore::new(Box::new(FileStore::new(&config.data_dir)));
    let repo = BookRepository::open(store, config.books_key.clone());

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.inner_size)
            .with_min_inner_size(config.min_inner_size)
            .with_title(&config.window_title)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        &config.window_title,
        options,
        Box::new(|_cc| Ok(Box::new(ScrapbookApp::new(repo)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
