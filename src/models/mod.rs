// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for books, pages and stickers.

pub mod book;
pub mod catalog;
pub mod id;
pub mod library;
