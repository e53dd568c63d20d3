// SPDX-License-Identifier: MPL-2.0
//! `exif_lens` is a drag-and-drop EXIF metadata viewer built with the Iced
//! GUI framework.
//!
//! Drop an image on the window (or pick one via the system dialog) and its
//! embedded EXIF tags are decoded and shown in a two-column table. EXIF
//! binary parsing is delegated to `kamadak-exif`; this crate owns the
//! validation, the selection state machine, and the rendering.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
