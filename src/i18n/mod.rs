// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the page layer.
//!
//! This module provides localization for the few strings the layer produces
//! itself (clipboard feedback). Messages passed to `showNotification` by page
//! scripts are shown verbatim.
//!
//! # Features
//!
//! - Locale resolution from config, then the page's `lang` attribute
//! - `.ftl` translation files embedded at compile time
//! - Fallback to `en-US` when translations are missing

pub mod fluent;
