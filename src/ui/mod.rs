// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`analyzer`] - URL form, request lifecycle and tabbed result panel
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Presentational pieces of the result panel
//! - [`widgets`] - Canvas widgets (spinner, glyphs)
//! - [`styles`] - Centralized styling (buttons, containers, text input)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`labels`] - User-facing strings
//! - [`notifications`] - Toast notification system for user feedback

pub mod analyzer;
pub mod components;
pub mod design_tokens;
pub mod labels;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod widgets;
