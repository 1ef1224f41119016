// SPDX-License-Identifier: MPL-2.0
//! Presentational pieces of the analyzer page.
//!
//! They hold no state and emit no messages; the page passes in plain values.
//!
//! # Components
//!
//! - [`info_item`] - Label above a value, with a placeholder for empty values
//! - [`analysis_item`] - Titled narrative block with an accent glyph
//! - [`error_banner`] - Inline alert box for the last failure

pub mod analysis_item;
pub mod error_banner;
pub mod info_item;
