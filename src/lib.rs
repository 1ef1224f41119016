// SPDX-License-Identifier: MPL-2.0
//! `company_analyzer` is a desktop front end for a company website analysis
//! service, built with the Iced GUI framework.
//!
//! The user enters a company's website URL; the analysis service scrapes it
//! and answers with basic company facts and AI-written analyses, which are
//! shown in a tabbed panel. Outcomes are reported through toast notifications.

pub mod app;
pub mod client;
pub mod domain;
pub mod error;
pub mod ui;

pub use app::config;
