// SPDX-License-Identifier: MPL-2.0
//! Domain layer - the records exchanged with the analysis service.
//!
//! Types here carry no UI or transport concerns. The only external dependency
//! is `serde`, used to decode the service's JSON payload.
//!
//! # Modules
//!
//! - [`company`]: [`CompanyInfo`](company::CompanyInfo) with its
//!   [`BasicInfo`](company::BasicInfo) and [`Analysis`](company::Analysis)
//!   sections, and the field identifiers used to render them.

pub mod company;

pub use company::{Analysis, AnalysisField, BasicField, BasicInfo, CompanyInfo};
