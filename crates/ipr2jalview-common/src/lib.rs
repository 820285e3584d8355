//! ipr2jalview Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, the feature conversion pipeline, and error handling for
//! ipr2jalview.
//!
//! # Overview
//!
//! - **Types**: serde models of the InterPro `entry/all/protein` response
//! - **Jalview**: feature extraction, per-type colour allocation and the
//!   Jalview features file writer
//! - **Error Handling**: Custom error types and result types
//! - **Logging**: `tracing` subscriber setup shared by the binaries
//!
//! # Example
//!
//! ```no_run
//! use ipr2jalview_common::jalview::{build, group_records, Palette};
//! use ipr2jalview_common::types::AnnotationPage;
//!
//! fn convert(json: &str) -> ipr2jalview_common::Result<String> {
//!     let page = AnnotationPage::from_json(json)?;
//!     let groups = group_records(&page.results, None, None);
//!     let file = build(&groups, Palette::default())?;
//!     Ok(file.to_string())
//! }
//! ```

pub mod error;
pub mod jalview;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{IprError, Result};
