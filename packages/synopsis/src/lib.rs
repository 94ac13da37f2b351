//! DA Synopsis - Word-level comparison of a draft and an adopted delegated act.
//!
//! This crate reads a CSV of aligned text segments (draft on one side,
//! adopted text on the other) and renders a single self-contained HTML report
//! with a table of contents, section anchors and highlighted word changes.
//!
//! # Example
//!
//! ```
//! use da_synopsis::{render_report, ReportConfig, SegmentPair};
//!
//! let segments = vec![SegmentPair::new("Art1", "1", "shall apply", "Art1", "1", "applies")];
//! let report = render_report(&segments, &ReportConfig::new());
//! assert!(report.html.contains("id=\"Art1\""));
//! assert_eq!(report.summary.blocks, 1);
//! ```
//!
//! # Architecture
//!
//! The generator is organized into several modules:
//!
//! - [`config`]: Configuration constants, identifier patterns and report settings
//! - [`types`]: Core data types (SegmentPair, PositionRef, Identifier)
//! - [`error`]: Error types and Result alias
//! - [`loader`]: CSV loading and null normalization
//! - [`indexer`]: Article and recital index for the table of contents
//! - [`diff`]: Word-level diff and its HTML rendering
//! - [`label`]: "from → to" position labels
//! - [`html`]: Escaping and highlight helpers
//! - [`report`]: Document assembly and output
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod html;
pub mod indexer;
pub mod label;
pub mod loader;
pub mod report;
pub mod types;

// Re-export main functions
pub use loader::load_segments;
pub use report::{render_report, write_report};

// Re-export commonly used items
pub use config::ReportConfig;
pub use error::{Result, SynopsisError};
pub use types::{PositionRef, Segment, SegmentPair};
