// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::enum_variant_names)]
// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]
#![cfg_attr(test, allow(unused_variables))]

//! # PDF Highlight
//!
//! Search-term highlighting for the text layers of rendered PDF pages.
//!
//! A PDF renderer exposes each page's text as a sequence of positioned runs
//! ("fragments") whose boundaries follow the document's drawing operations,
//! not its words. Finding a term is easy on the joined page text; marking it
//! means mapping the flat match back onto those fragments.
//!
//! ## Core Features
//!
//! - **Fragment indexing**: prefix-sum offset table over the page's runs
//! - **Literal matching**: first occurrence, exact and case-sensitive
//! - **Highlight reconciliation**: per-fragment set / clear / keep decisions
//! - **Renderer-agnostic**: any fragment handle implementing [`layout::HighlightTarget`]
//! - **Text-layer dumps**: JSON in, JSON out, with a command-line driver
//!
//! ## Quick Start
//!
//! ```
//! use pdf_highlight::config::HighlightConfig;
//! use pdf_highlight::document::TextLayerDocument;
//! use pdf_highlight::layout::TextFragment;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut doc = TextLayerDocument::with_page_count(&HighlightConfig::default(), 1)?;
//!
//! // The renderer reports page 0's text layer as three runs
//! let outcome = doc.on_text_layer_rendered(
//!     0,
//!     vec![
//!         TextFragment::new(0, "Nulla "),
//!         TextFragment::new(1, "lig"),
//!         TextFragment::new(2, "ula est"),
//!     ],
//! )?;
//!
//! println!("match {:?} in fragments {:?}", outcome.match_range, outcome.matched_fragments);
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Page-space geometry
pub mod geometry;

/// Highlight colors and slot states
pub mod annotation_types;

// Rendered text-layer model
pub mod layout;

// Offset reconciliation and search
pub mod search;

// Document-level text layers
pub mod document;

// Re-exports
pub use config::{HighlightConfig, DEFAULT_SEARCH_TERM};
pub use document::TextLayerDocument;
pub use error::{Error, Result};
