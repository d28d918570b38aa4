//! Search-term highlighting for rendered text layers.
//!
//! A page's text layer arrives as an ordered sequence of fragments whose
//! boundaries ignore words. One reconciliation pass per page:
//! - [`FragmentIndexer`] joins the fragment texts and records each fragment's offsets
//! - [`SubstringMatcher`] finds the first literal occurrence of the search term
//! - [`HighlightReconciler`] maps the match back onto fragments and writes their highlight slots
//!
//! [`TextLayerSearcher`] runs the three in sequence.
//!
//! ## Example
//!
//! ```
//! use pdf_highlight::config::HighlightConfig;
//! use pdf_highlight::layout::TextLayer;
//! use pdf_highlight::search::TextLayerSearcher;
//!
//! let searcher = TextLayerSearcher::new(&HighlightConfig::default())?;
//! let mut layer = TextLayer::from_texts(0, ["foo ", "ligula", " bar"]);
//!
//! let outcome = searcher.highlight_layer(&mut layer);
//! if let Some(m) = outcome.match_range {
//!     println!("Found '{}' on page {} at {}..{}", searcher.search_term(), outcome.page, m.start, m.end());
//! }
//! # Ok::<(), pdf_highlight::error::Error>(())
//! ```

mod fragment_index;
mod matcher;
mod reconciler;
mod text_search;

pub use fragment_index::{FragmentIndex, FragmentIndexer, OffsetEntry};
pub use matcher::{MatchRange, SubstringMatcher};
pub use reconciler::{FragmentDecision, HighlightReconciler, ReconcileSummary};
pub use text_search::{PassOutcome, TextLayerSearcher};
