//! Rendered text-layer model.
//!
//! This module describes what the rendering collaborator hands over once a
//! page's text layer is stable:
//! - [`TextFragment`]: one positioned run with a writable highlight slot
//! - [`HighlightTarget`]: the read-text / write-highlight capability the core needs
//! - [`TextLayer`]: a page's ordered fragment sequence

pub mod text_fragment;
pub mod text_layer;

// Re-export main types
pub use text_fragment::{HighlightTarget, TextFragment};
pub use text_layer::TextLayer;
