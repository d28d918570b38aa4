//! Text fragments as delivered by a page's rendered text layer.
//!
//! A renderer lays a page's text out as a sequence of positioned runs. Each run
//! becomes one fragment: the smallest unit of text that can be marked. Run
//! boundaries follow the document's drawing operations, not words, so a
//! single word may be split across several fragments.

use crate::annotation_types::{HighlightColor, HighlightStyle};
use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// Capability a fragment handle exposes to the highlighting core.
///
/// The core reads the fragment's text and writes its highlight slot through
/// this trait only, so it can drive any renderer's fragment objects, not just
/// [`TextFragment`].
pub trait HighlightTarget {
    /// The fragment's text, or `None` if the renderer has none for it.
    fn text(&self) -> Option<&str>;

    /// Current state of the highlight slot.
    fn highlight(&self) -> HighlightStyle;

    /// Paint the fragment with `color`.
    fn set_highlight(&mut self, color: HighlightColor);

    /// Reset the slot to "no highlight".
    fn clear_highlight(&mut self);

    /// Page-space rectangle of the run, when known.
    fn bbox(&self) -> Option<Rect> {
        None
    }

    /// Length of the text in bytes; missing text counts as empty.
    fn text_len(&self) -> usize {
        self.text().map_or(0, str::len)
    }
}

/// A positioned run of rendered text on one page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextFragment {
    /// Run text; `None` when the renderer produced no text content
    #[serde(default)]
    pub text: Option<String>,
    /// Position in the page's fragment sequence (0-based)
    #[serde(default)]
    pub order: usize,
    /// Bounding box of the run in page space
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Rect>,
    /// Presentation slot written by the highlighter
    #[serde(default)]
    pub highlight: HighlightStyle,
}

impl TextFragment {
    /// Create an unhighlighted fragment.
    pub fn new(order: usize, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            order,
            bbox: None,
            highlight: HighlightStyle::None,
        }
    }

    /// Create a fragment whose text content is missing.
    pub fn missing(order: usize) -> Self {
        Self {
            order,
            ..Default::default()
        }
    }

    /// Attach the run's bounding box.
    pub fn with_bbox(mut self, bbox: Rect) -> Self {
        self.bbox = Some(bbox);
        self
    }

    /// Start with the slot already painted (e.g. left over from a prior pass).
    pub fn with_highlight(mut self, style: HighlightStyle) -> Self {
        self.highlight = style;
        self
    }

    /// Whether the slot currently holds a color.
    pub fn is_highlighted(&self) -> bool {
        self.highlight.is_highlighted()
    }
}

impl HighlightTarget for TextFragment {
    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn highlight(&self) -> HighlightStyle {
        self.highlight
    }

    fn set_highlight(&mut self, color: HighlightColor) {
        self.highlight = HighlightStyle::Color(color);
    }

    fn clear_highlight(&mut self) {
        self.highlight = HighlightStyle::None;
    }

    fn bbox(&self) -> Option<Rect> {
        self.bbox
    }
}
