//! A page's text layer: the ordered fragment sequence for one rendered page.

use super::text_fragment::{HighlightTarget, TextFragment};
use serde::{Deserialize, Serialize};

/// Ordered text fragments of one rendered page.
///
/// Fragment `order` values are always `0..len`, matching slice position. A
/// re-render replaces the whole sequence; fragments are never reused across
/// renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTextLayer")]
pub struct TextLayer {
    /// Page number (0-indexed)
    pub page_index: usize,
    fragments: Vec<TextFragment>,
}

/// Wire shape of a layer; orders are reassigned on conversion.
#[derive(Deserialize)]
struct RawTextLayer {
    #[serde(default)]
    page_index: usize,
    #[serde(default)]
    fragments: Vec<TextFragment>,
}

impl From<RawTextLayer> for TextLayer {
    fn from(raw: RawTextLayer) -> Self {
        Self::new(raw.page_index, raw.fragments)
    }
}

impl TextLayer {
    /// Create a text layer, renumbering fragments by position.
    pub fn new(page_index: usize, fragments: Vec<TextFragment>) -> Self {
        let mut layer = Self {
            page_index,
            fragments,
        };
        layer.renumber();
        layer
    }

    /// Build a layer from plain run texts.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlight::layout::TextLayer;
    ///
    /// let layer = TextLayer::from_texts(0, ["foo ", "ligula", " bar"]);
    /// assert_eq!(layer.len(), 3);
    /// assert_eq!(layer.full_text(), "foo ligula bar");
    /// ```
    pub fn from_texts<I, S>(page_index: usize, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fragments = texts
            .into_iter()
            .enumerate()
            .map(|(order, text)| TextFragment::new(order, text))
            .collect();
        Self {
            page_index,
            fragments,
        }
    }

    /// Fragments in page order.
    pub fn fragments(&self) -> &[TextFragment] {
        &self.fragments
    }

    /// Mutable access for the highlighter. Text and order must not be edited
    /// through this slice.
    pub fn fragments_mut(&mut self) -> &mut [TextFragment] {
        &mut self.fragments
    }

    /// Replace the whole sequence after a re-render.
    pub fn replace_fragments(&mut self, fragments: Vec<TextFragment>) {
        self.fragments = fragments;
        self.renumber();
    }

    /// Number of fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether the page rendered no text runs.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Page text as the renderer laid it out, runs joined without separators.
    pub fn full_text(&self) -> String {
        self.fragments.iter().filter_map(|f| f.text()).collect()
    }

    /// Orders of fragments whose slot currently holds a color.
    pub fn highlighted_orders(&self) -> Vec<usize> {
        self.fragments
            .iter()
            .filter(|f| f.is_highlighted())
            .map(|f| f.order)
            .collect()
    }

    pub(crate) fn renumber(&mut self) {
        for (order, fragment) in self.fragments.iter_mut().enumerate() {
            fragment.order = order;
        }
    }
}
