//! Document-level text-layer model.
//!
//! Holds the text layer of every rendered page and reacts to the renderer's
//! "text layer rendered" notifications by running a fresh reconciliation pass
//! for that page.

use crate::config::HighlightConfig;
use crate::error::{Error, Result};
use crate::layout::{TextFragment, TextLayer};
use crate::search::{PassOutcome, TextLayerSearcher};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Default, Serialize, Deserialize)]
struct TextLayerDump {
    #[serde(default)]
    pages: Vec<PageDump>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PageDump {
    #[serde(default)]
    fragments: Vec<TextFragment>,
}

/// Rendered text layers of a paginated document.
///
/// # Example
///
/// ```
/// use pdf_highlight::config::HighlightConfig;
/// use pdf_highlight::document::TextLayerDocument;
/// use pdf_highlight::layout::TextFragment;
///
/// let mut doc = TextLayerDocument::with_page_count(&HighlightConfig::default(), 2)?;
/// let outcome = doc.on_text_layer_rendered(
///     1,
///     vec![TextFragment::new(0, "Aenean "), TextFragment::new(1, "ligula")],
/// )?;
/// assert!(outcome.is_match());
/// assert_eq!(doc.page(1).map(|p| p.highlighted_orders()), Some(vec![1]));
/// # Ok::<(), pdf_highlight::error::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct TextLayerDocument {
    pages: Vec<TextLayer>,
    searcher: TextLayerSearcher,
}

impl TextLayerDocument {
    /// Create a document with no pages.
    pub fn new(config: &HighlightConfig) -> Result<Self> {
        Ok(Self {
            pages: Vec::new(),
            searcher: TextLayerSearcher::new(config)?,
        })
    }

    /// Create a document whose `page_count` pages have not rendered text yet.
    pub fn with_page_count(config: &HighlightConfig, page_count: usize) -> Result<Self> {
        let mut doc = Self::new(config)?;
        doc.pages = (0..page_count)
            .map(|page_index| TextLayer::new(page_index, Vec::new()))
            .collect();
        Ok(doc)
    }

    /// Load text layers from a JSON dump.
    ///
    /// The dump has the shape `{"pages": [{"fragments": [{"text": "..."}]}]}`.
    /// Page and fragment positions in the arrays define their indices.
    pub fn from_json_str(config: &HighlightConfig, json: &str) -> Result<Self> {
        let dump: TextLayerDump = serde_json::from_str(json)?;
        let mut doc = Self::new(config)?;
        doc.pages = dump
            .pages
            .into_iter()
            .enumerate()
            .map(|(page_index, page)| TextLayer::new(page_index, page.fragments))
            .collect();
        log::debug!("Loaded text layers for {} pages", doc.pages.len());
        Ok(doc)
    }

    /// Load text layers from a JSON dump file.
    pub fn open(config: &HighlightConfig, path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(config, &contents)
    }

    /// Serialize the current layers (including highlight state) as a dump.
    pub fn to_json(&self) -> Result<String> {
        let dump = TextLayerDump {
            pages: self
                .pages
                .iter()
                .map(|layer| PageDump {
                    fragments: layer.fragments().to_vec(),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&dump)?)
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Text layer of a page.
    pub fn page(&self, page_index: usize) -> Option<&TextLayer> {
        self.pages.get(page_index)
    }

    /// All pages in order.
    pub fn pages(&self) -> &[TextLayer] {
        &self.pages
    }

    /// The searcher used for every pass.
    pub fn searcher(&self) -> &TextLayerSearcher {
        &self.searcher
    }

    /// Append a page and return its index.
    pub fn push_page(&mut self, fragments: Vec<TextFragment>) -> usize {
        let page_index = self.pages.len();
        self.pages.push(TextLayer::new(page_index, fragments));
        page_index
    }

    /// Handle a "text layer rendered" notification for `page_index`.
    ///
    /// The page's fragments are replaced by the freshly rendered sequence
    /// (state from the previous render is discarded with them), then one pass
    /// runs over the new fragments.
    pub fn on_text_layer_rendered(
        &mut self,
        page_index: usize,
        fragments: Vec<TextFragment>,
    ) -> Result<PassOutcome> {
        let layer = Self::layer_mut(&mut self.pages, page_index)?;
        layer.replace_fragments(fragments);
        Ok(self.searcher.highlight_layer(layer))
    }

    /// Re-run a pass over a page's current fragments.
    pub fn highlight_page(&mut self, page_index: usize) -> Result<PassOutcome> {
        let layer = Self::layer_mut(&mut self.pages, page_index)?;
        Ok(self.searcher.highlight_layer(layer))
    }

    /// Run a pass over every page, in page order.
    pub fn highlight_all_pages(&mut self) -> Vec<PassOutcome> {
        let outcomes: Vec<PassOutcome> = self
            .pages
            .iter_mut()
            .map(|layer| self.searcher.highlight_layer(layer))
            .collect();
        log::info!(
            "Highlighted '{}' on {} of {} pages",
            self.searcher.search_term(),
            outcomes.iter().filter(|o| o.is_match()).count(),
            outcomes.len()
        );
        outcomes
    }

    fn layer_mut(pages: &mut [TextLayer], page_index: usize) -> Result<&mut TextLayer> {
        let page_count = pages.len();
        pages.get_mut(page_index).ok_or(Error::PageNotFound {
            page: page_index,
            page_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation_types::{HighlightColor, HighlightStyle};

    fn config() -> HighlightConfig {
        HighlightConfig::default()
    }

    #[test]
    fn test_with_page_count_starts_empty() {
        let doc = TextLayerDocument::with_page_count(&config(), 3).unwrap();
        assert_eq!(doc.page_count(), 3);
        assert!(doc.pages().iter().all(|p| p.is_empty()));
        assert_eq!(doc.page(2).map(|p| p.page_index), Some(2));
        assert!(doc.page(3).is_none());
    }

    #[test]
    fn test_notification_for_unknown_page() {
        let mut doc = TextLayerDocument::with_page_count(&config(), 1).unwrap();
        let result = doc.on_text_layer_rendered(4, vec![TextFragment::new(0, "ligula")]);
        assert!(matches!(
            result,
            Err(Error::PageNotFound {
                page: 4,
                page_count: 1
            })
        ));
        assert!(matches!(doc.highlight_page(1), Err(Error::PageNotFound { .. })));
    }

    #[test]
    fn test_rerender_replaces_prior_state() {
        let mut doc = TextLayerDocument::with_page_count(&config(), 1).unwrap();
        doc.on_text_layer_rendered(0, vec![TextFragment::new(0, "ligula")])
            .unwrap();
        assert_eq!(doc.page(0).unwrap().highlighted_orders(), vec![0]);

        let outcome = doc
            .on_text_layer_rendered(0, vec![TextFragment::new(0, "no match now")])
            .unwrap();
        assert!(!outcome.is_match());
        assert!(doc.page(0).unwrap().highlighted_orders().is_empty());
    }

    #[test]
    fn test_highlight_page_without_match_keeps_state() {
        let painted = HighlightStyle::Color(HighlightColor::marker_yellow());
        let mut doc = TextLayerDocument::new(&config()).unwrap();
        let page = doc.push_page(vec![TextFragment::new(0, "plain").with_highlight(painted)]);

        let outcome = doc.highlight_page(page).unwrap();
        assert!(!outcome.is_match());
        assert_eq!(doc.page(page).unwrap().highlighted_orders(), vec![0]);
    }

    #[test]
    fn test_from_json_and_highlight_all() {
        let json = r#"{
            "pages": [
                { "fragments": [ { "text": "foo " }, { "text": "ligula" }, { "text": " bar" } ] },
                { "fragments": [ { "text": "li" }, { "text": null }, { "text": "gula test" } ] },
                { "fragments": [] },
                {}
            ]
        }"#;
        let mut doc = TextLayerDocument::from_json_str(&config(), json).unwrap();
        assert_eq!(doc.page_count(), 4);

        let outcomes = doc.highlight_all_pages();
        assert_eq!(outcomes.len(), 4);
        assert_eq!(outcomes.iter().filter(|o| o.is_match()).count(), 2);
        assert_eq!(doc.page(0).unwrap().highlighted_orders(), vec![1, 2]);
        assert_eq!(doc.page(1).unwrap().highlighted_orders(), vec![2]);
        assert_eq!(doc.page(1).unwrap().fragments()[2].order, 2);
    }

    #[test]
    fn test_from_json_malformed() {
        let result = TextLayerDocument::from_json_str(&config(), r#"{"pages": 3}"#);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_to_json_includes_highlight_state() {
        let mut doc = TextLayerDocument::new(&config()).unwrap();
        doc.push_page(vec![TextFragment::new(0, "ligula")]);
        doc.highlight_all_pages();

        let json = doc.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["pages"][0]["fragments"][0]["highlight"], "rgba(254 240 138 / 0.3)");

        let reloaded = TextLayerDocument::from_json_str(&config(), &json).unwrap();
        assert_eq!(reloaded.page(0).unwrap().highlighted_orders(), vec![0]);
    }
}
