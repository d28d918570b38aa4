//! One reconciliation pass over a page's text layer.
//!
//! Indexes the fragments, finds the configured term once in the concatenated
//! text and hands both results to the reconciler. Each pass is independent:
//! nothing is carried from one page, or one render, to the next.

use super::fragment_index::{FragmentIndex, FragmentIndexer};
use super::matcher::{MatchRange, SubstringMatcher};
use super::reconciler::{HighlightReconciler, ReconcileSummary};
use crate::config::HighlightConfig;
use crate::error::Result;
use crate::geometry::Rect;
use crate::layout::{HighlightTarget, TextLayer};
use serde::Serialize;

/// Report of one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassOutcome {
    /// Page number (0-indexed)
    pub page: usize,
    /// First match in the page text, if any
    pub match_range: Option<MatchRange>,
    /// The matched text
    pub matched_text: Option<String>,
    /// Union of the boxes of fragments holding matched characters
    pub bbox: Option<Rect>,
    /// Orders of the fragments holding matched characters
    pub matched_fragments: Vec<usize>,
    /// What the reconciler did
    pub summary: ReconcileSummary,
}

impl PassOutcome {
    /// Whether the term was found on the page.
    pub fn is_match(&self) -> bool {
        self.match_range.is_some()
    }
}

/// Runs reconciliation passes for a fixed search term and color.
#[derive(Debug, Clone)]
pub struct TextLayerSearcher {
    matcher: SubstringMatcher,
    reconciler: HighlightReconciler,
}

impl TextLayerSearcher {
    /// Create a searcher from configuration.
    pub fn new(config: &HighlightConfig) -> Result<Self> {
        if config.search_term.is_empty() {
            log::warn!("Empty search term: passes will never highlight anything");
        }
        Ok(Self {
            matcher: SubstringMatcher::new(config.search_term.as_str())?,
            reconciler: HighlightReconciler::new(config.color),
        })
    }

    /// The term this searcher looks for.
    pub fn search_term(&self) -> &str {
        self.matcher.term()
    }

    /// Run a pass over a page's text layer.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlight::config::HighlightConfig;
    /// use pdf_highlight::layout::TextLayer;
    /// use pdf_highlight::search::TextLayerSearcher;
    ///
    /// let searcher = TextLayerSearcher::new(&HighlightConfig::default()).unwrap();
    /// let mut layer = TextLayer::from_texts(0, ["li", "gula test"]);
    ///
    /// let outcome = searcher.highlight_layer(&mut layer);
    /// assert_eq!(outcome.matched_text.as_deref(), Some("ligula"));
    /// assert_eq!(layer.highlighted_orders(), vec![1]);
    /// ```
    pub fn highlight_layer(&self, layer: &mut TextLayer) -> PassOutcome {
        let page = layer.page_index;
        self.highlight_fragments(page, layer.fragments_mut())
    }

    /// Run a pass over any renderer's fragment handles for `page`.
    pub fn highlight_fragments<F: HighlightTarget>(
        &self,
        page: usize,
        fragments: &mut [F],
    ) -> PassOutcome {
        let index = FragmentIndexer::index(&*fragments);
        let match_range = self.matcher.find_first(index.text());

        log::debug!(
            "Page {}: {} fragments, {} bytes of text, match {:?}",
            page,
            fragments.len(),
            index.text().len(),
            match_range
        );

        let summary = self.reconciler.reconcile(index.entries(), fragments, match_range);

        let (bbox, matched_fragments) = match match_range {
            Some(m) => Self::compute_match_bbox(&index, m, &*fragments),
            None => (None, Vec::new()),
        };

        PassOutcome {
            page,
            match_range,
            matched_text: match_range.map(|m| index.text()[m.range()].to_string()),
            bbox,
            matched_fragments,
            summary,
        }
    }

    /// Combine the boxes of fragments holding matched characters.
    fn compute_match_bbox<F: HighlightTarget>(
        index: &FragmentIndex,
        m: MatchRange,
        fragments: &[F],
    ) -> (Option<Rect>, Vec<usize>) {
        let mut combined: Option<Rect> = None;
        let mut orders = Vec::new();

        for entry in index.overlapping(m.range()) {
            orders.push(entry.fragment_order);

            // Whole-run boxes; character-level boxes are not available from the text layer
            let Some(bbox) = fragments.get(entry.fragment_order).and_then(|f| f.bbox()) else {
                continue;
            };
            combined = Some(match combined {
                Some(acc) => acc.union(&bbox),
                None => bbox,
            });
        }

        (combined, orders)
    }
}
