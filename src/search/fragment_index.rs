//! Concatenated page text with per-fragment offsets.
//!
//! Search runs over the page text as one string, but highlighting happens per
//! fragment. The index built here is the bridge: it joins fragment texts with
//! no separators and records where each fragment lives in the joined string.
//! Offsets are UTF-8 byte offsets into [`FragmentIndex::text`].

use crate::layout::HighlightTarget;
use std::ops::Range;

/// Where one fragment's text sits inside the concatenated page text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetEntry {
    /// Position of the fragment in the page's sequence
    pub fragment_order: usize,
    /// Offset of the fragment's first byte in the concatenated text
    pub start: usize,
    /// Length of the fragment's text in bytes (0 for empty or missing text)
    pub length: usize,
}

impl OffsetEntry {
    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// The fragment's window as a range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Concatenated text of one page plus the offset table for its fragments.
///
/// Built fresh for each reconciliation pass and dropped afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentIndex {
    text: String,
    entries: Vec<OffsetEntry>,
}

impl FragmentIndex {
    /// The concatenated page text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// One entry per fragment, in fragment order.
    pub fn entries(&self) -> &[OffsetEntry] {
        &self.entries
    }

    /// Whether the page had no fragments at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose non-empty window intersects `range`.
    pub fn overlapping(&self, range: Range<usize>) -> impl Iterator<Item = &OffsetEntry> + '_ {
        self.entries
            .iter()
            .filter(move |e| e.length > 0 && e.start < range.end && e.end() > range.start)
    }
}

/// Builds a [`FragmentIndex`] from an ordered fragment sequence.
pub struct FragmentIndexer;

impl FragmentIndexer {
    /// Concatenate fragment texts and record each fragment's offset range.
    ///
    /// Missing text is indexed as an empty fragment. The fragments are only
    /// read.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlight::layout::TextLayer;
    /// use pdf_highlight::search::FragmentIndexer;
    ///
    /// let layer = TextLayer::from_texts(0, ["li", "", "gula test"]);
    /// let index = FragmentIndexer::index(layer.fragments());
    ///
    /// assert_eq!(index.text(), "ligula test");
    /// assert_eq!(index.entries()[1].start, 2);
    /// assert_eq!(index.entries()[1].length, 0);
    /// assert_eq!(index.entries()[2].start, 2);
    /// ```
    pub fn index<F: HighlightTarget>(fragments: &[F]) -> FragmentIndex {
        let capacity = fragments.iter().map(|f| f.text_len()).sum();
        let mut text = String::with_capacity(capacity);
        let mut entries = Vec::with_capacity(fragments.len());

        for (order, fragment) in fragments.iter().enumerate() {
            let start = text.len();
            if let Some(run) = fragment.text() {
                text.push_str(run);
            }
            entries.push(OffsetEntry {
                fragment_order: order,
                start,
                length: text.len() - start,
            });
        }

        FragmentIndex { text, entries }
    }
}
