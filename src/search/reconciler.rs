//! Propagates a flat match range onto a page's fragments.
//!
//! The match is an offset range into the concatenated page text; fragments
//! only know their own text. Walking the offset table in order, each
//! fragment's window `[start, start + length)` is compared against the match
//! and the fragment's highlight slot is set, cleared or left alone.
//!
//! The policy is applied exactly as the viewer has always applied it:
//!
//! 1. fragments ending at or before the match start are not touched;
//! 2. a fragment whose window reaches the match end is painted (this includes
//!    every fragment after the match);
//! 3. otherwise a fragment starting at or before the match start is cleared;
//! 4. anything else keeps whatever state it had.
//!
//! Case 4 means a fragment lying strictly inside the match, neither holding
//! its start nor reaching its end, is not repainted.

use super::fragment_index::OffsetEntry;
use super::matcher::MatchRange;
use crate::annotation_types::HighlightColor;
use crate::layout::HighlightTarget;
use serde::Serialize;

/// What a reconciliation pass did to one fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentDecision {
    /// Not considered: ends before the match starts, or has no text
    Skipped,
    /// Highlight painted
    Set,
    /// Highlight removed
    Cleared,
    /// Considered, but its prior state was kept
    Unchanged,
}

impl FragmentDecision {
    /// Decide the fate of the fragment at `entry` for match `m`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlight::search::{FragmentDecision, MatchRange, OffsetEntry};
    ///
    /// let m = MatchRange { start: 0, length: 6 };
    /// let head = OffsetEntry { fragment_order: 0, start: 0, length: 2 };
    /// let tail = OffsetEntry { fragment_order: 1, start: 2, length: 9 };
    ///
    /// assert_eq!(FragmentDecision::for_entry(&head, &m), FragmentDecision::Cleared);
    /// assert_eq!(FragmentDecision::for_entry(&tail, &m), FragmentDecision::Set);
    /// ```
    pub fn for_entry(entry: &OffsetEntry, m: &MatchRange) -> Self {
        if entry.length == 0 || entry.end() <= m.start {
            Self::Skipped
        } else if entry.end() >= m.end() {
            Self::Set
        } else if entry.start <= m.start {
            Self::Cleared
        } else {
            Self::Unchanged
        }
    }
}

/// Counts of per-fragment decisions for one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileSummary {
    /// Fragments painted
    pub set: usize,
    /// Fragments cleared
    pub cleared: usize,
    /// Fragments considered but left as they were
    pub unchanged: usize,
    /// Fragments not considered at all
    pub skipped: usize,
}

impl ReconcileSummary {
    fn record(&mut self, decision: FragmentDecision) {
        match decision {
            FragmentDecision::Skipped => self.skipped += 1,
            FragmentDecision::Set => self.set += 1,
            FragmentDecision::Cleared => self.cleared += 1,
            FragmentDecision::Unchanged => self.unchanged += 1,
        }
    }

    /// Number of fragments whose slot was written.
    pub fn mutated(&self) -> usize {
        self.set + self.cleared
    }
}

/// Writes highlight state onto fragments from a match range.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighlightReconciler {
    color: HighlightColor,
}

impl HighlightReconciler {
    /// Create a reconciler that paints with `color`.
    pub fn new(color: HighlightColor) -> Self {
        Self { color }
    }

    /// The color written on "set".
    pub fn color(&self) -> HighlightColor {
        self.color
    }

    /// Apply the highlight policy to `fragments`.
    ///
    /// `entries` must be the offset table built from the same fragments, in
    /// the same order. With no match this is a no-op: prior state is kept,
    /// nothing is cleared. Only highlight slots are written.
    pub fn reconcile<F: HighlightTarget>(
        &self,
        entries: &[OffsetEntry],
        fragments: &mut [F],
        match_range: Option<MatchRange>,
    ) -> ReconcileSummary {
        debug_assert_eq!(entries.len(), fragments.len());

        let mut summary = ReconcileSummary::default();
        let Some(m) = match_range else {
            summary.skipped = fragments.len();
            return summary;
        };

        for (entry, fragment) in entries.iter().zip(fragments.iter_mut()) {
            let decision = FragmentDecision::for_entry(entry, &m);
            match decision {
                FragmentDecision::Set => fragment.set_highlight(self.color),
                FragmentDecision::Cleared => fragment.clear_highlight(),
                FragmentDecision::Skipped | FragmentDecision::Unchanged => {},
            }
            log::trace!(
                "Fragment {} [{}, {}) vs match [{}, {}): {:?}",
                entry.fragment_order,
                entry.start,
                entry.end(),
                m.start,
                m.end(),
                decision
            );
            summary.record(decision);
        }

        summary
    }
}
