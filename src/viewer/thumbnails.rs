// SPDX-License-Identifier: MPL-2.0
//! Sibling thumbnail strip and the generation counter that guards its
//! background rebuilds.
//!
//! Every rebuild gets a fresh generation. The worker holds a [`CancelToken`]
//! that reports cancellation once a newer rebuild has started, and a batch is
//! only applied if its generation is still the current one.

use crate::media::ImageData;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// One decodable sibling of the opened image.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub path: PathBuf,
    pub image: ImageData,
}

/// Result of a completed rebuild, tagged with the generation that produced it.
#[derive(Debug, Clone)]
pub struct ThumbnailBatch {
    pub generation: u64,
    pub directory: PathBuf,
    pub entries: Vec<Thumbnail>,
}

/// Lets a worker notice that its rebuild has been superseded.
#[derive(Debug, Clone)]
pub struct CancelToken {
    current: Arc<AtomicU64>,
    generation: u64,
}

impl CancelToken {
    /// Returns `true` once a newer rebuild has been started.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.current.load(Ordering::Acquire) != self.generation
    }
}

/// Everything a worker needs to rebuild the strip for one directory.
#[derive(Debug, Clone)]
pub struct RebuildTicket {
    pub generation: u64,
    pub directory: PathBuf,
    pub token: CancelToken,
}

/// Ordered sibling thumbnails plus the current selection.
#[derive(Debug, Default)]
pub struct ThumbnailStrip {
    entries: Vec<Thumbnail>,
    selected: Option<usize>,
    generation: Arc<AtomicU64>,
}

impl ThumbnailStrip {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new rebuild for `directory`, superseding any in flight.
    pub fn begin_rebuild(&mut self, directory: impl Into<PathBuf>) -> RebuildTicket {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        RebuildTicket {
            generation,
            directory: directory.into(),
            token: CancelToken {
                current: Arc::clone(&self.generation),
                generation,
            },
        }
    }

    /// Generation of the most recently started rebuild.
    #[must_use]
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.current_generation()
    }

    /// Replaces the list wholesale and clears the selection.
    pub fn replace(&mut self, entries: Vec<Thumbnail>) {
        self.entries = entries;
        self.selected = None;
    }

    /// Drops every entry and the selection.
    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    /// Sets the selection; indices past the end clear it.
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.entries.len());
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn entries(&self) -> &[Thumbnail] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Thumbnail> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index to select for "next": 0 from no selection, wrapping at the end.
    #[must_use]
    pub fn next_index(&self) -> Option<usize> {
        let len = self.entries.len();
        if len == 0 {
            return None;
        }
        Some(match self.selected {
            None => 0,
            Some(i) => (i + 1) % len,
        })
    }

    /// Index to select for "previous": the last entry from no selection or
    /// from the first entry.
    #[must_use]
    pub fn previous_index(&self) -> Option<usize> {
        let len = self.entries.len();
        if len == 0 {
            return None;
        }
        Some(match self.selected {
            None | Some(0) => len - 1,
            Some(i) => i - 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thumb(name: &str) -> Thumbnail {
        Thumbnail {
            path: PathBuf::from(name),
            image: ImageData::from_rgba(1, 1, vec![0, 0, 0, 255]),
        }
    }

    fn strip_with(count: usize) -> ThumbnailStrip {
        let mut strip = ThumbnailStrip::new();
        let entries = (0..count).map(|i| thumb(&format!("{i}.png"))).collect();
        strip.replace(entries);
        strip
    }

    #[test]
    fn new_strip_is_empty_without_selection() {
        let strip = ThumbnailStrip::new();
        assert!(strip.is_empty());
        assert_eq!(strip.selected(), None);
        assert_eq!(strip.current_generation(), 0);
    }

    #[test]
    fn begin_rebuild_bumps_generation() {
        let mut strip = ThumbnailStrip::new();
        let first = strip.begin_rebuild("/a");
        let second = strip.begin_rebuild("/b");
        assert_eq!(first.generation, 1);
        assert_eq!(second.generation, 2);
        assert!(strip.is_current(2));
        assert!(!strip.is_current(1));
    }

    #[test]
    fn newer_rebuild_cancels_older_token() {
        let mut strip = ThumbnailStrip::new();
        let first = strip.begin_rebuild("/a");
        assert!(!first.token.is_cancelled());

        let second = strip.begin_rebuild("/a");
        assert!(first.token.is_cancelled());
        assert!(!second.token.is_cancelled());
    }

    #[test]
    fn replace_resets_selection() {
        let mut strip = strip_with(3);
        strip.select(Some(2));
        strip.replace(vec![thumb("x.png")]);
        assert_eq!(strip.selected(), None);
        assert_eq!(strip.len(), 1);
    }

    #[test]
    fn clear_empties_strip_and_disables_navigation() {
        let mut strip = strip_with(3);
        strip.select(Some(1));
        strip.clear();
        assert!(strip.is_empty());
        assert_eq!(strip.selected(), None);
        assert_eq!(strip.next_index(), None);
        assert_eq!(strip.previous_index(), None);
    }

    #[test]
    fn select_out_of_range_clears() {
        let mut strip = strip_with(2);
        strip.select(Some(1));
        assert_eq!(strip.selected(), Some(1));
        strip.select(Some(2));
        assert_eq!(strip.selected(), None);
    }

    #[test]
    fn next_index_wraps_and_starts_at_zero() {
        let mut strip = strip_with(3);
        assert_eq!(strip.next_index(), Some(0));
        strip.select(Some(2));
        assert_eq!(strip.next_index(), Some(0));
        strip.select(Some(0));
        assert_eq!(strip.next_index(), Some(1));
    }

    #[test]
    fn previous_index_wraps_to_last() {
        let mut strip = strip_with(3);
        assert_eq!(strip.previous_index(), Some(2));
        strip.select(Some(0));
        assert_eq!(strip.previous_index(), Some(2));
        strip.select(Some(2));
        assert_eq!(strip.previous_index(), Some(1));
    }

    #[test]
    fn navigation_on_empty_strip_is_none() {
        let strip = ThumbnailStrip::new();
        assert_eq!(strip.next_index(), None);
        assert_eq!(strip.previous_index(), None);
    }
}
