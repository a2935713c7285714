//! Owner of the transcript contents and the edit operations.
//!
//! The store never adds, removes or re-orders entries; only `word` values
//! mutate. Entries are expected to arrive chronological and non-overlapping —
//! the store does not sort or verify, callers that violate this get undefined
//! highlight behavior downstream.

use crate::entry::TranscriptEntry;
use crate::id::{IdGenerator, UuidIdGen};
use crate::validate::is_valid_word;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EditError {
    #[error("replacement must contain at least one alphabetic character")]
    InvalidWord,
    #[error("no entry with id {0:?}")]
    EntryNotFound(String),
}

pub struct TranscriptStore {
    entries: Vec<TranscriptEntry>,
}

impl TranscriptStore {
    /// Build a store from `(word, start_ms, duration_ms)` triples, assigning
    /// uuid identity tokens in order.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = (S, i64, i64)>,
        S: Into<String>,
    {
        Self::with_id_gen(words, UuidIdGen)
    }

    pub fn with_id_gen<I, S>(words: I, mut id_gen: impl IdGenerator) -> Self
    where
        I: IntoIterator<Item = (S, i64, i64)>,
        S: Into<String>,
    {
        let entries = words
            .into_iter()
            .map(|(word, start_ms, duration_ms)| TranscriptEntry {
                id: id_gen.next_id(),
                word: word.into(),
                start_ms,
                duration_ms,
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// End of the last entry's window, `None` for an empty transcript.
    pub fn end_ms(&self) -> Option<i64> {
        self.entries.last().map(|e| e.end_ms())
    }

    /// First entry whose `word` equals `word`, case-sensitive exact match.
    /// This is the selection a click-to-edit UI opens its dialog on.
    pub fn find_by_word(&self, word: &str) -> Option<&TranscriptEntry> {
        self.entries.iter().find(|e| e.word == word)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&TranscriptEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Rewrite **every** entry whose `word` equals `target`.
    ///
    /// Bulk-by-value is deliberate: a transcript with repeated words has all
    /// occurrences renamed together. Callers that need per-occurrence
    /// precision use [`TranscriptStore::replace_entry`].
    ///
    /// Returns how many entries were rewritten; zero matches is `Ok(0)`, not
    /// an error.
    pub fn replace_word(&mut self, target: &str, replacement: &str) -> Result<usize, EditError> {
        if !is_valid_word(replacement) {
            return Err(EditError::InvalidWord);
        }

        let mut replaced = 0;
        for entry in self.entries.iter_mut().filter(|e| e.word == target) {
            entry.word = replacement.to_string();
            replaced += 1;
        }
        Ok(replaced)
    }

    /// Rewrite exactly the entry with identity `id`.
    pub fn replace_entry(&mut self, id: &str, replacement: &str) -> Result<(), EditError> {
        if !is_valid_word(replacement) {
            return Err(EditError::InvalidWord);
        }

        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| EditError::EntryNotFound(id.to_string()))?;
        entry.word = replacement.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SequentialIdGen;

    fn store(words: &[(&str, i64, i64)]) -> TranscriptStore {
        TranscriptStore::with_id_gen(
            words.iter().map(|&(w, s, d)| (w, s, d)),
            SequentialIdGen::new(),
        )
    }

    fn words(store: &TranscriptStore) -> Vec<&str> {
        store.entries().iter().map(|e| e.word.as_str()).collect()
    }

    #[test]
    fn entries_keep_insertion_order_and_get_unique_ids() {
        let s = store(&[("a", 0, 100), ("b", 100, 100), ("c", 200, 100)]);
        assert_eq!(words(&s), ["a", "b", "c"]);

        let ids: std::collections::HashSet<_> = s.entries().iter().map(|e| &e.id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn end_ms_is_last_entry_end() {
        let s = store(&[("a", 0, 100), ("b", 150, 70)]);
        assert_eq!(s.end_ms(), Some(220));
    }

    #[test]
    fn end_ms_of_empty_store_is_none() {
        let s = store(&[]);
        assert!(s.is_empty());
        assert_eq!(s.end_ms(), None);
    }

    #[test]
    fn find_by_word_returns_first_match_only() {
        let s = store(&[("the", 0, 50), ("cat", 50, 50), ("the", 100, 50)]);
        let found = s.find_by_word("the").unwrap();
        assert_eq!(found.id, "0");
    }

    #[test]
    fn find_by_word_is_case_sensitive() {
        let s = store(&[("Cat", 0, 50)]);
        assert!(s.find_by_word("cat").is_none());
        assert!(s.find_by_word("Cat").is_some());
    }

    #[test]
    fn find_missing_word_is_none() {
        let s = store(&[("cat", 0, 50)]);
        assert!(s.find_by_word("dog").is_none());
    }

    #[test]
    fn replace_word_rewrites_every_occurrence() {
        let mut s = store(&[("the", 0, 50), ("cat", 50, 50), ("the", 100, 50)]);
        let replaced = s.replace_word("the", "a").unwrap();
        assert_eq!(replaced, 2);
        assert_eq!(words(&s), ["a", "cat", "a"]);
    }

    #[test]
    fn replace_word_keeps_timing_and_ids() {
        let mut s = store(&[("cat", 30, 70)]);
        s.replace_word("cat", "dog").unwrap();

        let e = &s.entries()[0];
        assert_eq!(e.word, "dog");
        assert_eq!(e.id, "0");
        assert_eq!(e.start_ms, 30);
        assert_eq!(e.duration_ms, 70);
    }

    #[test]
    fn replace_word_without_match_is_ok_zero() {
        let mut s = store(&[("cat", 0, 50)]);
        assert_eq!(s.replace_word("dog", "bird"), Ok(0));
        assert_eq!(words(&s), ["cat"]);
    }

    #[test]
    fn invalid_replacement_is_rejected_and_store_untouched() {
        let mut s = store(&[("cat", 0, 50)]);
        assert_eq!(s.replace_word("cat", "123"), Err(EditError::InvalidWord));
        assert_eq!(words(&s), ["cat"]);
    }

    #[test]
    fn replace_entry_touches_exactly_one_occurrence() {
        let mut s = store(&[("the", 0, 50), ("the", 50, 50)]);
        s.replace_entry("1", "a").unwrap();
        assert_eq!(words(&s), ["the", "a"]);
    }

    #[test]
    fn replace_entry_unknown_id_fails() {
        let mut s = store(&[("the", 0, 50)]);
        assert_eq!(
            s.replace_entry("nope", "a"),
            Err(EditError::EntryNotFound("nope".into()))
        );
    }

    #[test]
    fn replace_entry_validates_before_lookup() {
        let mut s = store(&[("the", 0, 50)]);
        assert_eq!(s.replace_entry("nope", "123"), Err(EditError::InvalidWord));
    }

    #[test]
    fn entries_serialize_for_the_rendering_layer() {
        let s = store(&[("hello", 0, 120)]);
        let json = serde_json::to_string(&s.entries()[0]).unwrap();
        assert!(json.contains("\"word\":\"hello\""));
        assert!(json.contains("\"start_ms\":0"));
        assert!(json.contains("\"duration_ms\":120"));
    }
}
