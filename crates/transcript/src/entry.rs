/// One spoken token with its time window `[start_ms, start_ms + duration_ms)`.
///
/// Everything except `word` is fixed at store construction: edits rewrite the
/// text but never move an entry in time. The `id` is the identity token a
/// renderer should key highlights on — two entries can carry the same `word`,
/// ids are always unique.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, specta::Type)]
pub struct TranscriptEntry {
    pub id: String,
    pub word: String,
    pub start_ms: i64,
    pub duration_ms: i64,
}

impl TranscriptEntry {
    /// Exclusive end of the entry's window.
    pub fn end_ms(&self) -> i64 {
        self.start_ms + self.duration_ms
    }

    /// Whether `at_ms` falls inside the window. The end boundary is exclusive,
    /// so an entry ending at 100ms does not contain 100ms.
    pub fn contains(&self, at_ms: i64) -> bool {
        at_ms >= self.start_ms && at_ms < self.end_ms()
    }
}
