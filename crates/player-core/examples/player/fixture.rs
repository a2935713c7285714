#[derive(Clone, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Fixture {
    Pangram,
    Repeats,
}

impl Fixture {
    /// `(word, start_ms, duration_ms)` triples, chronological and
    /// non-overlapping.
    pub fn words(&self) -> Vec<(&'static str, i64, i64)> {
        match self {
            Self::Pangram => vec![
                ("The", 0, 280),
                ("quick", 280, 260),
                ("brown", 540, 260),
                ("fox", 800, 240),
                ("jumps", 1040, 300),
                ("over", 1340, 240),
                ("the", 1580, 180),
                ("lazy", 1760, 300),
                ("dog", 2060, 340),
            ],
            // repeated "the" (bulk replace demo) and a silence gap after
            // "pauses" (no highlight while inside it)
            Self::Repeats => vec![
                ("the", 0, 200),
                ("speaker", 200, 320),
                ("pauses", 520, 300),
                ("and", 1400, 180),
                ("the", 1580, 160),
                ("audience", 1740, 380),
                ("waits", 2120, 320),
            ],
        }
    }
}
