// Food Chain: cumulative verse generator for "I know an old lady who
// swallowed a fly".
//
// Each verse introduces one more animal and then walks back down the chain of
// everything swallowed so far. The text is fully determined by an ordered
// animal table (the menagerie), so the crate is pure functions over data.
//
// Architecture:
// - `types.rs`: `Animal`, one row of the menagerie
// - `phrases.rs`: Fixed line templates (opening, catch, closing)
// - `verse.rs`: Composes one verse from a prefix of the table
// - `song.rs`: Joins verse ranges with blank lines
// - `diff.rs`: First-difference comparison against expected text
// - `error.rs`: `RhymeError`
// - `lib.rs` (this file): `Menagerie` struct plus the crate-level `verse`,
//   `verses`, `song` shortcuts over the default table
//
// The menagerie is loaded from `data/menagerie.json` via
// `Menagerie::from_json()` (JSON string in, validated typed struct out). The
// `default_menagerie()` function embeds that file with `include_str!` and
// parses it once.

pub mod diff;
pub mod error;
pub mod phrases;
pub mod song;
pub mod types;
pub mod verse;

// Re-export key types at crate root for convenience.
pub use diff::{LineDiff, first_difference};
pub use error::RhymeError;
pub use types::Animal;

use std::sync::OnceLock;

/// The top-level JSON structure for the menagerie file.
#[derive(Debug, serde::Deserialize)]
struct MenagerieFile {
    animals: Vec<Animal>,
}

/// A validated, ordered animal table.
///
/// Order is swallowing order: the first animal is the one the closing couplet
/// names, the last is sung in the final verse. The table is never empty and
/// only its last animal may be fatal.
#[derive(Debug, Clone)]
pub struct Menagerie {
    animals: Vec<Animal>,
}

impl Menagerie {
    /// Build a menagerie from animals in swallowing order.
    pub fn new(animals: Vec<Animal>) -> Result<Self, RhymeError> {
        if animals.is_empty() {
            return Err(RhymeError::EmptyMenagerie);
        }
        if let Some(early) = animals[..animals.len() - 1].iter().find(|a| a.fatal) {
            return Err(RhymeError::FatalBeforeLast {
                name: early.name.clone(),
            });
        }
        Ok(Menagerie { animals })
    }

    /// Parse and validate a menagerie from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, RhymeError> {
        let file: MenagerieFile = serde_json::from_str(json)?;
        Self::new(file.animals)
    }

    /// All animals, in swallowing order.
    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    /// Number of verses, one per animal.
    pub fn verse_count(&self) -> usize {
        self.animals.len()
    }

    /// Text of verse `n` (1-based).
    pub fn verse(&self, n: usize) -> Result<String, RhymeError> {
        verse::compose_verse(&self.animals, n)
    }

    /// Verses `start..=end` separated by blank lines.
    pub fn verses(&self, start: usize, end: usize) -> Result<String, RhymeError> {
        song::compose_verses(&self.animals, start, end)
    }

    /// The whole song.
    pub fn song(&self) -> String {
        song::compose_song(&self.animals)
    }
}

/// The default menagerie embedded at compile time, parsed on first use.
///
/// Panics if the embedded JSON is malformed (should never happen in a
/// released build).
pub fn default_menagerie() -> &'static Menagerie {
    static DEFAULT: OnceLock<Menagerie> = OnceLock::new();
    DEFAULT.get_or_init(|| {
        let json = include_str!("../../data/menagerie.json");
        Menagerie::from_json(json).expect("embedded menagerie.json is malformed")
    })
}

/// Text of verse `n` of the traditional rhyme (1..=8).
pub fn verse(n: usize) -> Result<String, RhymeError> {
    default_menagerie().verse(n)
}

/// Verses `start..=end` of the traditional rhyme, separated by blank lines.
pub fn verses(start: usize, end: usize) -> Result<String, RhymeError> {
    default_menagerie().verses(start, end)
}

/// The whole traditional rhyme.
pub fn song() -> String {
    default_menagerie().song()
}
