// Song assembly: joins consecutive verses into one text.
//
// Verses are separated by a single blank line and the result carries no
// trailing separator. Range checks happen here; per-verse checks happen in
// `verse.rs`.

use crate::error::RhymeError;
use crate::types::Animal;
use crate::verse::{compose_verse, render_verse};

/// Blank line between verses.
pub const VERSE_SEPARATOR: &str = "\n\n";

/// Compose verses `start..=end` (1-based, inclusive) joined by blank lines.
pub fn compose_verses(animals: &[Animal], start: usize, end: usize) -> Result<String, RhymeError> {
    if start > end {
        return Err(RhymeError::ReversedRange { start, end });
    }
    let verses = (start..=end)
        .map(|n| compose_verse(animals, n))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(verses.join(VERSE_SEPARATOR))
}

/// Compose every verse of the table. An empty table yields "".
pub fn compose_song(animals: &[Animal]) -> String {
    (1..=animals.len())
        .map(|n| render_verse(&animals[..n]))
        .collect::<Vec<_>>()
        .join(VERSE_SEPARATOR)
}
