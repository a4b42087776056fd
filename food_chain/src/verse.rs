// Verse composition: turns a prefix of the animal table into one stanza.
//
// Verse n introduces the nth animal, sings its remark, and (unless it is
// fatal) walks back down the table emitting one catch line per consecutive
// pair before the closing couplet about the first animal. Lines are joined
// with a single `\n` and there is no trailing newline.
//
// Pure function of its inputs; the menagerie is borrowed, never mutated.

use crate::error::RhymeError;
use crate::phrases::{catch_line, closing_line, opening_line};
use crate::types::Animal;

/// Compose verse `n` (1-based) from the given animal table.
pub fn compose_verse(animals: &[Animal], n: usize) -> Result<String, RhymeError> {
    if n == 0 || n > animals.len() {
        return Err(RhymeError::VerseOutOfRange {
            verse: n,
            count: animals.len(),
        });
    }
    Ok(render_verse(&animals[..n]))
}

/// Render the verse for the last animal of `swallowed`, which holds every
/// animal swallowed so far in order. An empty slice renders as "".
pub fn render_verse(swallowed: &[Animal]) -> String {
    let Some(newest) = swallowed.last() else {
        return String::new();
    };

    let mut lines = vec![opening_line(newest)];
    if let Some(remark) = &newest.remark {
        lines.push(remark.clone());
    }
    if newest.fatal {
        return lines.join("\n");
    }

    // Newest to oldest: each animal was swallowed to catch the one before it.
    for pair in swallowed.windows(2).rev() {
        lines.push(catch_line(&pair[1], &pair[0]));
    }
    lines.push(closing_line(&swallowed[0]));

    lines.join("\n")
}
