// Line-oriented comparison of recited text against an expected corpus.
//
// Reports only the first point where the two texts diverge, which is enough
// to pin down a wrong verse without dumping the whole song. Used by the
// corpus tests and by `recite --expect`.

use std::fmt;

/// The first divergence between generated and expected text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineDiff {
    /// Line `line` (1-based) differs.
    Mismatch { line: usize, got: String, want: String },
    /// `got` matched all `after` expected lines, then kept going for `count`
    /// more lines starting with `first`.
    ExtraLines { after: usize, count: usize, first: String },
    /// `got` matched `matched` lines, then stopped `count` lines early;
    /// `next` is the first missing line.
    MissingLines { matched: usize, count: usize, next: String },
}

impl fmt::Display for LineDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineDiff::Mismatch { line, got, want } => write!(
                f,
                "first difference in line {line}:\n  got : {got:?}\n  want: {want:?}"
            ),
            LineDiff::ExtraLines { after, count, first } => write!(
                f,
                "got {count} extra lines after line {after}:\n  first extra line: {first:?}"
            ),
            LineDiff::MissingLines { matched, count, next } => write!(
                f,
                "got {matched} correct lines, want {count} more lines:\n  want next: {next:?}"
            ),
        }
    }
}

/// Compare `got` against `want` line by line. `None` means identical.
pub fn first_difference(got: &str, want: &str) -> Option<LineDiff> {
    let g: Vec<&str> = got.split('\n').collect();
    let w: Vec<&str> = want.split('\n').collect();

    for (i, (gl, wl)) in g.iter().zip(&w).enumerate() {
        if gl != wl {
            return Some(LineDiff::Mismatch {
                line: i + 1,
                got: gl.to_string(),
                want: wl.to_string(),
            });
        }
    }

    let common = g.len().min(w.len());
    if g.len() > common {
        Some(LineDiff::ExtraLines {
            after: common,
            count: g.len() - common,
            first: g[common].to_string(),
        })
    } else if w.len() > common {
        Some(LineDiff::MissingLines {
            matched: common,
            count: w.len() - common,
            next: w[common].to_string(),
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        assert_eq!(first_difference("a\nb", "a\nb"), None);
        assert_eq!(first_difference("", ""), None);
    }

    #[test]
    fn test_mismatch_reports_first_line_only() {
        let diff = first_difference("a\nx\ny", "a\nb\nc").unwrap();
        assert_eq!(
            diff,
            LineDiff::Mismatch {
                line: 2,
                got: "x".into(),
                want: "b".into(),
            }
        );
        assert_eq!(
            diff.to_string(),
            "first difference in line 2:\n  got : \"x\"\n  want: \"b\""
        );
    }

    #[test]
    fn test_extra_lines() {
        let diff = first_difference("a\nb\nc\nd", "a\nb").unwrap();
        assert_eq!(
            diff,
            LineDiff::ExtraLines {
                after: 2,
                count: 2,
                first: "c".into(),
            }
        );
    }

    #[test]
    fn test_missing_lines() {
        let diff = first_difference("a", "a\nb\nc").unwrap();
        assert_eq!(
            diff,
            LineDiff::MissingLines {
                matched: 1,
                count: 2,
                next: "b".into(),
            }
        );
        assert!(diff.to_string().starts_with("got 1 correct lines, want 2 more lines"));
    }

    #[test]
    fn test_trailing_newline_counts_as_extra_line() {
        let diff = first_difference("a\n", "a").unwrap();
        assert_eq!(
            diff,
            LineDiff::ExtraLines {
                after: 1,
                count: 1,
                first: String::new(),
            }
        );
    }
}
