// Error type for menagerie loading and verse lookup.
//
// A single enum covers both failure sources: malformed or invalid menagerie
// data, and verse indices outside the table. Display messages are meant to be
// printed directly by the `recite` binary.

use std::fmt;

/// Everything that can go wrong when loading a menagerie or reciting from it.
#[derive(Debug)]
pub enum RhymeError {
    /// The menagerie JSON could not be parsed.
    Json(serde_json::Error),
    /// The menagerie has no animals, so there is no verse 1.
    EmptyMenagerie,
    /// A fatal animal appears before the end of the table, which would leave
    /// verses that can never be reached.
    FatalBeforeLast { name: String },
    /// Verse index outside `1..=count`.
    VerseOutOfRange { verse: usize, count: usize },
    /// Range whose start comes after its end.
    ReversedRange { start: usize, end: usize },
}

impl fmt::Display for RhymeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RhymeError::Json(e) => write!(f, "malformed menagerie: {e}"),
            RhymeError::EmptyMenagerie => write!(f, "menagerie has no animals"),
            RhymeError::FatalBeforeLast { name } => {
                write!(f, "fatal animal '{name}' must be the last in the menagerie")
            }
            RhymeError::VerseOutOfRange { verse, count } => {
                write!(f, "verse {verse} is out of range (expected 1..={count})")
            }
            RhymeError::ReversedRange { start, end } => {
                write!(f, "verse range {start}..={end} is reversed")
            }
        }
    }
}

impl std::error::Error for RhymeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RhymeError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for RhymeError {
    fn from(e: serde_json::Error) -> Self {
        RhymeError::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            RhymeError::VerseOutOfRange { verse: 9, count: 8 }.to_string(),
            "verse 9 is out of range (expected 1..=8)"
        );
        assert_eq!(
            RhymeError::ReversedRange { start: 5, end: 2 }.to_string(),
            "verse range 5..=2 is reversed"
        );
        assert_eq!(
            RhymeError::FatalBeforeLast { name: "horse".into() }.to_string(),
            "fatal animal 'horse' must be the last in the menagerie"
        );
    }

    #[test]
    fn test_json_error_has_source() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = RhymeError::from(parse_err);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("malformed menagerie: "));
        assert!(RhymeError::EmptyMenagerie.source().is_none());
    }
}
