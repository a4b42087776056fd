// Core rhyme types: the animals the old lady swallows.
//
// An `Animal` is one row of the menagerie table in `data/menagerie.json`.
// Beyond its name, an animal may carry a remark (the line sung right after it
// is introduced), a clause (appended when a later animal is swallowed to
// catch it), and a fatal flag (its verse ends the song).
//
// These types are plain data. All phrase assembly lives in `phrases.rs` and
// `verse.rs`.

use serde::{Deserialize, Serialize};

/// One swallowed animal, as stored in the menagerie JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    /// Bare name as sung ("fly", "spider").
    pub name: String,
    /// Line interjected after the animal is introduced
    /// (e.g., "How absurd to swallow a bird!").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    /// Relative clause appended when this animal is the one being caught
    /// (e.g., "that wriggled and jiggled and tickled inside her").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clause: Option<String>,
    /// Swallowing this animal ends the verse after the remark, with no
    /// catch chain and no closing couplet.
    #[serde(default)]
    pub fatal: bool,
}

impl Animal {
    /// A plain animal with no remark, clause, or fatal flag.
    pub fn new(name: impl Into<String>) -> Self {
        Animal {
            name: name.into(),
            remark: None,
            clause: None,
            fatal: false,
        }
    }

    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = Some(remark.into());
        self
    }

    pub fn with_clause(mut self, clause: impl Into<String>) -> Self {
        self.clause = Some(clause.into());
        self
    }

    pub fn fatal(mut self) -> Self {
        self.fatal = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animal_optional_fields_default() {
        let animal: Animal = serde_json::from_str(r#"{"name": "fly"}"#).unwrap();
        assert_eq!(animal, Animal::new("fly"));
        assert!(animal.remark.is_none());
        assert!(animal.clause.is_none());
        assert!(!animal.fatal);
    }

    #[test]
    fn test_animal_full_entry() {
        let json = r#"{
            "name": "spider",
            "remark": "It wriggled and jiggled and tickled inside her.",
            "clause": "that wriggled and jiggled and tickled inside her"
        }"#;
        let animal: Animal = serde_json::from_str(json).unwrap();
        assert_eq!(animal.name, "spider");
        assert_eq!(
            animal.clause.as_deref(),
            Some("that wriggled and jiggled and tickled inside her")
        );
    }

    #[test]
    fn test_animal_serialize_omits_absent_fields() {
        let json = serde_json::to_string(&Animal::new("fly")).unwrap();
        assert_eq!(json, r#"{"name":"fly","fatal":false}"#);
    }

    #[test]
    fn test_builder_sets_fields() {
        let horse = Animal::new("horse")
            .with_remark("She's dead, of course!")
            .fatal();
        assert_eq!(horse.remark.as_deref(), Some("She's dead, of course!"));
        assert!(horse.fatal);
        assert!(horse.clause.is_none());
    }
}
