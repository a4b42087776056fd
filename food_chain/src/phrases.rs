// Fixed phrase templates of the rhyme.
//
// Every line of a verse comes from one of three templates: the opening line
// introducing the newest animal, the catch line linking two consecutive
// animals, and the closing couplet naming the first animal. Remark lines are
// taken verbatim from the menagerie data.

use crate::types::Animal;

const OPENING_PREFIX: &str = "I know an old lady who swallowed a";
const CATCH_PREFIX: &str = "She swallowed the";
const CATCH_JOIN: &str = "to catch the";
const CLOSING_PREFIX: &str = "I don't know why she swallowed the";
const CLOSING_SUFFIX: &str = "Perhaps she'll die.";

/// "I know an old lady who swallowed a fly."
pub fn opening_line(animal: &Animal) -> String {
    format!("{OPENING_PREFIX} {}.", animal.name)
}

/// "She swallowed the bird to catch the spider that wriggled ... inside her."
///
/// The prey's clause, if any, is appended after its name.
pub fn catch_line(predator: &Animal, prey: &Animal) -> String {
    match &prey.clause {
        Some(clause) => format!(
            "{CATCH_PREFIX} {} {CATCH_JOIN} {} {clause}.",
            predator.name, prey.name
        ),
        None => format!("{CATCH_PREFIX} {} {CATCH_JOIN} {}.", predator.name, prey.name),
    }
}

/// "I don't know why she swallowed the fly. Perhaps she'll die."
pub fn closing_line(first: &Animal) -> String {
    format!("{CLOSING_PREFIX} {}. {CLOSING_SUFFIX}", first.name)
}
