//! Text shown for a record in the result labels.

use crate::domain::PokemonRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFields {
    pub name: String,
    pub id: String,
    pub types: String,
}

impl DisplayFields {
    pub fn from_record(record: &PokemonRecord) -> Self {
        Self {
            name: capitalize_name(record.name()),
            id: record.id().to_string(),
            types: record.types().join(", "),
        }
    }
}

/// Uppercases the first character and lowercases the rest.
pub fn capitalize_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
