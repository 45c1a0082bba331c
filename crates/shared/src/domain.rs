use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(PokemonId);

/// One successful lookup: canonical name, dataset id and type tags in source order.
///
/// Only built from a validated response (see `TryFrom<PokemonResponse>`), so a
/// record in hand always has a non-empty name and a positive id. It is
/// serialize-only, so JSON cannot skip those checks:
///
/// ```compile_fail
/// let _: shared::domain::PokemonRecord =
///     serde_json::from_str(r#"{"name":"","id":0,"types":[]}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PokemonRecord {
    name: String,
    id: PokemonId,
    types: Vec<String>,
}

impl PokemonRecord {
    pub(crate) fn new(name: String, id: PokemonId, types: Vec<String>) -> Self {
        Self { name, id, types }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> PokemonId {
        self.id
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }
}
