use serde::{Deserialize, Serialize};

use crate::{
    domain::{PokemonId, PokemonRecord},
    error::RecordError,
};

/// Subset of the `/api/v2/pokemon/{name}` body the client reads. Unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonResponse {
    pub name: String,
    pub id: i64,
    pub types: Vec<PokemonTypeSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonTypeSlot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<u32>,
    #[serde(rename = "type")]
    pub type_ref: NamedApiResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedApiResource {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl TryFrom<PokemonResponse> for PokemonRecord {
    type Error = RecordError;

    fn try_from(value: PokemonResponse) -> Result<Self, Self::Error> {
        if value.name.is_empty() {
            return Err(RecordError::EmptyName);
        }
        let id = u32::try_from(value.id)
            .ok()
            .filter(|id| *id > 0)
            .ok_or(RecordError::InvalidId(value.id))?;

        // Array order, not slot order: the tags are shown exactly as served.
        let types = value
            .types
            .into_iter()
            .map(|slot| slot.type_ref.name)
            .collect();

        Ok(PokemonRecord::new(value.name, PokemonId(id), types))
    }
}
