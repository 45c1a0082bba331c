use async_trait::async_trait;
use reqwest::Client;
use shared::{domain::PokemonRecord, error::LookupError, protocol::PokemonResponse};
use tracing::{debug, info};

pub mod config;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon/";

/// Name-or-id lookup against a Pokémon data service.
#[async_trait]
pub trait PokemonLookup: Send + Sync {
    async fn fetch(&self, query: &str) -> Result<PokemonRecord, LookupError>;
}

/// PokéAPI client. Holds only the connection pool and base address; every
/// `fetch` is one independent GET with no retry or caching.
pub struct DexClient {
    http: Client,
    base_url: String,
}

impl DexClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lowercases the query and appends it to the base address. No escaping.
    pub fn lookup_url(&self, query: &str) -> String {
        format!("{}/{}", self.base_url, query.to_lowercase())
    }
}

impl Default for DexClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl PokemonLookup for DexClient {
    async fn fetch(&self, query: &str) -> Result<PokemonRecord, LookupError> {
        let url = self.lookup_url(query);
        debug!(%url, "issuing pokemon lookup");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| LookupError::transport(query, err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!(%url, status = status.as_u16(), "pokemon lookup returned non-success status");
            return Err(LookupError::not_found(query, status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| LookupError::transport(query, format!("failed to read body: {err}")))?;
        let record = parse_pokemon_body(query, &body)?;
        info!(name = record.name(), id = record.id().0, "pokemon lookup succeeded");
        Ok(record)
    }
}

pub fn parse_pokemon_body(query: &str, body: &[u8]) -> Result<PokemonRecord, LookupError> {
    let wire: PokemonResponse = serde_json::from_slice(body)
        .map_err(|err| LookupError::parse(query, format!("invalid pokemon payload: {err}")))?;
    PokemonRecord::try_from(wire).map_err(|err| LookupError::parse(query, err.to_string()))
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
