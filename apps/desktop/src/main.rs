use anyhow::{bail, Result};
use clap::Parser;
use dex_client::{
    config::{load_settings, validate_base_url, LoadedSettings},
    DexClient, PokemonLookup,
};
use shared::{display::DisplayFields, error::LookupErrorKind};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Look up a Pokémon by name or id")]
struct Args {
    query: String,
    #[arg(long)]
    base_url: Option<String>,
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let LoadedSettings {
        settings,
        file_error,
    } = load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
    if let Some(err) = file_error {
        tracing::warn!("{err:#}");
    }

    let query = args.query.trim();
    if query.is_empty() {
        bail!("Enter a name or ID.");
    }

    let base_url = validate_base_url(args.base_url.as_deref().unwrap_or(&settings.api_base_url))?;
    let client = DexClient::new(base_url);

    match client.fetch(query).await {
        Ok(record) if args.json => {
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Ok(record) => {
            let fields = DisplayFields::from_record(&record);
            println!("Name: {}", fields.name);
            println!("ID: {}", fields.id);
            println!("Types: {}", fields.types);
        }
        Err(err) => {
            tracing::warn!(kind = ?err.kind(), "lookup failed: {err}");
            match err.kind() {
                LookupErrorKind::NotFound => bail!("Pokémon not found."),
                LookupErrorKind::Transport | LookupErrorKind::Parse => {
                    bail!("Pokémon not found. ({err})")
                }
            }
        }
    }

    Ok(())
}
