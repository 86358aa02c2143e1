use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use coffee_finder::{
    sdk::catalog::{load_shops, DEFAULT_ENCODING},
    sdk::config::GeocoderConfig,
    sdk::geo::EarthModel,
    sdk::geocoding::{Geocoder, YandexGeocoder},
    sdk::ranking::rank_nearest_with,
    sdk::render::{render_json, render_text, MapDocument},
    sdk::util::{log::init_logging, rate_limit::geocoder_limiter},
};
use std::io::{self, BufRead, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Model {
    Geodesic,
    Haversine,
}

impl From<Model> for EarthModel {
    fn from(model: Model) -> Self {
        match model {
            Model::Geodesic => EarthModel::Geodesic,
            Model::Haversine => EarthModel::Haversine,
        }
    }
}

/// Find the coffee shops nearest to an address
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Free-text address (asked for interactively when omitted)
    address: Option<String>,

    /// How many shops to show
    #[arg(short = 'n', long, default_value_t = NonZeroUsize::new(5).unwrap_or(NonZeroUsize::MIN))]
    limit: NonZeroUsize,

    /// Path to the shop catalog JSON
    #[arg(short, long, default_value = "coffee.json")]
    catalog: PathBuf,

    /// Text encoding of the catalog file
    #[arg(long, default_value = DEFAULT_ENCODING)]
    encoding: String,

    /// Where to write the HTML map
    #[arg(long, default_value = "coffee_map.html")]
    map: PathBuf,

    /// Skip writing the HTML map
    #[arg(long)]
    no_map: bool,

    /// How to print the ranked list
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Earth model for distances
    #[arg(long, value_enum, default_value_t = Model::Geodesic)]
    model: Model,
}

fn prompt_address() -> Result<String> {
    print!("Where are you? ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read address from stdin")?;
    Ok(line.trim().to_string())
}

fn main() -> Result<()> {
    init_logging();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // --- 1. Configuration and geocoder ---
    let config = GeocoderConfig::from_env()?;
    let limiter = geocoder_limiter(config.rate_per_second);
    let geocoder = YandexGeocoder::new(&config, limiter)?;

    let address = match cli.address {
        Some(address) => address,
        None => prompt_address()?,
    };

    // --- 2. Resolve the user ---
    let Some(user) = geocoder
        .geocode(&address)
        .with_context(|| format!("Geocoding failed for \"{}\"", address))?
    else {
        bail!("Could not determine coordinates for \"{}\"", address);
    };
    log::info!("Your coordinates: {}", user);

    // --- 3. Load and rank ---
    let shops = load_shops(&cli.catalog, &cli.encoding)
        .with_context(|| format!("Invalid catalog {}", cli.catalog.display()))?;
    if shops.is_empty() {
        println!("No coffee shop data in {}", cli.catalog.display());
        return Ok(());
    }

    let nearest = rank_nearest_with(cli.model.into(), user, &shops, cli.limit)?;

    // --- 4. Output ---
    match cli.format {
        OutputFormat::Text => print!("{}", render_text(&nearest)),
        OutputFormat::Json => println!("{}", render_json(&nearest)?),
    }

    if !cli.no_map {
        MapDocument::new(user, &nearest)?.write_to(&cli.map)?;
    }

    Ok(())
}
