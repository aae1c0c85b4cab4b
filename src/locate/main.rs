//! Command-line lookup of a grid code and place label.
//!
//! Runs the same click workflow as the map UI for one coordinate and
//! prints the result.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use gridaddr::config::Config;
use gridaddr::grid::{encode, nested_cells, snap, spacing_for_zoom};
use gridaddr::models::{AddressLabel, Coordinate, GridCode};
use gridaddr::resolver::AddressResolver;
use gridaddr::session::{MapSession, NullRenderer};

#[derive(Parser, Debug)]
#[command(name = "locate")]
#[command(about = "Grid code and place label for a coordinate")]
struct Args {
    /// Latitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,

    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Map zoom used to pick the reference grid spacing
    #[arg(short, long)]
    zoom: Option<u8>,

    /// Append the locality digits to the label
    #[arg(long)]
    suffix: bool,

    /// Skip the address lookup
    #[arg(long)]
    offline: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok(), args.verbose))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    let mut options = config.session;
    options.show_locality_suffix |= args.suffix;

    let zoom = config.map.clamp_zoom(args.zoom.unwrap_or(config.map.zoom));
    let raw = Coordinate::new(args.lat, args.lon);
    let snapped = snap(raw);

    print_grid(snapped, &encode(snapped), zoom);

    if args.offline {
        return Ok(());
    }

    let client = config
        .google_client()
        .context("Map configuration is missing")?;
    info!("Resolving address for ({})", snapped);

    let resolver = AddressResolver::new(client.clone(), client);
    let mut session = MapSession::new(resolver, NullRenderer, options);
    session.set_center(config.map.center());
    session.set_zoom(zoom);

    let outcome = session.handle_click(raw).await;
    print_label(&outcome.label);

    Ok(())
}

/// `RUST_LOG` directives when set and valid, else the `--verbose` level
fn log_filter(directives: Option<String>, verbose: bool) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(if verbose { "debug" } else { "warn" }))
}

fn print_grid(snapped: Coordinate, code: &GridCode, zoom: u8) {
    println!("Location:  {}", snapped);
    println!("Code:      {}", code);
    println!("Locality:  {}", code.locality_suffix);

    for (precision, cell) in nested_cells(snapped) {
        println!(
            "Cell {:<6} ~{:>5.0} m  S {:.4}  W {:.4}  N {:.4}  E {:.4}",
            precision,
            precision.approx_edge_meters(),
            cell.south,
            cell.west,
            cell.north,
            cell.east
        );
    }

    match spacing_for_zoom(zoom) {
        Some(spacing) => println!("Grid:      {} deg at zoom {}", spacing, zoom),
        None => println!("Grid:      none at zoom {}", zoom),
    }
}

fn print_label(label: &AddressLabel) {
    for line in label.lines().iter().filter(|l| !l.is_empty()) {
        println!("Address:   {}", line);
    }
}
