//! Converts star, deep-sky and constellation line catalogs to JSON
//!
//! Reads any combination of a HYG star CSV, an HCNGC deep-sky CSV and a
//! constellation line CSV, and writes one GeoJSON `FeatureCollection` (or a
//! flat record array with `--records`) suitable for sky chart rendering.
//!
//! ```text
//! catalog_json --hyg hygfull.csv --magnitude 5 --constellations lines.csv --indent 2
//! ```

use clap::Parser;
use skycharts::export::{render, ExportOptions};
use skycharts::shared_args::{CatalogSourceArgs, ExportArgs};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Catalog JSON",
    about = "Converts astronomical catalogs to GeoJSON for sky charts",
    long_about = None
)]
struct Args {
    #[command(flatten)]
    sources: CatalogSourceArgs,

    #[command(flatten)]
    export: ExportArgs,

    /// JSON file with default export options; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write output to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if args.sources.is_empty() {
        return Err("No catalogs given, pass at least one of --hyg, --ngc, --constellations".into());
    }

    let options = match &args.config {
        Some(path) => ExportOptions::load_from_file(path).map_err(|e| {
            format!("Failed to read export options from '{}': {}", path.display(), e)
        })?,
        None => ExportOptions::default(),
    };
    let options = args.export.apply(options);
    log::debug!("Export options: {:?}", options);

    let sources = args.sources.load()?;
    let json = render(&sources, &options)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, json)?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
