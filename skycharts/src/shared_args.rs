use crate::catalogs::{ConstellationCatalog, HygCatalog, NgcCatalog};
use crate::export::{ExportOptions, ExportSources, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

/// Parse a magnitude limit, rejecting NaN and infinities
fn parse_magnitude(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid magnitude value: {}", s))?;

    if !value.is_finite() {
        return Err("Magnitude must be a finite number".to_string());
    }
    Ok(value)
}

/// Comma-separated list of object ids (e.g. "M42,HIP27989,ORI")
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentifierList(pub Vec<String>);

impl std::str::FromStr for IdentifierList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ids: Vec<String> = s
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect();

        if ids.is_empty() {
            return Err("Identifier list must name at least one object".to_string());
        }
        Ok(IdentifierList(ids))
    }
}

impl std::fmt::Display for IdentifierList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}

/// Catalog files to load; each is optional
#[derive(Parser, Debug, Clone, Default)]
pub struct CatalogSourceArgs {
    /// Path to a HYG database CSV
    #[arg(long)]
    pub hyg: Option<PathBuf>,

    /// Path to an HCNGC CSV
    #[arg(long)]
    pub ngc: Option<PathBuf>,

    /// Path to a constellation line CSV
    #[arg(long)]
    pub constellations: Option<PathBuf>,
}

impl CatalogSourceArgs {
    pub fn is_empty(&self) -> bool {
        self.hyg.is_none() && self.ngc.is_none() && self.constellations.is_none()
    }

    /// Load every catalog that was given a path
    pub fn load(&self) -> Result<ExportSources, Box<dyn std::error::Error>> {
        let hyg = match &self.hyg {
            Some(path) => Some(HygCatalog::from_path(path).map_err(|e| {
                format!("Failed to load HYG catalog from '{}': {}", path.display(), e)
            })?),
            None => None,
        };

        let ngc = match &self.ngc {
            Some(path) => Some(NgcCatalog::from_path(path).map_err(|e| {
                format!("Failed to load NGC catalog from '{}': {}", path.display(), e)
            })?),
            None => None,
        };

        let constellations = match &self.constellations {
            Some(path) => Some(ConstellationCatalog::from_path(path).map_err(|e| {
                format!(
                    "Failed to load constellation lines from '{}': {}",
                    path.display(),
                    e
                )
            })?),
            None => None,
        };

        Ok(ExportSources {
            hyg,
            ngc,
            constellations,
        })
    }
}

/// Output selection shared by catalog export tools
///
/// Every option is optional so that values read from `--config` are only
/// overridden by flags that were actually given.
#[derive(Parser, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Faintest magnitude to export (e.g. 5 for naked-eye stars)
    #[arg(long, value_parser = parse_magnitude, allow_hyphen_values = true)]
    pub magnitude: Option<f64>,

    /// Only export these objects (e.g. "M42,HIP27989,ORI")
    #[arg(long)]
    pub ids: Option<IdentifierList>,

    /// Pretty-print with this many spaces of indentation
    #[arg(long)]
    pub indent: Option<usize>,

    /// Mirror right ascension for east-increasing projections
    #[arg(long, default_value_t = false)]
    pub invert_ra: bool,

    /// Emit a flat JSON array of records instead of GeoJSON
    #[arg(long, default_value_t = false)]
    pub records: bool,
}

impl ExportArgs {
    /// Overlay the given flags on top of `options`
    pub fn apply(&self, mut options: ExportOptions) -> ExportOptions {
        if let Some(magnitude) = self.magnitude {
            options.magnitude = Some(magnitude);
        }
        if let Some(ids) = &self.ids {
            options.identifiers = ids.0.clone();
        }
        if let Some(indent) = self.indent {
            options.indent = Some(indent);
        }
        if self.invert_ra {
            options.invert_ra = true;
        }
        if self.records {
            options.format = OutputFormat::Records;
        }
        options
    }
}
