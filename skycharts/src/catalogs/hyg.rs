//! HYG star catalog loader
//!
//! The HYG database merges Hipparcos, Yale Bright Star and Gliese into one
//! CSV. Right ascension is given in decimal hours and declination in decimal
//! degrees. Stars are keyed by their Hipparcos number.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::StringRecord;

use super::{field, find_column, parse_float, Catalog, CelestialCatalog};
use crate::coordinates::{AngleValue, UnitHint};
use crate::errors::Result;
use crate::objects::{CelestialObject, ObjectType, FAINT_MAGNITUDE};

/// Primary catalog for HYG stars
pub const HIPPARCOS: &str = "HIP";
/// Fallback catalog for stars without a Hipparcos number, keyed by HYG StarID
pub const HYG: &str = "HYG";

/// Column positions resolved from the header row
struct HygColumns {
    star_id: usize,
    hip: usize,
    hd: usize,
    hr: usize,
    bayer_flamsteed: usize,
    proper_name: usize,
    ra: usize,
    dec: usize,
    mag: usize,
}

impl HygColumns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        Ok(Self {
            star_id: find_column(headers, "StarID")?,
            hip: find_column(headers, "HIP")?,
            hd: find_column(headers, "HD")?,
            hr: find_column(headers, "HR")?,
            bayer_flamsteed: find_column(headers, "BayerFlamsteed")?,
            proper_name: find_column(headers, "ProperName")?,
            ra: find_column(headers, "RA")?,
            dec: find_column(headers, "Dec")?,
            mag: find_column(headers, "Mag")?,
        })
    }
}

/// Build one star from a HYG row
fn parse_star(record: &StringRecord, columns: &HygColumns) -> Result<CelestialObject> {
    let (identifier, catalog) = match field(record, columns.hip) {
        "" => (field(record, columns.star_id), HYG),
        hip => (hip, HIPPARCOS),
    };

    let ra = AngleValue::parse(field(record, columns.ra), UnitHint::hours())?;
    let dec = AngleValue::parse(field(record, columns.dec), UnitHint::degrees())?;

    let magnitude = parse_float(field(record, columns.mag)).unwrap_or_else(|| {
        log::warn!(
            "{catalog}{identifier}: unusable magnitude {:?}, using {FAINT_MAGNITUDE}",
            field(record, columns.mag)
        );
        FAINT_MAGNITUDE
    });

    let mut star = CelestialObject::new(identifier, catalog, ObjectType::Star, ra, dec)
        .with_magnitude(magnitude);

    let aliases = [
        (field(record, columns.hd), Some("HD")),
        (field(record, columns.hr), Some("HR")),
        (field(record, columns.proper_name), None),
        (field(record, columns.bayer_flamsteed), None),
    ];
    for (alias, alias_catalog) in aliases {
        if !alias.is_empty() {
            star.add_alias(alias, alias_catalog);
        }
    }

    Ok(star)
}

/// Hipparcos stars are keyed by their bare number; stars without one are
/// keyed by their full id (`HYG1`) so the two numberings cannot collide.
fn catalog_key(star: &CelestialObject) -> String {
    if star.catalog() == HIPPARCOS {
        star.identifier().to_string()
    } else {
        star.id()
    }
}

/// Stars from the HYG database, in file order
#[derive(Debug, Clone, Default)]
pub struct HygCatalog {
    stars: Catalog<CelestialObject>,
}

impl HygCatalog {
    /// Load a HYG catalog from a headered CSV stream
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);
        let columns = HygColumns::from_headers(reader.headers()?)?;

        let mut stars = Catalog::new();
        for record in reader.records() {
            let star = parse_star(&record?, &columns)?;
            stars.insert(catalog_key(&star), star);
        }

        log::debug!("Loaded {} stars from HYG catalog", stars.len());
        Ok(Self { stars })
    }

    /// Load a HYG catalog from a CSV file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        log::info!("Loading HYG catalog from {}", path.as_ref().display());
        Self::from_reader(BufReader::new(file))
    }

    pub fn get(&self, identifier: &str) -> Option<&CelestialObject> {
        self.stars.get(identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.stars.contains_key(identifier)
    }
}

impl CelestialCatalog for HygCatalog {
    fn get_object(&self, identifier: &str) -> Option<&CelestialObject> {
        self.stars.get(identifier)
    }

    fn objects(&self) -> impl Iterator<Item = &CelestialObject> {
        self.stars.values()
    }

    fn len(&self) -> usize {
        self.stars.len()
    }
}
