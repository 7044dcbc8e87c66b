//! HCNGC deep-sky catalog loader
//!
//! The Historically Corrected New General Catalogue gives coordinates as
//! sexagesimal text (`05h 35m 17.2s`, `-05º 23' 27"`), sizes as `90'X60'`
//! and a free-text list of other designations in `AlsoCatalogedAs`.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::StringRecord;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{field, find_column, parse_float, Catalog, CelestialCatalog};
use crate::coordinates::{AngleValue, UnitHint};
use crate::data::ngc_object_type;
use crate::errors::{CatalogError, Result};
use crate::objects::{CelestialObject, Size, FAINT_MAGNITUDE};

/// Primary catalog for HCNGC objects
pub const NGC: &str = "NGC";

// Major diameter, optionally followed by `x` and a minor diameter, in arc minutes
static SIZE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^([0-9.]+)['`"] ?([xX] ?([0-9.]+)['`"])?"#).expect("size pattern is valid")
});

/// Parse an HCNGC size such as `90'X60'` or `11'X7.8'`.
///
/// A missing minor diameter reads as 0. Text that does not match reads as
/// a zero size.
pub fn parse_size(text: &str) -> Size {
    let Some(caps) = SIZE_RE.captures(text.trim()) else {
        return Size::default();
    };

    let Some(major) = caps.get(1).and_then(|m| parse_float(m.as_str())) else {
        return Size::default();
    };
    match caps.get(3) {
        Some(minor) => match parse_float(minor.as_str()) {
            Some(minor) => Size::new(major, minor),
            None => Size::default(),
        },
        None => Size::new(major, 0.0),
    }
}

/// Split `AlsoCatalogedAs` text into `(alias, catalog)` pairs.
///
/// Entries are separated by commas. Each entry is split once, on its first
/// space or hyphen, into catalog and identifier; an entry with neither is an
/// alias with no catalog. The catalog does not use one separator
/// consistently, so some entries split wrongly (`MCG+08-25-012` becomes
/// catalog `MCG+08`, alias `25-012`). That output is kept as-is, as is the
/// empty alias produced by a blank entry or a blank field.
pub fn split_aliases(text: &str) -> Vec<(String, Option<String>)> {
    text.split(',')
        .map(str::trim)
        .map(|piece| match piece.split_once([' ', '-']) {
            Some((catalog, alias)) => (alias.to_string(), Some(catalog.to_string())),
            None => (piece.to_string(), None),
        })
        .collect()
}

/// Column positions resolved from the header row
struct NgcColumns {
    ngc_no: usize,
    ra: usize,
    dec: usize,
    object_type: usize,
    size: usize,
    pa: usize,
    vmag: usize,
    bmag: usize,
    also_cataloged_as: usize,
}

impl NgcColumns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        Ok(Self {
            ngc_no: find_column(headers, "NGCNo")?,
            ra: find_column(headers, "RA_2000")?,
            dec: find_column(headers, "DEC_2000")?,
            object_type: find_column(headers, "ObjectType")?,
            size: find_column(headers, "Size")?,
            pa: find_column(headers, "PA")?,
            vmag: find_column(headers, "Vmag")?,
            bmag: find_column(headers, "Bmag")?,
            also_cataloged_as: find_column(headers, "AlsoCatalogedAs")?,
        })
    }
}

/// Build one deep-sky object from an HCNGC row
fn parse_object(record: &StringRecord, columns: &NgcColumns) -> Result<CelestialObject> {
    let identifier = field(record, columns.ngc_no);

    let ra = AngleValue::parse(field(record, columns.ra), UnitHint::none())?;
    let dec = AngleValue::parse(field(record, columns.dec), UnitHint::none())?;

    let type_code = field(record, columns.object_type);
    let object_type = ngc_object_type(type_code)
        .ok_or_else(|| CatalogError::UnknownObjectType(type_code.to_string()))?;

    // Some objects only have a blue magnitude
    let magnitude = parse_float(field(record, columns.vmag))
        .or_else(|| parse_float(field(record, columns.bmag)))
        .unwrap_or(FAINT_MAGNITUDE);

    let mut object = CelestialObject::new(identifier, NGC, object_type, ra, dec)
        .with_magnitude(magnitude)
        .with_size(parse_size(field(record, columns.size)))
        .with_angle(parse_float(field(record, columns.pa)));

    for (alias, catalog) in split_aliases(field(record, columns.also_cataloged_as)) {
        object.add_alias(&alias, catalog.as_deref());
    }

    Ok(object)
}

/// Deep-sky objects from the HCNGC, keyed by NGC number, in file order
#[derive(Debug, Clone, Default)]
pub struct NgcCatalog {
    objects: Catalog<CelestialObject>,
}

impl NgcCatalog {
    /// Load an HCNGC catalog from a headered CSV stream
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);
        let columns = NgcColumns::from_headers(reader.headers()?)?;

        let mut objects = Catalog::new();
        for record in reader.records() {
            let object = parse_object(&record?, &columns)?;
            objects.insert(object.identifier().to_string(), object);
        }

        log::debug!("Loaded {} objects from NGC catalog", objects.len());
        Ok(Self { objects })
    }

    /// Load an HCNGC catalog from a CSV file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        log::info!("Loading NGC catalog from {}", path.as_ref().display());
        Self::from_reader(BufReader::new(file))
    }

    pub fn get(&self, identifier: &str) -> Option<&CelestialObject> {
        self.objects.get(identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.objects.contains_key(identifier)
    }
}

impl CelestialCatalog for NgcCatalog {
    fn get_object(&self, identifier: &str) -> Option<&CelestialObject> {
        self.objects.get(identifier)
    }

    fn objects(&self) -> impl Iterator<Item = &CelestialObject> {
        self.objects.values()
    }

    fn len(&self) -> usize {
        self.objects.len()
    }
}
