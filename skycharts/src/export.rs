//! Export of loaded catalogs to JSON text
//!
//! Output always lists HYG stars first, then NGC objects, then constellation
//! lines, each group in catalog load order.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::catalogs::{
    CelestialCatalog, Constellation, ConstellationCatalog, HygCatalog, NgcCatalog,
};
use crate::errors::{CatalogError, Result};
use crate::features::{Feature, FeatureCollection, Record};
use crate::objects::{CelestialObject, FAINT_MAGNITUDE};

/// Shape of the emitted JSON
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// A GeoJSON `FeatureCollection`
    #[default]
    GeoJson,
    /// A flat JSON array of records
    Records,
}

/// Options controlling what is exported and how it is written
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Pretty-print with this many spaces per level, compact when absent
    pub indent: Option<usize>,
    /// Mirror right ascension (`ra -> 360 - ra`) on every coordinate
    pub invert_ra: bool,
    /// Faintest magnitude kept
    pub magnitude: Option<f64>,
    /// Keep only objects known by one of these ids, when non-empty
    pub identifiers: Vec<String>,
    pub format: OutputFormat,
}

impl ExportOptions {
    /// Save to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from a JSON file; missing keys take their defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn filter(&self) -> ObjectFilter {
        ObjectFilter::new(self.magnitude, self.identifiers.clone())
    }
}

/// Selects which objects and constellations are exported
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectFilter {
    magnitude: Option<f64>,
    identifiers: Vec<String>,
}

impl ObjectFilter {
    pub fn new(magnitude: Option<f64>, identifiers: Vec<String>) -> Self {
        Self {
            magnitude,
            identifiers,
        }
    }

    /// Objects without a magnitude count as [`FAINT_MAGNITUDE`]
    pub fn accepts(&self, object: &CelestialObject) -> bool {
        if let Some(ceiling) = self.magnitude {
            if object.magnitude.unwrap_or(FAINT_MAGNITUDE) > ceiling {
                return false;
            }
        }
        self.identifiers.is_empty() || self.identifiers.iter().any(|id| object.is_known_as(id))
    }

    /// Constellations are matched on abbreviation only
    pub fn accepts_constellation(&self, constellation: &Constellation) -> bool {
        self.identifiers.is_empty()
            || self
                .identifiers
                .iter()
                .any(|id| id.eq_ignore_ascii_case(&constellation.abbreviation))
    }
}

/// The catalogs selected for one export
#[derive(Debug, Clone, Default)]
pub struct ExportSources {
    pub hyg: Option<HygCatalog>,
    pub ngc: Option<NgcCatalog>,
    pub constellations: Option<ConstellationCatalog>,
}

impl ExportSources {
    fn objects<'a>(
        &'a self,
        filter: &'a ObjectFilter,
    ) -> impl Iterator<Item = &'a CelestialObject> + 'a {
        let stars = self.hyg.iter().flat_map(|catalog| catalog.objects());
        let deep_sky = self.ngc.iter().flat_map(|catalog| catalog.objects());
        stars
            .chain(deep_sky)
            .filter(move |object| filter.accepts(object))
    }

    fn constellations<'a>(
        &'a self,
        filter: &'a ObjectFilter,
    ) -> impl Iterator<Item = &'a Constellation> + 'a {
        self.constellations
            .iter()
            .flat_map(|catalog| catalog.constellations())
            .filter(move |constellation| filter.accepts_constellation(constellation))
    }

    /// Build the GeoJSON feature collection
    pub fn features(&self, options: &ExportOptions) -> FeatureCollection {
        let filter = options.filter();
        let mut features: Vec<Feature> = self
            .objects(&filter)
            .map(CelestialObject::to_feature)
            .collect();
        features.extend(self.constellations(&filter).map(Constellation::to_feature));

        let mut collection = FeatureCollection::new(features);
        if options.invert_ra {
            collection.invert_ra();
        }
        log::debug!("Collected {} features", collection.features.len());
        collection
    }

    /// Build the flat record list
    pub fn records(&self, options: &ExportOptions) -> Vec<Record> {
        let filter = options.filter();
        let mut records: Vec<Record> = self
            .objects(&filter)
            .map(|object| Record::Object(object.into()))
            .collect();
        records.extend(
            self.constellations(&filter)
                .map(|constellation| Record::Constellation(constellation.into())),
        );

        if options.invert_ra {
            records.iter_mut().for_each(Record::invert_ra);
        }
        log::debug!("Collected {} records", records.len());
        records
    }
}

/// Serialize `value`, pretty-printed with `indent` spaces when given
pub fn to_json<T: Serialize>(value: &T, indent: Option<usize>) -> Result<String> {
    let Some(width) = indent else {
        return Ok(serde_json::to_string(value)?);
    };

    let indent = " ".repeat(width);
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    String::from_utf8(buffer).map_err(|e| {
        CatalogError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// Render the selected catalogs as JSON text
pub fn render(sources: &ExportSources, options: &ExportOptions) -> Result<String> {
    match options.format {
        OutputFormat::GeoJson => to_json(&sources.features(options), options.indent),
        OutputFormat::Records => to_json(&sources.records(options), options.indent),
    }
}
