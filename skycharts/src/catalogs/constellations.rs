//! Constellation line catalog loader
//!
//! Each row of a constellation line file is one connected stick-figure line:
//!
//! ```text
//! ORI,5.679444,-1.9500,5.603333,-1.2000,5.533611,-0.3000
//! ```
//!
//! The first field is the IAU abbreviation, followed by alternating right
//! ascension (decimal hours) and declination (decimal degrees) values. Rows
//! sharing an abbreviation accumulate into one [`Constellation`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::StringRecord;

use super::Catalog;
use crate::coordinates::{AngleValue, UnitHint};
use crate::data::constellation_name;
use crate::errors::{CatalogError, Result};
use crate::objects::Position;

/// A line through one or more positions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    pub positions: Vec<Position>,
}

impl Line {
    pub fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// The set of lines that draw one constellation
#[derive(Debug, Clone, PartialEq)]
pub struct Constellation {
    pub abbreviation: String,
    pub name: String,
    pub lines: Vec<Line>,
}

impl Constellation {
    pub fn new(abbreviation: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            abbreviation: abbreviation.into(),
            name: name.into(),
            lines: Vec::new(),
        }
    }
}

/// Parse one row into its abbreviation and line
fn parse_line(record: &StringRecord, row: usize) -> Result<(String, Line)> {
    let abbreviation = record.get(0).unwrap_or("").trim().to_ascii_uppercase();
    let values: Vec<&str> = record.iter().skip(1).map(str::trim).collect();

    if values.len() % 2 != 0 {
        return Err(CatalogError::Malformed {
            row,
            reason: format!(
                "{abbreviation} has {} coordinate values, expected ra,dec pairs",
                values.len()
            ),
        });
    }

    let positions = values
        .chunks_exact(2)
        .map(|pair| {
            let ra = AngleValue::parse(pair[0], UnitHint::hours())?;
            let dec = AngleValue::parse(pair[1], UnitHint::degrees())?;
            Ok(Position::new(ra, dec))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((abbreviation, Line::new(positions)))
}

/// Constellations keyed by upper-case abbreviation, in order of first appearance
#[derive(Debug, Clone, Default)]
pub struct ConstellationCatalog {
    constellations: Catalog<Constellation>,
}

impl ConstellationCatalog {
    /// Load constellation lines from a headerless CSV stream
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut constellations: Catalog<Constellation> = Catalog::new();
        for (row, record) in reader.records().enumerate() {
            let (abbreviation, line) = parse_line(&record?, row + 1)?;

            if !constellations.contains_key(&abbreviation) {
                let name = constellation_name(&abbreviation).ok_or_else(|| {
                    CatalogError::UnknownConstellationAbbreviation(abbreviation.clone())
                })?;
                constellations.insert(
                    abbreviation.clone(),
                    Constellation::new(abbreviation.clone(), name),
                );
            }

            if let Some(constellation) = constellations.get_mut(&abbreviation) {
                constellation.lines.push(line);
            }
        }

        log::debug!(
            "Loaded {} constellations from line catalog",
            constellations.len()
        );
        Ok(Self { constellations })
    }

    /// Load constellation lines from a CSV file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        log::info!(
            "Loading constellation lines from {}",
            path.as_ref().display()
        );
        Self::from_reader(BufReader::new(file))
    }

    pub fn get(&self, abbreviation: &str) -> Option<&Constellation> {
        self.constellations.get(abbreviation)
    }

    pub fn contains(&self, abbreviation: &str) -> bool {
        self.constellations.contains_key(abbreviation)
    }

    pub fn constellations(&self) -> impl Iterator<Item = &Constellation> {
        self.constellations.values()
    }

    pub fn len(&self) -> usize {
        self.constellations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constellations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const ORION: &str = "ORI,4.843611,8.9000,4.830833,6.9500,4.853611,5.6000,4.904167,2.4500,4.975833,1.7167,5.418889,6.3500,5.533611,-0.3000,5.408056,-2.3833,5.293333,-6.8500,5.242222,-8.2000,5.796111,-9.6667,5.679444,-1.9500,5.919444,7.4000,5.585556,9.9333,5.418889,6.3500
ORI,5.679444,-1.9500,5.603333,-1.2000,5.533611,-0.3000
ORI,5.919444,7.4000,6.039722,9.6500,6.126389,14.7667,5.906389,20.2667
ORI,6.039722,9.6500,6.198889,14.2167,6.065278,20.1333";

    #[test]
    fn test_rows_accumulate_into_lines() {
        let catalog = ConstellationCatalog::from_reader(ORION.as_bytes()).unwrap();
        assert!(catalog.contains("ORI"));
        assert_eq!(catalog.len(), 1);

        let orion = catalog.get("ORI").unwrap();
        assert_eq!(orion.name, "Orion");
        assert_eq!(orion.lines.len(), 4);

        let counts: Vec<usize> = orion.lines.iter().map(Line::len).collect();
        assert_eq!(counts, vec![15, 3, 4, 3]);
    }

    #[test]
    fn test_positions_are_hours_and_degrees() {
        let catalog = ConstellationCatalog::from_reader(ORION.as_bytes()).unwrap();
        let first = &catalog.get("ORI").unwrap().lines[1].positions[0];

        assert_eq!(first.ra.hours(), 5.679444);
        assert_abs_diff_eq!(first.ra.degrees(), 85.19166, epsilon = 1e-5);
        assert_eq!(first.dec.degrees(), -1.95);
    }

    #[test]
    fn test_constellations_keep_first_appearance_order() {
        let data = "UMA,11.062,61.751,11.031,56.382\nori,5.679444,-1.9500,5.603333,-1.2000\nUMA,12.257,57.033,11.897,53.695";
        let catalog = ConstellationCatalog::from_reader(data.as_bytes()).unwrap();

        let order: Vec<&str> = catalog
            .constellations()
            .map(|c| c.abbreviation.as_str())
            .collect();
        assert_eq!(order, vec!["UMA", "ORI"]);
        assert_eq!(catalog.get("UMA").unwrap().lines.len(), 2);
    }

    #[test]
    fn test_unknown_abbreviation_fails() {
        let data = "ORI,5.679444,-1.9500\nXXX,1.0,2.0";
        match ConstellationCatalog::from_reader(data.as_bytes()) {
            Err(CatalogError::UnknownConstellationAbbreviation(abbr)) => assert_eq!(abbr, "XXX"),
            other => panic!("expected UnknownConstellationAbbreviation, got {other:?}"),
        }
    }

    #[test]
    fn test_odd_value_count_fails() {
        let data = "ORI,5.679444,-1.9500,5.603333";
        assert!(matches!(
            ConstellationCatalog::from_reader(data.as_bytes()),
            Err(CatalogError::Malformed { row: 1, .. })
        ));
    }

    #[test]
    fn test_bad_coordinate_fails() {
        let data = "ORI,5.679444,north";
        assert!(matches!(
            ConstellationCatalog::from_reader(data.as_bytes()),
            Err(CatalogError::InvalidCoordinateFormat(text)) if text == "north"
        ));
    }
}
