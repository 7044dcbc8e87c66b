//! GeoJSON and flat JSON encoders
//!
//! Objects become `Point` features at `[ra, dec]` in degrees, constellations
//! become one `MultiLineString` feature with a sub-line per catalog row. The
//! flat record form carries the same fields without the GeoJSON envelope.

use serde::Serialize;

use crate::catalogs::{Constellation, Line};
use crate::objects::{CelestialObject, ObjectType, Position};

/// Mirror a right ascension in degrees, for projections that expect
/// longitude to increase eastward
pub fn invert_ra(ra_degrees: f64) -> f64 {
    360.0 - ra_degrees
}

fn line_coordinates(line: &Line) -> Vec<[f64; 2]> {
    line.positions.iter().map(Position::to_degrees).collect()
}

/// GeoJSON geometry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Point([f64; 2]),
    LineString(Vec<[f64; 2]>),
    MultiLineString(Vec<Vec<[f64; 2]>>),
}

impl Geometry {
    /// Apply `ra -> 360 - ra` to every coordinate
    pub fn invert_ra(&mut self) {
        let flip = |c: &mut [f64; 2]| c[0] = invert_ra(c[0]);
        match self {
            Geometry::Point(coordinate) => flip(coordinate),
            Geometry::LineString(coordinates) => coordinates.iter_mut().for_each(flip),
            Geometry::MultiLineString(lines) => lines
                .iter_mut()
                .for_each(|line| line.iter_mut().for_each(flip)),
        }
    }
}

/// Properties of a star or deep-sky object feature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectProperties {
    pub id: String,
    pub catalog: String,
    pub identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub magnitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    pub aliases: Vec<String>,
    pub catalogs: Vec<String>,
}

impl From<&CelestialObject> for ObjectProperties {
    fn from(object: &CelestialObject) -> Self {
        Self {
            id: object.id(),
            catalog: object.catalog().to_string(),
            identifier: object.identifier().to_string(),
            name: object.name().map(str::to_string),
            object_type: object.object_type,
            magnitude: object.magnitude,
            size: object.size.map(|size| size.to_array()),
            angle: object.angle,
            aliases: object.combined_aliases(),
            catalogs: object.catalogs(),
        }
    }
}

/// Properties of a constellation feature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstellationProperties {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Properties {
    Object(ObjectProperties),
    Constellation(ConstellationProperties),
    Empty {},
}

/// A GeoJSON `Feature`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    pub geometry: Geometry,
    pub properties: Properties,
}

impl Feature {
    pub fn new(geometry: Geometry, properties: Properties) -> Self {
        Self {
            kind: "Feature",
            geometry,
            properties,
        }
    }
}

/// A GeoJSON `FeatureCollection`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    kind: &'static str,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: "FeatureCollection",
            features,
        }
    }

    /// Mirror the right ascension of every point and line coordinate
    pub fn invert_ra(&mut self) {
        for feature in &mut self.features {
            feature.geometry.invert_ra();
        }
    }
}

impl CelestialObject {
    /// Point feature at `[ra, dec]` in degrees
    pub fn to_feature(&self) -> Feature {
        Feature::new(
            Geometry::Point(self.position().to_degrees()),
            Properties::Object(self.into()),
        )
    }
}

impl Line {
    /// LineString feature through the line's positions
    pub fn to_feature(&self) -> Feature {
        Feature::new(
            Geometry::LineString(line_coordinates(self)),
            Properties::Empty {},
        )
    }
}

impl Constellation {
    /// MultiLineString feature with one sub-line per line
    pub fn to_feature(&self) -> Feature {
        Feature::new(
            Geometry::MultiLineString(self.lines.iter().map(line_coordinates).collect()),
            Properties::Constellation(ConstellationProperties {
                id: self.abbreviation.clone(),
                name: self.name.clone(),
            }),
        )
    }
}

/// Flat JSON form of a star or deep-sky object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectRecord {
    #[serde(flatten)]
    pub properties: ObjectProperties,
    /// Right ascension in degrees
    pub ra: f64,
    /// Declination in degrees
    pub dec: f64,
}

impl From<&CelestialObject> for ObjectRecord {
    fn from(object: &CelestialObject) -> Self {
        Self {
            properties: object.into(),
            ra: object.ra.degrees(),
            dec: object.dec.degrees(),
        }
    }
}

/// Flat JSON form of a constellation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstellationRecord {
    pub id: String,
    pub name: String,
    pub lines: Vec<Vec<[f64; 2]>>,
}

impl From<&Constellation> for ConstellationRecord {
    fn from(constellation: &Constellation) -> Self {
        Self {
            id: constellation.abbreviation.clone(),
            name: constellation.name.clone(),
            lines: constellation.lines.iter().map(line_coordinates).collect(),
        }
    }
}

/// One entry of the flat record output
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Object(ObjectRecord),
    Constellation(ConstellationRecord),
}

impl Record {
    /// Mirror the right ascension of every coordinate in the record
    pub fn invert_ra(&mut self) {
        match self {
            Record::Object(record) => record.ra = invert_ra(record.ra),
            Record::Constellation(record) => {
                for coordinate in record.lines.iter_mut().flatten() {
                    coordinate[0] = invert_ra(coordinate[0]);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::AngleValue;
    use crate::objects::Size;
    use approx::assert_abs_diff_eq;
    use serde_json::json;

    fn betelgeuse() -> CelestialObject {
        let mut star = CelestialObject::new(
            "27989",
            "HIP",
            ObjectType::Star,
            AngleValue::from_hours(5.91952477),
            AngleValue::from_degrees(7.40703634),
        )
        .with_magnitude(0.45);
        star.add_alias("Betelgeuse", None);
        star
    }

    fn belt() -> Constellation {
        let mut orion = Constellation::new("ORI", "Orion");
        orion.lines.push(Line::new(vec![
            Position::new(AngleValue::from_hours(5.679444), AngleValue::from_degrees(-1.95)),
            Position::new(AngleValue::from_hours(5.603333), AngleValue::from_degrees(-1.2)),
        ]));
        orion.lines.push(Line::new(vec![Position::new(
            AngleValue::from_hours(6.0),
            AngleValue::from_degrees(20.0),
        )]));
        orion
    }

    #[test]
    fn test_point_feature_json() {
        let value = serde_json::to_value(betelgeuse().to_feature()).unwrap();

        assert_eq!(value["type"], "Feature");
        assert_eq!(value["geometry"]["type"], "Point");
        let coordinates = value["geometry"]["coordinates"].as_array().unwrap();
        assert_abs_diff_eq!(coordinates[0].as_f64().unwrap(), 88.79287155, epsilon = 1e-8);
        assert_abs_diff_eq!(coordinates[1].as_f64().unwrap(), 7.40703634, epsilon = 1e-12);

        assert_eq!(value["properties"]["id"], "HIP27989");
        assert_eq!(value["properties"]["name"], "Betelgeuse");
        assert_eq!(value["properties"]["type"], "Star");
        assert_eq!(value["properties"]["magnitude"], 0.45);
        assert_eq!(value["properties"]["aliases"], json!(["HIP27989", "Betelgeuse"]));
        assert_eq!(value["properties"]["catalogs"], json!(["HIP"]));
        assert!(value["properties"].get("size").is_none());
    }

    #[test]
    fn test_size_and_angle_properties() {
        let galaxy = CelestialObject::new(
            "5194",
            "NGC",
            ObjectType::Galaxy,
            AngleValue::from_hours(13.5),
            AngleValue::from_degrees(47.2),
        )
        .with_size(Size::new(11.0, 7.8))
        .with_angle(Some(163.0));

        let value = serde_json::to_value(galaxy.to_feature()).unwrap();
        assert_eq!(value["properties"]["size"], json!([11.0, 7.8]));
        assert_eq!(value["properties"]["angle"], 163.0);
        assert_eq!(value["properties"]["type"], "Galaxy");
    }

    #[test]
    fn test_constellation_multilinestring() {
        let value = serde_json::to_value(belt().to_feature()).unwrap();

        assert_eq!(value["geometry"]["type"], "MultiLineString");
        let lines = value["geometry"]["coordinates"].as_array().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].as_array().unwrap().len(), 2);
        assert_eq!(lines[1].as_array().unwrap().len(), 1);
        assert_eq!(value["properties"], json!({"id": "ORI", "name": "Orion"}));
    }

    #[test]
    fn test_line_feature() {
        let feature = belt().lines[0].to_feature();
        let value = serde_json::to_value(&feature).unwrap();
        assert_eq!(value["geometry"]["type"], "LineString");
        assert_eq!(value["properties"], json!({}));
    }

    #[test]
    fn test_invert_ra() {
        let mut collection =
            FeatureCollection::new(vec![betelgeuse().to_feature(), belt().to_feature()]);
        collection.invert_ra();

        match &collection.features[0].geometry {
            Geometry::Point(c) => assert_abs_diff_eq!(c[0], 271.20712845, epsilon = 1e-6),
            other => panic!("expected point, got {other:?}"),
        }
        match &collection.features[1].geometry {
            Geometry::MultiLineString(lines) => {
                assert_abs_diff_eq!(lines[1][0][0], 270.0, epsilon = 1e-9);
                assert_abs_diff_eq!(lines[1][0][1], 20.0, epsilon = 1e-9);
            }
            other => panic!("expected multilinestring, got {other:?}"),
        }
    }

    #[test]
    fn test_records() {
        let mut record = Record::Object((&betelgeuse()).into());
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], "HIP27989");
        assert_abs_diff_eq!(value["ra"].as_f64().unwrap(), 88.79287155, epsilon = 1e-8);
        assert!(value.get("geometry").is_none());

        record.invert_ra();
        match record {
            Record::Object(r) => assert_abs_diff_eq!(r.ra, 271.20712845, epsilon = 1e-6),
            other => panic!("expected object record, got {other:?}"),
        }

        let value = serde_json::to_value(Record::Constellation((&belt()).into())).unwrap();
        assert_eq!(value["id"], "ORI");
        assert_eq!(value["lines"].as_array().unwrap().len(), 2);
    }
}
