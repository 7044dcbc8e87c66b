//! Celestial objects and their identities
//!
//! A [`CelestialObject`] is one physical thing in the sky: a star, a cluster,
//! a nebula or a galaxy. It is built from one catalog row and carries every
//! name other catalogs know it by (see [`aliases`]).

pub mod aliases;

use std::fmt;

use serde::Serialize;

use crate::coordinates::AngleValue;
pub use aliases::{AliasEntry, AliasMap};

/// Sentinel magnitude for objects whose catalog row has no usable magnitude.
///
/// Fainter than anything plotted, so defaulted objects drop out of any
/// magnitude-limited output.
pub const FAINT_MAGNITUDE: f64 = 20.0;

/// The standardized object categories used on the charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ObjectType {
    Star,
    #[serde(rename = "Double Star")]
    DoubleStar,
    #[serde(rename = "Triple Star")]
    TripleStar,
    Galaxy,
    #[serde(rename = "Open Cluster")]
    OpenCluster,
    #[serde(rename = "Globular Cluster")]
    GlobularCluster,
    #[serde(rename = "Planetary Nebula")]
    PlanetaryNebula,
    #[serde(rename = "Bright Nebula")]
    BrightNebula,
    #[serde(rename = "Milky Way")]
    MilkyWay,
    #[serde(rename = "Not Used")]
    NotUsed,
}

impl ObjectType {
    /// Human-readable category name, as emitted in JSON output
    pub fn name(&self) -> &'static str {
        match self {
            ObjectType::Star => "Star",
            ObjectType::DoubleStar => "Double Star",
            ObjectType::TripleStar => "Triple Star",
            ObjectType::Galaxy => "Galaxy",
            ObjectType::OpenCluster => "Open Cluster",
            ObjectType::GlobularCluster => "Globular Cluster",
            ObjectType::PlanetaryNebula => "Planetary Nebula",
            ObjectType::BrightNebula => "Bright Nebula",
            ObjectType::MilkyWay => "Milky Way",
            ObjectType::NotUsed => "Not Used",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Apparent size: major x minor diameter in arc minutes
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Size {
    pub major: f64,
    pub minor: f64,
}

impl Size {
    pub fn new(major: f64, minor: f64) -> Self {
        Self { major, minor }
    }

    pub fn to_array(&self) -> [f64; 2] {
        [self.major, self.minor]
    }
}

/// A position on the celestial sphere
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Position {
    pub ra: AngleValue,
    pub dec: AngleValue,
}

impl Position {
    pub fn new(ra: AngleValue, dec: AngleValue) -> Self {
        Self { ra, dec }
    }

    /// `[ra, dec]` in degrees, the GeoJSON coordinate order
    pub fn to_degrees(&self) -> [f64; 2] {
        [self.ra.degrees(), self.dec.degrees()]
    }
}

/// One object in the sky, identified by its primary catalog and identifier.
///
/// The alias map is seeded with `identifier -> catalog` at construction, so
/// the primary identity is always the first alias.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialObject {
    catalog: String,
    identifier: String,
    pub object_type: ObjectType,
    pub ra: AngleValue,
    pub dec: AngleValue,
    pub size: Option<Size>,
    pub magnitude: Option<f64>,
    /// Positional angle in degrees, mostly given for galaxies
    pub angle: Option<f64>,
    aliases: AliasMap,
}

impl CelestialObject {
    pub fn new(
        identifier: impl Into<String>,
        catalog: impl Into<String>,
        object_type: ObjectType,
        ra: AngleValue,
        dec: AngleValue,
    ) -> Self {
        let identifier = identifier.into();
        let catalog = catalog.into();
        let aliases = AliasMap::with_primary(&identifier, &catalog);
        Self {
            catalog,
            identifier,
            object_type,
            ra,
            dec,
            size: None,
            magnitude: None,
            angle: None,
            aliases,
        }
    }

    pub fn with_magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = Some(magnitude);
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_angle(mut self, angle: Option<f64>) -> Self {
        self.angle = angle;
        self
    }

    /// The primary source catalog, e.g. `HIP` or `NGC`
    pub fn catalog(&self) -> &str {
        &self.catalog
    }

    /// The identifier within the primary catalog
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// `catalog + identifier`, e.g. `HIP27989` for Betelgeuse or `NGC1976`
    /// for the Orion Nebula
    pub fn id(&self) -> String {
        format!("{}{}", self.catalog, self.identifier)
    }

    pub fn position(&self) -> Position {
        Position::new(self.ra.clone(), self.dec.clone())
    }

    /// Record another name for this object, optionally scoped to the catalog
    /// that assigned it. Aliases without a catalog are names like
    /// "The Orion Nebula".
    pub fn add_alias(&mut self, alias: &str, catalog: Option<&str>) {
        self.aliases.insert(alias, catalog);
    }

    pub fn aliases(&self) -> &AliasMap {
        &self.aliases
    }

    /// All catalogs the object appears in, primary first
    pub fn catalogs(&self) -> Vec<String> {
        self.aliases.catalogs()
    }

    /// All alias strings, primary identifier first
    pub fn alias_keys(&self) -> Vec<String> {
        self.aliases.alias_keys()
    }

    /// All aliases as `{catalog}{alias}`, or the bare alias when unscoped
    pub fn combined_aliases(&self) -> Vec<String> {
        self.aliases.combined_aliases()
    }

    /// The first alias that no catalog assigned, usually a proper name
    pub fn name(&self) -> Option<&str> {
        self.aliases
            .iter()
            .find(|entry| entry.catalog.is_none() && !entry.alias.is_empty())
            .map(|entry| entry.alias.as_str())
    }

    /// True when `name` is the object's id or one of its combined aliases
    pub fn is_known_as(&self, name: &str) -> bool {
        self.id() == name || self.aliases.iter().any(|entry| entry.combined() == name)
    }
}

impl fmt::Display for CelestialObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, mag {})",
            self.id(),
            self.object_type,
            self.magnitude
                .map(|m| m.to_string())
                .unwrap_or_else(|| "?".to_string())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orion_nebula() -> CelestialObject {
        CelestialObject::new(
            "1976",
            "NGC",
            ObjectType::BrightNebula,
            "05h 35m 17.2s".parse().unwrap(),
            "-05º 23' 27\"".parse().unwrap(),
        )
    }

    #[test]
    fn test_primary_identity_present_before_any_alias() {
        let nebula = orion_nebula();
        assert_eq!(nebula.catalogs(), vec!["NGC"]);
        assert_eq!(nebula.alias_keys(), vec!["1976"]);
        assert_eq!(nebula.id(), "NGC1976");
    }

    #[test]
    fn test_add_alias() {
        let mut nebula = orion_nebula();

        nebula.add_alias("42", Some("M"));
        assert_eq!(nebula.alias_keys(), vec!["1976", "42"]);
        assert_eq!(nebula.catalogs(), vec!["NGC", "M"]);

        nebula.add_alias("The Orion Nebula", None);
        assert_eq!(nebula.alias_keys(), vec!["1976", "42", "The Orion Nebula"]);
        assert_eq!(nebula.catalogs(), vec!["NGC", "M"]);
        assert_eq!(
            nebula.combined_aliases(),
            vec!["NGC1976", "M42", "The Orion Nebula"]
        );
    }

    #[test]
    fn test_id_is_stable_across_aliases() {
        let mut nebula = orion_nebula();
        nebula.add_alias("1976", Some("Other"));
        assert_eq!(nebula.id(), "NGC1976");
        assert_eq!(nebula.identifier(), "1976");
        assert_eq!(nebula.catalog(), "NGC");
    }

    #[test]
    fn test_name_and_lookup() {
        let mut nebula = orion_nebula();
        assert_eq!(nebula.name(), None);

        nebula.add_alias("42", Some("M"));
        nebula.add_alias("The Orion Nebula", None);
        assert_eq!(nebula.name(), Some("The Orion Nebula"));

        assert!(nebula.is_known_as("NGC1976"));
        assert!(nebula.is_known_as("M42"));
        assert!(nebula.is_known_as("The Orion Nebula"));
        assert!(!nebula.is_known_as("M43"));
        // Scoped aliases only match with their catalog prefix
        assert!(!nebula.is_known_as("42"));
    }

    #[test]
    fn test_object_type_names() {
        assert_eq!(ObjectType::OpenCluster.to_string(), "Open Cluster");
        assert_eq!(
            serde_json::to_string(&ObjectType::PlanetaryNebula).unwrap(),
            "\"Planetary Nebula\""
        );
    }
}
