//! Sky chart catalog tooling
//!
//! This crate loads star, deep-sky and constellation line catalogs into a
//! common object model and encodes them as GeoJSON for chart rendering.
//! Coordinates in any of the common sexagesimal or decimal notations are
//! normalized through [`coordinates::AngleValue`].

pub mod catalogs;
pub mod coordinates;
pub mod data;
pub mod errors;
pub mod export;
pub mod features;
pub mod objects;
pub mod shared_args;

pub use catalogs::{CelestialCatalog, ConstellationCatalog, HygCatalog, NgcCatalog};
pub use coordinates::{AngleValue, UnitHint};
pub use errors::{CatalogError, Result};
pub use export::{ExportOptions, ExportSources};
pub use features::{Feature, FeatureCollection};
pub use objects::{CelestialObject, ObjectType};
