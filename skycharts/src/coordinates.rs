//! Celestial angle parsing and normalization
//!
//! Catalogs write right ascension and declination in several textual styles:
//!
//! ```text
//! Hours/minutes/seconds:     05h 35m 17.2s
//! Degrees/minutes/seconds:   -05º 23' 27"   -5° 23′ 27″   -5d 23m 27s
//! Marked decimal degrees:    -5.39083°
//! Bare numbers:              5.91952477   (unit taken from a UnitHint)
//! ```
//!
//! [`AngleValue`] detects which one it was given and fixes the degree, hour
//! and radian projections once, at construction.
//!
//! # Detection order
//!
//! The formats overlap (a colon is both a degree and a minute marker, `m` is
//! both a minute and an arcminute marker), so detection is a fixed priority
//! list and the first match wins:
//!
//! 1. sexagesimal hours (always hours, hints are ignored)
//! 2. sexagesimal degrees
//! 3. decimal degrees with a trailing degree marker
//! 4. a bare number, interpreted through the [`UnitHint`]
//!
//! Patterns 1-3 match a prefix of the input, anything after the final marker
//! is ignored.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::errors::{CatalogError, Result};

/// Degrees per hour of right ascension
pub const DEGREES_PER_HOUR: f64 = 15.0;

static HMS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?)([0-9]+)[hH] ?([0-9]+)[mM] ?([0-9.]+)[sS]")
        .expect("hms pattern is valid")
});

static DMS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^([+-]?)([0-9]+)[°ºdD:] ?([0-9]+)[′'mM:] ?([0-9.]+)[″"sS]"#)
        .expect("dms pattern is valid")
});

static MARKED_DEGREES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([+-]?[0-9.]+)[°ºdD]").expect("degree pattern is valid"));

/// The unit an angle was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    Hours,
    Degrees,
}

/// Caller's hint for how to read a bare number.
///
/// Hints are only consulted when the input carries no unit markers. When
/// both are set, hours wins. When neither is set the value is read as degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnitHint {
    pub assume_hours: bool,
    pub assume_degrees: bool,
}

impl UnitHint {
    /// No hint; bare numbers are taken as degrees
    pub fn none() -> Self {
        Self::default()
    }

    pub fn hours() -> Self {
        Self {
            assume_hours: true,
            assume_degrees: false,
        }
    }

    pub fn degrees() -> Self {
        Self {
            assume_hours: false,
            assume_degrees: true,
        }
    }

    fn unit(&self) -> AngleUnit {
        if self.assume_hours {
            AngleUnit::Hours
        } else {
            AngleUnit::Degrees
        }
    }
}

/// Which input format an angle was detected as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleFormat {
    /// `05h 35m 17.2s` or `-05º 23' 27"`
    Sexagesimal(AngleUnit),
    /// `-5.39083°`
    DecimalDegreesMarked,
    /// A plain number, in the unit chosen by the hint
    Bare(AngleUnit),
}

/// The sexagesimal breakdown of an angle as it was written.
///
/// The sign belongs to the whole value; `units` and `minutes` are the written
/// integers and `seconds` the written fractional seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sexagesimal {
    pub negative: bool,
    pub units: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl Sexagesimal {
    fn sign(&self) -> f64 {
        if self.negative {
            -1.0
        } else {
            1.0
        }
    }

    /// Decimal value in the written unit, with the sign applied to every component
    pub fn decimal(&self) -> f64 {
        self.sign()
            * (self.units + ((self.minutes * 60.0) + self.seconds) / 3600.0)
    }

    /// Signed whole units, e.g. `-5` for `-05º 23' 27"`
    pub fn signed_units(&self) -> f64 {
        self.sign() * self.units
    }
}

/// One normalized celestial angle (a right ascension or a declination).
///
/// Degrees, hours and radians are computed together when the value is built
/// and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleValue {
    degrees: f64,
    hours: f64,
    radians: f64,
    format: AngleFormat,
    sexagesimal: Option<Sexagesimal>,
    canonical: String,
}

impl AngleValue {
    /// Parse coordinate text, trying each known format in priority order.
    ///
    /// # Errors
    /// [`CatalogError::InvalidCoordinateFormat`] carrying the input when no
    /// format matches and the text is not a plain finite number.
    pub fn parse(input: &str, hint: UnitHint) -> Result<Self> {
        let invalid = || CatalogError::InvalidCoordinateFormat(input.to_string());

        if let Some(caps) = HMS_RE.captures(input) {
            let parts = sexagesimal_from_captures(&caps).ok_or_else(invalid)?;
            return Ok(Self::from_sexagesimal(parts, AngleUnit::Hours));
        }

        if let Some(caps) = DMS_RE.captures(input) {
            let parts = sexagesimal_from_captures(&caps).ok_or_else(invalid)?;
            return Ok(Self::from_sexagesimal(parts, AngleUnit::Degrees));
        }

        if let Some(caps) = MARKED_DEGREES_RE.captures(input) {
            let degrees: f64 = caps[1].parse().map_err(|_| invalid())?;
            return Ok(Self::build(
                degrees,
                degrees / DEGREES_PER_HOUR,
                AngleFormat::DecimalDegreesMarked,
                None,
            ));
        }

        match input.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Self::from_number(value, hint)),
            _ => Err(invalid()),
        }
    }

    /// Build from a plain number, reading it in the unit chosen by `hint`
    pub fn from_number(value: f64, hint: UnitHint) -> Self {
        let unit = hint.unit();
        let (degrees, hours) = match unit {
            AngleUnit::Hours => (value * DEGREES_PER_HOUR, value),
            AngleUnit::Degrees => (value, value / DEGREES_PER_HOUR),
        };
        Self::build(degrees, hours, AngleFormat::Bare(unit), None)
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_number(degrees, UnitHint::degrees())
    }

    pub fn from_hours(hours: f64) -> Self {
        Self::from_number(hours, UnitHint::hours())
    }

    fn from_sexagesimal(parts: Sexagesimal, unit: AngleUnit) -> Self {
        let value = parts.decimal();
        let (degrees, hours) = match unit {
            AngleUnit::Hours => (value * DEGREES_PER_HOUR, value),
            AngleUnit::Degrees => (value, value / DEGREES_PER_HOUR),
        };
        Self::build(degrees, hours, AngleFormat::Sexagesimal(unit), Some(parts))
    }

    fn build(
        degrees: f64,
        hours: f64,
        format: AngleFormat,
        sexagesimal: Option<Sexagesimal>,
    ) -> Self {
        let mut value = Self {
            degrees,
            hours,
            radians: degrees.to_radians(),
            format,
            sexagesimal,
            canonical: String::new(),
        };
        value.canonical = value.render_canonical();
        value
    }

    fn render_canonical(&self) -> String {
        match (self.format, self.sexagesimal) {
            (AngleFormat::Sexagesimal(unit), Some(parts)) => {
                let sign = if parts.negative { "-" } else { "" };
                let (u, m, s) = match unit {
                    AngleUnit::Hours => ("h", "m", "s"),
                    AngleUnit::Degrees => ("°", "′", "″"),
                };
                format!(
                    "{sign}{}{u} {}{m} {}{s}",
                    parts.units, parts.minutes, parts.seconds
                )
            }
            (AngleFormat::Bare(AngleUnit::Hours), _) => self.hours.to_string(),
            _ => self.degrees.to_string(),
        }
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn hours(&self) -> f64 {
        self.hours
    }

    pub fn radians(&self) -> f64 {
        self.radians
    }

    pub fn format(&self) -> AngleFormat {
        self.format
    }

    /// The unit the value was written in
    pub fn unit(&self) -> AngleUnit {
        match self.format {
            AngleFormat::Sexagesimal(unit) | AngleFormat::Bare(unit) => unit,
            AngleFormat::DecimalDegreesMarked => AngleUnit::Degrees,
        }
    }

    /// The value in the unit it was written in
    pub fn value(&self) -> f64 {
        match self.unit() {
            AngleUnit::Hours => self.hours,
            AngleUnit::Degrees => self.degrees,
        }
    }

    /// The sexagesimal breakdown, present only for sexagesimal input
    pub fn sexagesimal(&self) -> Option<&Sexagesimal> {
        self.sexagesimal.as_ref()
    }

    /// Canonical text form of the angle
    pub fn as_str(&self) -> &str {
        &self.canonical
    }
}

fn sexagesimal_from_captures(caps: &regex::Captures) -> Option<Sexagesimal> {
    Some(Sexagesimal {
        negative: &caps[1] == "-",
        units: caps[2].parse().ok()?,
        minutes: caps[3].parse().ok()?,
        seconds: caps[4].parse().ok()?,
    })
}

impl FromStr for AngleValue {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, UnitHint::none())
    }
}

impl fmt::Display for AngleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl Serialize for AngleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;
    use std::f64::consts::PI;

    // M42, the Orion Nebula
    const M42_DEC_DEGREES: f64 = -5.39083;
    const M42_DEC_RADIANS: f64 = -0.09409;

    #[test]
    fn test_hours_minutes_seconds() {
        let ra: AngleValue = "05h 35m 17.2s".parse().unwrap();

        assert_eq!(ra.format(), AngleFormat::Sexagesimal(AngleUnit::Hours));
        assert_abs_diff_eq!(ra.hours(), 5.58811, epsilon = 1e-5);
        assert_abs_diff_eq!(ra.radians(), 1.463, epsilon = 1e-3);
        assert_abs_diff_eq!(ra.degrees(), ra.hours() * 15.0, epsilon = 1e-9);
    }

    #[test]
    fn test_hours_format_ignores_degree_hint() {
        let ra = AngleValue::parse("13h 29m 52.1s", UnitHint::degrees()).unwrap();
        assert_eq!(ra.unit(), AngleUnit::Hours);
        assert_abs_diff_eq!(ra.hours(), 13.497806, epsilon = 1e-5);
    }

    #[rstest]
    #[case("0h 0m 0s")]
    #[case("05h 35m 17.2s")]
    #[case("12H30M15S")]
    #[case("23h 59m 59.999s")]
    #[case("-01h 30m 0s")]
    fn test_hour_projections_agree(#[case] text: &str) {
        let angle: AngleValue = text.parse().unwrap();
        assert_abs_diff_eq!(angle.degrees(), angle.hours() * 15.0, epsilon = 1e-5);
        assert_abs_diff_eq!(angle.radians(), angle.degrees() * PI / 180.0, epsilon = 1e-5);
    }

    #[rstest]
    #[case("-05º 23' 27\"")]
    #[case("-5° 23′ 27″")]
    #[case("-5d 23m 27s")]
    #[case("-5D 23M 27S")]
    #[case("-5:23:27\"")]
    #[case("-5° 23' 27s")]
    fn test_degree_marker_variants_agree(#[case] text: &str) {
        let dec: AngleValue = text.parse().unwrap();

        assert_eq!(dec.format(), AngleFormat::Sexagesimal(AngleUnit::Degrees));
        assert_abs_diff_eq!(dec.degrees(), M42_DEC_DEGREES, epsilon = 1e-5);
        assert_abs_diff_eq!(dec.radians(), M42_DEC_RADIANS, epsilon = 1e-5);
    }

    #[test]
    fn test_sign_applies_to_whole_value() {
        let dec: AngleValue = "-0° 30' 0\"".parse().unwrap();
        assert_abs_diff_eq!(dec.degrees(), -0.5, epsilon = 1e-12);

        let parts = dec.sexagesimal().unwrap();
        assert!(parts.negative);
        assert_eq!(parts.units, 0.0);
        assert_eq!(parts.minutes, 30.0);

        let dec: AngleValue = "+47º 11' 43\"".parse().unwrap();
        assert_abs_diff_eq!(dec.degrees(), 47.195278, epsilon = 1e-5);
        assert!(!dec.sexagesimal().unwrap().negative);
    }

    #[test]
    fn test_wide_integer_fields() {
        let ra: AngleValue = "99999999999h 0m 0s".parse().unwrap();
        assert_eq!(ra.hours(), 99999999999.0);
        assert_eq!(ra.degrees(), 99999999999.0 * DEGREES_PER_HOUR);
        assert_eq!(ra.to_string(), "99999999999h 0m 0s");
    }

    #[test]
    fn test_marked_decimal_degrees() {
        let dec: AngleValue = "-5.39083°".parse().unwrap();
        assert_eq!(dec.format(), AngleFormat::DecimalDegreesMarked);
        assert_eq!(dec.degrees(), -5.39083);
        assert_abs_diff_eq!(dec.radians(), M42_DEC_RADIANS, epsilon = 1e-5);
        assert!(dec.sexagesimal().is_none());
    }

    #[test]
    fn test_sexagesimal_matches_decimal_text() {
        let dms: AngleValue = "-05º 23' 27\"".parse().unwrap();
        let decimal: AngleValue = "-5.39083d".parse().unwrap();
        assert_abs_diff_eq!(dms.degrees(), decimal.degrees(), epsilon = 1e-5);
        assert_abs_diff_eq!(dms.radians(), decimal.radians(), epsilon = 1e-5);
    }

    #[test]
    fn test_bare_numbers_follow_hint() {
        let ra = AngleValue::parse("5.91952477", UnitHint::hours()).unwrap();
        assert_eq!(ra.hours(), 5.91952477);
        assert_abs_diff_eq!(ra.degrees(), 88.79287155, epsilon = 1e-8);
        assert_eq!(ra.format(), AngleFormat::Bare(AngleUnit::Hours));

        let dec = AngleValue::parse("07.40703634", UnitHint::degrees()).unwrap();
        assert_eq!(dec.degrees(), 7.40703634);

        let plain = AngleValue::parse(" 12.5 ", UnitHint::none()).unwrap();
        assert_eq!(plain.degrees(), 12.5);
        assert_eq!(plain.unit(), AngleUnit::Degrees);
    }

    #[test]
    fn test_from_number() {
        let dec = AngleValue::from_number(M42_DEC_DEGREES, UnitHint::degrees());
        assert_eq!(dec.degrees(), M42_DEC_DEGREES);
        assert_abs_diff_eq!(dec.radians(), M42_DEC_RADIANS, epsilon = 1e-5);

        let ra = AngleValue::from_hours(6.0);
        assert_eq!(ra.degrees(), 90.0);
        assert_abs_diff_eq!(ra.radians(), PI / 2.0, epsilon = 1e-12);
    }

    #[rstest]
    #[case("I'm clearly not a coordinate")]
    #[case("")]
    #[case("   ")]
    #[case("NaN")]
    #[case("12:30:15")]
    #[case("1.2.3°")]
    fn test_rejects_unrecognized_input(#[case] text: &str) {
        match text.parse::<AngleValue>() {
            Err(CatalogError::InvalidCoordinateFormat(input)) => assert_eq!(input, text),
            other => panic!("expected InvalidCoordinateFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_canonical_strings() {
        let ra: AngleValue = "05h 35m 17.2s".parse().unwrap();
        assert_eq!(ra.to_string(), "5h 35m 17.2s");

        let dec: AngleValue = "-05º 23' 27\"".parse().unwrap();
        assert_eq!(dec.to_string(), "-5° 23′ 27″");

        let bare = AngleValue::from_hours(5.5);
        assert_eq!(bare.as_str(), "5.5");
    }

    #[test]
    fn test_serializes_as_degrees() {
        let ra = AngleValue::from_hours(2.0);
        assert_eq!(serde_json::to_string(&ra).unwrap(), "30.0");
    }
}
