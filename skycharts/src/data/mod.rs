//! Static lookup tables for catalog loading
//!
//! These are the fixed name tables the loaders resolve against: IAU
//! constellation abbreviations and the HCNGC object type codes.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::objects::ObjectType;

/// IAU constellation abbreviations and their full names
pub const CONSTELLATION_NAMES: &[(&str, &str)] = &[
    ("AND", "Andromeda"),
    ("ANT", "Antlia"),
    ("APS", "Apus"),
    ("AQL", "Aquila"),
    ("AQR", "Aquarius"),
    ("ARA", "Ara"),
    ("ARI", "Aries"),
    ("AUR", "Auriga"),
    ("BOO", "Boötes"),
    ("CAE", "Caelum"),
    ("CAM", "Camelopardalis"),
    ("CAP", "Capricornus"),
    ("CAR", "Carina"),
    ("CAS", "Cassiopeia"),
    ("CEN", "Centaurus"),
    ("CEP", "Cepheus"),
    ("CET", "Cetus"),
    ("CHA", "Chamaeleon"),
    ("CIR", "Circinus"),
    ("CMA", "Canis Major"),
    ("CMI", "Canis Minor"),
    ("CNC", "Cancer"),
    ("COL", "Columba"),
    ("COM", "Coma Berenices"),
    ("CRA", "Corona Australis"),
    ("CRB", "Corona Borealis"),
    ("CRT", "Crater"),
    ("CRU", "Crux"),
    ("CRV", "Corvus"),
    ("CVN", "Canes Venatici"),
    ("CYG", "Cygnus"),
    ("DEL", "Delphinus"),
    ("DOR", "Dorado"),
    ("DRA", "Draco"),
    ("EQU", "Equuleus"),
    ("ERI", "Eridanus"),
    ("FOR", "Fornax"),
    ("GEM", "Gemini"),
    ("GRU", "Grus"),
    ("HER", "Hercules"),
    ("HOR", "Horologium"),
    ("HYA", "Hydra"),
    ("HYI", "Hydrus"),
    ("IND", "Indus"),
    ("LAC", "Lacerta"),
    ("LEO", "Leo"),
    ("LEP", "Lepus"),
    ("LIB", "Libra"),
    ("LMI", "Leo Minor"),
    ("LUP", "Lupus"),
    ("LYN", "Lynx"),
    ("LYR", "Lyra"),
    ("MEN", "Mensa"),
    ("MIC", "Microscopium"),
    ("MON", "Monoceros"),
    ("MUS", "Musca"),
    ("NOR", "Norma"),
    ("OCT", "Octans"),
    ("OPH", "Ophiuchus"),
    ("ORI", "Orion"),
    ("PAV", "Pavo"),
    ("PEG", "Pegasus"),
    ("PER", "Perseus"),
    ("PHE", "Phoenix"),
    ("PIC", "Pictor"),
    ("PSA", "Piscis Austrinus"),
    ("PSC", "Pisces"),
    ("PUP", "Puppis"),
    ("PYX", "Pyxis"),
    ("RET", "Reticulum"),
    ("SCL", "Sculptor"),
    ("SCO", "Scorpius"),
    ("SCT", "Scutum"),
    ("SER", "Serpens Cauda"),
    ("SEX", "Sextans"),
    ("SGE", "Sagitta"),
    ("SGR", "Sagittarius"),
    ("TAU", "Taurus"),
    ("TEL", "Telescopium"),
    ("TRA", "Triangulum Australe"),
    ("TRI", "Triangulum"),
    ("TUC", "Tucana"),
    ("UMA", "Ursa Major"),
    ("UMI", "Ursa Minor"),
    ("VEL", "Vela"),
    ("VIR", "Virgo"),
    ("VOL", "Volans"),
    ("VUL", "Vulpecula"),
];

/// HCNGC `ObjectType` codes and the chart category each maps to
pub const NGC_OBJECT_TYPES: &[(&str, ObjectType)] = &[
    ("*", ObjectType::Star),
    ("**", ObjectType::DoubleStar),
    ("***", ObjectType::TripleStar),
    ("Ast", ObjectType::NotUsed),
    ("Gxy", ObjectType::Galaxy),
    ("GxyCld", ObjectType::Galaxy),
    ("GC", ObjectType::GlobularCluster),
    ("HIIRgn", ObjectType::BrightNebula),
    ("Neb", ObjectType::BrightNebula),
    ("NF", ObjectType::NotUsed),
    ("OC", ObjectType::OpenCluster),
    ("PN", ObjectType::PlanetaryNebula),
    ("SNR", ObjectType::BrightNebula),
    ("MWSC", ObjectType::MilkyWay),
    ("OC+Neb", ObjectType::OpenCluster),
    ("Neb?", ObjectType::BrightNebula),
];

static CONSTELLATIONS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| CONSTELLATION_NAMES.iter().copied().collect());

static NGC_TYPES: Lazy<HashMap<&'static str, ObjectType>> =
    Lazy::new(|| NGC_OBJECT_TYPES.iter().copied().collect());

/// Full constellation name for an abbreviation, case-insensitive
pub fn constellation_name(abbreviation: &str) -> Option<&'static str> {
    CONSTELLATIONS
        .get(abbreviation.trim().to_ascii_uppercase().as_str())
        .copied()
}

/// Chart category for an HCNGC object type code (exact match)
pub fn ngc_object_type(code: &str) -> Option<ObjectType> {
    NGC_TYPES.get(code.trim()).copied()
}
