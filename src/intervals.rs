//! Interval tables for Turkish maqams in 53-tone equal temperament.
//!
//! Each maqam is an ordered sequence of step counts, every step being 1/53
//! of an octave. The catalog is fixed at compile time and read-only.

/// The maqam interval catalog, following Nail Yavuzoğlu's 53-TET theory.
///
/// Entries are `(name, steps)` where each step is a positive count of
/// 53-TET commas. Order is the presentation order of the catalog.
const MAQAM_INTERVALS: &[(&str, &[u32])] = &[
    ("Rast", &[9, 8, 5, 9, 9, 4, 4, 5]),
    ("Nahawand", &[9, 4, 9, 9, 4, 9, 9]),
    ("HicazUzzalHumayun", &[5, 12, 5, 9, 4, 4, 5, 9]),
    ("Hicazkar", &[5, 12, 5, 9, 5, 3, 5, 4, 5]),
    ("Yegah", &[9, 8, 5, 9, 8, 4, 4, 5]),
    ("SultaniyegahRuhnevaz", &[9, 4, 9, 9, 4, 9, 4, 5]),
    ("FerahnumaAskefza", &[4, 9, 9, 9, 4, 9, 9]),
    ("Sedaraban", &[5, 12, 5, 9, 5, 8, 4, 5]),
    ("Huseyniasiran", &[8, 5, 9, 8, 5, 9, 9]),
    ("Suzidil", &[5, 1, 5, 4, 4, 5, 4, 5]),
    ("Acemasiran", &[9, 9, 4, 4, 5, 9, 9, 4]),
    ("Sevkefza", &[9, 5, 4, 4, 4, 5, 5, 13, 4]),
    ("Iraq", &[5, 9, 8, 5, 9, 9, 4, 4]),
    ("EvicSegah", &[5, 9, 8, 5, 4, 5, 9, 4, 4]),
    ("Ferahnak", &[5, 9, 8, 1, 4, 4, 5, 9, 4, 4]),
    ("Evicara", &[5, 13, 4, 9, 5, 13, 4]),
    ("Mahur", &[9, 9, 4, 9, 9, 4, 5, 4]),
    ("Suzidilara", &[9, 5, 4, 4, 4, 5, 9, 4, 5, 4]),
    ("Buzurk", &[9, 9, 4, 4, 5, 9, 4, 4, 5]),
    ("Suzinak", &[5, 4, 4, 4, 5, 9, 4, 9, 9]),
    ("ZirguleliSuzinak", &[5, 12, 5, 5, 4, 4, 4, 5, 9]),
    ("Kurdilihicazkar", &[4, 1, 4, 4, 4, 5, 9, 4, 4, 5]),
    ("Nihavend", &[9, 4, 9, 5, 4, 4, 5, 8, 5]),
    ("Neveser", &[9, 5, 12, 5, 5, 12, 5]),
    ("Nikriz", &[9, 5, 12, 5, 9, 4, 4, 5]),
    ("HuseyniMuhayyer", &[8, 5, 9, 9, 4, 4, 5, 9]),
    ("GulizarBeyati", &[8, 5, 9, 5, 4, 4, 4, 5, 9]),
    ("UssakAcem", &[8, 5, 9, 9, 4, 9, 9]),
    ("Kurdi", &[4, 4, 1, 4, 9, 4, 5, 4, 9, 9]),
    ("Buselik", &[9, 4, 9, 5, 4, 4, 4, 5, 4, 5]),
    ("Arazbar", &[8, 5, 9, 5, 3, 1, 4, 4, 5, 9]),
    ("Zirgule", &[5, 12, 5, 9, 4, 1, 8, 4, 5]),
    ("Sehnaz", &[5, 12, 5, 9, 4, 1, 3, 5, 4, 5]),
    ("SabaSunbule", &[8, 5, 5, 13, 4, 9, 9]),
    ("Kucek", &[8, 5, 5, 13, 4, 4, 5, 5, 4]),
    ("EskiSipihr", &[8, 5, 5, 1, 3, 9, 4, 4, 5, 4, 5]),
    ("Dugah", &[4, 4, 5, 4, 1, 13, 4, 9, 9]),
    ("Hisar", &[8, 5, 9, 4, 5, 4, 1, 8, 4, 5]),
    ("YeniSipihr", &[5, 3, 5, 4, 5, 4, 5, 4, 1, 3, 5, 4, 5]),
    ("Nisaburek", &[9, 8, 5, 9, 5, 8, 9]),
    ("Huzzam", &[5, 9, 5, 12, 5, 9, 4, 4]),
    ("Mustear", &[9, 5, 8, 9, 5, 9, 4, 4]),
    ("MayeYeniMaye", &[5, 9, 8, 1, 4, 9, 9, 8]),
    ("VechiArazbar", &[1, 4, 9, 8, 5, 9, 9, 3, 5]),
    ("Nisabur", &[8, 5, 9, 4, 9, 9, 4, 5]),
    ("CargahI", &[5, 13, 4, 9, 5, 12, 5]),
    ("CargahII", &[9, 9, 4, 9, 9, 9, 4]),
    ("Araban", &[5, 8, 13, 5, 5, 8, 4, 5]),
    ("Urmawi", &[9, 8, 5, 9, 9, 5, 8]),
];

/// Read-only registry of maqam interval definitions.
pub struct IntervalTable;

impl IntervalTable {
    /// Look up the step sequence for a maqam by name.
    ///
    /// Returns `None` if the name is absent from the catalog. Callers must
    /// treat a miss as "no scale selected" rather than a fatal condition.
    pub fn lookup(name: &str) -> Option<&'static [u32]> {
        MAQAM_INTERVALS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, steps)| *steps)
    }

    /// All maqam names in catalog order, for selection UIs.
    pub fn names() -> impl Iterator<Item = &'static str> {
        MAQAM_INTERVALS.iter().map(|(name, _)| *name)
    }

    /// Number of maqams in the catalog.
    pub fn len() -> usize {
        MAQAM_INTERVALS.len()
    }
}
