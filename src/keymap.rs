//! Keyboard mapping: three octave bands of physical keys aligned to
//! contiguous slices of the generated scale.
//!
//! The pools follow the three letter rows of a Turkish-Q keyboard. Each band
//! reads one `scale_length`-sized block of the generated frequency sequence,
//! so the middle row plays the root octave with the rows below and above an
//! octave down and up.

use crate::naming::note_name;
use crate::scale::GeneratedScale;

/// Keys for the octave-up band (top letter row).
pub const UP_KEY_POOL: &[char] = &['q', 'w', 'e', 'r', 't', 'y', 'u', 'ı', 'o', 'p', 'ğ', 'ü'];

/// Keys for the base band (home row).
pub const BASE_KEY_POOL: &[char] = &['a', 's', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'ş', 'i', ','];

/// Keys for the octave-down band (bottom letter row).
pub const DOWN_KEY_POOL: &[char] = &['z', 'x', 'c', 'v', 'b', 'n', 'm', 'ö', 'ç', '.'];

/// One of the three octave-aligned key bands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Band {
    /// Bottom row, one octave below the root octave.
    Down,
    /// Home row, the root octave.
    Base,
    /// Top row, one octave above the root octave.
    Up,
}

impl Band {
    /// Which contiguous `scale_length`-sized block of the generated scale
    /// this band reads from.
    pub fn slot(self) -> usize {
        match self {
            Band::Down => 0,
            Band::Base => 1,
            Band::Up => 2,
        }
    }

    /// The fixed key pool backing this band.
    pub fn key_pool(self) -> &'static [char] {
        match self {
            Band::Down => DOWN_KEY_POOL,
            Band::Base => BASE_KEY_POOL,
            Band::Up => UP_KEY_POOL,
        }
    }
}

/// A single key bound to a position in the generated scale.
///
/// A mapping whose `scale_index` falls outside the generated frequencies is
/// inert: it carries no frequency or label and must never trigger a note.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyMapping {
    /// Physical key identifier.
    pub key: char,

    /// Absolute index into the generated scale's frequency sequence.
    pub scale_index: usize,

    /// Mapped frequency in Hz, absent when `scale_index` is out of bounds.
    pub frequency: Option<f64>,

    /// Display label for the mapped note, empty for inert mappings.
    pub label: String,
}

impl KeyMapping {
    /// Whether this mapping can trigger a note.
    pub fn is_playable(&self) -> bool {
        self.frequency.is_some()
    }
}

/// The three band mappings, always derived together.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BandMappings {
    /// Octave-down band.
    pub down: Vec<KeyMapping>,
    /// Base band.
    pub base: Vec<KeyMapping>,
    /// Octave-up band.
    pub up: Vec<KeyMapping>,
}

impl BandMappings {
    /// Derive all three bands from a generated scale.
    ///
    /// `scale_length` is the number of distinct notes per octave
    /// (`steps.len() + 1`). Each pool is truncated to
    /// `min(pool capacity, scale_length)` so the visible key count matches
    /// the notes available in the band; a shorter scale never leaves dead
    /// keys showing.
    ///
    /// This is the single recompute point for every scale or root change,
    /// which keeps the three bands consistent with each other by
    /// construction.
    pub fn derive(scale: &GeneratedScale, scale_length: usize) -> Self {
        Self {
            down: map_band(scale, scale_length, Band::Down),
            base: map_band(scale, scale_length, Band::Base),
            up: map_band(scale, scale_length, Band::Up),
        }
    }

    /// Mappings for one band.
    pub fn band(&self, band: Band) -> &[KeyMapping] {
        match band {
            Band::Down => &self.down,
            Band::Base => &self.base,
            Band::Up => &self.up,
        }
    }

    /// Find the mapping for a key across all three bands.
    pub fn find(&self, key: char) -> Option<&KeyMapping> {
        self.down
            .iter()
            .chain(self.base.iter())
            .chain(self.up.iter())
            .find(|m| m.key == key)
    }
}

fn map_band(scale: &GeneratedScale, scale_length: usize, band: Band) -> Vec<KeyMapping> {
    let pool = band.key_pool();
    let count = pool.len().min(scale_length);

    pool[..count]
        .iter()
        .enumerate()
        .map(|(i, &key)| {
            let scale_index = band.slot() * scale_length + i;
            let frequency = scale.get(scale_index);
            let label = frequency.map(note_name).unwrap_or_default();
            KeyMapping {
                key,
                scale_index,
                frequency,
                label,
            }
        })
        .collect()
}
