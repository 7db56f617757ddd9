//! Scale construction: interval steps to an ordered multi-octave frequency
//! sequence.

use log::debug;

use crate::error::EngineError;
use crate::OCTAVE_DIVISIONS;

/// Lowest octave offset included in a generated scale, relative to the root.
pub const MIN_OCTAVE: i32 = -1;

/// Highest octave offset included in a generated scale, relative to the root.
pub const MAX_OCTAVE: i32 = 2;

/// Number of octave offsets covered by a generated scale.
pub const OCTAVE_COUNT: usize = (MAX_OCTAVE - MIN_OCTAVE + 1) as usize;

/// A fully derived, ascending frequency scale spanning several octaves.
///
/// Rebuilt from scratch whenever the maqam selection or the root frequency
/// changes; there is no incremental update path.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedScale {
    /// Root frequency the scale was built from, in Hz.
    pub root_frequency: f64,

    /// Ascending absolute frequencies in Hz. Length is
    /// `(steps.len() + 1) * OCTAVE_COUNT`, or zero for an empty step table.
    pub frequencies: Vec<f64>,
}

impl GeneratedScale {
    /// Build a scale from a maqam step table and a root frequency.
    ///
    /// Starting at the root, each step multiplies the running frequency by
    /// `2^(step / 53)`, yielding one octave of `steps.len() + 1` frequencies
    /// including the root. That base octave is then replicated across every
    /// octave offset in `MIN_OCTAVE..=MAX_OCTAVE` and the result sorted
    /// ascending.
    ///
    /// Empty `steps` produce an empty scale so dependent components degrade
    /// to "no notes mapped". A non-positive root is a configuration error.
    pub fn build(steps: &[u32], root_frequency: f64) -> Result<Self, EngineError> {
        if root_frequency <= 0.0 || !root_frequency.is_finite() {
            return Err(EngineError::InvalidRootFrequency(root_frequency));
        }

        if steps.is_empty() {
            return Ok(Self {
                root_frequency,
                frequencies: Vec::new(),
            });
        }

        let mut base_octave = Vec::with_capacity(steps.len() + 1);
        let mut current = root_frequency;
        base_octave.push(current);
        for &step in steps {
            current *= 2f64.powf(step as f64 / OCTAVE_DIVISIONS as f64);
            base_octave.push(current);
        }

        let mut frequencies = Vec::with_capacity(base_octave.len() * OCTAVE_COUNT);
        for octave in MIN_OCTAVE..=MAX_OCTAVE {
            let factor = 2f64.powi(octave);
            frequencies.extend(base_octave.iter().map(|f| f * factor));
        }
        frequencies.sort_by(f64::total_cmp);

        debug!(
            "built scale: root {:.2} Hz, {} steps, {} frequencies",
            root_frequency,
            steps.len(),
            frequencies.len()
        );

        Ok(Self {
            root_frequency,
            frequencies,
        })
    }

    /// An empty scale, used when no maqam is selected.
    pub fn empty() -> Self {
        Self {
            root_frequency: crate::ROOT_FREQUENCY,
            frequencies: Vec::new(),
        }
    }

    /// Frequency at `index`, or `None` when the index is out of bounds.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.frequencies.get(index).copied()
    }

    /// Number of frequencies in the scale.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Whether the scale contains no frequencies.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}
