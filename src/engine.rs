//! Top-level engine: maqam selection, root control, band mappings and key
//! dispatch against an owned tone generator.

use log::{debug, warn};

use crate::dispatch::{NoteDispatcher, ToneGenerator};
use crate::error::EngineError;
use crate::intervals::IntervalTable;
use crate::keymap::{Band, BandMappings, KeyMapping};
use crate::params::SynthParams;
use crate::scale::GeneratedScale;
use crate::ROOT_FREQUENCY;

/// One key of a band view, with its activity flag for display.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyState<'a> {
    /// The key's mapping into the generated scale.
    pub mapping: &'a KeyMapping,

    /// Whether the key's frequency is currently sounding.
    pub active: bool,
}

/// The playable instrument core.
///
/// Owns the generated scale, the three band mappings and the held-note
/// state, and drives the tone generator behind the [`ToneGenerator`] seam.
/// All state is in-memory and rebuilt from the interval catalog on every
/// selection change; nothing is persisted.
///
/// Scale and root changes are synchronous: held notes are released and all
/// three bands recomputed before the method returns, so no key event can
/// ever observe one band on the old scale and another on the new one.
pub struct MaqamEngine<G: ToneGenerator> {
    generator: G,
    params: SynthParams,
    maqam: String,
    root_frequency: f64,
    scale_length: usize,
    scale: GeneratedScale,
    mappings: BandMappings,
    dispatcher: NoteDispatcher,
}

impl<G: ToneGenerator> MaqamEngine<G> {
    /// Default maqam selected at startup.
    pub const DEFAULT_MAQAM: &'static str = "Rast";

    /// Create an engine with the default maqam, root and parameters.
    pub fn new(generator: G) -> Self {
        let mut engine = Self {
            generator,
            params: SynthParams::default(),
            maqam: Self::DEFAULT_MAQAM.to_string(),
            root_frequency: ROOT_FREQUENCY,
            scale_length: 0,
            scale: GeneratedScale::empty(),
            mappings: BandMappings::default(),
            dispatcher: NoteDispatcher::new(),
        };
        engine.generator.set_params(&engine.params);
        engine.reinitialize();
        engine
    }

    /// Select a maqam by name.
    ///
    /// An unknown name is rejected and the previous selection stays active.
    /// On success every held note is released before the new mappings become
    /// triggerable.
    pub fn select_maqam(&mut self, name: &str) -> Result<(), EngineError> {
        if IntervalTable::lookup(name).is_none() {
            warn!("ignoring selection of unknown maqam \"{}\"", name);
            return Err(EngineError::UnknownScale(name.to_string()));
        }
        self.maqam = name.to_string();
        self.reinitialize();
        Ok(())
    }

    /// Shift the root by a whole number of octaves from the default
    /// 110 Hz root.
    pub fn set_root_offset(&mut self, octaves: i32) {
        self.root_frequency = ROOT_FREQUENCY * 2f64.powi(octaves);
        self.reinitialize();
    }

    /// Set the root frequency directly.
    ///
    /// A non-positive or non-finite value is rejected and the last valid
    /// root is retained.
    pub fn set_root_frequency(&mut self, frequency: f64) -> Result<(), EngineError> {
        if frequency <= 0.0 || !frequency.is_finite() {
            warn!("rejecting root frequency {}", frequency);
            return Err(EngineError::InvalidRootFrequency(frequency));
        }
        self.root_frequency = frequency;
        self.reinitialize();
        Ok(())
    }

    /// Replace the synth parameter set and forward it to the generator.
    pub fn set_params(&mut self, params: SynthParams) {
        self.params = params;
        self.generator.set_params(&self.params);
    }

    /// Physical key pressed.
    ///
    /// Keys outside the current mappings, keys with an out-of-range scale
    /// index and key-repeat on a sounding key are all absorbed silently.
    pub fn on_key_down(&mut self, key: char) {
        let Some(mapping) = self.mappings.find(key) else {
            debug!("key '{}' is not part of the current mapping", key);
            return;
        };
        let Some(frequency) = mapping.frequency else {
            warn!(
                "key '{}' maps to out-of-range scale index {} (scale has {} notes)",
                key,
                mapping.scale_index,
                self.scale.len()
            );
            return;
        };
        self.dispatcher.note_on(key, frequency, &mut self.generator);
    }

    /// Physical key released. Ignored for keys that are not sounding.
    pub fn on_key_up(&mut self, key: char) {
        self.dispatcher.note_off(key, &mut self.generator);
    }

    /// Frequency-addressed press, for pointer or touch interaction with an
    /// on-screen key. `key` identifies the control for release pairing.
    pub fn on_note_down(&mut self, frequency: f64, key: char) {
        self.dispatcher.note_on(key, frequency, &mut self.generator);
    }

    /// Frequency-addressed release, the counterpart of [`on_note_down`].
    ///
    /// [`on_note_down`]: MaqamEngine::on_note_down
    pub fn on_note_up(&mut self, key: char) {
        self.dispatcher.note_off(key, &mut self.generator);
    }

    /// Release every sounding key and clear the held-note state.
    ///
    /// Called on teardown so the generator is never left with ringing
    /// voices; also runs automatically on every scale or root change.
    pub fn shutdown(&mut self) {
        self.dispatcher.release_all(&mut self.generator);
    }

    /// Name of the currently selected maqam.
    pub fn current_maqam(&self) -> &str {
        &self.maqam
    }

    /// Catalog of selectable maqam names.
    pub fn maqam_names(&self) -> Vec<&'static str> {
        IntervalTable::names().collect()
    }

    /// Current root frequency in Hz.
    pub fn root_frequency(&self) -> f64 {
        self.root_frequency
    }

    /// The generated scale currently in effect.
    pub fn scale(&self) -> &GeneratedScale {
        &self.scale
    }

    /// Notes per octave of the current scale.
    pub fn scale_length(&self) -> usize {
        self.scale_length
    }

    /// The three band mappings currently in effect.
    pub fn mappings(&self) -> &BandMappings {
        &self.mappings
    }

    /// One band's mappings with per-key activity flags for display.
    pub fn band_view(&self, band: Band) -> Vec<KeyState<'_>> {
        self.mappings
            .band(band)
            .iter()
            .map(|mapping| KeyState {
                active: mapping
                    .frequency
                    .is_some_and(|f| self.dispatcher.is_frequency_active(f)),
                mapping,
            })
            .collect()
    }

    /// The distinct sounding frequencies, ascending.
    pub fn active_frequencies(&self) -> Vec<f64> {
        self.dispatcher.active_frequencies()
    }

    /// Number of currently held keys.
    pub fn held_count(&self) -> usize {
        self.dispatcher.held_count()
    }

    /// The current parameter set.
    pub fn params(&self) -> &SynthParams {
        &self.params
    }

    /// Borrow the tone generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Mutably borrow the tone generator.
    pub fn generator_mut(&mut self) -> &mut G {
        &mut self.generator
    }

    /// Release all held notes, then rebuild the scale and all three band
    /// mappings from the current selection in one synchronous pass.
    fn reinitialize(&mut self) {
        self.dispatcher.release_all(&mut self.generator);

        let steps = IntervalTable::lookup(&self.maqam).unwrap_or(&[]);
        self.scale_length = if steps.is_empty() { 0 } else { steps.len() + 1 };
        self.scale = match GeneratedScale::build(steps, self.root_frequency) {
            Ok(scale) => scale,
            Err(err) => {
                warn!("scale rebuild failed: {}", err);
                GeneratedScale::empty()
            }
        };
        self.mappings = BandMappings::derive(&self.scale, self.scale_length);
    }
}

impl<G: ToneGenerator> Drop for MaqamEngine<G> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
