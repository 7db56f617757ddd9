//! Synth parameter surface passed through to the tone generator.
//!
//! The engine does not interpret these values beyond forwarding them; the
//! generator collaborator owns clamping and application. Defaults match the
//! instrument's initial UI state.

use serde::{Deserialize, Serialize};

/// Oscillator waveform for the carrier and modulator oscillators.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    /// Sine wave.
    #[default]
    Sine,
    /// Sawtooth wave.
    Sawtooth,
    /// Triangle wave.
    Triangle,
    /// Square wave.
    Square,
}

impl Waveform {
    /// Lowercase name as understood by the generator.
    pub fn as_str(self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Sawtooth => "sawtooth",
            Waveform::Triangle => "triangle",
            Waveform::Square => "square",
        }
    }
}

/// ADSR envelope times in seconds plus a sustain level.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain level, 0..=1.
    pub sustain: f64,
    /// Release time in seconds.
    pub release: f64,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            attack: 0.01,
            decay: 0.2,
            sustain: 0.5,
            release: 1.0,
        }
    }
}

/// Full parameter set for the FM tone generator and its effect chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SynthParams {
    /// Carrier oscillator waveform.
    pub oscillator: Waveform,
    /// Carrier amplitude envelope.
    pub envelope: Envelope,

    /// Modulator oscillator waveform.
    pub modulation: Waveform,
    /// Modulator envelope.
    pub modulation_envelope: Envelope,
    /// FM modulation index, >= 0.
    pub modulation_index: f64,
    /// Modulator to carrier frequency ratio, > 0.
    pub harmonicity: f64,

    /// Delay send, 0..=1.
    pub delay_mix: f64,
    /// Delay feedback amount, 0..=1.
    pub delay_feedback: f64,
    /// Reverb send, 0..=1.
    pub reverb_mix: f64,
    /// Lowpass filter cutoff in Hz.
    pub filter_cutoff: f64,
    /// Filter resonance (Q).
    pub filter_resonance: f64,
    /// Distortion amount, 0..=1.
    pub distortion: f64,
    /// Chorus depth, 0..=1.
    pub chorus_depth: f64,
}

impl Default for SynthParams {
    fn default() -> Self {
        Self {
            oscillator: Waveform::Sine,
            envelope: Envelope::default(),
            modulation: Waveform::Sine,
            modulation_envelope: Envelope::default(),
            modulation_index: 10.0,
            harmonicity: 1.0,
            delay_mix: 0.0,
            delay_feedback: 0.5,
            reverb_mix: 0.0,
            filter_cutoff: 2000.0,
            filter_resonance: 1.0,
            distortion: 0.0,
            chorus_depth: 0.0,
        }
    }
}

impl SynthParams {
    /// Distortion wet mix: fully wet whenever any distortion is dialed in.
    ///
    /// The generator contract is a binary mix here rather than a continuous
    /// function of the amount.
    pub fn distortion_wet(&self) -> f64 {
        if self.distortion > 0.0 {
            1.0
        } else {
            0.0
        }
    }

    /// Chorus wet mix: a fixed half mix whenever depth is non-zero.
    pub fn chorus_wet(&self) -> f64 {
        if self.chorus_depth > 0.0 {
            0.5
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = SynthParams::default();
        assert_eq!(params.oscillator, Waveform::Sine);
        assert_eq!(params.envelope.attack, 0.01);
        assert_eq!(params.envelope.release, 1.0);
        assert_eq!(params.modulation_index, 10.0);
        assert_eq!(params.harmonicity, 1.0);
        assert_eq!(params.filter_cutoff, 2000.0);
        assert_eq!(params.delay_feedback, 0.5);
    }

    #[test]
    fn test_wet_mix_rules() {
        let mut params = SynthParams::default();
        assert_eq!(params.distortion_wet(), 0.0);
        assert_eq!(params.chorus_wet(), 0.0);

        params.distortion = 0.3;
        params.chorus_depth = 0.7;
        assert_eq!(params.distortion_wet(), 1.0);
        assert_eq!(params.chorus_wet(), 0.5);
    }

    #[test]
    fn test_waveform_names() {
        assert_eq!(Waveform::Sine.as_str(), "sine");
        assert_eq!(Waveform::Square.as_str(), "square");
    }
}
