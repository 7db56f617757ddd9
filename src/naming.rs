//! Frequency to note-name conversion.
//!
//! Labels use the solfège names of Nail Yavuzoğlu's theory (Do..Si) in a
//! fixed 12-tone cycle anchored at A4 = 440 Hz (MIDI 69), with an arrow
//! marker appended when a frequency sits noticeably between two semitones.

/// Reference pitch in Hz (A4).
pub const REFERENCE_FREQUENCY: f64 = 440.0;

/// MIDI note number of the reference pitch.
pub const REFERENCE_MIDI_NOTE: i32 = 69;

/// Deviations at or below this many cents are treated as in tune.
const CENTS_LOW_THRESHOLD: i32 = 10;

/// Deviations at or above this many cents round to the adjacent semitone.
const CENTS_HIGH_THRESHOLD: i32 = 90;

const NOTE_NAMES: [&str; 12] = [
    "Do", "Do♯", "Re", "Re♯", "Mi", "Fa", "Fa♯", "Sol", "Sol♯", "La", "La♯", "Si",
];

/// Convert a frequency in Hz to a note label such as `La2` or `Do♯↓3`.
///
/// The continuous pitch number is `12 * log2(f / 440) + 69`; the nearest
/// integer selects the semitone name and octave (MIDI 0 is octave -1). The
/// residual deviation in cents appends `↑` or `↓` when it falls strictly
/// between the low and high thresholds, so near-exact semitones and
/// frequencies that effectively round to the neighbor carry no marker.
///
/// Pure and deterministic: the same frequency always yields the same label.
pub fn note_name(frequency: f64) -> String {
    let midi = 12.0 * (frequency / REFERENCE_FREQUENCY).log2() + REFERENCE_MIDI_NOTE as f64;
    let rounded = midi.round();
    let cents = ((midi - rounded) * 100.0).round() as i32;

    let semitone = (rounded as i32).rem_euclid(12);
    let octave = (rounded as i32).div_euclid(12) - 1;

    let mut name = NOTE_NAMES[semitone as usize].to_string();
    if cents.abs() > CENTS_LOW_THRESHOLD && cents.abs() < CENTS_HIGH_THRESHOLD {
        name.push(if cents > 0 { '↑' } else { '↓' });
    }

    format!("{}{}", name, octave)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_pitches() {
        assert_eq!(note_name(440.0), "La4");
        assert_eq!(note_name(880.0), "La5");
        assert_eq!(note_name(220.0), "La3");
        assert_eq!(note_name(110.0), "La2");
    }

    #[test]
    fn test_middle_c() {
        // MIDI 60, ~261.63 Hz
        let freq = 440.0 * 2f64.powf((60.0 - 69.0) / 12.0);
        assert_eq!(note_name(freq), "Do4");
    }

    #[test]
    fn test_microtonal_markers() {
        // 110 * 2^(17/53) is 3.849 semitones above La2: rounds to Do#3,
        // about 15 cents flat, so it carries a down arrow.
        let freq = 110.0 * 2f64.powf(17.0 / 53.0);
        assert_eq!(note_name(freq), "Do♯↓3");

        // 110 * 2^(9/53) is 2.038 semitones above La2: rounds to Si2 with
        // under 4 cents of deviation, no marker.
        let freq = 110.0 * 2f64.powf(9.0 / 53.0);
        assert_eq!(note_name(freq), "Si2");
    }

    #[test]
    fn test_sharp_marker() {
        // 40 cents above A4 stays named La with an up arrow.
        let freq = 440.0 * 2f64.powf(0.4 / 12.0);
        assert_eq!(note_name(freq), "La↑4");

        // 60 cents above A4 rounds to La# and reads as 40 cents flat.
        let freq = 440.0 * 2f64.powf(0.6 / 12.0);
        assert_eq!(note_name(freq), "La♯↓4");
    }

    #[test]
    fn test_deterministic() {
        let freq = 110.0 * 2f64.powf(31.0 / 53.0);
        assert_eq!(note_name(freq), note_name(freq));
    }
}
