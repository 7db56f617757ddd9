//! Note dispatch: turning raw key events into paired attack/release
//! commands for the tone generator.
//!
//! Each key follows an Idle -> Sounding -> Idle state machine. Key-repeat
//! and stale release events are absorbed here so the generator never sees a
//! duplicate attack or a release without a prior attack.

use std::collections::BTreeMap;

use log::{debug, trace};

use crate::params::SynthParams;

/// Command seam to the external polyphonic tone generator.
///
/// The engine guarantees at most one outstanding attack per key before its
/// matching release, and never a release without a prior attack.
pub trait ToneGenerator {
    /// Start sounding `frequency`.
    fn trigger_attack(&mut self, frequency: f64);

    /// Stop sounding `frequency`.
    fn trigger_release(&mut self, frequency: f64);

    /// Apply a new parameter set. The generator owns clamping.
    fn set_params(&mut self, params: &SynthParams) {
        let _ = params;
    }
}

impl<G: ToneGenerator + ?Sized> ToneGenerator for &mut G {
    fn trigger_attack(&mut self, frequency: f64) {
        (**self).trigger_attack(frequency);
    }

    fn trigger_release(&mut self, frequency: f64) {
        (**self).trigger_release(frequency);
    }

    fn set_params(&mut self, params: &SynthParams) {
        (**self).set_params(params);
    }
}

/// Tracker of currently held keys and the frequencies they triggered.
///
/// Owns the held-note state explicitly so the engine stays testable without
/// a UI; exactly one logical thread is expected to drive it.
#[derive(Debug, Default)]
pub struct NoteDispatcher {
    /// Held key -> frequency recorded at attack time.
    active: BTreeMap<char, f64>,
}

impl NoteDispatcher {
    /// Create a dispatcher with no held keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Key-down for `key` at `frequency`.
    ///
    /// A key that is already sounding is ignored, which collapses key-repeat
    /// into a single attack. Otherwise the key transitions to Sounding and
    /// the generator receives one attack.
    pub fn note_on<G: ToneGenerator>(&mut self, key: char, frequency: f64, generator: &mut G) {
        if self.active.contains_key(&key) {
            debug!("duplicate attack for key '{}' ignored", key);
            return;
        }
        self.active.insert(key, frequency);
        generator.trigger_attack(frequency);
    }

    /// Key-up for `key`.
    ///
    /// Releases the frequency recorded at attack time, not the key's current
    /// mapping, so a scale change mid-hold cannot strand a voice. A key that
    /// is not sounding is ignored.
    pub fn note_off<G: ToneGenerator>(&mut self, key: char, generator: &mut G) {
        match self.active.remove(&key) {
            Some(frequency) => generator.trigger_release(frequency),
            None => trace!("release for idle key '{}' ignored", key),
        }
    }

    /// Force every sounding key back to Idle, releasing each held frequency.
    ///
    /// Mandatory on any re-initialization (scale or root change, teardown)
    /// so the generator is never left ringing under a stale mapping.
    pub fn release_all<G: ToneGenerator>(&mut self, generator: &mut G) {
        if self.active.is_empty() {
            return;
        }
        debug!("releasing {} held keys", self.active.len());
        for (_, frequency) in std::mem::take(&mut self.active) {
            generator.trigger_release(frequency);
        }
    }

    /// Frequency held by `key`, if it is sounding.
    pub fn held(&self, key: char) -> Option<f64> {
        self.active.get(&key).copied()
    }

    /// Whether `frequency` is currently sounding under any held key.
    ///
    /// Two keys may legitimately share a frequency where bands meet at a
    /// scale boundary; the frequency stays active until the last of them is
    /// released.
    pub fn is_frequency_active(&self, frequency: f64) -> bool {
        self.active.values().any(|&f| f == frequency)
    }

    /// The distinct sounding frequencies, ascending, for display.
    pub fn active_frequencies(&self) -> Vec<f64> {
        let mut freqs: Vec<f64> = self.active.values().copied().collect();
        freqs.sort_by(f64::total_cmp);
        freqs.dedup();
        freqs
    }

    /// Number of held keys.
    pub fn held_count(&self) -> usize {
        self.active.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        attacks: Vec<f64>,
        releases: Vec<f64>,
    }

    impl ToneGenerator for Recorder {
        fn trigger_attack(&mut self, frequency: f64) {
            self.attacks.push(frequency);
        }

        fn trigger_release(&mut self, frequency: f64) {
            self.releases.push(frequency);
        }
    }

    #[test]
    fn test_attack_release_pairing() {
        let mut dispatcher = NoteDispatcher::new();
        let mut gen = Recorder::default();

        dispatcher.note_on('a', 110.0, &mut gen);
        dispatcher.note_off('a', &mut gen);

        assert_eq!(gen.attacks, vec![110.0]);
        assert_eq!(gen.releases, vec![110.0]);
        assert_eq!(dispatcher.held_count(), 0);
    }

    #[test]
    fn test_key_repeat_single_attack() {
        let mut dispatcher = NoteDispatcher::new();
        let mut gen = Recorder::default();

        dispatcher.note_on('a', 110.0, &mut gen);
        dispatcher.note_on('a', 110.0, &mut gen);
        dispatcher.note_on('a', 110.0, &mut gen);
        assert_eq!(gen.attacks.len(), 1);

        dispatcher.note_off('a', &mut gen);
        assert_eq!(gen.releases.len(), 1);
    }

    #[test]
    fn test_release_without_attack_ignored() {
        let mut dispatcher = NoteDispatcher::new();
        let mut gen = Recorder::default();

        dispatcher.note_off('a', &mut gen);
        assert!(gen.releases.is_empty());
    }

    #[test]
    fn test_release_uses_attack_frequency() {
        let mut dispatcher = NoteDispatcher::new();
        let mut gen = Recorder::default();

        dispatcher.note_on('a', 110.0, &mut gen);
        // The mapping underneath may change mid-hold; release still uses the
        // recorded frequency.
        dispatcher.note_off('a', &mut gen);
        assert_eq!(gen.releases, vec![110.0]);
    }

    #[test]
    fn test_shared_frequency_stays_active() {
        let mut dispatcher = NoteDispatcher::new();
        let mut gen = Recorder::default();

        dispatcher.note_on('a', 220.0, &mut gen);
        dispatcher.note_on('q', 220.0, &mut gen);
        dispatcher.note_off('a', &mut gen);
        assert!(dispatcher.is_frequency_active(220.0));
        assert_eq!(dispatcher.active_frequencies(), vec![220.0]);

        dispatcher.note_off('q', &mut gen);
        assert!(!dispatcher.is_frequency_active(220.0));
        assert!(dispatcher.active_frequencies().is_empty());
    }

    #[test]
    fn test_release_all() {
        let mut dispatcher = NoteDispatcher::new();
        let mut gen = Recorder::default();

        dispatcher.note_on('a', 110.0, &mut gen);
        dispatcher.note_on('s', 123.0, &mut gen);
        dispatcher.note_on('d', 130.0, &mut gen);
        dispatcher.release_all(&mut gen);

        assert_eq!(gen.releases.len(), 3);
        assert_eq!(dispatcher.held_count(), 0);
        assert!(dispatcher.active_frequencies().is_empty());
    }

    #[test]
    fn test_outstanding_attacks_match_held_count() {
        let mut dispatcher = NoteDispatcher::new();
        let mut gen = Recorder::default();

        dispatcher.note_on('a', 110.0, &mut gen);
        dispatcher.note_on('a', 110.0, &mut gen);
        dispatcher.note_on('s', 123.0, &mut gen);
        dispatcher.note_off('x', &mut gen);

        assert_eq!(
            gen.attacks.len() - gen.releases.len(),
            dispatcher.held_count()
        );
    }
}
