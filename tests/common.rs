use maqam53::{SynthParams, ToneGenerator};

/// Command log entry recorded by [`RecordingGenerator`].
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Attack(f64),
    Release(f64),
}

/// Tone generator stand-in that records every command it receives.
#[derive(Debug, Default)]
pub struct RecordingGenerator {
    pub commands: Vec<Command>,
    pub params: Option<SynthParams>,
}

impl RecordingGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attacks(&self) -> Vec<f64> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Attack(f) => Some(*f),
                Command::Release(_) => None,
            })
            .collect()
    }

    pub fn releases(&self) -> Vec<f64> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Release(f) => Some(*f),
                Command::Attack(_) => None,
            })
            .collect()
    }

    /// Attacks that have not yet seen a matching release.
    pub fn outstanding(&self) -> usize {
        self.attacks().len() - self.releases().len()
    }
}

impl ToneGenerator for RecordingGenerator {
    fn trigger_attack(&mut self, frequency: f64) {
        self.commands.push(Command::Attack(frequency));
    }

    fn trigger_release(&mut self, frequency: f64) {
        self.commands.push(Command::Release(frequency));
    }

    fn set_params(&mut self, params: &SynthParams) {
        self.params = Some(params.clone());
    }
}
