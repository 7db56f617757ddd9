//! Microtonal maqam scale engine.
//!
//! This crate derives playable multi-octave frequency scales from Turkish
//! maqam interval tables in 53-tone equal temperament, maps them onto three
//! octave bands of a computer keyboard, labels each frequency with a solfège
//! note name plus microtonal deviation markers, and tracks held keys so that
//! an external polyphonic tone generator receives exactly one attack and one
//! matching release per physical key press.
//!
//! Sound synthesis itself is out of scope: the engine emits attack/release
//! commands and parameter updates through the [`ToneGenerator`] trait and
//! leaves rendering to the collaborator behind it.

#![warn(missing_docs)]

pub mod dispatch;
pub mod engine;
pub mod error;
pub mod intervals;
pub mod keymap;
pub mod naming;
pub mod params;
pub mod scale;

/// Number of equal divisions of the octave used by the interval tables.
pub const OCTAVE_DIVISIONS: u32 = 53;

/// Default root frequency in Hz (A2) before any octave offset is applied.
pub const ROOT_FREQUENCY: f64 = 110.0;

pub use dispatch::{NoteDispatcher, ToneGenerator};
pub use engine::{KeyState, MaqamEngine};
pub use error::EngineError;
pub use intervals::IntervalTable;
pub use keymap::{Band, BandMappings, KeyMapping, BASE_KEY_POOL, DOWN_KEY_POOL, UP_KEY_POOL};
pub use naming::note_name;
pub use params::{Envelope, SynthParams, Waveform};
pub use scale::GeneratedScale;
