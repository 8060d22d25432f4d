//! ntet - Arbitrary Equal Temperament Pitch Math
//!
//! This crate converts between three representations of musical pitch under
//! an arbitrary equal-temperament tuning: a reference-relative MIDI note
//! number, a frequency in Hz, and a Scientific Pitch Notation (SPN) note
//! name. It is a pure calculation core for tuners, synthesizers, and other
//! audio tools that need exact, deterministic pitch math.
//!
//! # Design
//!
//! - [`EqualTemperament`] is the generalized engine: three immutable scalars
//!   (reference frequency, reference MIDI number, notes per octave) and the
//!   logarithmic conversions between MIDI-number space and frequency space.
//! - [`TwelveTone`] fixes the octave at 12 divisions and layers note naming
//!   on top: octave numbers, pitch classes, and SPN parsing/formatting.
//!
//! Every operation is a pure function; tunings are plain `Copy` values that
//! can be shared freely across threads. Invalid domain input (non-positive
//! frequencies, unparseable note names) surfaces as [`PitchError`], never as
//! NaN or a silently wrong number.
//!
//! # Example
//!
//! ```
//! use ntet::TwelveTone;
//!
//! let tuning = TwelveTone::default();
//! assert_eq!(tuning.midi_to_spn(69.0), "A4");
//! assert_eq!(tuning.spn_to_midi("C#-2").unwrap(), -11);
//!
//! // Tuner-style decomposition: nearest note plus fractional detune
//! let (midi, detune) = tuning.freq_to_midi_detuned(452.0).unwrap();
//! assert_eq!(tuning.midi_to_spn(midi as f64), "A4");
//! assert!(detune > 0.0);
//! ```
//!
//! # Modules
//!
//! - [`constants`]: Default tuning parameters and the fixed name tables
//! - [`error`]: Error types for validation and conversion
//! - [`temperament`]: The generalized equal temperament engine
//! - [`twelve_tone`]: 12-ET note naming and SPN conversion

pub mod constants;
pub mod error;
pub mod temperament;
pub mod twelve_tone;


// Re-export the public surface at the crate root
pub use constants::{
    DEFAULT_NOTES_PER_OCTAVE, DEFAULT_REFERENCE_FREQ, DEFAULT_REFERENCE_MIDI, FLAT_TO_SHARP,
    PITCH_CLASS_NAMES,
};
pub use error::PitchError;
pub use temperament::{cents_to_freq_ratio, freq_ratio_to_cents, EqualTemperament};
pub use twelve_tone::{normalize_pitch_class, TwelveTone};

/// Crate version for host identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
