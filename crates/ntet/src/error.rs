//! Error types for pitch conversion and tuning validation.

use thiserror::Error;

/// Errors produced by tuning construction and pitch conversions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PitchError {
    /// Reference frequency is zero, negative, or not finite.
    #[error("Reference frequency must be a positive finite number of Hz, got {0}")]
    InvalidReferenceFrequency(f64),

    /// Reference MIDI number is not finite.
    #[error("Reference MIDI number must be finite, got {0}")]
    InvalidReferenceMidi(f64),

    /// Notes per octave is zero, negative, or not finite.
    #[error("Notes per octave must be a positive finite number, got {0}")]
    InvalidNotesPerOctave(f64),

    /// A frequency argument is zero, negative, or not finite.
    #[error("Frequency must be a positive finite number of Hz, got {0}")]
    NonPositiveFrequency(f64),

    /// A frequency ratio argument is zero, negative, or NaN.
    #[error("Frequency ratio must be positive, got {0}")]
    NonPositiveRatio(f64),

    /// A note name did not resolve to a known pitch class.
    #[error("Unknown pitch class: '{0}'")]
    UnknownPitchClass(String),

    /// A note name is missing its octave number, or the octave is out of range.
    #[error("Missing or invalid octave number in note name: '{0}'")]
    InvalidOctave(String),
}
