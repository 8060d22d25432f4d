//! Constants for equal temperament tuning math.

/// Default reference frequency in Hz (A4 at concert pitch).
pub const DEFAULT_REFERENCE_FREQ: f64 = 440.0;

/// Default reference MIDI note number (A4).
pub const DEFAULT_REFERENCE_MIDI: f64 = 69.0;

/// Default number of notes per octave (12-tone equal temperament).
pub const DEFAULT_NOTES_PER_OCTAVE: f64 = 12.0;

/// Chromatic pitch class names in sharp spelling, indexed by semitone (C=0..B=11).
pub const PITCH_CLASS_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat spellings and their enharmonic sharp equivalents.
pub const FLAT_TO_SHARP: [(&str, &str); 5] = [
    ("Db", "C#"),
    ("Eb", "D#"),
    ("Gb", "F#"),
    ("Ab", "G#"),
    ("Bb", "A#"),
];
