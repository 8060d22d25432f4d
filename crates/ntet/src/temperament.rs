//! Generalized equal temperament engine.
//!
//! An equal temperament divides the octave (one frequency doubling) into a
//! fixed number of equal logarithmic steps. All conversions here are pure
//! applications or inverses of a single exponential transform anchored at a
//! reference note.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_NOTES_PER_OCTAVE, DEFAULT_REFERENCE_FREQ, DEFAULT_REFERENCE_MIDI};
use crate::error::PitchError;

/// An equal temperament tuning.
///
/// The tuning is fully described by three scalars: the frequency of the
/// reference note, the MIDI number of the reference note, and the number of
/// notes per octave. Values are immutable after construction; to change a
/// tuning, build a new one.
///
/// The struct deserializes from host configuration with per-field defaults,
/// so `{}` yields standard concert pitch (A4 = 440 Hz, 12-ET). Values coming
/// from untrusted input should be checked with [`validate`](Self::validate).
///
/// # Examples
///
/// ```
/// use ntet::EqualTemperament;
///
/// let et = EqualTemperament::default();
/// assert!((et.midi_to_freq(69.0) - 440.0).abs() < 1e-9);
///
/// // 19-tone equal temperament, same reference note
/// let et19 = EqualTemperament::new(440.0, 69.0, 19.0).unwrap();
/// assert!((et19.midi_to_freq(69.0 + 19.0) - 880.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EqualTemperament {
    /// Frequency in Hz assigned to the reference note. Must be positive.
    #[serde(default = "default_reference_freq")]
    pub reference_freq: f64,
    /// MIDI number of the reference note. Conventionally integral, but
    /// fractional anchors are allowed.
    #[serde(default = "default_reference_midi")]
    pub reference_midi: f64,
    /// Number of equal divisions per octave. Must be positive; need not be
    /// an integer.
    #[serde(default = "default_notes_per_octave")]
    pub notes_per_octave: f64,
}

fn default_reference_freq() -> f64 {
    DEFAULT_REFERENCE_FREQ
}

fn default_reference_midi() -> f64 {
    DEFAULT_REFERENCE_MIDI
}

fn default_notes_per_octave() -> f64 {
    DEFAULT_NOTES_PER_OCTAVE
}

impl Default for EqualTemperament {
    fn default() -> Self {
        Self {
            reference_freq: DEFAULT_REFERENCE_FREQ,
            reference_midi: DEFAULT_REFERENCE_MIDI,
            notes_per_octave: DEFAULT_NOTES_PER_OCTAVE,
        }
    }
}

impl EqualTemperament {
    /// Creates a validated tuning from its three parameters.
    ///
    /// # Arguments
    /// * `reference_freq` - Frequency in Hz of the reference note (> 0)
    /// * `reference_midi` - MIDI number of the reference note (finite)
    /// * `notes_per_octave` - Equal divisions per octave (> 0)
    pub fn new(
        reference_freq: f64,
        reference_midi: f64,
        notes_per_octave: f64,
    ) -> Result<Self, PitchError> {
        let tuning = Self {
            reference_freq,
            reference_midi,
            notes_per_octave,
        };
        tuning.validate()?;
        Ok(tuning)
    }

    /// Checks the tuning invariants.
    ///
    /// Useful after deserializing a tuning from host configuration, which
    /// bypasses [`new`](Self::new).
    pub fn validate(&self) -> Result<(), PitchError> {
        if !self.reference_freq.is_finite() || self.reference_freq <= 0.0 {
            return Err(PitchError::InvalidReferenceFrequency(self.reference_freq));
        }
        if !self.reference_midi.is_finite() {
            return Err(PitchError::InvalidReferenceMidi(self.reference_midi));
        }
        if !self.notes_per_octave.is_finite() || self.notes_per_octave <= 0.0 {
            return Err(PitchError::InvalidNotesPerOctave(self.notes_per_octave));
        }
        Ok(())
    }

    /// Rounds a MIDI number to the nearest integer note.
    ///
    /// Ties round half away from zero (`0.5 -> 1`, `-0.5 -> -1`), matching
    /// [`f64::round`]. Non-finite or out-of-range input saturates at the
    /// `i32` bounds.
    pub fn quantize(&self, midi: f64) -> i32 {
        midi.round() as i32
    }

    /// Converts a MIDI number to a frequency in Hz.
    ///
    /// The input is quantized to the nearest integer note first.
    ///
    /// # Examples
    /// ```
    /// use ntet::EqualTemperament;
    ///
    /// let et = EqualTemperament::default();
    /// assert!((et.midi_to_freq(69.0) - 440.0).abs() < 1e-9);
    /// assert!((et.midi_to_freq(57.0) - 220.0).abs() < 1e-9);
    /// ```
    pub fn midi_to_freq(&self, midi: f64) -> f64 {
        let quantized = self.quantize(midi) as f64;
        let steps = quantized - self.reference_midi;
        self.reference_freq * 2.0_f64.powf(steps / self.notes_per_octave)
    }

    /// Converts a MIDI number to a frequency in Hz, detuned by a fractional
    /// number of semitones.
    ///
    /// A detune of zero is the identity; a detune of one whole step lands on
    /// the next note of the tuning.
    pub fn midi_to_freq_detuned(&self, midi: f64, detune: f64) -> f64 {
        self.midi_to_freq(midi) * self.semitones_to_freq_ratio(detune)
    }

    /// Converts a frequency in Hz to the nearest quantized MIDI number.
    ///
    /// # Errors
    /// Returns [`PitchError::NonPositiveFrequency`] if `freq` is zero,
    /// negative, or not finite.
    ///
    /// # Examples
    /// ```
    /// use ntet::EqualTemperament;
    ///
    /// let et = EqualTemperament::default();
    /// assert_eq!(et.freq_to_midi(440.0).unwrap(), 69);
    /// assert_eq!(et.freq_to_midi(220.0).unwrap(), 57);
    /// assert!(et.freq_to_midi(0.0).is_err());
    /// ```
    pub fn freq_to_midi(&self, freq: f64) -> Result<i32, PitchError> {
        if !freq.is_finite() || freq <= 0.0 {
            return Err(PitchError::NonPositiveFrequency(freq));
        }
        let midi = self.notes_per_octave * (freq / self.reference_freq).log2() + self.reference_midi;
        Ok(self.quantize(midi))
    }

    /// Decomposes a frequency into the nearest note and a fractional detune.
    ///
    /// The detune is the residual offset, in semitones, between `freq` and
    /// the exact frequency of the nearest note. This is the inverse of
    /// [`midi_to_freq_detuned`](Self::midi_to_freq_detuned): re-applying the
    /// returned pair reproduces `freq` up to floating point rounding.
    ///
    /// # Errors
    /// Returns [`PitchError::NonPositiveFrequency`] if `freq` is zero,
    /// negative, or not finite.
    pub fn freq_to_midi_detuned(&self, freq: f64) -> Result<(i32, f64), PitchError> {
        let midi = self.freq_to_midi(freq)?;
        let exact = self.midi_to_freq(midi as f64);
        let detune = self.freq_ratio_to_semitones(freq / exact)?;
        Ok((midi, detune))
    }

    /// Converts a semitone offset to a frequency ratio.
    pub fn semitones_to_freq_ratio(&self, semitones: f64) -> f64 {
        2.0_f64.powf(semitones / self.notes_per_octave)
    }

    /// Converts a frequency ratio to a semitone offset.
    ///
    /// # Errors
    /// Returns [`PitchError::NonPositiveRatio`] if `ratio` is zero, negative,
    /// or NaN.
    pub fn freq_ratio_to_semitones(&self, ratio: f64) -> Result<f64, PitchError> {
        if ratio.is_nan() || ratio <= 0.0 {
            return Err(PitchError::NonPositiveRatio(ratio));
        }
        Ok(self.notes_per_octave * ratio.log2())
    }
}

/// Converts a frequency ratio to an offset in cents.
///
/// Cents are tuning-independent: one octave is always 1200 cents, whatever
/// the number of notes per octave.
///
/// # Errors
/// Returns [`PitchError::NonPositiveRatio`] if `ratio` is zero, negative,
/// or NaN.
pub fn freq_ratio_to_cents(ratio: f64) -> Result<f64, PitchError> {
    if ratio.is_nan() || ratio <= 0.0 {
        return Err(PitchError::NonPositiveRatio(ratio));
    }
    Ok(1200.0 * ratio.log2())
}

/// Converts an offset in cents to a frequency ratio.
pub fn cents_to_freq_ratio(cents: f64) -> f64 {
    2.0_f64.powf(cents / 1200.0)
}
