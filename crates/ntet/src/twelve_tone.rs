//! Naming layer for 12-tone equal temperament.
//!
//! Adds Scientific Pitch Notation (SPN) on top of the numeric engine: octave
//! numbering, pitch class names, and parsing/formatting of note names like
//! `"A4"` or `"C#-2"`. MIDI 60 is C4, so octave boundaries fall at multiples
//! of 12 shifted by one octave.

use crate::constants::{DEFAULT_REFERENCE_MIDI, FLAT_TO_SHARP, PITCH_CLASS_NAMES};
use crate::error::PitchError;
use crate::temperament::EqualTemperament;

/// A 12-tone equal temperament tuning with note naming.
///
/// Wraps an [`EqualTemperament`] fixed at 12 notes per octave and reference
/// MIDI number 69, and layers SPN conversion on top. All frequency math
/// delegates to the inner engine.
///
/// # Examples
///
/// ```
/// use ntet::TwelveTone;
///
/// let tuning = TwelveTone::default();
/// assert_eq!(tuning.midi_to_spn(69.0), "A4");
/// assert_eq!(tuning.spn_to_midi("C4").unwrap(), 60);
/// assert_eq!(tuning.spn_to_midi("Db4").unwrap(), tuning.spn_to_midi("C#4").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwelveTone {
    tuning: EqualTemperament,
}

impl Default for TwelveTone {
    fn default() -> Self {
        Self {
            tuning: EqualTemperament::default(),
        }
    }
}

impl TwelveTone {
    /// Creates a 12-ET tuning with the given reference frequency for A4.
    ///
    /// # Errors
    /// Returns [`PitchError::InvalidReferenceFrequency`] if `reference_freq`
    /// is zero, negative, or not finite.
    pub fn new(reference_freq: f64) -> Result<Self, PitchError> {
        let tuning = EqualTemperament::new(reference_freq, DEFAULT_REFERENCE_MIDI, 12.0)?;
        Ok(Self { tuning })
    }

    /// Creates the standard concert pitch tuning (A4 = 440 Hz).
    pub fn concert_pitch() -> Self {
        Self::default()
    }

    /// The underlying equal temperament engine.
    pub fn tuning(&self) -> &EqualTemperament {
        &self.tuning
    }

    /// Converts a MIDI number to its SPN octave number.
    ///
    /// The input is quantized to the nearest note first, so the octave always
    /// names the note whose frequency [`midi_to_freq`](Self::midi_to_freq)
    /// would return for the same input.
    pub fn midi_to_octave(&self, midi: f64) -> i32 {
        self.tuning.quantize(midi).div_euclid(12) - 1
    }

    /// Converts a MIDI number to its pitch class name.
    ///
    /// Quantizes first, then reduces modulo 12 with a non-negative remainder,
    /// so negative MIDI numbers name correctly (`-11` is `C#`).
    ///
    /// # Examples
    /// ```
    /// use ntet::TwelveTone;
    ///
    /// let tuning = TwelveTone::default();
    /// assert_eq!(tuning.midi_to_pitch_class(60.0), "C");
    /// assert_eq!(tuning.midi_to_pitch_class(-11.0), "C#");
    /// ```
    pub fn midi_to_pitch_class(&self, midi: f64) -> &'static str {
        let index = self.tuning.quantize(midi).rem_euclid(12);
        PITCH_CLASS_NAMES[index as usize]
    }

    /// Converts a MIDI number to Scientific Pitch Notation.
    ///
    /// The pitch class and octave are concatenated with no separator;
    /// negative octaves read like `"C#-2"`.
    ///
    /// # Examples
    /// ```
    /// use ntet::TwelveTone;
    ///
    /// let tuning = TwelveTone::default();
    /// assert_eq!(tuning.midi_to_spn(69.0), "A4");
    /// assert_eq!(tuning.midi_to_spn(-11.0), "C#-2");
    /// ```
    pub fn midi_to_spn(&self, midi: f64) -> String {
        format!(
            "{}{}",
            self.midi_to_pitch_class(midi),
            self.midi_to_octave(midi)
        )
    }

    /// Parses a Scientific Pitch Notation string into a MIDI number.
    ///
    /// The octave is the trailing (possibly signed, possibly multi-digit)
    /// integer; the remainder is the pitch class, which is normalized with
    /// [`normalize_pitch_class`] before lookup, so flats and Unicode
    /// accidentals are accepted.
    ///
    /// # Errors
    /// * [`PitchError::UnknownPitchClass`] if the name does not resolve to
    ///   one of the twelve pitch classes.
    /// * [`PitchError::InvalidOctave`] if no octave number is present or the
    ///   resulting note is out of range.
    ///
    /// # Examples
    /// ```
    /// use ntet::TwelveTone;
    ///
    /// let tuning = TwelveTone::default();
    /// assert_eq!(tuning.spn_to_midi("A4").unwrap(), 69);
    /// assert_eq!(tuning.spn_to_midi("C#-2").unwrap(), -11);
    /// assert_eq!(tuning.spn_to_midi("B♭3").unwrap(), 58);
    /// assert!(tuning.spn_to_midi("H4").is_err());
    /// ```
    pub fn spn_to_midi(&self, spn: &str) -> Result<i32, PitchError> {
        let (class_part, octave) = split_spn(spn)?;
        let class = normalize_pitch_class(class_part);
        let index = PITCH_CLASS_NAMES
            .iter()
            .position(|name| *name == class)
            .ok_or_else(|| PitchError::UnknownPitchClass(class_part.to_string()))?;

        let midi = (octave as i64 + 1) * 12 + index as i64;
        i32::try_from(midi).map_err(|_| PitchError::InvalidOctave(spn.to_string()))
    }

    /// Same as [`EqualTemperament::quantize`] on the fixed 12-ET tuning.
    pub fn quantize(&self, midi: f64) -> i32 {
        self.tuning.quantize(midi)
    }

    /// Same as [`EqualTemperament::midi_to_freq`] on the fixed 12-ET tuning.
    pub fn midi_to_freq(&self, midi: f64) -> f64 {
        self.tuning.midi_to_freq(midi)
    }

    /// Same as [`EqualTemperament::midi_to_freq_detuned`] on the fixed 12-ET
    /// tuning.
    pub fn midi_to_freq_detuned(&self, midi: f64, detune: f64) -> f64 {
        self.tuning.midi_to_freq_detuned(midi, detune)
    }

    /// Same as [`EqualTemperament::freq_to_midi`] on the fixed 12-ET tuning.
    pub fn freq_to_midi(&self, freq: f64) -> Result<i32, PitchError> {
        self.tuning.freq_to_midi(freq)
    }

    /// Same as [`EqualTemperament::freq_to_midi_detuned`] on the fixed 12-ET
    /// tuning.
    pub fn freq_to_midi_detuned(&self, freq: f64) -> Result<(i32, f64), PitchError> {
        self.tuning.freq_to_midi_detuned(freq)
    }

    /// Same as [`EqualTemperament::semitones_to_freq_ratio`] on the fixed
    /// 12-ET tuning.
    pub fn semitones_to_freq_ratio(&self, semitones: f64) -> f64 {
        self.tuning.semitones_to_freq_ratio(semitones)
    }

    /// Same as [`EqualTemperament::freq_ratio_to_semitones`] on the fixed
    /// 12-ET tuning.
    pub fn freq_ratio_to_semitones(&self, ratio: f64) -> Result<f64, PitchError> {
        self.tuning.freq_ratio_to_semitones(ratio)
    }
}

/// Normalizes a pitch class name to sharp spelling.
///
/// Unicode accidentals are translated to ASCII (`♯` to `#`, `♭` to `b`), then
/// the five flat spellings map to their enharmonic sharps. Anything else
/// passes through unchanged, including names that will fail lookup later.
///
/// # Examples
/// ```
/// use ntet::normalize_pitch_class;
///
/// assert_eq!(normalize_pitch_class("Db"), "C#");
/// assert_eq!(normalize_pitch_class("B♭"), "A#");
/// assert_eq!(normalize_pitch_class("F#"), "F#");
/// ```
pub fn normalize_pitch_class(name: &str) -> String {
    let ascii = name.replace('♯', "#").replace('♭', "b");
    FLAT_TO_SHARP
        .iter()
        .find(|(flat, _)| *flat == ascii)
        .map(|(_, sharp)| (*sharp).to_string())
        .unwrap_or(ascii)
}

/// Splits an SPN string into its pitch class part and octave number.
///
/// The octave is the trailing run of ASCII digits plus an immediately
/// preceding minus sign, if any.
fn split_spn(spn: &str) -> Result<(&str, i32), PitchError> {
    let name = spn.trim();

    let mut octave_start = name.len();
    for (i, c) in name.char_indices().rev() {
        if c.is_ascii_digit() {
            octave_start = i;
        } else {
            break;
        }
    }
    if octave_start == name.len() {
        return Err(PitchError::InvalidOctave(spn.to_string()));
    }

    let class_end = name[..octave_start]
        .strip_suffix('-')
        .map(str::len)
        .unwrap_or(octave_start);
    let (class_part, octave_part) = (&name[..class_end], &name[class_end..]);

    let octave: i32 = octave_part
        .parse()
        .map_err(|_| PitchError::InvalidOctave(spn.to_string()))?;

    Ok((class_part, octave))
}
