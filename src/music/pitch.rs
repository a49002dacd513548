// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! MIDI pitch helpers.

use super::MidiNote;

/// Frequencies (Hz) of the twelve pitch classes in octave 0, C upward
const OCTAVE_ZERO_HZ: [f64; 12] = [
    16.352, 17.324, 18.354, 19.445, 20.602, 21.827, 23.125, 24.500, 25.957, 27.500, 29.135, 30.868,
];

/// Frequency in Hz of a MIDI note (middle C = 60 ≈ 261.63 Hz)
pub fn midi_to_frequency(note: MidiNote) -> f64 {
    let octave = (note / 12) as i32 - 1;
    OCTAVE_ZERO_HZ[(note % 12) as usize] * 2f64.powi(octave)
}

/// Transpose a pitch, clamping to the MIDI range
pub fn transpose(note: MidiNote, semitones: i8) -> MidiNote {
    (note as i16 + semitones as i16).clamp(0, 127) as MidiNote
}
