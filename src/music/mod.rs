// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory utilities.
//!
//! This module provides the diatonic triad tables used to voice chord-degree
//! progressions, and pitch/frequency helpers.

pub mod chord;
pub mod pitch;

pub use chord::{triad, voice_progression, ChordQuality, Degree, Mood};
pub use pitch::{midi_to_frequency, transpose};

/// MIDI note number type (0-127)
pub type MidiNote = u8;
