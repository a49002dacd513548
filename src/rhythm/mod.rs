// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Rhythm notation: tokens, grid quantization, and transcription.
//!
//! Continuous note timing is snapped to a fixed grid and rewritten as
//! notated durations (whole through thirty-second), each tagged as a new
//! note, a tie, or a rest.

pub mod grid;
pub mod token;
pub mod transcribe;

pub use grid::{RhythmGrid, BEATS_PER_WHOLE, MAX_SUBDIVISIONS_PER_BEAT, SUBDIVISIONS_PER_BEAT};
pub use token::{parse_tokens, DurationClass, RhythmToken, TokenRole};
pub use transcribe::{transcribe, NoteEvent, Transcription};
