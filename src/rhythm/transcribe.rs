// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Conversion of timed note events into rhythm tokens.
//!
//! Each consecutive pair of notes (by start time) yields the earlier note's
//! duration and the start-to-start gap. Both are measured against the length
//! of the beat containing the earlier note, quantized to the grid, and
//! decomposed into tokens.

use tracing::{debug, warn};

use super::grid::RhythmGrid;
use super::token::{DurationClass, RhythmToken};
use crate::error::{MuseError, Result};

/// A note read from a symbolic music source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteEvent {
    /// Onset time in source time units
    pub start: f64,
    /// Release time in source time units
    pub end: f64,
    /// MIDI pitch (0-127)
    pub pitch: u8,
    /// MIDI velocity (0-127)
    pub velocity: u8,
}

impl NoteEvent {
    pub fn new(start: f64, end: f64, pitch: u8, velocity: u8) -> Self {
        Self {
            start,
            end,
            pitch,
            velocity,
        }
    }

    /// Sounding length in source time units
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Token sequence and the pitches of the notes it was built from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcription {
    /// Rhythm tokens in order
    pub tokens: Vec<RhythmToken>,
    /// One pitch per `note` token, in order. Notes too short to register on
    /// the grid produce no `note` token and contribute no pitch.
    pub pitches: Vec<u8>,
}

/// Transcribe note events against a beat grid.
///
/// `beats` holds ascending beat onset times. The beat cursor only moves
/// forward, so notes are processed in start order. The last note has no
/// successor and contributes nothing. Whole rests are removed from the
/// result; they only arise from gaps at the edges of a part.
pub fn transcribe(notes: &[NoteEvent], beats: &[f64], grid: &RhythmGrid) -> Result<Transcription> {
    let mut sorted = notes.to_vec();
    sorted.sort_by(|a, b| a.start.total_cmp(&b.start));

    if sorted.len() < 2 {
        return Ok(Transcription::default());
    }
    if beats.len() < 2 {
        return Err(MuseError::InvalidBeatGrid(format!(
            "need at least two beats, got {}",
            beats.len()
        )));
    }

    let mut transcription = Transcription::default();
    let mut next_beat = 1;

    for pair in sorted.windows(2) {
        let (note, following) = (&pair[0], &pair[1]);

        let note_dur = note.duration();
        let note_gap = following.start - note.start;

        while note.start > beats[next_beat] {
            next_beat += 1;
            if next_beat >= beats.len() {
                return Err(MuseError::InvalidBeatGrid(format!(
                    "note at {} starts after the last beat",
                    note.start
                )));
            }
        }

        let beat_length = beats[next_beat] - beats[next_beat - 1];
        if !(beat_length > 0.0) {
            return Err(MuseError::InvalidBeatGrid(format!(
                "beat {} has non-positive length {}",
                next_beat, beat_length
            )));
        }

        let gap_subdivisions = grid.best_subdivision(note_gap / beat_length)?;
        let dur_subdivisions = grid.best_subdivision(note_dur / beat_length)?;
        if dur_subdivisions > gap_subdivisions {
            warn!(
                start = note.start,
                dur_subdivisions, gap_subdivisions, "Note overlaps the next onset"
            );
        }

        let tokens = grid.fill_gap(gap_subdivisions, dur_subdivisions);
        if tokens.first().is_some_and(RhythmToken::is_note) {
            transcription.pitches.push(note.pitch);
        }
        transcription.tokens.extend(tokens);
    }

    let whole_rest = RhythmToken::rest(DurationClass::Whole);
    transcription.tokens.retain(|t| *t != whole_rest);

    debug!(
        notes = sorted.len(),
        tokens = transcription.tokens.len(),
        "Transcribed note events"
    );
    Ok(transcription)
}
