// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Render planning for generated material.
//!
//! Converts rhythm tokens plus pitch streams into the timed data consumed by
//! output collaborators: timed chords for a symbolic-music writer and tone
//! segments for an audio renderer. Writing files and synthesizing audio are
//! left to implementations of `ScoreSink` and `AudioSink`.

use tracing::debug;

use crate::error::{MuseError, Result};
use crate::music::{midi_to_frequency, transpose, MidiNote};
use crate::rhythm::{RhythmGrid, RhythmToken, TokenRole};

/// Velocity given to scheduled notes
pub const DEFAULT_VELOCITY: u8 = 60;

/// A set of pitches sounding together over a time span (seconds)
#[derive(Debug, Clone, PartialEq)]
pub struct TimedChord {
    pub pitches: Vec<MidiNote>,
    pub start: f64,
    pub end: f64,
    pub velocity: u8,
}

impl TimedChord {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// One stretch of audio: a sine tone or silence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSegment {
    /// Tone frequency in Hz, `None` for silence
    pub frequency: Option<f64>,
    /// Length in milliseconds
    pub duration_ms: f64,
}

/// Writer for symbolic music output (e.g. a MIDI file)
pub trait ScoreSink {
    fn write_score(&mut self, chords: &[TimedChord]) -> anyhow::Result<()>;
}

/// Renderer for audio output (e.g. a WAV file)
pub trait AudioSink {
    fn render(&mut self, segments: &[ToneSegment]) -> anyhow::Result<()>;
}

fn check_tempo(tempo: f64) -> Result<()> {
    if !tempo.is_finite() || tempo <= 0.0 {
        return Err(MuseError::InvalidTempo(tempo));
    }
    Ok(())
}

/// Milliseconds per grid subdivision at `tempo` BPM
pub fn ms_per_subdivision(tempo: f64, grid: &RhythmGrid) -> Result<f64> {
    check_tempo(tempo)?;
    Ok(60_000.0 / (grid.subdivisions_per_beat() as f64 * tempo))
}

/// Real-time length of a token in milliseconds
pub fn token_duration_ms(token: &RhythmToken, tempo: f64, grid: &RhythmGrid) -> Result<f64> {
    Ok(ms_per_subdivision(tempo, grid)? * grid.span(token.class) as f64)
}

/// Lay out tokens in time, taking one pitch set per note token.
///
/// A tie extends the most recent chord; a rest only advances time. A tie with
/// nothing before it is treated as silence.
pub fn schedule<P>(tokens: &[RhythmToken], chords: &[P], tempo: f64, grid: &RhythmGrid) -> Result<Vec<TimedChord>>
where
    P: AsRef<[MidiNote]>,
{
    let seconds_per_subdivision = ms_per_subdivision(tempo, grid)? / 1000.0;

    let mut scheduled: Vec<TimedChord> = Vec::new();
    let mut next_chord = chords.iter();
    let mut used = 0;
    let mut start = 0.0;

    for token in tokens {
        let length = seconds_per_subdivision * grid.span(token.class) as f64;
        match token.role {
            TokenRole::Note => {
                let pitches = next_chord
                    .next()
                    .ok_or(MuseError::PitchesExhausted { used })?;
                used += 1;
                scheduled.push(TimedChord {
                    pitches: pitches.as_ref().to_vec(),
                    start,
                    end: start + length,
                    velocity: DEFAULT_VELOCITY,
                });
            }
            TokenRole::Tie => {
                if let Some(last) = scheduled.last_mut() {
                    last.end += length;
                }
            }
            TokenRole::Rest => {}
        }
        start += length;
    }

    debug!(tokens = tokens.len(), chords = scheduled.len(), "Scheduled tokens");
    Ok(scheduled)
}

/// Plan single-voice audio: one segment per token.
///
/// Notes consume the next pitch, ties keep sounding the current pitch, and
/// rests are silent.
pub fn tone_plan(
    tokens: &[RhythmToken],
    pitches: &[MidiNote],
    tempo: f64,
    semitones: i8,
    grid: &RhythmGrid,
) -> Result<Vec<ToneSegment>> {
    let ms = ms_per_subdivision(tempo, grid)?;

    let mut segments = Vec::with_capacity(tokens.len());
    let mut next_pitch = pitches.iter();
    let mut used = 0;
    let mut sounding: Option<f64> = None;

    for token in tokens {
        let frequency = match token.role {
            TokenRole::Note => {
                let pitch = next_pitch
                    .next()
                    .ok_or(MuseError::PitchesExhausted { used })?;
                used += 1;
                sounding = Some(midi_to_frequency(transpose(*pitch, semitones)));
                sounding
            }
            TokenRole::Tie => sounding,
            TokenRole::Rest => {
                sounding = None;
                None
            }
        };
        segments.push(ToneSegment {
            frequency,
            duration_ms: ms * grid.span(token.class) as f64,
        });
    }

    Ok(segments)
}
