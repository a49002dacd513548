// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Quantization grid and greedy rhythm decomposition.
//!
//! Durations are measured in subdivisions of a beat (a quarter note). The
//! default grid has 8 subdivisions per beat, so a whole note spans 32 and the
//! thirty-second note is the finest notated value.

use tracing::debug;

use super::token::{DurationClass, RhythmToken, TokenRole};
use crate::error::{MuseError, Result};

/// Default subdivisions per beat
pub const SUBDIVISIONS_PER_BEAT: u32 = 8;

/// Beats in a whole note
pub const BEATS_PER_WHOLE: u32 = 4;

/// Finest grid accepted by `RhythmGrid::new`
pub const MAX_SUBDIVISIONS_PER_BEAT: u32 = 1 << 20;

/// Fixed-resolution rhythmic grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RhythmGrid {
    subdivisions_per_beat: u32,
}

impl Default for RhythmGrid {
    fn default() -> Self {
        Self {
            subdivisions_per_beat: SUBDIVISIONS_PER_BEAT,
        }
    }
}

impl RhythmGrid {
    /// Create a grid with the given resolution.
    ///
    /// The resolution must be a power of two no larger than
    /// `MAX_SUBDIVISIONS_PER_BEAT`, so every representable class spans a
    /// whole number of subdivisions.
    pub fn new(subdivisions_per_beat: u32) -> Result<Self> {
        if !subdivisions_per_beat.is_power_of_two() || subdivisions_per_beat > MAX_SUBDIVISIONS_PER_BEAT {
            return Err(MuseError::InvalidGrid(subdivisions_per_beat));
        }
        Ok(Self {
            subdivisions_per_beat,
        })
    }

    pub fn subdivisions_per_beat(&self) -> u32 {
        self.subdivisions_per_beat
    }

    /// Subdivisions in a whole note
    pub fn subdivisions_per_whole(&self) -> u32 {
        self.subdivisions_per_beat * BEATS_PER_WHOLE
    }

    /// Length of a duration class on this grid (0 if too fine to represent)
    pub fn span(&self, class: DurationClass) -> u32 {
        self.subdivisions_per_whole() / class.denominator()
    }

    /// Largest representable class that fits in `length` subdivisions
    fn largest_fit(&self, length: u32) -> Option<(DurationClass, u32)> {
        DurationClass::ALL
            .into_iter()
            .map(|class| (class, self.span(class)))
            .find(|&(_, span)| span > 0 && span <= length)
    }

    /// Nearest whole number of subdivisions to a duration given in beats.
    ///
    /// Candidates `0..S` are scanned for the one whose closed interval
    /// `[(2n-1)/2S, (2n+1)/2S]` contains the value; when none does, one beat
    /// is subtracted and `S` is added to the result. Ties on a shared
    /// boundary go to the smaller candidate.
    pub fn best_subdivision(&self, beats: f64) -> Result<u32> {
        let s = self.subdivisions_per_beat;
        if !beats.is_finite() || beats < -0.5 / s as f64 {
            return Err(MuseError::InvalidDuration(beats));
        }
        if beats >= (u32::MAX / s) as f64 - 1.0 {
            return Err(MuseError::InvalidDuration(beats));
        }

        // Skip whole beats that cannot match; subtracting an integer no
        // larger than the value is exact in f64.
        let skipped = (beats.floor() - 1.0).max(0.0);
        let mut num = beats - skipped;
        let mut cycles = skipped as u32;

        let denom = (2 * s) as f64;
        loop {
            for subdiv in 0..s {
                let left = (2 * subdiv as i64 - 1) as f64 / denom;
                let right = (2 * subdiv as i64 + 1) as f64 / denom;
                if left <= num && num <= right {
                    return Ok(subdiv + cycles * s);
                }
            }
            cycles += 1;
            num -= 1.0;
        }
    }

    /// Decompose a gap into note, tie and rest tokens.
    ///
    /// The note part is consumed greedily with the largest fitting class, the
    /// first piece as a note and the rest as ties; the remaining
    /// `gap_length - note_length` is consumed the same way as rests. Length
    /// below the finest representable class is dropped.
    pub fn fill_gap(&self, gap_length: u32, note_length: u32) -> Vec<RhythmToken> {
        let mut tokens = Vec::new();

        let mut remaining = note_length;
        let mut role = TokenRole::Note;
        while let Some((class, span)) = self.largest_fit(remaining) {
            tokens.push(RhythmToken::new(class, role));
            remaining -= span;
            role = TokenRole::Tie;
        }

        let mut rest = gap_length.saturating_sub(note_length);
        while let Some((class, span)) = self.largest_fit(rest) {
            tokens.push(RhythmToken::rest(class));
            rest -= span;
        }

        if remaining > 0 || rest > 0 {
            debug!(
                gap_length,
                note_length,
                dropped = remaining + rest,
                "Dropped residual below grid resolution"
            );
        }
        tokens
    }

    /// Total subdivisions covered by a token sequence
    pub fn total_span(&self, tokens: &[RhythmToken]) -> u32 {
        tokens.iter().map(|t| self.span(t.class)).sum()
    }
}
