// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for markov_muse.

use thiserror::Error;

/// Errors raised by the generation and transcription core.
///
/// Every variant is fatal to the call that produced it; no operation returns
/// a partial result alongside an error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MuseError {
    /// Sampler called with no outcomes or zero total weight
    #[error("cannot sample from an empty distribution")]
    EmptyDistribution,
    /// Rolling window reached a context that never appeared in training
    #[error("context {context} was never observed in the training sequence")]
    UnknownContext { context: String },
    /// Duration name outside the six canonical classes
    #[error("unknown duration class: {0:?}")]
    UnknownDurationClass(String),
    /// Role outside note/tie/rest
    #[error("invalid token role: {0:?}")]
    InvalidTokenRole(String),
    /// Chord degree outside 1..=7
    #[error("invalid chord degree {0} (expected 1-7)")]
    InvalidDegree(u8),
    /// Mood name other than major/minor
    #[error("invalid mood: {0:?}")]
    InvalidMood(String),
    /// Markov order must satisfy 1 <= order < sequence length
    #[error("invalid Markov order {order} for a sequence of length {length}")]
    InvalidOrder { order: usize, length: usize },
    /// Duration that cannot be quantized
    #[error("invalid duration: {0}")]
    InvalidDuration(f64),
    /// Beat grid unusable for locating a note
    #[error("invalid beat grid: {0}")]
    InvalidBeatGrid(String),
    /// Transition table text that fails to parse
    #[error("malformed transition table at line {line}: {reason}")]
    MalformedTable { line: usize, reason: String },
    /// Transition table whose rows are not probability distributions
    #[error("invalid transition table: {0}")]
    InvalidTable(String),
    /// More note tokens than supplied pitches
    #[error("ran out of pitches after {used} note tokens")]
    PitchesExhausted { used: usize },
    /// Computed pitch above the MIDI range
    #[error("pitch {0} is outside the MIDI range 0-127")]
    PitchOutOfRange(u16),
    /// Tempo that is not a positive finite BPM value
    #[error("invalid tempo: {0} BPM")]
    InvalidTempo(f64),
    /// Grid resolution that is not a supported power of two
    #[error("invalid rhythm grid: {0} subdivisions per beat (expected a power of two up to 2^20)")]
    InvalidGrid(u32),
}

pub type Result<T> = std::result::Result<T, MuseError>;
