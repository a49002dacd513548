// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Markov-chain music and text generation.
//!
//! - `markov`: order-k count models, weighted sampling, trained chains, and
//!   fixed transition tables
//! - `rhythm`: grid quantization and transcription of note events into
//!   rhythm tokens
//! - `music`: chord-degree to pitch mapping
//! - `generators`: seeded chord, rhythm, and text generators
//! - `render`: timing plans for score and audio output
//! - `config`: YAML/TOML run configuration
//!
//! The library emits `tracing` events but never installs a subscriber.

pub mod config;
pub mod error;
pub mod generators;
pub mod markov;
pub mod music;
pub mod render;
pub mod rhythm;

pub use config::GenerationConfig;
pub use error::{MuseError, Result};
pub use generators::{ChordGenerator, RhythmGenerator, SequenceGenerator, TextGenerator};
pub use markov::{collect_counts, MarkovChain, SeedWindow, TransitionTable};
pub use rhythm::{transcribe, NoteEvent, RhythmGrid, RhythmToken};
