// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Generative engines built on the Markov core.
//!
//! Each generator owns its trained model and an independent random stream,
//! so generators never share state and a seeded generator always replays the
//! same output after `reset`.

pub mod chord;
pub mod rhythm;
pub mod text;

pub use chord::ChordGenerator;
pub use rhythm::RhythmGenerator;
pub use text::{wrap_lines, TextGenerator, DEFAULT_WRAP_WIDTH};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::Result;

/// Trait for all sequence generators
pub trait SequenceGenerator {
    /// Element type of the generated sequence
    type Symbol;

    /// Generate a sequence of `length` steps
    ///
    /// The exact relationship between `length` and the output size is
    /// generator-specific; see each implementation.
    fn generate(&mut self, length: usize) -> Result<Vec<Self::Symbol>>;

    /// Get the generator type name
    fn name(&self) -> &'static str;

    /// Restore the random stream to its initial state
    fn reset(&mut self);
}

/// Random stream for a generator: seeded when a seed is given
pub(crate) fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
