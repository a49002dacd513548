// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Rhythm generator trained on transcribed token streams.

use rand::rngs::StdRng;
use tracing::debug;

use super::{make_rng, SequenceGenerator};
use crate::error::Result;
use crate::markov::{MarkovChain, SeedWindow};
use crate::rhythm::RhythmToken;

/// Generates rhythm token sequences from an order-k chain
#[derive(Debug)]
pub struct RhythmGenerator {
    chain: MarkovChain<RhythmToken>,
    window: Vec<RhythmToken>,
    seed: Option<u64>,
    rng: StdRng,
}

impl RhythmGenerator {
    /// Train on `tokens` once; generation starts from the `window` end of them
    pub fn new(tokens: &[RhythmToken], order: usize, window: SeedWindow, seed: Option<u64>) -> Result<Self> {
        let chain = MarkovChain::train(tokens, order)?;
        let window = window.select(tokens, order)?.to_vec();
        debug!(
            order,
            tokens = tokens.len(),
            contexts = chain.model().len(),
            "Trained rhythm model"
        );
        Ok(Self {
            chain,
            window,
            seed,
            rng: make_rng(seed),
        })
    }

    pub fn chain(&self) -> &MarkovChain<RhythmToken> {
        &self.chain
    }

    pub fn order(&self) -> usize {
        self.chain.order()
    }
}

impl SequenceGenerator for RhythmGenerator {
    type Symbol = RhythmToken;

    /// Returns the initial window followed by `length` generated tokens
    fn generate(&mut self, length: usize) -> Result<Vec<RhythmToken>> {
        self.chain.extend(&self.window, length, &mut self.rng)
    }

    fn name(&self) -> &'static str {
        "rhythm"
    }

    fn reset(&mut self) {
        self.rng = make_rng(self.seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MuseError;
    use crate::rhythm::parse_tokens;

    fn groove() -> Vec<RhythmToken> {
        parse_tokens([
            "quarter_note", "eighth_note", "eighth_rest",
            "quarter_note", "eighth_note", "eighth_rest",
            "quarter_note", "eighth_note", "eighth_rest",
            "half_note", "quarter_tie", "quarter_rest",
            "quarter_note", "eighth_note", "eighth_rest",
        ])
        .unwrap()
    }

    #[test]
    fn test_generated_length() {
        let tokens = groove();
        let mut gen = RhythmGenerator::new(&tokens, 2, SeedWindow::Leading, Some(9)).unwrap();

        let out = gen.generate(40).unwrap();
        assert_eq!(out.len(), 42);
        assert_eq!(&out[..2], &tokens[..2]);
        assert_eq!(gen.order(), 2);
        assert_eq!(gen.name(), "rhythm");
    }

    #[test]
    fn test_generated_transitions_were_observed() {
        let tokens = groove();
        let mut gen = RhythmGenerator::new(&tokens, 2, SeedWindow::Leading, Some(17)).unwrap();
        let out = gen.generate(60).unwrap();

        for window in out.windows(3) {
            let entry = gen.chain().model().get(&window[..2]).unwrap();
            assert!(entry.count_of(&window[2]) > 0);
        }
    }

    #[test]
    fn test_reset() {
        let tokens = groove();
        let mut gen = RhythmGenerator::new(&tokens, 1, SeedWindow::Leading, Some(3)).unwrap();
        let first = gen.generate(30).unwrap();
        gen.reset();
        assert_eq!(gen.generate(30).unwrap(), first);
    }

    #[test]
    fn test_trailing_window_dead_end() {
        // The last two tokens ("eighth_note", "eighth_rest") recur, so this works
        let tokens = groove();
        let mut gen = RhythmGenerator::new(&tokens, 2, SeedWindow::Trailing, Some(1)).unwrap();
        assert_eq!(gen.generate(5).unwrap().len(), 7);

        // A trailing window that never recurs has no followers
        let tokens = parse_tokens(["quarter_note", "half_note", "whole_rest"]).unwrap();
        let mut gen = RhythmGenerator::new(&tokens, 2, SeedWindow::Trailing, Some(1)).unwrap();
        assert!(matches!(gen.generate(1), Err(MuseError::UnknownContext { .. })));
    }

    #[test]
    fn test_too_few_tokens() {
        let tokens = parse_tokens(["quarter_note", "quarter_rest"]).unwrap();
        let result = RhythmGenerator::new(&tokens, 2, SeedWindow::Leading, None);
        assert!(matches!(result, Err(MuseError::InvalidOrder { order: 2, length: 2 })));
    }
}
