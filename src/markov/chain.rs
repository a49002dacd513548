// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Trained order-k Markov chain generation.
//!
//! The chain is trained once from a seed sequence and then extended one
//! symbol at a time: look up the current k-symbol window, sample a follower
//! by its count, append it, and slide the window forward.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::counts::{collect_counts, CountModel};
use super::Symbol;
use crate::error::{MuseError, Result};

/// Which end of the seed provides the initial context window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedWindow {
    /// First k symbols of the seed
    #[default]
    Leading,
    /// Last k symbols of the seed
    Trailing,
}

impl SeedWindow {
    /// Slice the initial window out of a seed sequence
    pub fn select<'a, S>(self, seed: &'a [S], order: usize) -> Result<&'a [S]> {
        if order == 0 || seed.len() < order {
            return Err(MuseError::InvalidOrder {
                order,
                length: seed.len(),
            });
        }
        Ok(match self {
            SeedWindow::Leading => &seed[..order],
            SeedWindow::Trailing => &seed[seed.len() - order..],
        })
    }
}

/// Markov chain trained from an observed sequence
#[derive(Debug, Clone)]
pub struct MarkovChain<S> {
    model: CountModel<S>,
}

impl<S: Symbol> MarkovChain<S> {
    /// Train a chain of the given order from a seed sequence
    pub fn train(seed: &[S], order: usize) -> Result<Self> {
        Ok(Self {
            model: collect_counts(seed, order)?,
        })
    }

    /// Wrap an already collected count model
    pub fn from_model(model: CountModel<S>) -> Self {
        Self { model }
    }

    /// The underlying count model
    pub fn model(&self) -> &CountModel<S> {
        &self.model
    }

    /// Markov order
    pub fn order(&self) -> usize {
        self.model.order()
    }

    /// Generate `length` symbols starting from an initial window.
    ///
    /// Returns the window followed by exactly `length` generated symbols.
    /// Fails with `UnknownContext` as soon as the rolling window reaches a
    /// context absent from the model.
    pub fn extend<R: Rng + ?Sized>(&self, window: &[S], length: usize, rng: &mut R) -> Result<Vec<S>> {
        let order = self.order();
        if window.len() != order {
            return Err(MuseError::InvalidOrder {
                order,
                length: window.len(),
            });
        }

        let mut output = Vec::with_capacity(order + length);
        output.extend_from_slice(window);

        for _ in 0..length {
            let context = &output[output.len() - order..];
            let entry = self.model.get(context).ok_or_else(|| MuseError::UnknownContext {
                context: format!("{:?}", context),
            })?;
            let next = entry.sample(rng)?.clone();
            output.push(next);
        }

        debug!(order, generated = length, "Extended Markov sequence");
        Ok(output)
    }

    /// Generate from a seed, choosing the initial window per `window`
    pub fn generate<R: Rng + ?Sized>(
        &self,
        seed: &[S],
        window: SeedWindow,
        length: usize,
        rng: &mut R,
    ) -> Result<Vec<S>> {
        let start = window.select(seed, self.order())?;
        self.extend(start, length, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_generated_length() {
        let seed = chars("abracadabra, a cadaver arcade");
        let chain = MarkovChain::train(&seed, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        for length in [0, 1, 10, 250] {
            let out = chain.generate(&seed, SeedWindow::Leading, length, &mut rng).unwrap();
            assert_eq!(out.len(), 1 + length);
            assert_eq!(out[0], 'a');
        }
    }

    #[test]
    fn test_deterministic_under_seed() {
        let seed = chars("mississippi missing misses");
        let chain = MarkovChain::train(&seed, 2).unwrap();

        let a = chain.generate(&seed, SeedWindow::Leading, 15, &mut StdRng::seed_from_u64(9));
        let b = chain.generate(&seed, SeedWindow::Leading, 15, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_path_is_forced() {
        // Every context has exactly one follower, so the output is fixed
        let seed = chars("abcdabcdabcd");
        let chain = MarkovChain::train(&seed, 2).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let out = chain.generate(&seed, SeedWindow::Leading, 6, &mut rng).unwrap();
        assert_eq!(out.iter().collect::<String>(), "abcdabcd");
    }

    #[test]
    fn test_unknown_context() {
        // "ab" -> 'c' is learned, but "bc" only appears as the final window
        let seed = chars("abc");
        let chain = MarkovChain::train(&seed, 2).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let err = chain.generate(&seed, SeedWindow::Leading, 2, &mut rng).unwrap_err();
        assert!(matches!(err, MuseError::UnknownContext { .. }));

        // One step succeeds before the window runs off the model
        let out = chain.generate(&seed, SeedWindow::Leading, 1, &mut rng).unwrap();
        assert_eq!(out, chars("abc"));
    }

    #[test]
    fn test_trailing_window() {
        let seed = chars("xyzxyzxy");
        let chain = MarkovChain::train(&seed, 2).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let out = chain.generate(&seed, SeedWindow::Trailing, 3, &mut rng).unwrap();
        assert_eq!(out.iter().collect::<String>(), "xyzxy");
    }

    #[test]
    fn test_from_collected_model() {
        let seed = chars("abcdabcd");
        let model = collect_counts(&seed, 2).unwrap();
        let chain = MarkovChain::from_model(model);
        assert_eq!(chain.order(), 2);

        let mut rng = StdRng::seed_from_u64(4);
        let out = chain.extend(&chars("cd"), 4, &mut rng).unwrap();
        assert_eq!(out.iter().collect::<String>(), "cdabcd");
    }

    #[test]
    fn test_window_must_match_order() {
        let seed = chars("abab");
        let chain = MarkovChain::train(&seed, 2).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(chain.extend(&['a'], 3, &mut rng).is_err());
        assert!(SeedWindow::Leading.select(&['a'], 2).is_err());
    }
}
