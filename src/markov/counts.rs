// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Context/follower counting for order-k Markov models.
//!
//! A `CountModel` records, for every length-k window of a training sequence
//! that has a following element, how often the window occurred and which
//! symbols followed it. The final complete window is never counted because
//! nothing follows it.

use std::collections::HashMap;
use std::fmt;

use rand::Rng;
use tracing::debug;

use super::sampler::sample_counted;
use super::Symbol;
use crate::error::{MuseError, Result};

/// Observations for a single context
#[derive(Debug, Clone, PartialEq)]
pub struct CountEntry<S> {
    /// Number of times the context was observed with a follower
    total: u64,
    /// Follower counts in first-observation order
    followers: Vec<(S, u64)>,
}

impl<S: Symbol> CountEntry<S> {
    fn new() -> Self {
        Self {
            total: 0,
            followers: Vec::new(),
        }
    }

    fn record(&mut self, follower: &S) {
        self.total += 1;
        match self.followers.iter_mut().find(|(s, _)| s == follower) {
            Some((_, count)) => *count += 1,
            None => self.followers.push((follower.clone(), 1)),
        }
    }

    /// Total observations of this context
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Followers and their counts, in first-observation order
    pub fn followers(&self) -> impl Iterator<Item = (&S, u64)> {
        self.followers.iter().map(|(s, c)| (s, *c))
    }

    /// Count for a specific follower (0 if never observed)
    pub fn count_of(&self, follower: &S) -> u64 {
        self.followers
            .iter()
            .find(|(s, _)| s == follower)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    /// Number of distinct followers
    pub fn distinct_followers(&self) -> usize {
        self.followers.len()
    }

    /// Sample a follower with probability proportional to its count
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&S> {
        let counts: Vec<u64> = self.followers.iter().map(|(_, c)| *c).collect();
        let index = sample_counted(&counts, rng)?;
        Ok(&self.followers[index].0)
    }
}

/// Mapping from length-k context to its follower observations
#[derive(Debug, Clone)]
pub struct CountModel<S> {
    order: usize,
    index: HashMap<Vec<S>, usize>,
    entries: Vec<(Vec<S>, CountEntry<S>)>,
}

impl<S: Symbol> CountModel<S> {
    fn empty(order: usize) -> Self {
        Self {
            order,
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Get the entry for a context, inserting an empty one on first access
    fn entry_or_default(&mut self, context: &[S]) -> &mut CountEntry<S> {
        let slot = match self.index.get(context) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.entries.push((context.to_vec(), CountEntry::new()));
                self.index.insert(context.to_vec(), slot);
                slot
            }
        };
        &mut self.entries[slot].1
    }

    /// Markov order (context length)
    pub fn order(&self) -> usize {
        self.order
    }

    /// Look up the observations for a context
    pub fn get(&self, context: &[S]) -> Option<&CountEntry<S>> {
        self.index.get(context).map(|&slot| &self.entries[slot].1)
    }

    /// Whether a context was observed
    pub fn contains(&self, context: &[S]) -> bool {
        self.index.contains_key(context)
    }

    /// Number of distinct contexts
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no context was observed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate contexts in first-observation order
    pub fn iter(&self) -> impl Iterator<Item = (&[S], &CountEntry<S>)> {
        self.entries.iter().map(|(ctx, entry)| (ctx.as_slice(), entry))
    }

    /// Sum of all context totals (equals sequence length minus order)
    pub fn total_observations(&self) -> u64 {
        self.entries.iter().map(|(_, e)| e.total).sum()
    }

    /// Occurrence count of each context, without follower detail
    pub fn context_counts(&self) -> Vec<(&[S], u64)> {
        self.entries
            .iter()
            .map(|(ctx, entry)| (ctx.as_slice(), entry.total))
            .collect()
    }
}

/// Build a count model from a sequence and Markov order.
///
/// Windows start at every index from 0 to `len - order - 1`, each paired with
/// the element right after it.
pub fn collect_counts<S: Symbol>(sequence: &[S], order: usize) -> Result<CountModel<S>> {
    if order == 0 || order >= sequence.len() {
        return Err(MuseError::InvalidOrder {
            order,
            length: sequence.len(),
        });
    }

    let mut model = CountModel::empty(order);
    for window in sequence.windows(order + 1) {
        let (context, follower) = window.split_at(order);
        model.entry_or_default(context).record(&follower[0]);
    }

    debug!(
        order,
        contexts = model.len(),
        observations = model.total_observations(),
        "Collected Markov counts"
    );
    Ok(model)
}

impl<S: Symbol> fmt::Display for CountModel<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "key\tcount\tfollower counts")?;
        for (context, entry) in self.iter() {
            write!(f, "{:?}\t{}\t\t", context, entry.total)?;
            for (follower, count) in entry.followers() {
                write!(f, "{:?}:{} ", follower, count)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
