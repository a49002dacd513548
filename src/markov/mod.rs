// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Generic discrete Markov engine.
//!
//! One engine serves every alphabet in the crate (chord degrees, rhythm
//! tokens, characters):
//! - `sampler`: weighted draws from probability rows or raw counts
//! - `counts`: context/follower counting from an observed sequence
//! - `chain`: trained order-k generation with a sliding context window
//! - `table`: explicit first-order transition tables

pub mod chain;
pub mod counts;
pub mod sampler;
pub mod table;

pub use chain::{MarkovChain, SeedWindow};
pub use counts::{collect_counts, CountEntry, CountModel};
pub use sampler::{pick_counted, pick_weighted, sample_counted, sample_weighted};
pub use table::TransitionTable;

use std::fmt::Debug;
use std::hash::Hash;

/// An alphabet element usable as a Markov state
pub trait Symbol: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Symbol for T {}
