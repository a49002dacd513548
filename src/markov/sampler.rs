// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Weighted sampling over discrete distributions.
//!
//! Both entry points use the same linear cumulative-subtraction scan: the draw
//! is reduced by each weight in order and the first outcome that drives it
//! strictly below zero wins. A zero weight can therefore never be selected,
//! and a draw landing exactly on a boundary resolves to the later outcome.

use rand::Rng;

use crate::error::{MuseError, Result};

/// Pick an index from probability weights given a draw in `[0, 1)`.
///
/// If floating-point rounding lets the draw survive the whole scan, the last
/// outcome with positive weight is returned.
pub fn pick_weighted(weights: &[f64], draw: f64) -> Result<usize> {
    let total: f64 = weights.iter().sum();
    if weights.is_empty() || total <= 0.0 {
        return Err(MuseError::EmptyDistribution);
    }

    let mut remaining = draw;
    for (index, &weight) in weights.iter().enumerate() {
        remaining -= weight;
        if remaining < 0.0 {
            return Ok(index);
        }
    }

    weights
        .iter()
        .rposition(|&w| w > 0.0)
        .ok_or(MuseError::EmptyDistribution)
}

/// Pick an index from integer counts given a draw in `[0, total)`.
pub fn pick_counted(counts: &[u64], draw: u64) -> Result<usize> {
    let total: u64 = counts.iter().sum();
    if counts.is_empty() || total == 0 {
        return Err(MuseError::EmptyDistribution);
    }

    let mut remaining = draw as i128;
    for (index, &count) in counts.iter().enumerate() {
        remaining -= count as i128;
        if remaining < 0 {
            return Ok(index);
        }
    }

    counts
        .iter()
        .rposition(|&c| c > 0)
        .ok_or(MuseError::EmptyDistribution)
}

/// Sample from a probability row, drawing uniformly from `[0, 1)`.
pub fn sample_weighted<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Result<usize> {
    let draw = rng.gen::<f64>();
    pick_weighted(weights, draw)
}

/// Sample from raw counts, drawing an integer uniformly from `[0, total)`.
pub fn sample_counted<R: Rng + ?Sized>(counts: &[u64], rng: &mut R) -> Result<usize> {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return Err(MuseError::EmptyDistribution);
    }
    let draw = rng.gen_range(0..total);
    pick_counted(counts, draw)
}
