// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Explicit first-order transition tables.
//!
//! A table holds one probability row per state; states are numbered from 1.
//! The text form is one row per line with tab-separated probabilities.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use rand::Rng;
use tracing::debug;

use super::sampler::sample_weighted;
use crate::error::{MuseError, Result};

/// Allowed deviation of a row sum from 1.0
pub const ROW_SUM_TOLERANCE: f64 = 1e-6;

/// Square table of transition probabilities over states `1..=n`
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionTable {
    rows: Vec<Vec<f64>>,
}

impl TransitionTable {
    /// Build a table, checking that every row is a probability distribution
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let states = rows.len();
        if states == 0 {
            return Err(MuseError::InvalidTable("table has no rows".to_string()));
        }
        if states > u8::MAX as usize {
            return Err(MuseError::InvalidTable(format!("{} states exceeds 255", states)));
        }

        for (i, row) in rows.iter().enumerate() {
            let state = i + 1;
            if row.len() != states {
                return Err(MuseError::InvalidTable(format!(
                    "row {} has {} entries, expected {}",
                    state,
                    row.len(),
                    states
                )));
            }
            if let Some(p) = row.iter().find(|p| !p.is_finite() || **p < 0.0) {
                return Err(MuseError::InvalidTable(format!(
                    "row {} has invalid probability {}",
                    state, p
                )));
            }
            let sum: f64 = row.iter().sum();
            if (sum - 1.0).abs() > ROW_SUM_TOLERANCE {
                return Err(MuseError::InvalidTable(format!(
                    "row {} sums to {}",
                    state, sum
                )));
            }
        }

        Ok(Self { rows })
    }

    /// Parse the tab-separated text form
    pub fn parse(source: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for (i, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row = line
                .split('\t')
                .map(|field| {
                    field.trim().parse::<f64>().map_err(|e| MuseError::MalformedTable {
                        line: i + 1,
                        reason: format!("{:?}: {}", field, e),
                    })
                })
                .collect::<Result<Vec<f64>>>()?;
            rows.push(row);
        }
        Self::new(rows)
    }

    /// Read and parse a table file
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read transition table: {:?}", path.as_ref()))?;
        let table = Self::parse(&contents)
            .with_context(|| format!("Failed to parse transition table: {:?}", path.as_ref()))?;
        Ok(table)
    }

    /// Number of states
    pub fn states(&self) -> usize {
        self.rows.len()
    }

    /// Probability row for a 1-based state
    pub fn row(&self, state: u8) -> Option<&[f64]> {
        (state as usize)
            .checked_sub(1)
            .and_then(|i| self.rows.get(i))
            .map(|r| r.as_slice())
    }

    /// Sample the state that follows `state`
    pub fn next_state<R: Rng + ?Sized>(&self, state: u8, rng: &mut R) -> Result<u8> {
        let row = self
            .row(state)
            .ok_or_else(|| MuseError::InvalidTable(format!("no row for state {}", state)))?;
        let index = sample_weighted(row, rng)?;
        Ok(index as u8 + 1)
    }

    /// Walk the table for `length` steps from `start`.
    ///
    /// The result holds the start state followed by `length` sampled states.
    pub fn generate<R: Rng + ?Sized>(&self, start: u8, length: usize, rng: &mut R) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(length + 1);
        output.push(start);

        let mut current = start;
        for _ in 0..length {
            current = self.next_state(current, rng)?;
            output.push(current);
        }

        debug!(states = self.states(), generated = length, "Walked transition table");
        Ok(output)
    }
}

impl FromStr for TransitionTable {
    type Err = MuseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Write;

    const MAJOR: &str = "0.0\t0.1\t0.1\t0.3\t0.35\t0.1\t0.05\n\
                         0.1\t0.0\t0.1\t0.1\t0.6\t0.05\t0.05\n\
                         0.1\t0.1\t0.0\t0.2\t0.1\t0.45\t0.05\n\
                         0.3\t0.1\t0.05\t0.0\t0.45\t0.05\t0.05\n\
                         0.6\t0.05\t0.05\t0.1\t0.0\t0.15\t0.05\n\
                         0.1\t0.3\t0.1\t0.3\t0.15\t0.0\t0.05\n\
                         0.7\t0.05\t0.05\t0.05\t0.1\t0.05\t0.0\n";

    #[test]
    fn test_parse_rows_sum_to_one() {
        let table: TransitionTable = MAJOR.parse().unwrap();
        assert_eq!(table.states(), 7);
        for state in 1..=7 {
            let sum: f64 = table.row(state).unwrap().iter().sum();
            assert!((sum - 1.0).abs() <= ROW_SUM_TOLERANCE);
        }
        assert!(table.row(0).is_none());
        assert!(table.row(8).is_none());
    }

    #[test]
    fn test_generate_length_and_range() {
        let table = TransitionTable::parse(MAJOR).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let degrees = table.generate(1, 100, &mut rng).unwrap();
        assert_eq!(degrees.len(), 101);
        assert_eq!(degrees[0], 1);
        assert!(degrees.iter().all(|d| (1..=7).contains(d)));
        // Zero diagonal means no degree repeats immediately
        assert!(degrees.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn test_deterministic_rows() {
        let table = TransitionTable::new(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(table.generate(1, 4, &mut rng).unwrap(), vec![1, 2, 1, 2, 1]);
    }

    #[test]
    fn test_rejects_bad_tables() {
        assert!(TransitionTable::new(vec![]).is_err());
        assert!(TransitionTable::new(vec![vec![0.5, 0.4], vec![0.5, 0.5]]).is_err());
        assert!(TransitionTable::new(vec![vec![1.0], vec![1.0]]).is_err());
        assert!(TransitionTable::new(vec![vec![1.5, -0.5], vec![0.5, 0.5]]).is_err());

        let err = TransitionTable::parse("0.5\tabc\n0.5\t0.5").unwrap_err();
        assert!(matches!(err, MuseError::MalformedTable { line: 1, .. }));
    }

    #[test]
    fn test_blank_lines_ignored() {
        let table = TransitionTable::parse("\n0.25\t0.75\n\n1\t0\n").unwrap();
        assert_eq!(table.states(), 2);
        assert_eq!(table.row(2).unwrap(), &[1.0, 0.0]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MAJOR.as_bytes()).unwrap();
        let table = TransitionTable::load(file.path()).unwrap();
        assert_eq!(table.states(), 7);

        assert!(TransitionTable::load("/nonexistent/major.txt").is_err());
    }
}
