// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord progression generator.
//!
//! Walks a degree-to-degree transition table starting on the tonic (degree
//! 1) and voices the resulting degrees as diatonic triads.

use rand::rngs::StdRng;
use tracing::debug;

use super::{make_rng, SequenceGenerator};
use crate::error::Result;
use crate::music::{voice_progression, Degree, MidiNote, Mood};
use crate::markov::TransitionTable;

/// Degree every progression starts on
pub const START_DEGREE: Degree = 1;

/// Generates chord-degree progressions from a transition table
#[derive(Debug)]
pub struct ChordGenerator {
    table: TransitionTable,
    mood: Mood,
    tonic: MidiNote,
    seed: Option<u64>,
    rng: StdRng,
}

impl ChordGenerator {
    /// Create a generator; `seed` of `None` draws from entropy
    pub fn new(table: TransitionTable, mood: Mood, tonic: MidiNote, seed: Option<u64>) -> Self {
        Self {
            table,
            mood,
            tonic,
            seed,
            rng: make_rng(seed),
        }
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn tonic(&self) -> MidiNote {
        self.tonic
    }

    /// Generate a progression and voice it as triads
    pub fn voicings(&mut self, length: usize) -> Result<Vec<[MidiNote; 3]>> {
        let degrees = self.generate(length)?;
        voice_progression(&degrees, self.mood, self.tonic)
    }
}

impl SequenceGenerator for ChordGenerator {
    type Symbol = Degree;

    /// Returns `length + 1` degrees, the first always the tonic
    fn generate(&mut self, length: usize) -> Result<Vec<Degree>> {
        let degrees = self.table.generate(START_DEGREE, length, &mut self.rng)?;
        debug!(mood = %self.mood, count = degrees.len(), "Generated chord progression");
        Ok(degrees)
    }

    fn name(&self) -> &'static str {
        "chord"
    }

    fn reset(&mut self) {
        self.rng = make_rng(self.seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // I -> V -> IV -> I, deterministic
    const CYCLE: &str = "0\t0\t0\t0\t1\t0\t0
1\t0\t0\t0\t0\t0\t0
1\t0\t0\t0\t0\t0\t0
1\t0\t0\t0\t0\t0\t0
0\t0\t0\t1\t0\t0\t0
1\t0\t0\t0\t0\t0\t0
1\t0\t0\t0\t0\t0\t0";

    const UNIFORM: &str = "0\t0.5\t0\t0\t0.5\t0\t0
0\t0\t0\t0\t1\t0\t0
0\t0\t0\t0\t1\t0\t0
1\t0\t0\t0\t0\t0\t0
0.25\t0\t0\t0.25\t0\t0.5\t0
0\t0.5\t0\t0.5\t0\t0\t0
1\t0\t0\t0\t0\t0\t0";

    #[test]
    fn test_starts_on_tonic() {
        let table = TransitionTable::parse(CYCLE).unwrap();
        let mut gen = ChordGenerator::new(table, Mood::Major, 48, Some(1));

        let degrees = gen.generate(6).unwrap();
        assert_eq!(degrees, vec![1, 5, 4, 1, 5, 4, 1]);
    }

    #[test]
    fn test_voicings() {
        let table = TransitionTable::parse(CYCLE).unwrap();
        let mut gen = ChordGenerator::new(table, Mood::Major, 48, Some(1));

        let chords = gen.voicings(2).unwrap();
        assert_eq!(chords, vec![[48, 52, 55], [55, 59, 62], [53, 57, 60]]);
    }

    #[test]
    fn test_minor_voicings() {
        let table = TransitionTable::parse(CYCLE).unwrap();
        let mut gen = ChordGenerator::new(table, Mood::Minor, 57, None);

        let chords = gen.voicings(1).unwrap();
        assert_eq!(chords[0], [57, 60, 64]);
        assert_eq!(chords[1], [64, 68, 71]);
        assert_eq!(gen.mood(), Mood::Minor);
        assert_eq!(gen.tonic(), 57);
    }

    #[test]
    fn test_reset_replays_seeded_stream() {
        let table = TransitionTable::parse(UNIFORM).unwrap();
        let mut gen = ChordGenerator::new(table, Mood::Major, 48, Some(42));

        let first = gen.generate(50).unwrap();
        gen.reset();
        assert_eq!(gen.generate(50).unwrap(), first);
        assert!(first.iter().all(|d| (1..=7).contains(d)));
        assert_eq!(gen.name(), "chord");
    }

    #[test]
    fn test_only_reachable_degrees() {
        let table = TransitionTable::parse(UNIFORM).unwrap();
        let mut gen = ChordGenerator::new(table, Mood::Major, 48, Some(5));

        // Degree 3 and 7 never have incoming probability
        let degrees = gen.generate(200).unwrap();
        assert!(!degrees.contains(&3));
        assert!(!degrees.contains(&7));
    }
}
