// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Diatonic triads built on scale degrees.
//!
//! A chord degree (1-7) and a mood select a root offset from the tonic and a
//! triad quality; the quality supplies the third and fifth above the root.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::MidiNote;
use crate::error::{MuseError, Result};

/// Chord degree type (1-7)
pub type Degree = u8;

/// Key mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    #[default]
    Major,
    Minor,
}

impl Mood {
    /// Root offsets (semitones above the tonic) for degrees 1-7
    pub fn intervals(self) -> [u8; 7] {
        match self {
            Mood::Major => [0, 2, 4, 5, 7, 9, 11],
            Mood::Minor => [0, 2, 3, 5, 7, 8, 10],
        }
    }

    /// Triad qualities for degrees 1-7
    pub fn qualities(self) -> [ChordQuality; 7] {
        use ChordQuality::*;
        match self {
            Mood::Major => [Major, Minor, Minor, Major, Major, Minor, Diminished],
            Mood::Minor => [Minor, Diminished, Major, Minor, Major, Major, Major],
        }
    }

    /// Root offset and quality of the triad on a degree
    pub fn triad_on(self, degree: Degree) -> Result<(u8, ChordQuality)> {
        if !(1..=7).contains(&degree) {
            return Err(MuseError::InvalidDegree(degree));
        }
        let i = (degree - 1) as usize;
        Ok((self.intervals()[i], self.qualities()[i]))
    }

    pub fn name(self) -> &'static str {
        match self {
            Mood::Major => "major",
            Mood::Minor => "minor",
        }
    }
}

impl FromStr for Mood {
    type Err = MuseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "major" => Ok(Mood::Major),
            "minor" => Ok(Mood::Minor),
            _ => Err(MuseError::InvalidMood(s.to_string())),
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Triad interval pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
}

impl ChordQuality {
    /// Semitones from the root to the (third, fifth)
    pub fn offsets(self) -> (u8, u8) {
        match self {
            ChordQuality::Major => (4, 7),
            ChordQuality::Minor => (3, 7),
            ChordQuality::Diminished => (3, 6),
            ChordQuality::Augmented => (4, 8),
        }
    }
}

/// Absolute pitches (root, third, fifth) of the triad on `degree`
pub fn triad(mood: Mood, degree: Degree, tonic: MidiNote) -> Result<[MidiNote; 3]> {
    let (root_offset, quality) = mood.triad_on(degree)?;
    let (third, fifth) = quality.offsets();
    let root = tonic as u16 + root_offset as u16;

    let pitch = |offset: u8| -> Result<MidiNote> {
        let value = root + offset as u16;
        if value > 127 {
            return Err(MuseError::PitchOutOfRange(value));
        }
        Ok(value as MidiNote)
    };

    Ok([pitch(0)?, pitch(third)?, pitch(fifth)?])
}

/// Map a degree progression to triads
pub fn voice_progression(degrees: &[Degree], mood: Mood, tonic: MidiNote) -> Result<Vec<[MidiNote; 3]>> {
    degrees.iter().map(|&d| triad(mood, d, tonic)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominant_in_major() {
        assert_eq!(Mood::Major.triad_on(5).unwrap(), (7, ChordQuality::Major));
        assert_eq!(triad(Mood::Major, 5, 48).unwrap(), [55, 59, 62]);
    }

    #[test]
    fn test_major_key_triads() {
        let chords = voice_progression(&[1, 2, 3, 4, 5, 6, 7], Mood::Major, 60).unwrap();
        assert_eq!(chords[0], [60, 64, 67]); // C
        assert_eq!(chords[1], [62, 65, 69]); // Dm
        assert_eq!(chords[2], [64, 67, 71]); // Em
        assert_eq!(chords[3], [65, 69, 72]); // F
        assert_eq!(chords[5], [69, 72, 76]); // Am
        assert_eq!(chords[6], [71, 74, 77]); // Bdim
    }

    #[test]
    fn test_minor_key_triads() {
        assert_eq!(triad(Mood::Minor, 1, 57).unwrap(), [57, 60, 64]); // Am
        assert_eq!(triad(Mood::Minor, 2, 57).unwrap(), [59, 62, 65]); // Bdim
        assert_eq!(triad(Mood::Minor, 3, 57).unwrap(), [60, 64, 67]); // C
        assert_eq!(triad(Mood::Minor, 7, 57).unwrap(), [67, 71, 74]); // G
    }

    #[test]
    fn test_quality_offsets() {
        assert_eq!(ChordQuality::Major.offsets(), (4, 7));
        assert_eq!(ChordQuality::Minor.offsets(), (3, 7));
        assert_eq!(ChordQuality::Diminished.offsets(), (3, 6));
        assert_eq!(ChordQuality::Augmented.offsets(), (4, 8));
    }

    #[test]
    fn test_invalid_degree() {
        assert_eq!(triad(Mood::Major, 0, 48), Err(MuseError::InvalidDegree(0)));
        assert_eq!(triad(Mood::Minor, 8, 48), Err(MuseError::InvalidDegree(8)));
    }

    #[test]
    fn test_pitch_out_of_range() {
        assert_eq!(triad(Mood::Major, 7, 120), Err(MuseError::PitchOutOfRange(131)));
    }

    #[test]
    fn test_mood_from_str() {
        assert_eq!("major".parse::<Mood>().unwrap(), Mood::Major);
        assert_eq!(" Minor ".parse::<Mood>().unwrap(), Mood::Minor);
        assert_eq!(
            "lydian".parse::<Mood>(),
            Err(MuseError::InvalidMood("lydian".to_string()))
        );
        assert_eq!(Mood::Minor.to_string(), "minor");
    }
}
