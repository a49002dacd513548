// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for generation runs.
//!
//! A run is described by one file holding the random seed, tempo, and the
//! settings of each generator. YAML is the primary format; files ending in
//! `.toml` are read as TOML.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::generators::DEFAULT_WRAP_WIDTH;
use crate::markov::{SeedWindow, TransitionTable};
use crate::music::{Mood, MidiNote};
use crate::rhythm::{RhythmGrid, SUBDIVISIONS_PER_BEAT};

/// Root configuration for a generation run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationConfig {
    /// Seed shared by all generators; entropy when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<u64>,
    /// Tempo in BPM
    #[serde(default = "default_tempo")]
    pub tempo: f64,
    #[serde(default)]
    pub rhythm: RhythmConfig,
    #[serde(default)]
    pub chords: ChordsConfig,
    #[serde(default)]
    pub text: TextConfig,
}

impl GenerationConfig {
    /// Load a configuration file, choosing the format by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = if is_toml(path) {
            Self::from_toml(&contents)
        } else {
            Self::from_yaml(&contents)
        };
        config.with_context(|| format!("Invalid config file: {:?}", path))
    }

    /// Parse a configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from TOML string
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).context("Failed to parse TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize configuration to TOML")
    }

    /// Save configuration, choosing the format by extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let contents = if is_toml(path) { self.to_toml()? } else { self.to_yaml()? };
        fs::write(path, contents).with_context(|| format!("Failed to write config file: {:?}", path))
    }

    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<()> {
        if !self.tempo.is_finite() || self.tempo <= 0.0 {
            bail!("tempo must be positive, got {}", self.tempo);
        }
        self.grid().context("rhythm.subdivisions_per_beat")?;
        if self.rhythm.order == 0 {
            bail!("rhythm.order must be at least 1");
        }
        if self.text.order == 0 {
            bail!("text.order must be at least 1");
        }
        if self.text.wrap_width == Some(0) {
            bail!("text.wrap_width must be at least 1");
        }
        // Highest triad pitch is the leading-tone fifth: 11 + 6 semitones
        if self.chords.tonic > 127 - 17 {
            bail!("chords.tonic {} leaves no room for upper triads", self.chords.tonic);
        }
        Ok(())
    }

    /// Quantization grid for the rhythm settings
    pub fn grid(&self) -> Result<RhythmGrid> {
        Ok(RhythmGrid::new(self.rhythm.subdivisions_per_beat)?)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            tempo: default_tempo(),
            rhythm: RhythmConfig::default(),
            chords: ChordsConfig::default(),
            text: TextConfig::default(),
        }
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false)
}

fn default_tempo() -> f64 {
    120.0
}

/// Rhythm generator settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RhythmConfig {
    /// Grid resolution
    #[serde(default = "default_subdivisions")]
    pub subdivisions_per_beat: u32,
    /// Markov order
    #[serde(default = "default_rhythm_order")]
    pub order: usize,
    /// Number of tokens to generate
    #[serde(default = "default_rhythm_length")]
    pub length: usize,
    /// Which end of the training tokens seeds generation
    #[serde(default)]
    pub seed_window: SeedWindow,
}

fn default_subdivisions() -> u32 {
    SUBDIVISIONS_PER_BEAT
}
fn default_rhythm_order() -> usize {
    2
}
fn default_rhythm_length() -> usize {
    300
}

impl Default for RhythmConfig {
    fn default() -> Self {
        Self {
            subdivisions_per_beat: default_subdivisions(),
            order: default_rhythm_order(),
            length: default_rhythm_length(),
            seed_window: SeedWindow::default(),
        }
    }
}

/// Chord generator settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChordsConfig {
    #[serde(default)]
    pub mood: Mood,
    /// MIDI pitch of degree 1
    #[serde(default = "default_tonic")]
    pub tonic: MidiNote,
    /// Number of transitions to generate
    #[serde(default = "default_chord_length")]
    pub length: usize,
    /// Tab-separated transition table file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_table: Option<PathBuf>,
}

fn default_tonic() -> MidiNote {
    48
}
fn default_chord_length() -> usize {
    100
}

impl ChordsConfig {
    /// Load the configured transition table
    pub fn load_table(&self) -> Result<TransitionTable> {
        match &self.transition_table {
            Some(path) => TransitionTable::load(path),
            None => bail!("chords.transition_table is not set"),
        }
    }
}

impl Default for ChordsConfig {
    fn default() -> Self {
        Self {
            mood: Mood::default(),
            tonic: default_tonic(),
            length: default_chord_length(),
            transition_table: None,
        }
    }
}

/// Text generator settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextConfig {
    /// Markov order
    #[serde(default = "default_text_order")]
    pub order: usize,
    /// Number of characters to generate
    #[serde(default = "default_text_length")]
    pub length: usize,
    /// Output line width; unset leaves one line
    #[serde(default = "default_wrap_width")]
    pub wrap_width: Option<usize>,
}

fn default_text_order() -> usize {
    3
}
fn default_text_length() -> usize {
    1000
}
fn default_wrap_width() -> Option<usize> {
    Some(DEFAULT_WRAP_WIDTH)
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            order: default_text_order(),
            length: default_text_length(),
            wrap_width: default_wrap_width(),
        }
    }
}
