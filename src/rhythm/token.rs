// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Rhythm tokens: a duration class tagged with a note/tie/rest role.
//!
//! Tokens print and parse as `<class>_<role>`, e.g. `eighth_note`,
//! `thirty-second_tie`, `whole_rest`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MuseError;

/// Notated duration classes, largest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DurationClass {
    Whole,
    Half,
    Quarter,
    Eighth,
    Sixteenth,
    ThirtySecond,
}

impl DurationClass {
    /// All classes from longest to shortest
    pub const ALL: [DurationClass; 6] = [
        DurationClass::Whole,
        DurationClass::Half,
        DurationClass::Quarter,
        DurationClass::Eighth,
        DurationClass::Sixteenth,
        DurationClass::ThirtySecond,
    ];

    /// Fraction of a whole note, as a denominator (1 = whole, 32 = thirty-second)
    pub fn denominator(self) -> u32 {
        match self {
            DurationClass::Whole => 1,
            DurationClass::Half => 2,
            DurationClass::Quarter => 4,
            DurationClass::Eighth => 8,
            DurationClass::Sixteenth => 16,
            DurationClass::ThirtySecond => 32,
        }
    }

    /// Length on the canonical 32-per-whole grid
    pub fn subdivisions(self) -> u32 {
        32 / self.denominator()
    }

    /// Canonical name
    pub fn name(self) -> &'static str {
        match self {
            DurationClass::Whole => "whole",
            DurationClass::Half => "half",
            DurationClass::Quarter => "quarter",
            DurationClass::Eighth => "eighth",
            DurationClass::Sixteenth => "sixteenth",
            DurationClass::ThirtySecond => "thirty-second",
        }
    }
}

impl FromStr for DurationClass {
    type Err = MuseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DurationClass::ALL
            .into_iter()
            .find(|class| class.name() == s)
            .ok_or_else(|| MuseError::UnknownDurationClass(s.to_string()))
    }
}

impl fmt::Display for DurationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a token does at its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenRole {
    /// New onset
    Note,
    /// Continuation of the previous note
    Tie,
    /// Silence
    Rest,
}

impl TokenRole {
    pub fn name(self) -> &'static str {
        match self {
            TokenRole::Note => "note",
            TokenRole::Tie => "tie",
            TokenRole::Rest => "rest",
        }
    }
}

impl FromStr for TokenRole {
    type Err = MuseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "note" => Ok(TokenRole::Note),
            "tie" => Ok(TokenRole::Tie),
            "rest" => Ok(TokenRole::Rest),
            other => Err(MuseError::InvalidTokenRole(other.to_string())),
        }
    }
}

impl fmt::Display for TokenRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single rhythm symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RhythmToken {
    pub class: DurationClass,
    pub role: TokenRole,
}

impl RhythmToken {
    pub fn new(class: DurationClass, role: TokenRole) -> Self {
        Self { class, role }
    }

    pub fn note(class: DurationClass) -> Self {
        Self::new(class, TokenRole::Note)
    }

    pub fn tie(class: DurationClass) -> Self {
        Self::new(class, TokenRole::Tie)
    }

    pub fn rest(class: DurationClass) -> Self {
        Self::new(class, TokenRole::Rest)
    }

    pub fn is_note(&self) -> bool {
        self.role == TokenRole::Note
    }

    pub fn is_rest(&self) -> bool {
        self.role == TokenRole::Rest
    }
}

impl fmt::Display for RhythmToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.class, self.role)
    }
}

impl FromStr for RhythmToken {
    type Err = MuseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (class, role) = s
            .rsplit_once('_')
            .ok_or_else(|| MuseError::InvalidTokenRole(String::new()))?;
        Ok(Self {
            class: class.parse()?,
            role: role.parse()?,
        })
    }
}

impl TryFrom<String> for RhythmToken {
    type Error = MuseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RhythmToken> for String {
    fn from(token: RhythmToken) -> Self {
        token.to_string()
    }
}

/// Parse a sequence of token names
pub fn parse_tokens<'a, I>(names: I) -> Result<Vec<RhythmToken>, MuseError>
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().map(str::parse).collect()
}
