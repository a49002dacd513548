// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Character-level text generator.

use rand::rngs::StdRng;
use tracing::debug;

use super::{make_rng, SequenceGenerator};
use crate::error::Result;
use crate::markov::{MarkovChain, SeedWindow};

/// Line width used when wrapping generated text
pub const DEFAULT_WRAP_WIDTH: usize = 72;

/// Generates text one character at a time from an order-k chain
#[derive(Debug)]
pub struct TextGenerator {
    chain: MarkovChain<char>,
    window: Vec<char>,
    wrap_width: Option<usize>,
    seed: Option<u64>,
    rng: StdRng,
}

impl TextGenerator {
    /// Train on `corpus` with line breaks removed
    pub fn new(corpus: &str, order: usize, seed: Option<u64>) -> Result<Self> {
        let chars: Vec<char> = corpus.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        let chain = MarkovChain::train(&chars, order)?;
        let window = SeedWindow::Leading.select(&chars, order)?.to_vec();
        debug!(order, chars = chars.len(), contexts = chain.model().len(), "Trained text model");

        Ok(Self {
            chain,
            window,
            wrap_width: Some(DEFAULT_WRAP_WIDTH),
            seed,
            rng: make_rng(seed),
        })
    }

    /// Set the wrap width; `None` leaves the output on one line
    pub fn with_wrap_width(mut self, width: Option<usize>) -> Self {
        self.wrap_width = width;
        self
    }

    pub fn order(&self) -> usize {
        self.chain.order()
    }

    /// Generate text and wrap it when a width is set
    pub fn generate_text(&mut self, length: usize) -> Result<String> {
        let text: String = self.generate(length)?.into_iter().collect();
        Ok(match self.wrap_width {
            Some(width) => wrap_lines(&text, width),
            None => text,
        })
    }
}

impl SequenceGenerator for TextGenerator {
    type Symbol = char;

    /// Returns the first `order` corpus characters followed by `length`
    /// generated ones
    fn generate(&mut self, length: usize) -> Result<Vec<char>> {
        self.chain.extend(&self.window, length, &mut self.rng)
    }

    fn name(&self) -> &'static str {
        "text"
    }

    fn reset(&mut self) {
        self.rng = make_rng(self.seed);
    }
}

/// Greedily wrap words onto lines of at most `width` characters.
///
/// A word longer than `width` is broken: its first piece fills the rest of
/// the current line and the remainder continues on following lines. Runs of
/// whitespace collapse to a single space.
pub fn wrap_lines(text: &str, width: usize) -> String {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        let mut rest = chars.as_slice();

        while !rest.is_empty() {
            let sep = usize::from(line_len > 0);
            if line_len + sep + rest.len() <= width {
                if sep > 0 {
                    line.push(' ');
                }
                line.extend(rest);
                line_len += sep + rest.len();
                break;
            }

            let space = width.saturating_sub(line_len + sep);
            if rest.len() > width && space > 0 {
                if sep > 0 {
                    line.push(' ');
                }
                line.extend(&rest[..space]);
                rest = &rest[space..];
            }
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MuseError;

    const CORPUS: &str = "the cat sat on the mat.\nthe rat sat on the hat.\r\nthat is that.";

    #[test]
    fn test_line_breaks_removed() {
        let mut gen = TextGenerator::new(CORPUS, 2, Some(5)).unwrap();
        let out = gen.generate(300).unwrap();
        assert_eq!(out.len(), 302);
        assert_eq!(&out[..2], &['t', 'h']);
        assert!(!out.contains(&'\n'));
        assert!(!out.contains(&'\r'));
    }

    #[test]
    fn test_generate_text_unwrapped() {
        let mut gen = TextGenerator::new(CORPUS, 3, Some(8)).unwrap().with_wrap_width(None);
        let text = gen.generate_text(100).unwrap();
        assert_eq!(text.chars().count(), 103);
        assert!(text.starts_with("the"));
        assert_eq!(gen.order(), 3);
    }

    #[test]
    fn test_generate_text_wrapped() {
        let mut gen = TextGenerator::new(CORPUS, 2, Some(8)).unwrap();
        let text = gen.generate_text(1000).unwrap();
        for line in text.lines() {
            assert!(line.chars().count() <= DEFAULT_WRAP_WIDTH);
        }
    }

    #[test]
    fn test_reset() {
        let mut gen = TextGenerator::new(CORPUS, 1, Some(99)).unwrap();
        let first = gen.generate_text(200).unwrap();
        gen.reset();
        assert_eq!(gen.generate_text(200).unwrap(), first);
        assert_eq!(gen.name(), "text");
    }

    #[test]
    fn test_corpus_too_short() {
        let result = TextGenerator::new("ab\n", 2, None);
        assert!(matches!(result, Err(MuseError::InvalidOrder { order: 2, length: 2 })));
    }

    #[test]
    fn test_wrap_lines() {
        assert_eq!(wrap_lines("aa bb cc dd", 5), "aa bb\ncc dd");
        assert_eq!(wrap_lines("aa  bb   cc", 80), "aa bb cc");
        assert_eq!(wrap_lines("", 10), "");
    }

    #[test]
    fn test_wrap_lines_breaks_long_words() {
        assert_eq!(
            wrap_lines("short averyveryverylongword x", 6),
            "short\naveryv\neryver\nylongw\nord x"
        );
        // The first piece fills the remainder of the current line
        assert_eq!(wrap_lines("ab cdefghij", 5), "ab cd\nefghi\nj");
        assert_eq!(wrap_lines("abcdefgh", 4), "abcd\nefgh");
        assert_eq!(wrap_lines("abc", 0), "a\nb\nc");
    }
}
