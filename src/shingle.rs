//! Shingling: splitting a text into an ordered sequence of overlapping
//! windows, either over characters or over whitespace-split tokens.

use crate::config::ShingleMode;
use crate::error::{NeardupError, Result};

/// Backing storage for a shingle sequence. Holds the character or token
/// stream once; shingles themselves are produced on demand by [`ShingleIter`]
/// so a caller that only wants the length never pays for string joins.
enum Source {
    Character(Vec<char>),
    Term(Vec<String>),
}

/// A finite, non-restartable sequence of shingles over one text.
///
/// Yields `k`-windows in order: character windows as substrings, term
/// windows as their tokens rejoined with a single space.
pub struct ShingleIter {
    source: Source,
    k: usize,
    pos: usize,
    len: usize,
}

impl Iterator for ShingleIter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.pos >= self.len {
            return None;
        }
        let shingle = match &self.source {
            Source::Character(chars) => chars[self.pos..self.pos + self.k].iter().collect(),
            Source::Term(tokens) => tokens[self.pos..self.pos + self.k].join(" "),
        };
        self.pos += 1;
        Some(shingle)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ShingleIter {
    fn len(&self) -> usize {
        self.len - self.pos
    }
}

/// Produce the shingle sequence for `text` under the given width and mode.
///
/// Fails with [`NeardupError::InputTooShort`] if the sequence would be
/// empty, including when `k` exceeds the text's character or token count.
/// In term mode, runs of whitespace collapse and empty tokens are discarded
/// before the length check.
pub fn shingles(text: &str, k: usize, mode: ShingleMode) -> Result<ShingleIter> {
    match mode {
        ShingleMode::Character => {
            let chars: Vec<char> = text.chars().collect();
            let len = shingle_count(chars.len(), k)?;
            Ok(ShingleIter {
                source: Source::Character(chars),
                k,
                pos: 0,
                len,
            })
        }
        ShingleMode::Term => {
            let tokens: Vec<String> = text
                .split_whitespace()
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect();
            let len = shingle_count(tokens.len(), k)?;
            Ok(ShingleIter {
                source: Source::Term(tokens),
                k,
                pos: 0,
                len,
            })
        }
    }
}

fn shingle_count(input_len: usize, k: usize) -> Result<usize> {
    if k == 0 || k > input_len {
        return Err(NeardupError::InputTooShort { k, len: input_len });
    }
    Ok(input_len - k + 1)
}
