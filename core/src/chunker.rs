//! Splits extracted text into paragraph chunks.
//!
//! The split point is the blank line (the two-character sequence `\n\n`);
//! segments that are empty or whitespace-only after trimming are discarded.
//! Indices are assigned after filtering, so they are contiguous from 0.

use std::str::Split;

use crate::document::Chunk;

/// Returns a lazy iterator over the chunks of `text`, in original order.
///
/// The iterator is finite and restartable: calling `chunks` again yields the
/// same sequence from the start. Input with no blank line yields exactly one
/// chunk holding the whole trimmed text; empty or whitespace-only input
/// yields no chunks at all.
pub fn chunks(text: &str) -> Chunks<'_> {
    Chunks {
        segments: text.split("\n\n"),
        next_index: 0,
    }
}

/// Iterator returned by [`chunks`].
pub struct Chunks<'a> {
    segments: Split<'a, &'static str>,
    next_index: usize,
}

impl Iterator for Chunks<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        loop {
            let segment = self.segments.next()?;
            let trimmed = segment.trim();
            if trimmed.is_empty() {
                continue;
            }
            let index = self.next_index;
            self.next_index += 1;
            return Some(Chunk {
                text: trimmed.to_string(),
                index,
            });
        }
    }
}
