//! Letter source - weighted random letters for strips and refills
//!
//! The weight table favors vowels and common consonants over raw English
//! frequency so that grids stay playable. Weights are in tenths of a percent.
//!
//! Also provides a cycling source for deterministic tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::Letter;

/// Anything that can hand out the next letter.
pub trait LetterSource {
    fn next_letter(&mut self) -> Letter;

    /// Draw `len` letters (one full strip).
    fn fill_strip(&mut self, len: usize) -> Vec<Letter> {
        (0..len).map(|_| self.next_letter()).collect()
    }
}

impl<T: LetterSource + ?Sized> LetterSource for Box<T> {
    fn next_letter(&mut self) -> Letter {
        (**self).next_letter()
    }
}

/// Playability weights, indexed by alphabet position (A..Z).
pub const LETTER_WEIGHTS: [u32; 26] = [
    85,  // A
    15,  // B
    30,  // C
    35,  // D
    125, // E
    20,  // F
    20,  // G
    40,  // H
    75,  // I
    5,   // J
    15,  // K
    40,  // L
    25,  // M
    60,  // N
    80,  // O
    20,  // P
    3,   // Q
    60,  // R
    55,  // S
    60,  // T
    30,  // U
    10,  // V
    15,  // W
    5,   // X
    15,  // Y
    5,   // Z
];

const fn cumulative_weights() -> [u32; 26] {
    let mut out = [0u32; 26];
    let mut acc = 0u32;
    let mut i = 0;
    while i < 26 {
        acc += LETTER_WEIGHTS[i];
        out[i] = acc;
        i += 1;
    }
    out
}

const CUMULATIVE: [u32; 26] = cumulative_weights();

/// Sum of all weights.
pub const TOTAL_WEIGHT: u32 = CUMULATIVE[25];

/// Map a roll in `0..TOTAL_WEIGHT` to its letter.
pub fn letter_for_roll(roll: u32) -> Letter {
    let idx = CUMULATIVE.partition_point(|&upper| upper <= roll);
    Letter::saturating_from_index(idx.min(25) as u8)
}

/// Weighted sampler over [`LETTER_WEIGHTS`].
#[derive(Debug, Clone)]
pub struct WeightedLetters {
    rng: ChaCha8Rng,
}

impl WeightedLetters {
    /// Seeded source; the same seed yields the same letters.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl LetterSource for WeightedLetters {
    fn next_letter(&mut self) -> Letter {
        letter_for_roll(self.rng.random_range(0..TOTAL_WEIGHT))
    }
}

/// Cycles through a fixed letter sequence.
#[derive(Debug, Clone)]
pub struct SequenceLetters {
    letters: Vec<Letter>,
    next: usize,
}

impl SequenceLetters {
    /// Non-letters in `s` are skipped. An empty sequence yields `X`.
    pub fn new(s: &str) -> Self {
        Self {
            letters: s.chars().filter_map(Letter::new).collect(),
            next: 0,
        }
    }

    /// Letters handed out so far.
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl LetterSource for SequenceLetters {
    fn next_letter(&mut self) -> Letter {
        if self.letters.is_empty() {
            self.next += 1;
            return Letter::saturating_from_index(23);
        }
        let letter = self.letters[self.next % self.letters.len()];
        self.next += 1;
        letter
    }
}
