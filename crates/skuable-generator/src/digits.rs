use crate::SuffixGenerator;
use rand::seq::SliceRandom;
use rand::Rng;

const DIGITS: &[u8] = b"0123456789";

/// Minimum number of copies of each digit placed in the pool.
const MIN_COPIES: usize = 2;

/// Random suffixes drawn from a shuffled pool of digits.
///
/// The pool holds every digit at least twice (more for long suffixes), is
/// shuffled and the first `len` digits are taken. A digit therefore never
/// appears more often than it has copies in the pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShuffledDigits;

impl ShuffledDigits {
    pub fn new() -> Self {
        Self
    }

    /// Draws a suffix using the given random number generator.
    pub fn generate_with<R: Rng + ?Sized>(len: usize, rng: &mut R) -> String {
        let mut pool = DIGITS.repeat(copies_for(len));
        pool.shuffle(rng);
        pool.into_iter().take(len).map(char::from).collect()
    }
}

impl SuffixGenerator for ShuffledDigits {
    fn generate(&self, len: usize) -> String {
        Self::generate_with(len, &mut rand::rng())
    }
}

fn copies_for(len: usize) -> usize {
    (len * MIN_COPIES).div_ceil(DIGITS.len()).max(MIN_COPIES)
}
