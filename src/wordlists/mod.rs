//! Secret word lists
//!
//! Provides the embedded list of candidate secrets and random selection.

mod embedded;
pub mod loader;

pub use embedded::{SECRETS, SECRETS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Pick a secret uniformly at random, `None` if the list is empty
pub fn pick_secret<'a, R: Rng + ?Sized>(words: &'a [Word], rng: &mut R) -> Option<&'a Word> {
    words.choose(rng)
}
