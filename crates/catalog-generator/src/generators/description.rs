//! Description synthesis.

use crate::generators::vocabulary::{draw_word, ADJECTIVES, FILLER_TOKENS, NOUNS};
use catalog_core::SeedConfig;
use rand::Rng;

/// Build a description of `min..=max` tokens.
///
/// Draws the target length first, then one word per position: adjective at
/// `p % 5 == 0`, noun at `p % 5 == 1`, filler otherwise.
pub fn describe<R: Rng>(config: &SeedConfig, rng: &mut R) -> String {
    let bounds = config.description_tokens;
    let target = rng.random_range(bounds.min as u64..=bounds.max as u64) as usize;

    let mut tokens: Vec<&str> = Vec::with_capacity(target);
    while tokens.len() < target {
        let words = match tokens.len() % 5 {
            0 => ADJECTIVES,
            1 => NOUNS,
            _ => FILLER_TOKENS,
        };
        tokens.push(draw_word(rng, words));
    }

    tokens.join(" ")
}
