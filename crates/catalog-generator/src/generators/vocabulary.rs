//! Fixed vocabulary used for names, descriptions and injected tokens.
//!
//! Changing any list changes the dataset. Bump [`VOCABULARY_VERSION`]
//! whenever a word is added, removed or reordered.

use rand::Rng;

/// Version of the word lists below.
pub const VOCABULARY_VERSION: u32 = 1;

/// High-frequency tokens used by common-token injection.
pub const COMMON_TOKENS: &[&str] = &[
    "organic", "chicken", "gluten", "natural", "spicy", "classic", "premium", "fresh", "healthy",
    "seasoned",
];

pub const ADJECTIVES: &[&str] = &[
    "smoky", "crispy", "zesty", "hearty", "sweet", "savory", "tangy", "bright", "roasted",
    "toasted", "herbed", "sliced", "chunky", "creamy", "bold",
];

pub const NOUNS: &[&str] = &[
    "chips", "soup", "sauce", "tea", "coffee", "broth", "granola", "mix", "bites", "snacks",
    "spread", "berries", "greens", "protein", "vitamins",
];

/// Multi-word qualifier phrases.
pub const QUALIFIERS: &[&str] = &[
    "family size",
    "single serve",
    "value pack",
    "low sodium",
    "no sugar",
    "extra hot",
    "limited batch",
    "stone ground",
    "farm style",
];

/// Filler words for descriptions.
pub const FILLER_TOKENS: &[&str] = &[
    "crafted",
    "selected",
    "quality",
    "ingredients",
    "from",
    "trusted",
    "sources",
    "packed",
    "for",
    "everyday",
    "meals",
    "quick",
    "snacking",
    "great",
    "taste",
    "balanced",
    "flavor",
    "kitchen",
    "pantry",
    "ready",
    "to",
    "enjoy",
];

/// Draw a uniform index in `0..len`.
///
/// Sampled through `u64` so the result does not depend on the platform's
/// pointer width. `len` must be non-zero.
pub fn draw_index<R: Rng>(rng: &mut R, len: usize) -> usize {
    rng.random_range(0..len as u64) as usize
}

/// Draw one word uniformly from a non-empty list.
pub fn draw_word<R: Rng>(rng: &mut R, words: &[&'static str]) -> &'static str {
    words[draw_index(rng, words.len())]
}
