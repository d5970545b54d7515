//! Common and rare token injection.
//!
//! Injection gives search benchmarks tokens of known selectivity: common
//! words land on a sizeable fraction of rows, rare numbered tokens on very
//! few.

use crate::generators::picker::WeightedPicker;
use crate::generators::vocabulary::{draw_index, draw_word, COMMON_TOKENS};
use catalog_core::{InjectionField, ProductRecord, SeedConfig};
use rand::Rng;

/// Which vocabulary an injection pass draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Common,
    Rare,
}

impl TokenKind {
    fn rate(&self, config: &SeedConfig) -> f64 {
        match self {
            TokenKind::Common => config.token_injection.common_rate,
            TokenKind::Rare => config.token_injection.rare_rate,
        }
    }
}

/// Outcome of a triggered injection pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injection {
    pub field: InjectionField,
    pub token: String,
}

/// Draw a token of `kind`.
pub fn draw_token<R: Rng>(kind: TokenKind, config: &SeedConfig, rng: &mut R) -> String {
    match kind {
        TokenKind::Common => draw_word(rng, COMMON_TOKENS).to_string(),
        TokenKind::Rare => {
            let rare = &config.rare_tokens;
            rare.format_token(rng.random_range(rare.start..=rare.end))
        }
    }
}

/// Insert `token` at a uniformly drawn word boundary of `text`.
///
/// The position is drawn from `0..=word_count`. Words are rejoined with
/// single spaces; empty text becomes the token alone (without a draw).
pub fn insert_token<R: Rng>(text: &str, token: &str, rng: &mut R) -> String {
    let mut words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return token.to_string();
    }
    let position = draw_index(rng, words.len() + 1);
    words.insert(position, token);
    words.join(" ")
}

/// Run one injection pass of `kind` over `record`.
///
/// Draw order: trigger roll; if under the rate, the token, then the target
/// field from `fields`, then (for name/description) the insertion position.
/// Brand and category get the token appended after a space. Only the
/// targeted field is modified.
pub fn inject<R: Rng>(
    record: &mut ProductRecord,
    kind: TokenKind,
    config: &SeedConfig,
    fields: &WeightedPicker<InjectionField>,
    rng: &mut R,
) -> Option<Injection> {
    if rng.random::<f64>() >= kind.rate(config) {
        return None;
    }

    let token = draw_token(kind, config, rng);
    let field = *fields.pick(rng);

    let target = record.field_mut(field);
    if field.is_free_text() {
        *target = insert_token(target.as_str(), &token, rng);
    } else {
        target.push(' ');
        target.push_str(&token);
    }

    Some(Injection { field, token })
}
