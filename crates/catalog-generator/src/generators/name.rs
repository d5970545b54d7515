//! Product name synthesis and near-duplicate construction.
//!
//! Patterns may use four placeholders:
//! - `{adj}` - adjective
//! - `{noun}` - noun
//! - `{qualifier}` - qualifier phrase
//! - `{brandish}` - second "flavor" adjective

use crate::generator::GeneratorError;
use crate::generators::rng::derive_row_rng;
use crate::generators::vocabulary::{draw_index, draw_word, ADJECTIVES, NOUNS, QUALIFIERS};
use catalog_core::SeedConfig;
use rand::Rng;

/// Placeholders recognized in name patterns.
pub const PLACEHOLDERS: [&str; 4] = ["{adj}", "{noun}", "{qualifier}", "{brandish}"];

/// Suffix used by the third near-duplicate transform.
pub const LIMITED_SUFFIX: &str = " - limited";

/// Words substituted into a name pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameParts<'a> {
    pub adj: &'a str,
    pub noun: &'a str,
    pub qualifier: &'a str,
    pub brandish: &'a str,
}

/// Substitute `parts` into `pattern`.
///
/// Fails with [`GeneratorError::Template`] if a brace survives substitution,
/// i.e. the pattern uses a placeholder outside [`PLACEHOLDERS`].
pub fn render_pattern(pattern: &str, parts: &NameParts<'_>) -> Result<String, GeneratorError> {
    let words = [parts.adj, parts.noun, parts.qualifier, parts.brandish];
    let out = PLACEHOLDERS
        .iter()
        .zip(words)
        .fold(pattern.to_string(), |acc, (placeholder, word)| {
            acc.replace(placeholder, word)
        });

    if out.contains(['{', '}']) {
        return Err(GeneratorError::Template {
            pattern: pattern.to_string(),
        });
    }
    Ok(out)
}

/// Check a pattern without drawing any randomness.
pub fn check_pattern(pattern: &str) -> Result<(), GeneratorError> {
    let probe = NameParts {
        adj: "adj",
        noun: "noun",
        qualifier: "qualifier",
        brandish: "brandish",
    };
    render_pattern(pattern, &probe).map(|_| ())
}

/// Base (pre-duplicate) name of `row`.
///
/// Pure: uses a fresh stream derived from `(config.seed, row)`, so it can be
/// recomputed for any row at any time. Draws, in this exact order:
///
/// 1. pattern index into `templates.name_patterns`
/// 2. adjective (`{adj}`)
/// 3. noun (`{noun}`)
/// 4. qualifier phrase (`{qualifier}`)
/// 5. flavor adjective (`{brandish}`)
///
/// All five draws happen even if the pattern does not use every placeholder.
pub fn base_name(config: &SeedConfig, row: u64) -> Result<String, GeneratorError> {
    let patterns = &config.templates.name_patterns;
    if patterns.is_empty() {
        return Err(GeneratorError::Configuration(
            "templates.name_patterns is empty".to_string(),
        ));
    }

    let mut rng = derive_row_rng(config.seed, row);
    let pattern = &patterns[draw_index(&mut rng, patterns.len())];
    let adj = draw_word(&mut rng, ADJECTIVES);
    let noun = draw_word(&mut rng, NOUNS);
    let qualifier = draw_word(&mut rng, QUALIFIERS);
    let brandish = draw_word(&mut rng, ADJECTIVES);

    render_pattern(
        pattern,
        &NameParts {
            adj,
            noun,
            qualifier,
            brandish,
        },
    )
}

/// Final name of `row`: either `base` unchanged, or a near-duplicate of an
/// earlier row's base name.
///
/// Row 0 always keeps `base` and draws nothing. For later rows the draws
/// from `rng` are: duplicate roll; then, only if the roll is under
/// `duplicates.rate`, source row in `0..row`, transform selector in `0..3`,
/// and for transforms 0 and 1 one vocabulary word.
///
/// The source row's name comes from [`base_name`], never from this function,
/// so the recomputation is exactly one level deep.
pub fn final_name<R: Rng>(
    config: &SeedConfig,
    row: u64,
    base: String,
    rng: &mut R,
) -> Result<String, GeneratorError> {
    if row == 0 {
        return Ok(base);
    }
    if rng.random::<f64>() >= config.duplicates.rate {
        return Ok(base);
    }

    let source_row = rng.random_range(0..row);
    let source = base_name(config, source_row)?;

    let name = match rng.random_range(0..3u32) {
        0 => format!("{source} {}", draw_word(rng, QUALIFIERS)),
        1 => format!("{} {source}", draw_word(rng, ADJECTIVES)),
        _ => format!("{source}{LIMITED_SUFFIX}"),
    };
    Ok(name)
}
