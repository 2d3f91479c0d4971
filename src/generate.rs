//! Combination generation: the Cartesian product of an option set.

use crate::config::DEFAULT_MAX_COMBINATIONS;
use crate::error::{GenerationError, GenerationErrorKind};
use crate::types::{Combination, OptionSet};

/// Number of combinations `options` expands to, or `None` on overflow.
///
/// An empty option set has zero combinations, not one.
pub fn checked_combination_count(options: &OptionSet) -> Option<usize> {
    if options.is_empty() {
        return Some(0);
    }
    options
        .iter()
        .try_fold(1usize, |acc, opt| acc.checked_mul(opt.values.len()))
}

/// Number of combinations `options` expands to, saturating at `usize::MAX`.
pub fn combination_count(options: &OptionSet) -> usize {
    checked_combination_count(options).unwrap_or(usize::MAX)
}

/// Generates every combination with the default cap.
///
/// See [`generate_with_limit`].
pub fn generate(options: &OptionSet) -> Result<Vec<Combination>, GenerationError> {
    generate_with_limit(options, DEFAULT_MAX_COMBINATIONS)
}

/// Generates the Cartesian product of the option set's value lists.
///
/// Combinations are produced in nested-loop order: the first option varies
/// slowest and the last option varies fastest. Callers index table rows by
/// this order, so it must stay stable.
///
/// Returns `TooManyCombinations` before allocating anything when the product
/// exceeds `limit`.
///
/// ```rust
/// use variantkit::{OptionSet, OptionType, generate};
///
/// let options = OptionSet::new(vec![
///     OptionType::new("c", "Color", vec!["Red".into(), "Blue".into()]),
///     OptionType::new("s", "Size", vec!["S".into(), "M".into()]),
/// ]);
/// let combos = generate(&options).unwrap();
/// assert_eq!(combos[1].values(), ["Red", "M"]);
/// ```
pub fn generate_with_limit(
    options: &OptionSet,
    limit: usize,
) -> Result<Vec<Combination>, GenerationError> {
    let count = checked_combination_count(options);
    match count {
        Some(n) if n <= limit => {}
        _ => {
            let message = match count {
                Some(n) => format!(
                    "option set expands to {} combinations, more than the limit of {}",
                    n, limit
                ),
                None => format!(
                    "option set expands to more combinations than fit in memory (limit {})",
                    limit
                ),
            };
            return Err(GenerationError {
                kind: GenerationErrorKind::TooManyCombinations,
                message,
                requested: count,
                limit,
            });
        }
    }

    let total = count.unwrap_or(0);
    if total == 0 {
        if !options.is_empty() {
            log::warn!("option set contains an option without values; no combinations generated");
        }
        return Ok(Vec::new());
    }

    let mut combinations: Vec<Vec<String>> = vec![Vec::with_capacity(options.len())];
    for option in options.iter() {
        let mut next = Vec::with_capacity(combinations.len() * option.values.len());
        for prefix in &combinations {
            for value in &option.values {
                let mut combo = prefix.clone();
                combo.push(value.clone());
                next.push(combo);
            }
        }
        combinations = next;
    }

    log::debug!(
        "generated {} combinations from {} options",
        combinations.len(),
        options.len()
    );
    Ok(combinations.into_iter().map(Combination).collect())
}
