//! Variant reconciliation: aligns freshly generated combinations with the
//! variants a caller already holds.

use crate::types::{Combination, Variant};
use std::collections::HashMap;

/// Extension point for variant identifier generation.
///
/// Identifiers only need to be unique within one product's variant set.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Default [`IdSource`]: random UUID v4 strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic [`IdSource`] yielding `{prefix}{n}` with `n` counting from 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        SequentialIds {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Reconciles `combinations` against `existing` using UUID identifiers for
/// new variants. See [`reconcile_with`].
pub fn reconcile(combinations: &[Combination], existing: &[Variant]) -> Vec<Variant> {
    reconcile_with(combinations, existing, &mut UuidIds)
}

/// Produces exactly one variant per combination, in combination order.
///
/// A combination matching an existing variant (same length, identical value
/// at every position) carries that variant forward unchanged, id included.
/// Anything else gets a scaffolded variant with a fresh id from `ids`.
/// Existing variants whose combination is absent are dropped. When several
/// existing variants share a combination, the first one wins.
///
/// Neither input is modified, and reconciling a set against its own output
/// returns the same set.
pub fn reconcile_with(
    combinations: &[Combination],
    existing: &[Variant],
    ids: &mut dyn IdSource,
) -> Vec<Variant> {
    let mut by_combination: HashMap<&Combination, &Variant> = HashMap::with_capacity(existing.len());
    for variant in existing {
        by_combination.entry(&variant.combination).or_insert(variant);
    }

    let mut kept = 0usize;
    let result: Vec<Variant> = combinations
        .iter()
        .map(|combination| match by_combination.get(combination) {
            Some(previous) => {
                kept += 1;
                log::trace!("keeping variant {} for {}", previous.id, combination);
                (*previous).clone()
            }
            None => {
                let variant = Variant::scaffold(ids.next_id(), combination.clone());
                log::trace!("scaffolded variant {} for {}", variant.id, combination);
                variant
            }
        })
        .collect();

    let arity = combinations.first().map(Combination::len);
    let stale = existing
        .iter()
        .filter(|v| arity.is_some_and(|a| v.combination.len() != a))
        .count();
    if stale > 0 {
        log::warn!(
            "dropping {} variants whose combination length no longer matches the option set",
            stale
        );
    }

    log::debug!(
        "reconciled {} combinations: {} kept, {} created, {} dropped",
        combinations.len(),
        kept,
        result.len() - kept,
        existing.len().saturating_sub(kept)
    );
    result
}
