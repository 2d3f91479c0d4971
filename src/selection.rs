//! Storefront selection filtering.
//!
//! Given a reconciled variant set and a buyer's partial selection, works out
//! which values of each option are still selectable and whether any in-stock
//! variant backs them. Values that are offered but out of stock stay in the
//! admissible set (rendered disabled); values with no agreeing variant at all
//! are absent.

use crate::enums::{StockSignal, StockStatus};
use crate::types::{Combination, Variant};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ─── Selection ──────────────────────────────────────────────────────────────

/// At most one chosen value per option position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(Vec<Option<String>>);

impl Selection {
    /// An empty selection over `arity` option positions.
    pub fn new(arity: usize) -> Self {
        Selection(vec![None; arity])
    }

    pub fn from_values(values: Vec<Option<String>>) -> Self {
        Selection(values)
    }

    pub fn arity(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).and_then(|v| v.as_deref())
    }

    /// Returns a copy with `value` chosen at `index`. Positions past the
    /// current arity are padded with `None`.
    pub fn with(&self, index: usize, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        if next.0.len() <= index {
            next.0.resize(index + 1, None);
        }
        next.0[index] = Some(value.into());
        next
    }

    /// Returns a copy with `index` unselected.
    pub fn cleared(&self, index: usize) -> Self {
        let mut next = self.clone();
        if let Some(slot) = next.0.get_mut(index) {
            *slot = None;
        }
        next
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    pub fn is_complete(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(Option::is_some)
    }

    /// `(position, value)` for every position that has a value.
    pub fn fixed_positions(&self) -> impl Iterator<Item = (usize, &str)> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.as_deref().map(|v| (i, v)))
    }

    /// `true` when `combination` matches every fixed position except `skip`.
    fn admits(&self, combination: &Combination, skip: Option<usize>) -> bool {
        self.fixed_positions()
            .filter(|(i, _)| Some(*i) != skip)
            .all(|(i, v)| combination.get(i) == Some(v))
    }
}

// ─── Admissible values ──────────────────────────────────────────────────────

/// One selectable value of an option under the current selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissibleValue {
    pub value: String,
    pub in_stock: bool,
}

impl AdmissibleValue {
    pub fn status(&self) -> StockStatus {
        if self.in_stock {
            StockStatus::InStock
        } else {
            StockStatus::OutOfStock
        }
    }
}

/// Admissible values at `option_index` given `selection`.
///
/// A value is admissible when at least one variant carries it at
/// `option_index` and agrees with the selection at every other fixed
/// position. The selection at `option_index` itself is ignored. Values come
/// back in the order they first appear in `variants`.
pub fn available_values(
    option_index: usize,
    variants: &[Variant],
    selection: &Selection,
    signal: StockSignal,
) -> Vec<AdmissibleValue> {
    let mut values: Vec<AdmissibleValue> = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for variant in variants {
        let Some(value) = variant.combination.get(option_index) else {
            continue;
        };
        if !selection.admits(&variant.combination, Some(option_index)) {
            continue;
        }
        let in_stock = variant.is_in_stock(signal);
        match seen.get(value) {
            Some(&slot) => values[slot].in_stock |= in_stock,
            None => {
                seen.insert(value, values.len());
                values.push(AdmissibleValue {
                    value: value.to_string(),
                    in_stock,
                });
            }
        }
    }
    values
}

/// Admissible values for every position of `selection`.
pub fn availability(
    variants: &[Variant],
    selection: &Selection,
    signal: StockSignal,
) -> Vec<Vec<AdmissibleValue>> {
    (0..selection.arity())
        .map(|i| available_values(i, variants, selection, signal))
        .collect()
}

/// Chooses `value` at `index` and clears the other choices it conflicts
/// with.
///
/// A choice at `j` is cleared first when no variant carries both the new
/// value at `index` and that choice at `j`. Choices that pair with the new
/// value but still cannot be satisfied together with the rest are then
/// cleared one at a time, lowest position first, until every remaining
/// choice is admissible.
pub fn select(
    variants: &[Variant],
    selection: &Selection,
    index: usize,
    value: &str,
    signal: StockSignal,
) -> Selection {
    let mut next = selection.with(index, value);

    let conflicting: Vec<(usize, String)> = next
        .fixed_positions()
        .filter(|(position, current)| {
            *position != index
                && !variants.iter().any(|v| {
                    v.combination.get(index) == Some(value)
                        && v.combination.get(*position) == Some(*current)
                })
        })
        .map(|(position, current)| (position, current.to_string()))
        .collect();
    for (position, current) in conflicting {
        log::debug!(
            "selecting '{}' at position {} clears '{}' at position {}",
            value,
            index,
            current,
            position
        );
        next = next.cleared(position);
    }

    while let Some((position, current)) = first_inadmissible(variants, &next, index, signal) {
        log::debug!(
            "'{}' at position {} no longer fits the selection; clearing it",
            current,
            position
        );
        next = next.cleared(position);
    }
    next
}

fn first_inadmissible(
    variants: &[Variant],
    selection: &Selection,
    index: usize,
    signal: StockSignal,
) -> Option<(usize, String)> {
    selection
        .fixed_positions()
        .filter(|(position, _)| *position != index)
        .find(|(position, current)| {
            !available_values(*position, variants, selection, signal)
                .iter()
                .any(|v| v.value == *current)
        })
        .map(|(position, current)| (position, current.to_string()))
}

/// The variant matching a complete selection, if one exists.
pub fn resolve<'a>(variants: &'a [Variant], selection: &Selection) -> Option<&'a Variant> {
    if !selection.is_complete() {
        return None;
    }
    variants.iter().find(|v| {
        v.combination.len() == selection.arity() && selection.admits(&v.combination, None)
    })
}

// ─── SelectionFilter ────────────────────────────────────────────────────────

/// Binds a variant set to a stock signal for repeated filtering.
#[derive(Clone, Copy, Debug)]
pub struct SelectionFilter<'a> {
    variants: &'a [Variant],
    signal: StockSignal,
}

impl<'a> SelectionFilter<'a> {
    pub fn new(variants: &'a [Variant], signal: StockSignal) -> Self {
        SelectionFilter { variants, signal }
    }

    pub fn available_values(&self, option_index: usize, selection: &Selection) -> Vec<AdmissibleValue> {
        available_values(option_index, self.variants, selection, self.signal)
    }

    pub fn availability(&self, selection: &Selection) -> Vec<Vec<AdmissibleValue>> {
        availability(self.variants, selection, self.signal)
    }

    pub fn select(&self, selection: &Selection, index: usize, value: &str) -> Selection {
        select(self.variants, selection, index, value, self.signal)
    }

    pub fn resolve(&self, selection: &Selection) -> Option<&'a Variant> {
        resolve(self.variants, selection)
    }

    /// `true` when there are no variants at all. Variants that are all out
    /// of stock still count.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}
