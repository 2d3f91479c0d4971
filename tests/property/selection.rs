use super::strategies::{arb_option_set, arb_variants_for};
use proptest::prelude::*;
use variantkit::selection::{resolve, select};
use variantkit::{OptionSet, Selection, StockSignal, Variant, available_values};

fn scenario() -> impl Strategy<Value = (OptionSet, Vec<Variant>, Vec<Option<prop::sample::Index>>)> {
    arb_option_set(3).prop_flat_map(|options| {
        let arity = options.len();
        let variants = arb_variants_for(&options);
        let picks = proptest::collection::vec(proptest::option::of(any::<prop::sample::Index>()), arity);
        (Just(options), variants, picks)
    })
}

fn selection_from(options: &OptionSet, picks: &[Option<prop::sample::Index>]) -> Selection {
    Selection::from_values(
        options
            .iter()
            .zip(picks)
            .map(|(o, p)| p.as_ref().map(|i| o.values[i.index(o.values.len())].clone()))
            .collect(),
    )
}

fn agrees(variant: &Variant, selection: &Selection, skip: usize) -> bool {
    selection
        .fixed_positions()
        .filter(|(i, _)| *i != skip)
        .all(|(i, v)| variant.combination.get(i) == Some(v))
}

proptest! {
    #[test]
    fn filter_soundness_and_completeness((options, variants, picks) in scenario()) {
        let selection = selection_from(&options, &picks);
        for position in 0..options.len() {
            let admissible = available_values(position, &variants, &selection, StockSignal::Available);
            for value in &admissible {
                let backing: Vec<&Variant> = variants
                    .iter()
                    .filter(|v| agrees(v, &selection, position))
                    .filter(|v| v.combination.get(position) == Some(value.value.as_str()))
                    .collect();
                prop_assert!(!backing.is_empty());
                prop_assert_eq!(value.in_stock, backing.iter().any(|v| v.available));
            }
            for v in variants.iter().filter(|v| agrees(v, &selection, position)) {
                let value = v.combination.get(position).unwrap();
                prop_assert!(admissible.iter().any(|a| a.value == value));
            }
            let mut names: Vec<&str> = admissible.iter().map(|a| a.value.as_str()).collect();
            let total = names.len();
            names.sort();
            names.dedup();
            prop_assert_eq!(names.len(), total);
        }
    }

    #[test]
    fn select_leaves_only_admissible_choices(
        (options, variants, picks) in scenario(),
        target in any::<prop::sample::Index>(),
        value in any::<prop::sample::Index>(),
    ) {
        let selection = selection_from(&options, &picks);
        let index = target.index(options.len());
        let values = &options.options[index].values;
        let chosen = values[value.index(values.len())].clone();

        let next = select(&variants, &selection, index, &chosen, StockSignal::Available);
        prop_assert_eq!(next.get(index), Some(chosen.as_str()));
        for (position, current) in next.fixed_positions() {
            if position == index {
                continue;
            }
            prop_assert_eq!(selection.get(position), Some(current));
            let admissible = available_values(position, &variants, &next, StockSignal::Available);
            prop_assert!(admissible.iter().any(|a| a.value == current));
        }
    }

    #[test]
    fn resolved_variant_matches_selection((options, variants, picks) in scenario()) {
        let selection = selection_from(&options, &picks);
        if let Some(found) = resolve(&variants, &selection) {
            prop_assert!(selection.is_complete());
            for (i, v) in selection.fixed_positions() {
                prop_assert_eq!(found.combination.get(i), Some(v));
            }
        }
    }
}
