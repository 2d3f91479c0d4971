use super::strategies::{arb_option_set, arb_variants_for};
use proptest::prelude::*;
use variantkit::reconcile::{SequentialIds, reconcile_with};
use variantkit::{OptionSet, OptionType, Variant, generate, reconcile};

fn option_set_and_variants() -> impl Strategy<Value = (OptionSet, Vec<Variant>)> {
    arb_option_set(3).prop_flat_map(|options| {
        let variants = arb_variants_for(&options);
        (Just(options), variants)
    })
}

proptest! {
    #[test]
    fn idempotent((options, existing) in option_set_and_variants()) {
        let combos = generate(&options).unwrap();
        let once = reconcile(&combos, &existing);
        let twice = reconcile(&combos, &once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn one_variant_per_combination_in_order((options, existing) in option_set_and_variants()) {
        let combos = generate(&options).unwrap();
        let result = reconcile_with(&combos, &existing, &mut SequentialIds::new("new-"));
        prop_assert_eq!(result.len(), combos.len());
        for (v, c) in result.iter().zip(&combos) {
            prop_assert_eq!(&v.combination, c);
        }
    }

    #[test]
    fn matched_fields_are_preserved((options, existing) in option_set_and_variants()) {
        let combos = generate(&options).unwrap();
        let result = reconcile_with(&combos, &existing, &mut SequentialIds::new("new-"));
        for v in &result {
            match existing.iter().find(|e| e.combination == v.combination) {
                Some(first) => prop_assert_eq!(v, first),
                None => {
                    prop_assert!(v.id.starts_with("new-"));
                    prop_assert_eq!(v, &Variant::scaffold(v.id.clone(), v.combination.clone()));
                }
            }
        }
    }

    #[test]
    fn removing_a_value_deletes_exactly_its_variants(
        (options, _) in option_set_and_variants(),
        pick in any::<prop::sample::Index>(),
    ) {
        let before = reconcile(&generate(&options).unwrap(), &[]);

        let target = pick.index(options.len());
        prop_assume!(options.options[target].values.len() > 1);
        let removed = options.options[target].values[0].clone();
        let mut trimmed = options.clone();
        trimmed.options[target] = OptionType {
            values: options.options[target].values[1..].to_vec(),
            ..options.options[target].clone()
        };

        let after = reconcile(&generate(&trimmed).unwrap(), &before);
        let expected: Vec<Variant> = before
            .iter()
            .filter(|v| v.combination.get(target) != Some(removed.as_str()))
            .cloned()
            .collect();
        prop_assert_eq!(after, expected);
    }
}
