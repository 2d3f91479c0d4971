use super::strategies::arb_option_set;
use proptest::prelude::*;
use std::collections::HashSet;
use variantkit::generate;
use variantkit::generate::combination_count;

proptest! {
    #[test]
    fn cartesian_completeness(options in arb_option_set(4)) {
        let combos = generate(&options).unwrap();
        let expected: usize = options.iter().map(|o| o.values.len()).product();
        prop_assert_eq!(combos.len(), expected);
        prop_assert_eq!(combination_count(&options), expected);

        for c in &combos {
            prop_assert_eq!(c.len(), options.len());
            for (i, value) in c.values().iter().enumerate() {
                prop_assert!(options.options[i].values.contains(value));
            }
        }

        let unique: HashSet<_> = combos.iter().collect();
        prop_assert_eq!(unique.len(), combos.len());
    }

    #[test]
    fn last_option_varies_fastest(options in arb_option_set(3)) {
        let combos = generate(&options).unwrap();
        let last = options.len() - 1;
        let last_values = &options.options[last].values;
        for (i, c) in combos.iter().enumerate() {
            prop_assert_eq!(c.get(last), Some(last_values[i % last_values.len()].as_str()));
        }
    }
}
