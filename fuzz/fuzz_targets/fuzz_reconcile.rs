#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use variantkit::generate::generate_with_limit;
use variantkit::{Combination, OptionSet, OptionType, Variant, reconcile};

#[derive(Debug, Arbitrary)]
struct Input {
    options: Vec<Vec<String>>,
    existing: Vec<(Vec<String>, String, bool)>,
}

fuzz_target!(|input: Input| {
    let options: OptionSet = input
        .options
        .into_iter()
        .take(4)
        .enumerate()
        .map(|(i, values)| OptionType::new(format!("o{}", i), format!("O{}", i), values))
        .collect();
    let existing: Vec<Variant> = input
        .existing
        .into_iter()
        .map(|(values, price, available)| Variant {
            id: price.clone(),
            combination: Combination(values),
            price,
            available,
            ..Variant::default()
        })
        .collect();

    let Ok(combos) = generate_with_limit(&options, 512) else {
        return;
    };
    let once = reconcile(&combos, &existing);
    assert_eq!(once.len(), combos.len());
    let twice = reconcile(&combos, &once);
    assert_eq!(once, twice);
});
