#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use variantkit::selection::select;
use variantkit::{Combination, Selection, StockSignal, Variant, available_values};

#[derive(Debug, Arbitrary)]
struct Input {
    variants: Vec<(Vec<String>, bool)>,
    selection: Vec<Option<String>>,
    index: u8,
    value: String,
}

fuzz_target!(|input: Input| {
    let variants: Vec<Variant> = input
        .variants
        .into_iter()
        .map(|(values, available)| Variant {
            combination: Combination(values),
            available,
            ..Variant::default()
        })
        .collect();
    let selection = Selection::from_values(input.selection);
    let index = usize::from(input.index % 8);

    let next = select(&variants, &selection, index, &input.value, StockSignal::Available);
    for (position, current) in next.fixed_positions() {
        if position == index {
            continue;
        }
        let admissible = available_values(position, &variants, &next, StockSignal::Available);
        assert!(admissible.iter().any(|a| a.value == current));
    }
});
