use super::common::*;
use variantkit::generate::{combination_count, generate_with_limit};
use variantkit::{GenerationErrorKind, OptionSet, OptionType, generate};

#[test]
fn two_by_two_in_nested_loop_order() {
    let combos = generate(&color_size()).unwrap();
    assert_eq!(
        combos,
        vec![
            combo(&["Red", "S"]),
            combo(&["Red", "M"]),
            combo(&["Blue", "S"]),
            combo(&["Blue", "M"]),
        ]
    );
}

#[test]
fn last_option_varies_fastest() {
    let options = OptionSet::new(vec![
        OptionType::new("a", "Material", values(&["Cotton", "Wool"])),
        OptionType::new("b", "Color", values(&["Red"])),
        OptionType::new("c", "Size", values(&["S", "M", "L"])),
    ]);
    let combos = generate(&options).unwrap();
    assert_eq!(combos.len(), 6);
    assert_eq!(combos[0], combo(&["Cotton", "Red", "S"]));
    assert_eq!(combos[1], combo(&["Cotton", "Red", "M"]));
    assert_eq!(combos[2], combo(&["Cotton", "Red", "L"]));
    assert_eq!(combos[3], combo(&["Wool", "Red", "S"]));
    assert_eq!(combos[5], combo(&["Wool", "Red", "L"]));
}

#[test]
fn empty_option_set_yields_nothing() {
    let combos = generate(&OptionSet::default()).unwrap();
    assert!(combos.is_empty());
    assert_eq!(combination_count(&OptionSet::default()), 0);
}

#[test]
fn single_option_yields_one_tuple_per_value() {
    let options = OptionSet::new(vec![OptionType::new("s", "Size", values(&["S", "M", "L"]))]);
    let combos = generate(&options).unwrap();
    assert_eq!(combos, vec![combo(&["S"]), combo(&["M"]), combo(&["L"])]);
}

#[test]
fn option_without_values_collapses_product() {
    let options = OptionSet::new(vec![
        OptionType::new("c", "Color", values(&["Red"])),
        OptionType::new("s", "Size", vec![]),
    ]);
    assert!(generate(&options).unwrap().is_empty());
}

#[test]
fn values_containing_separators_stay_distinct() {
    let options = OptionSet::new(vec![
        OptionType::new("a", "A", values(&["x,y", "x"])),
        OptionType::new("b", "B", values(&["z", "y,z"])),
    ]);
    let combos = generate(&options).unwrap();
    assert_eq!(combos.len(), 4);
    assert_ne!(combos[0], combos[3]);
    assert_eq!(combos[0], combo(&["x,y", "z"]));
    assert_eq!(combos[3], combo(&["x", "y,z"]));
}

#[test]
fn exceeding_limit_is_rejected() {
    let err = generate_with_limit(&color_size(), 3).unwrap_err();
    assert_eq!(err.kind, GenerationErrorKind::TooManyCombinations);
    assert_eq!(err.requested, Some(4));
    assert_eq!(err.limit, 3);
}

#[test]
fn limit_is_inclusive() {
    assert_eq!(generate_with_limit(&color_size(), 4).unwrap().len(), 4);
}

#[test]
fn overflowing_product_is_rejected_without_allocating() {
    let wide: Vec<String> = (0..1000).map(|i| i.to_string()).collect();
    let options: OptionSet = (0..8)
        .map(|i| OptionType::new(format!("o{}", i), format!("O{}", i), wide.clone()))
        .collect();
    assert_eq!(combination_count(&options), usize::MAX);
    let err = generate(&options).unwrap_err();
    assert_eq!(err.kind, GenerationErrorKind::TooManyCombinations);
    assert_eq!(err.requested, None);
}

#[test]
fn input_is_left_untouched() {
    let options = color_size();
    let before = options.clone();
    let _ = generate(&options).unwrap();
    assert_eq!(options, before);
}
