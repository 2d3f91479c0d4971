use super::common::*;
use variantkit::selection::{AdmissibleValue, SelectionFilter, availability, resolve, select};
use variantkit::{Selection, StockSignal, StockStatus, Variant, available_values};

/// `[Red,S]` in stock, `[Red,M]` out of stock, no Blue variants at all.
fn red_only() -> Vec<Variant> {
    vec![
        stocked("rs", &["Red", "S"], true),
        stocked("rm", &["Red", "M"], false),
    ]
}

fn value(v: &str, in_stock: bool) -> AdmissibleValue {
    AdmissibleValue {
        value: v.to_string(),
        in_stock,
    }
}

#[test]
fn absent_color_yields_empty_size_list() {
    let selection = Selection::new(2).with(0, "Blue");
    let sizes = available_values(1, &red_only(), &selection, StockSignal::Available);
    assert!(sizes.is_empty());
}

#[test]
fn out_of_stock_sizes_are_shown_disabled() {
    let selection = Selection::new(2).with(0, "Red");
    let sizes = available_values(1, &red_only(), &selection, StockSignal::Available);
    assert_eq!(sizes, vec![value("S", true), value("M", false)]);
    assert_eq!(sizes[0].status(), StockStatus::InStock);
    assert_eq!(sizes[1].status(), StockStatus::OutOfStock);
}

#[test]
fn no_selection_lists_every_offered_value() {
    let variants = fresh_variants(&color_size());
    let colors = available_values(0, &variants, &Selection::new(2), StockSignal::Available);
    assert_eq!(colors, vec![value("Red", false), value("Blue", false)]);
}

#[test]
fn own_position_does_not_constrain_itself() {
    let selection = Selection::new(2).with(0, "Red");
    let colors = available_values(0, &red_only(), &selection, StockSignal::Available);
    assert_eq!(colors, vec![value("Red", true)]);
}

#[test]
fn value_is_in_stock_when_any_agreeing_variant_is() {
    let variants = vec![
        stocked("a", &["Red", "S"], false),
        stocked("b", &["Blue", "S"], true),
    ];
    let sizes = available_values(1, &variants, &Selection::new(2), StockSignal::Available);
    assert_eq!(sizes, vec![value("S", true)]);

    let red_sizes = available_values(
        1,
        &variants,
        &Selection::new(2).with(0, "Red"),
        StockSignal::Available,
    );
    assert_eq!(red_sizes, vec![value("S", false)]);
}

#[test]
fn inventory_signal_reads_quantity() {
    let mut variants = red_only();
    variants[0].available = false;
    variants[0].inventory = "3".to_string();
    variants[1].available = true;
    variants[1].inventory = "not a number".to_string();

    let selection = Selection::new(2).with(0, "Red");
    let sizes = available_values(1, &variants, &selection, StockSignal::Inventory);
    assert_eq!(sizes, vec![value("S", true), value("M", false)]);
}

#[test]
fn zero_variants_means_nothing_purchasable() {
    let selection = Selection::new(2).with(0, "Red");
    for position in 0..2 {
        assert!(available_values(position, &[], &selection, StockSignal::Available).is_empty());
    }
    let filter = SelectionFilter::new(&[], StockSignal::Available);
    assert!(filter.is_empty());
    assert!(filter.availability(&Selection::new(2)).iter().all(Vec::is_empty));
}

#[test]
fn impossible_pair_clears_other_selection() {
    let variants = vec![
        stocked("rs", &["Red", "S"], true),
        stocked("bm", &["Blue", "M"], true),
    ];
    let selection = Selection::new(2).with(1, "M");
    let next = select(&variants, &selection, 0, "Red", StockSignal::Available);
    assert_eq!(next.get(0), Some("Red"));
    assert_eq!(next.get(1), None);

    let red_sizes = available_values(1, &variants, &next, StockSignal::Available);
    assert!(red_sizes.iter().all(|v| v.value != "M"));
}

#[test]
fn compatible_pair_is_kept() {
    let selection = Selection::new(2).with(1, "M");
    let next = select(&red_only(), &selection, 0, "Red", StockSignal::Available);
    assert_eq!(next.get(0), Some("Red"));
    assert_eq!(next.get(1), Some("M"));
}

#[test]
fn out_of_stock_pair_is_not_cleared() {
    let selection = Selection::new(2).with(0, "Red");
    let next = select(&red_only(), &selection, 1, "M", StockSignal::Available);
    assert_eq!(next.get(0), Some("Red"));
    assert_eq!(next.get(1), Some("M"));
}

#[test]
fn three_options_clear_only_conflicting_positions() {
    let variants = vec![
        stocked("a", &["Cotton", "Red", "S"], true),
        stocked("b", &["Wool", "Blue", "S"], true),
    ];
    let selection = Selection::new(3).with(1, "Red").with(2, "S");
    let next = select(&variants, &selection, 0, "Wool", StockSignal::Available);
    assert_eq!(next.get(0), Some("Wool"));
    assert_eq!(next.get(1), None);
    assert_eq!(next.get(2), Some("S"));
}

#[test]
fn choice_paired_with_new_value_survives() {
    let variants = vec![
        stocked("x", &["a2", "b", "x"], true),
        stocked("c", &["a", "b", "c"], true),
    ];
    let selection = Selection::from_values(vec![
        Some("a".to_string()),
        Some("b".to_string()),
        Some("c".to_string()),
    ]);
    let next = select(&variants, &selection, 0, "a2", StockSignal::Available);
    assert_eq!(next.get(0), Some("a2"));
    assert_eq!(next.get(1), Some("b"));
    assert_eq!(next.get(2), None);
}

#[test]
fn jointly_unsatisfiable_choices_clear_lowest_first() {
    let variants = vec![
        stocked("1", &["a", "b", "c"], true),
        stocked("2", &["a", "b2", "c2"], true),
    ];
    let selection = Selection::new(3).with(1, "b").with(2, "c2");
    let next = select(&variants, &selection, 0, "a", StockSignal::Available);
    assert_eq!(next.get(0), Some("a"));
    assert_eq!(next.get(1), None);
    assert_eq!(next.get(2), Some("c2"));
}

#[test]
fn out_of_stock_variants_keep_filter_non_empty() {
    let variants = vec![stocked("rm", &["Red", "M"], false)];
    let filter = SelectionFilter::new(&variants, StockSignal::Available);
    assert!(!filter.is_empty());
    assert_eq!(
        filter.available_values(1, &Selection::new(2)),
        vec![value("M", false)]
    );
}

#[test]
fn availability_covers_every_position() {
    let selection = Selection::new(2).with(0, "Red");
    let all = availability(&red_only(), &selection, StockSignal::Available);
    assert_eq!(all.len(), 2);
    assert_eq!(all[0], vec![value("Red", true)]);
    assert_eq!(all[1], vec![value("S", true), value("M", false)]);
}

#[test]
fn resolve_needs_complete_selection() {
    let variants = red_only();
    assert!(resolve(&variants, &Selection::new(2).with(0, "Red")).is_none());
    let chosen = resolve(&variants, &Selection::new(2).with(0, "Red").with(1, "M")).unwrap();
    assert_eq!(chosen.id, "rm");
    assert!(resolve(&variants, &Selection::new(2).with(0, "Blue").with(1, "M")).is_none());
}

#[test]
fn filter_wraps_free_functions() {
    let variants = red_only();
    let filter = SelectionFilter::new(&variants, StockSignal::Available);
    let selection = filter.select(&Selection::new(2), 0, "Red");
    assert_eq!(
        filter.available_values(1, &selection),
        vec![value("S", true), value("M", false)]
    );
    let selection = filter.select(&selection, 1, "S");
    assert_eq!(filter.resolve(&selection).map(|v| v.id.as_str()), Some("rs"));
}

#[test]
fn selection_helpers() {
    let selection = Selection::new(2);
    assert!(selection.is_empty());
    assert!(!selection.is_complete());

    let selection = selection.with(0, "Red").with(1, "S");
    assert!(selection.is_complete());
    assert_eq!(
        selection.fixed_positions().collect::<Vec<_>>(),
        vec![(0, "Red"), (1, "S")]
    );

    let cleared = selection.cleared(1);
    assert_eq!(cleared.get(1), None);
    assert_eq!(selection.get(1), Some("S"));

    let padded = Selection::new(0).with(2, "L");
    assert_eq!(padded.arity(), 3);
    assert_eq!(padded.get(2), Some("L"));
}
