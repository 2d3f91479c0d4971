//! Display-ready projections of a variant set.

use crate::enums::StockSignal;
use crate::types::{Combination, Variant};
use serde::{Deserialize, Serialize};

/// One row of the admin variant table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantRow {
    pub index: usize,
    pub id: String,
    pub combination: Combination,
    /// Combination values joined with ` / `.
    pub title: String,
    pub price: String,
    pub sku: String,
    pub inventory: String,
    pub barcode: String,
    pub available: bool,
    pub color_image: String,
    pub in_stock: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantSummary {
    pub count: usize,
    pub available_count: usize,
    pub total_inventory: u64,
    pub rows: Vec<VariantRow>,
}

/// Summarizes `variants` using the `available` flag as the stock signal.
pub fn summarize(variants: &[Variant]) -> VariantSummary {
    summarize_with(variants, StockSignal::Available)
}

pub fn summarize_with(variants: &[Variant], signal: StockSignal) -> VariantSummary {
    let rows: Vec<VariantRow> = variants
        .iter()
        .enumerate()
        .map(|(index, v)| VariantRow {
            index,
            id: v.id.clone(),
            combination: v.combination.clone(),
            title: v.combination.title(),
            price: v.price.clone(),
            sku: v.sku.clone(),
            inventory: v.inventory.clone(),
            barcode: v.barcode.clone(),
            available: v.available,
            color_image: v.color_image.clone(),
            in_stock: v.is_in_stock(signal),
        })
        .collect();

    VariantSummary {
        count: rows.len(),
        available_count: variants.iter().filter(|v| v.available).count(),
        total_inventory: variants
            .iter()
            .fold(0u64, |acc, v| acc.saturating_add(v.quantity())),
        rows,
    }
}
