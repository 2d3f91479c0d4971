//! Mapping between variants and the flat records a product store persists.
//!
//! Persisted records carry `color` and `size` columns plus a name-keyed map
//! for any other option. The mapping always goes through each option's role
//! or name, so a record round-trips regardless of where the option sits in
//! the option set.

use crate::enums::OptionRole;
use crate::error::RecordError;
use crate::types::{Combination, OptionSet, OptionType, Variant};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A variant as stored by the product persistence API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Values of generic options, keyed by option name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub inventory: String,
    #[serde(default)]
    pub barcode: String,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub color_image: String,
}

impl VariantRecord {
    fn slot(&self, option: &OptionType) -> Option<&String> {
        match option.role() {
            OptionRole::Color => self.color.as_ref(),
            OptionRole::Size => self.size.as_ref(),
            OptionRole::Generic => self.attributes.get(&option.name),
        }
    }
}

/// Flattens `variant` into a record using each option's role.
pub fn to_record(options: &OptionSet, variant: &Variant) -> Result<VariantRecord, RecordError> {
    if variant.combination.len() != options.len() {
        return Err(RecordError {
            variant_id: Some(variant.id.clone()),
            message: format!(
                "combination {} has {} values but the option set has {} options",
                variant.combination,
                variant.combination.len(),
                options.len()
            ),
        });
    }

    let mut record = VariantRecord {
        id: variant.id.clone(),
        price: variant.price.clone(),
        sku: variant.sku.clone(),
        inventory: variant.inventory.clone(),
        barcode: variant.barcode.clone(),
        available: variant.available,
        color_image: variant.color_image.clone(),
        ..VariantRecord::default()
    };

    for (option, value) in options.iter().zip(variant.combination.values()) {
        let value = value.clone();
        let previous = match option.role() {
            OptionRole::Color => record.color.replace(value),
            OptionRole::Size => record.size.replace(value),
            OptionRole::Generic => record.attributes.insert(option.name.clone(), value),
        };
        if previous.is_some() {
            return Err(RecordError {
                variant_id: Some(variant.id.clone()),
                message: format!(
                    "more than one option maps to the '{}' column",
                    column_name(option)
                ),
            });
        }
    }
    Ok(record)
}

/// Rebuilds a variant from `record`, ordering its combination by `options`.
pub fn from_record(options: &OptionSet, record: &VariantRecord) -> Result<Variant, RecordError> {
    let values = options
        .iter()
        .map(|option| {
            record.slot(option).cloned().ok_or_else(|| RecordError {
                variant_id: Some(record.id.clone()).filter(|id| !id.is_empty()),
                message: format!("record has no value for option '{}'", option.name),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Variant {
        id: record.id.clone(),
        combination: Combination(values),
        price: record.price.clone(),
        sku: record.sku.clone(),
        inventory: record.inventory.clone(),
        barcode: record.barcode.clone(),
        available: record.available,
        color_image: record.color_image.clone(),
    })
}

pub fn to_records(options: &OptionSet, variants: &[Variant]) -> Result<Vec<VariantRecord>, RecordError> {
    variants.iter().map(|v| to_record(options, v)).collect()
}

pub fn from_records(options: &OptionSet, records: &[VariantRecord]) -> Result<Vec<Variant>, RecordError> {
    records.iter().map(|r| from_record(options, r)).collect()
}

fn column_name(option: &OptionType) -> &str {
    match option.role() {
        OptionRole::Color => "color",
        OptionRole::Size => "size",
        OptionRole::Generic => option.name.as_str(),
    }
}
