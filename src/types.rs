use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::enums::*;

// ─── Option types ───────────────────────────────────────────────────────────

/// A named option (e.g. "Color") with its ordered list of values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionType {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<OptionRole>,
    #[serde(deserialize_with = "scalar_strings")]
    pub values: Vec<String>,
}

impl OptionType {
    pub fn new(id: impl Into<String>, name: impl Into<String>, values: Vec<String>) -> Self {
        let name = name.into();
        OptionType {
            id: id.into(),
            role: Some(OptionRole::infer(&name)),
            name,
            values,
        }
    }

    pub fn with_role(mut self, role: OptionRole) -> Self {
        self.role = Some(role);
        self
    }

    /// The explicit role, or [`OptionRole::Generic`] when none was assigned.
    pub fn role(&self) -> OptionRole {
        self.role.unwrap_or_default()
    }

    pub fn is_color(&self) -> bool {
        self.role() == OptionRole::Color
    }

    pub fn position_of(&self, value: &str) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }
}

/// Ordered sequence of option types. Order fixes each option's position
/// inside a [`Combination`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionSet {
    pub options: Vec<OptionType>,
}

impl OptionSet {
    pub fn new(options: Vec<OptionType>) -> Self {
        OptionSet { options }
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OptionType> {
        self.options.iter()
    }

    pub fn get(&self, index: usize) -> Option<&OptionType> {
        self.options.get(index)
    }

    pub fn position_by_id(&self, id: &str) -> Option<usize> {
        self.options.iter().position(|o| o.id == id)
    }

    pub fn position_by_role(&self, role: OptionRole) -> Option<usize> {
        self.options.iter().position(|o| o.role() == role)
    }

    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        self.options
            .iter()
            .position(|o| o.name.eq_ignore_ascii_case(name))
    }

    pub fn has_color(&self) -> bool {
        self.options.iter().any(OptionType::is_color)
    }
}

impl FromIterator<OptionType> for OptionSet {
    fn from_iter<I: IntoIterator<Item = OptionType>>(iter: I) -> Self {
        OptionSet {
            options: iter.into_iter().collect(),
        }
    }
}

// ─── Combination ────────────────────────────────────────────────────────────

/// One ordered tuple of option values, in option-set order.
///
/// Equality is element-wise and exact: two combinations match only when
/// they have the same length and identical strings at every position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Combination(pub Vec<String>);

impl<'de> Deserialize<'de> for Combination {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        scalar_strings(deserializer).map(Combination)
    }
}

impl Combination {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Combination(values.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    /// Display title, e.g. `Red / M`.
    pub fn title(&self) -> String {
        self.0.join(" / ")
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

// ─── Variant ────────────────────────────────────────────────────────────────

/// The purchasable record attached to one combination.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Variant {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub combination: Combination,
    #[serde(default, deserialize_with = "scalar_string")]
    pub price: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub sku: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub inventory: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub barcode: String,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub color_image: String,
}

impl Variant {
    /// A freshly scaffolded variant: every editable field at its default.
    pub fn scaffold(id: impl Into<String>, combination: Combination) -> Self {
        Variant {
            id: id.into(),
            combination,
            ..Variant::default()
        }
    }

    /// Inventory quantity; empty or unparsable counts as zero.
    pub fn quantity(&self) -> u64 {
        self.inventory.trim().parse().unwrap_or(0)
    }

    pub fn is_in_stock(&self, signal: StockSignal) -> bool {
        match signal {
            StockSignal::Available => self.available,
            StockSignal::Inventory => self.quantity() > 0,
        }
    }
}

/// One editable variant field with its new value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum VariantField {
    Price(String),
    Sku(String),
    Inventory(String),
    Barcode(String),
    Available(bool),
    ColorImage(String),
}

impl VariantField {
    pub fn apply(self, variant: &mut Variant) {
        match self {
            VariantField::Price(v) => variant.price = v,
            VariantField::Sku(v) => variant.sku = v,
            VariantField::Inventory(v) => variant.inventory = v,
            VariantField::Barcode(v) => variant.barcode = v,
            VariantField::Available(v) => variant.available = v,
            VariantField::ColorImage(v) => variant.color_image = v,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            VariantField::Price(_) => "price",
            VariantField::Sku(_) => "sku",
            VariantField::Inventory(_) => "inventory",
            VariantField::Barcode(_) => "barcode",
            VariantField::Available(_) => "available",
            VariantField::ColorImage(_) => "colorImage",
        }
    }
}

// ─── Scalar coercion ────────────────────────────────────────────────────────

// YAML authors write `values: [S, M, 42]` and `inventory: 3`; option values
// and variant fields are strings, so plain scalars are taken in their
// textual form.
fn scalar_to_string<E: serde::de::Error>(value: Value) -> Result<String, E> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(E::custom(format!("expected a string, got {}", other))),
    }
}

fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    scalar_to_string(Value::deserialize(deserializer)?)
}

fn scalar_strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().map(scalar_to_string).collect(),
        other => Err(serde::de::Error::custom(format!(
            "expected a list of values, got {}",
            other
        ))),
    }
}

// ─── Document ───────────────────────────────────────────────────────────────

/// Serializable form of a product's option set and its variants.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariantDocument {
    #[serde(default)]
    pub options: Vec<OptionType>,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl VariantDocument {
    pub fn option_set(&self) -> OptionSet {
        OptionSet::new(self.options.clone())
    }
}
