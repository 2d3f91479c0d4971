//! Closed enumerations used throughout the variant type system.

use serde::{Deserialize, Serialize};

/// Semantic tag attached to an option type at authoring time.
///
/// Downstream features (color swatches, the persisted `color`/`size`
/// columns) key off this tag instead of the option's display name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionRole {
    Color,
    Size,
    #[default]
    Generic,
}

impl OptionRole {
    /// Infers a role from a display name. Only used once, when an option is
    /// authored without an explicit role.
    pub fn infer(name: &str) -> Self {
        let name = name.trim();
        if name.eq_ignore_ascii_case("color") || name.eq_ignore_ascii_case("colour") {
            OptionRole::Color
        } else if name.eq_ignore_ascii_case("size") {
            OptionRole::Size
        } else {
            OptionRole::Generic
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionRole::Color => "color",
            OptionRole::Size => "size",
            OptionRole::Generic => "generic",
        }
    }
}

/// Which variant field decides whether a value is in stock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockSignal {
    /// The admin-controlled `available` flag.
    #[default]
    Available,
    /// `inventory` parsed as a quantity; in stock when greater than zero.
    Inventory,
}

/// Stock state of an admissible option value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    /// Offered by at least one variant, none of which is in stock.
    OutOfStock,
}
