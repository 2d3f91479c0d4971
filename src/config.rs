//! Engine configuration.

use crate::enums::StockSignal;
use crate::error::{ParseError, ParseErrorKind};
use serde::{Deserialize, Serialize};

/// Default cap on the size of a generated cross-product.
pub const DEFAULT_MAX_COMBINATIONS: usize = 10_000;

/// Tunables shared by generation, validation and the selection filter.
///
/// ```rust
/// let config = variantkit::EngineConfig::from_yaml("max_combinations: 250").unwrap();
/// assert_eq!(config.max_combinations, 250);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Upper bound on `generate` output; larger products are rejected.
    pub max_combinations: usize,
    /// Field that decides whether an admissible value is in stock.
    pub stock_signal: StockSignal,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_combinations: DEFAULT_MAX_COMBINATIONS,
            stock_signal: StockSignal::default(),
        }
    }
}

impl EngineConfig {
    /// Reads a configuration from YAML. Missing keys keep their defaults.
    pub fn from_yaml(input: &str) -> Result<Self, ParseError> {
        if input.trim().is_empty() {
            return Ok(EngineConfig::default());
        }
        let value: serde_json::Value = serde_saphyr::from_str(input)
            .map_err(|e| ParseError::new(ParseErrorKind::Syntax, e.to_string()))?;
        if !value.is_object() {
            return Err(ParseError::new(
                ParseErrorKind::TypeMismatch,
                "configuration root must be a YAML mapping",
            ));
        }
        serde_json::from_value(value).map_err(|e| {
            let msg = e.to_string();
            let kind = if msg.contains("unknown field") {
                ParseErrorKind::UnknownField
            } else {
                ParseErrorKind::TypeMismatch
            };
            ParseError::new(kind, msg)
        })
    }

    pub fn with_max_combinations(mut self, max: usize) -> Self {
        self.max_combinations = max;
        self
    }

    pub fn with_stock_signal(mut self, signal: StockSignal) -> Self {
        self.stock_signal = signal;
        self
    }
}
