//! Variant resolution for configurable products.
//!
//! A product's options (Color, Size, ...) expand into the full cross-product
//! of purchasable combinations. This crate generates that cross-product,
//! keeps it aligned with previously saved variant data, and filters it for a
//! shopper's partial selection:
//!
//! ```text
//! OptionSet → generate → [Combination] → reconcile(existing) → [Variant] → summarize
//!                                                              [Variant] + Selection → available_values
//! ```
//!
//! The same pipeline is available over a YAML document:
//!
//! ```text
//! parse(yaml) → VariantDocument → validate(doc) → ValidationResult
//!                               → normalize(doc) → VariantDocument → serialize(doc) → yaml
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! let yaml = r#"
//! options:
//!   - name: Color
//!     values: [Red, Blue]
//!   - name: Size
//!     values: [S, M]
//! variants:
//!   - combination: [Red, S]
//!     price: "19.99"
//!     available: true
//! "#;
//!
//! let result = variantkit::load(yaml).expect("valid document");
//! assert_eq!(result.document.variants.len(), 4);
//! assert_eq!(result.document.variants[0].price, "19.99");
//! ```
//!
//! Nothing here performs I/O or installs a logger; diagnostics go through the
//! [`log`] facade.

pub mod aggregate;
pub mod config;
pub mod editor;
pub mod enums;
pub mod error;
pub mod generate;
pub mod normalize;
pub mod parse;
pub mod reconcile;
pub mod records;
pub mod selection;
pub mod serialize;
pub mod types;
pub mod validate;

pub use config::EngineConfig;
pub use enums::*;
pub use error::*;
pub use types::*;

// Re-export entry-point functions at the crate root for convenience.
pub use aggregate::summarize;
pub use editor::ProductEditor;
pub use generate::generate;
pub use normalize::normalize;
pub use parse::parse;
pub use reconcile::reconcile;
pub use selection::{Selection, available_values};
pub use serialize::serialize;
pub use validate::validate;

/// Result of the [`load`] convenience entry point.
pub struct LoadResult {
    /// The normalized document.
    pub document: VariantDocument,
    /// Non-fatal warnings produced during validation.
    pub warnings: Vec<Diagnostic>,
}

/// Convenience entry point composing parse → validate → normalize with the
/// default configuration.
///
/// # Errors
///
/// Returns `Err(Vec<EngineError>)` if parsing fails or validation finds errors.
pub fn load(input: &str) -> Result<LoadResult, Vec<EngineError>> {
    load_with(input, &EngineConfig::default())
}

/// [`load`] with an explicit configuration.
pub fn load_with(input: &str, config: &EngineConfig) -> Result<LoadResult, Vec<EngineError>> {
    let doc = parse::parse(input).map_err(|e| vec![EngineError::Parse(e)])?;

    let result = validate::validate_with(&doc, config);
    if !result.errors.is_empty() {
        return Err(result
            .errors
            .into_iter()
            .map(EngineError::Validation)
            .collect());
    }

    let normalized = normalize::normalize_with(doc, config, &mut reconcile::UuidIds)
        .map_err(|e| vec![EngineError::Generation(e)])?;

    Ok(LoadResult {
        document: normalized,
        warnings: result.warnings,
    })
}
