use crate::config::EngineConfig;
use crate::enums::OptionRole;
use crate::error::GenerationError;
use crate::generate::generate_with_limit;
use crate::reconcile::{IdSource, UuidIds, reconcile_with};
use crate::types::*;

/// Normalize a validated document into its canonical form with the default
/// configuration and UUID identifiers. See [`normalize_with`].
pub fn normalize(doc: VariantDocument) -> Result<VariantDocument, GenerationError> {
    normalize_with(doc, &EngineConfig::default(), &mut UuidIds)
}

/// Normalize a validated document into its canonical form:
/// every option and variant has an id, every option has a role, and the
/// variants are exactly the reconciled cross-product of the options.
///
/// This is idempotent: `normalize(normalize(doc)) == normalize(doc)`.
pub fn normalize_with(
    mut doc: VariantDocument,
    config: &EngineConfig,
    ids: &mut dyn IdSource,
) -> Result<VariantDocument, GenerationError> {
    n001_option_ids(&mut doc, ids);
    n002_option_roles(&mut doc);
    n003_variant_ids(&mut doc, ids);
    n004_reconcile_variants(&mut doc, config, ids)?;
    Ok(doc)
}

// ─── N-001: Option ids ──────────────────────────────────────────────────────

fn n001_option_ids(doc: &mut VariantDocument, ids: &mut dyn IdSource) {
    for option in doc.options.iter_mut() {
        if option.id.is_empty() {
            option.id = ids.next_id();
        }
    }
}

// ─── N-002: Roles inferred once from the name ───────────────────────────────

fn n002_option_roles(doc: &mut VariantDocument) {
    for option in doc.options.iter_mut() {
        if option.role.is_none() {
            option.role = Some(OptionRole::infer(&option.name));
        }
    }
}

// ─── N-003: Variant ids ─────────────────────────────────────────────────────

// Runs before reconciliation so carried-forward variants keep the id they
// are given here.
fn n003_variant_ids(doc: &mut VariantDocument, ids: &mut dyn IdSource) {
    for variant in doc.variants.iter_mut() {
        if variant.id.is_empty() {
            variant.id = ids.next_id();
        }
    }
}

// ─── N-004: Variants = reconciled cross-product ─────────────────────────────

fn n004_reconcile_variants(
    doc: &mut VariantDocument,
    config: &EngineConfig,
    ids: &mut dyn IdSource,
) -> Result<(), GenerationError> {
    let combinations = generate_with_limit(&doc.option_set(), config.max_combinations)?;
    doc.variants = reconcile_with(&combinations, &doc.variants, ids);
    Ok(())
}
