//! Document validation against rules V-001 through V-011 and warnings
//! W-001 through W-004.
//!
//! Returns **all** errors and warnings, not just the first. Validation does not
//! modify the document.

use crate::config::EngineConfig;
use crate::enums::OptionRole;
use crate::error::*;
use crate::generate::checked_combination_count;
use crate::types::*;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

// ─── Cached regexes ─────────────────────────────────────────────────────────

static OPTION_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").unwrap());

static INVENTORY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*[0-9]+\s*$").unwrap());

/// Validate a parsed document with the default configuration.
pub fn validate(doc: &VariantDocument) -> ValidationResult {
    validate_with(doc, &EngineConfig::default())
}

/// Validate a parsed document against every rule.
/// Returns a ValidationResult containing all errors and warnings found.
pub fn validate_with(doc: &VariantDocument, config: &EngineConfig) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    v001_unique_option_ids(doc, &mut errors);
    v002_option_name_present(doc, &mut errors);
    v003_unique_option_names(doc, &mut errors);
    v004_values_non_empty(doc, &mut errors);
    v005_no_blank_values(doc, &mut errors);
    v006_unique_values(doc, &mut errors);
    v007_single_option_per_role(doc, &mut errors);
    v008_unique_variant_ids(doc, &mut errors);
    v009_inventory_numeric(doc, &mut errors);
    v010_option_id_format(doc, &mut errors);
    v011_combination_cap(doc, config, &mut errors);

    w001_combination_arity(doc, &mut warnings);
    w002_unknown_combination_values(doc, &mut warnings);
    w003_duplicate_combinations(doc, &mut warnings);
    w004_role_contradicts_name(doc, &mut warnings);

    ValidationResult { errors, warnings }
}

fn error(rule: &str, path: String, message: String) -> ValidationError {
    ValidationError {
        rule: rule.to_string(),
        path,
        message,
    }
}

fn warning(code: &str, path: String, message: String) -> Diagnostic {
    Diagnostic {
        severity: DiagnosticSeverity::Warning,
        code: code.to_string(),
        path: Some(path),
        message,
    }
}

/// Role an option will carry after normalization.
fn effective_role(option: &OptionType) -> OptionRole {
    option.role.unwrap_or_else(|| OptionRole::infer(&option.name))
}

// ─── V-001 ──────────────────────────────────────────────────────────────────

fn v001_unique_option_ids(doc: &VariantDocument, errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    for (i, option) in doc.options.iter().enumerate() {
        if !option.id.is_empty() && !seen.insert(option.id.as_str()) {
            errors.push(error(
                "V-001",
                format!("options[{}].id", i),
                format!("duplicate option id '{}'", option.id),
            ));
        }
    }
}

// ─── V-002 ──────────────────────────────────────────────────────────────────

fn v002_option_name_present(doc: &VariantDocument, errors: &mut Vec<ValidationError>) {
    for (i, option) in doc.options.iter().enumerate() {
        if option.name.trim().is_empty() {
            errors.push(error(
                "V-002",
                format!("options[{}].name", i),
                "option name must not be blank".to_string(),
            ));
        }
    }
}

// ─── V-003 ──────────────────────────────────────────────────────────────────

fn v003_unique_option_names(doc: &VariantDocument, errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    for (i, option) in doc.options.iter().enumerate() {
        let key = option.name.trim().to_lowercase();
        if !key.is_empty() && !seen.insert(key) {
            errors.push(error(
                "V-003",
                format!("options[{}].name", i),
                format!("duplicate option name '{}'", option.name),
            ));
        }
    }
}

// ─── V-004 ──────────────────────────────────────────────────────────────────

fn v004_values_non_empty(doc: &VariantDocument, errors: &mut Vec<ValidationError>) {
    for (i, option) in doc.options.iter().enumerate() {
        if option.values.is_empty() {
            errors.push(error(
                "V-004",
                format!("options[{}].values", i),
                format!("option '{}' must have at least one value", option.name),
            ));
        }
    }
}

// ─── V-005 ──────────────────────────────────────────────────────────────────

fn v005_no_blank_values(doc: &VariantDocument, errors: &mut Vec<ValidationError>) {
    for (i, option) in doc.options.iter().enumerate() {
        for (j, value) in option.values.iter().enumerate() {
            if value.is_empty() {
                errors.push(error(
                    "V-005",
                    format!("options[{}].values[{}]", i, j),
                    "saved option values must not be empty".to_string(),
                ));
            }
        }
    }
}

// ─── V-006 ──────────────────────────────────────────────────────────────────

fn v006_unique_values(doc: &VariantDocument, errors: &mut Vec<ValidationError>) {
    for (i, option) in doc.options.iter().enumerate() {
        let mut seen = HashSet::new();
        for (j, value) in option.values.iter().enumerate() {
            if !seen.insert(value.as_str()) {
                errors.push(error(
                    "V-006",
                    format!("options[{}].values[{}]", i, j),
                    format!("value '{}' appears more than once in '{}'", value, option.name),
                ));
            }
        }
    }
}

// ─── V-007 ──────────────────────────────────────────────────────────────────

fn v007_single_option_per_role(doc: &VariantDocument, errors: &mut Vec<ValidationError>) {
    let mut seen: HashMap<OptionRole, usize> = HashMap::new();
    for (i, option) in doc.options.iter().enumerate() {
        let role = effective_role(option);
        if role == OptionRole::Generic {
            continue;
        }
        if let Some(first) = seen.get(&role) {
            errors.push(error(
                "V-007",
                format!("options[{}].role", i),
                format!(
                    "options[{}] already has role '{}'; only one {} option is allowed",
                    first,
                    role.as_str(),
                    role.as_str()
                ),
            ));
        } else {
            seen.insert(role, i);
        }
    }
}

// ─── V-008 ──────────────────────────────────────────────────────────────────

fn v008_unique_variant_ids(doc: &VariantDocument, errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    for (i, variant) in doc.variants.iter().enumerate() {
        if !variant.id.is_empty() && !seen.insert(variant.id.as_str()) {
            errors.push(error(
                "V-008",
                format!("variants[{}].id", i),
                format!("duplicate variant id '{}'", variant.id),
            ));
        }
    }
}

// ─── V-009 ──────────────────────────────────────────────────────────────────

fn v009_inventory_numeric(doc: &VariantDocument, errors: &mut Vec<ValidationError>) {
    for (i, variant) in doc.variants.iter().enumerate() {
        if !variant.inventory.is_empty() && !INVENTORY_RE.is_match(&variant.inventory) {
            errors.push(error(
                "V-009",
                format!("variants[{}].inventory", i),
                format!(
                    "inventory must be a non-negative whole number, got '{}'",
                    variant.inventory
                ),
            ));
        }
    }
}

// ─── V-010 ──────────────────────────────────────────────────────────────────

fn v010_option_id_format(doc: &VariantDocument, errors: &mut Vec<ValidationError>) {
    for (i, option) in doc.options.iter().enumerate() {
        if !option.id.is_empty() && !OPTION_ID_RE.is_match(&option.id) {
            errors.push(error(
                "V-010",
                format!("options[{}].id", i),
                format!(
                    "option id must match [A-Za-z0-9][A-Za-z0-9_-]*, got '{}'",
                    option.id
                ),
            ));
        }
    }
}

// ─── V-011 ──────────────────────────────────────────────────────────────────

fn v011_combination_cap(
    doc: &VariantDocument,
    config: &EngineConfig,
    errors: &mut Vec<ValidationError>,
) {
    let options = doc.option_set();
    let exceeds = match checked_combination_count(&options) {
        Some(n) => n > config.max_combinations,
        None => true,
    };
    if exceeds {
        errors.push(error(
            "V-011",
            "options".to_string(),
            format!(
                "options expand to more than {} combinations",
                config.max_combinations
            ),
        ));
    }
}

// ─── W-001 ──────────────────────────────────────────────────────────────────

fn w001_combination_arity(doc: &VariantDocument, warnings: &mut Vec<Diagnostic>) {
    let arity = doc.options.len();
    for (i, variant) in doc.variants.iter().enumerate() {
        if variant.combination.len() != arity {
            warnings.push(warning(
                "W-001",
                format!("variants[{}].combination", i),
                format!(
                    "combination {} has {} values but there are {} options; the variant will be dropped",
                    variant.combination,
                    variant.combination.len(),
                    arity
                ),
            ));
        }
    }
}

// ─── W-002 ──────────────────────────────────────────────────────────────────

fn w002_unknown_combination_values(doc: &VariantDocument, warnings: &mut Vec<Diagnostic>) {
    for (i, variant) in doc.variants.iter().enumerate() {
        if variant.combination.len() != doc.options.len() {
            continue;
        }
        for (j, (option, value)) in doc
            .options
            .iter()
            .zip(variant.combination.values())
            .enumerate()
        {
            if option.position_of(value).is_none() {
                warnings.push(warning(
                    "W-002",
                    format!("variants[{}].combination[{}]", i, j),
                    format!(
                        "'{}' is not a value of option '{}'; the variant will be dropped",
                        value, option.name
                    ),
                ));
            }
        }
    }
}

// ─── W-003 ──────────────────────────────────────────────────────────────────

fn w003_duplicate_combinations(doc: &VariantDocument, warnings: &mut Vec<Diagnostic>) {
    let mut seen: HashMap<&Combination, usize> = HashMap::new();
    for (i, variant) in doc.variants.iter().enumerate() {
        if let Some(first) = seen.get(&variant.combination) {
            warnings.push(warning(
                "W-003",
                format!("variants[{}].combination", i),
                format!(
                    "combination {} duplicates variants[{}]; only the first is kept",
                    variant.combination, first
                ),
            ));
        } else {
            seen.insert(&variant.combination, i);
        }
    }
}

// ─── W-004 ──────────────────────────────────────────────────────────────────

fn w004_role_contradicts_name(doc: &VariantDocument, warnings: &mut Vec<Diagnostic>) {
    for (i, option) in doc.options.iter().enumerate() {
        let Some(role) = option.role else {
            continue;
        };
        let implied = OptionRole::infer(&option.name);
        if implied != OptionRole::Generic && implied != role {
            warnings.push(warning(
                "W-004",
                format!("options[{}].role", i),
                format!(
                    "option '{}' is tagged '{}' although its name suggests '{}'",
                    option.name,
                    role.as_str(),
                    implied.as_str()
                ),
            ));
        }
    }
}
