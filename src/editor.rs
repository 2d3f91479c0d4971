//! Product authoring state as an explicit reducer.
//!
//! Every operation takes the current snapshot by reference and returns a new
//! one; the option set is regenerated and the variants reconciled whenever
//! the saved options change. A rejected edit leaves the caller's snapshot as
//! it was.

use crate::aggregate::{VariantSummary, summarize_with};
use crate::config::EngineConfig;
use crate::enums::OptionRole;
use crate::error::{EditorError, EditorErrorKind};
use crate::generate::generate_with_limit;
use crate::reconcile::{IdSource, UuidIds, reconcile_with};
use crate::types::*;
use crate::validate::validate_with;
use std::collections::HashSet;

/// An option as the admin sees it: saved options take part in generation,
/// unsaved ones are still being typed in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorOption {
    pub option: OptionType,
    pub saved: bool,
}

/// Immutable snapshot of a product's options and variants.
///
/// `I` supplies ids for new options and variants. Every snapshot carries its
/// own copy, so a [`SequentialIds`](crate::reconcile::SequentialIds) editor
/// hands out the same ids for the same sequence of edits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductEditor<I = UuidIds> {
    options: Vec<EditorOption>,
    variants: Vec<Variant>,
    excluded: Vec<Combination>,
    config: EngineConfig,
    ids: I,
}

impl ProductEditor {
    pub fn new(config: EngineConfig) -> Self {
        ProductEditor::with_ids(config, UuidIds)
    }

    /// Starts editing a stored product with UUID identifiers. See
    /// [`from_document_with_ids`](ProductEditor::from_document_with_ids).
    pub fn from_document(doc: &VariantDocument, config: EngineConfig) -> Result<Self, EditorError> {
        ProductEditor::from_document_with_ids(doc, config, UuidIds)
    }
}

impl<I: IdSource + Clone> ProductEditor<I> {
    pub fn with_ids(config: EngineConfig, ids: I) -> Self {
        ProductEditor {
            options: Vec::new(),
            variants: Vec::new(),
            excluded: Vec::new(),
            config,
            ids,
        }
    }

    /// Starts editing a stored product. Every option in the document counts
    /// as saved, so the document must pass validation first; variants are
    /// then reconciled against the current cross-product.
    pub fn from_document_with_ids(
        doc: &VariantDocument,
        config: EngineConfig,
        mut ids: I,
    ) -> Result<Self, EditorError> {
        let result = validate_with(doc, &config);
        if !result.is_valid() {
            let message = result
                .errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(EditorError::new(EditorErrorKind::InvalidDocument, message));
        }

        let mut options = Vec::with_capacity(doc.options.len());
        for o in &doc.options {
            let mut option = o.clone();
            if option.id.is_empty() {
                option.id = ids.next_id();
            }
            if option.role.is_none() {
                option.role = Some(OptionRole::infer(&option.name));
            }
            options.push(EditorOption {
                option,
                saved: true,
            });
        }
        let editor = ProductEditor {
            options,
            variants: doc.variants.clone(),
            excluded: Vec::new(),
            config,
            ids,
        };
        editor.regenerate()
    }

    pub fn into_document(self) -> VariantDocument {
        VariantDocument {
            options: self
                .options
                .into_iter()
                .filter(|o| o.saved)
                .map(|o| o.option)
                .collect(),
            variants: self.variants,
        }
    }

    // ─── Accessors ──────────────────────────────────────────────────────────

    pub fn options(&self) -> &[EditorOption] {
        &self.options
    }

    pub fn option_by_name(&self, name: &str) -> Option<&OptionType> {
        self.options
            .iter()
            .map(|o| &o.option)
            .find(|o| o.name.eq_ignore_ascii_case(name))
    }

    /// The saved options, in authoring order.
    pub fn option_set(&self) -> OptionSet {
        self.options
            .iter()
            .filter(|o| o.saved)
            .map(|o| o.option.clone())
            .collect()
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn variant(&self, id: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == id)
    }

    pub fn variant_for(&self, combination: &Combination) -> Option<&Variant> {
        self.variants.iter().find(|v| &v.combination == combination)
    }

    pub fn excluded(&self) -> &[Combination] {
        &self.excluded
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn summary(&self) -> VariantSummary {
        summarize_with(&self.variants, self.config.stock_signal)
    }

    // ─── Option edits ───────────────────────────────────────────────────────

    /// Appends an unsaved option holding a single empty placeholder value.
    ///
    /// The role is fixed here: `None` infers it from `name` once.
    pub fn add_option(&self, name: &str, role: Option<OptionRole>) -> Result<Self, EditorError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EditorError::new(
                EditorErrorKind::BlankName,
                "option name must not be blank",
            ));
        }
        self.check_name_free(name, None)?;
        let role = role.unwrap_or_else(|| OptionRole::infer(name));
        self.check_role_free(role, None)?;

        let mut next = self.clone();
        let id = next.ids.next_id();
        next.options.push(EditorOption {
            option: OptionType {
                id,
                name: name.to_string(),
                role: Some(role),
                values: vec![String::new()],
            },
            saved: false,
        });
        log::debug!("added option '{}' ({})", name, role.as_str());
        Ok(next)
    }

    /// Saves an option's name and values and regenerates the variants.
    ///
    /// Empty placeholder values are dropped; at least one value must remain
    /// and values must be unique.
    pub fn save_option(&self, id: &str, name: &str, values: Vec<String>) -> Result<Self, EditorError> {
        let index = self.option_index(id)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(EditorError::new(
                EditorErrorKind::BlankName,
                "option name must not be blank",
            ));
        }
        self.check_name_free(name, Some(index))?;

        let values: Vec<String> = values.into_iter().filter(|v| !v.is_empty()).collect();
        if values.is_empty() {
            return Err(EditorError::new(
                EditorErrorKind::EmptyValues,
                format!("option '{}' needs at least one value", name),
            ));
        }
        if let Some(dup) = first_duplicate(&values) {
            return Err(EditorError::new(
                EditorErrorKind::DuplicateValue,
                format!("option '{}' lists '{}' more than once", name, dup),
            ));
        }

        let mut next = self.clone();
        let entry = &mut next.options[index];
        entry.option.name = name.to_string();
        entry.option.values = values;
        entry.saved = true;
        next.regenerate()
    }

    /// Reopens a saved option for editing. It leaves the option set until
    /// saved again, but the variants stay as they are so that the next save
    /// reconciles against them.
    pub fn edit_option(&self, id: &str) -> Result<Self, EditorError> {
        let index = self.option_index(id)?;
        let mut next = self.clone();
        next.options[index].saved = false;
        Ok(next)
    }

    pub fn remove_option(&self, id: &str) -> Result<Self, EditorError> {
        let index = self.option_index(id)?;
        let mut next = self.clone();
        let removed = next.options.remove(index);
        log::debug!("removed option '{}'", removed.option.name);
        next.regenerate()
    }

    // ─── Variant edits ──────────────────────────────────────────────────────

    pub fn edit_variant_field(&self, variant_id: &str, field: VariantField) -> Result<Self, EditorError> {
        // Clearing an image stays possible after the color option is gone.
        if matches!(&field, VariantField::ColorImage(url) if !url.is_empty())
            && !self.option_set().has_color()
        {
            return Err(EditorError::new(
                EditorErrorKind::NoColorOption,
                "color images need a saved color option",
            ));
        }
        let index = self.variant_index(variant_id)?;
        let mut next = self.clone();
        log::trace!("variant {}: setting {}", variant_id, field.name());
        field.apply(&mut next.variants[index]);
        Ok(next)
    }

    /// Image-upload callback: attaches `url` to an existing variant.
    pub fn set_color_image(&self, variant_id: &str, url: impl Into<String>) -> Result<Self, EditorError> {
        self.edit_variant_field(variant_id, VariantField::ColorImage(url.into()))
    }

    /// Drops the variant for `combination` and keeps it out of later
    /// regenerations until restored.
    pub fn remove_combination(&self, combination: &Combination) -> Result<Self, EditorError> {
        if self.variant_for(combination).is_none() {
            return Err(EditorError::new(
                EditorErrorKind::UnknownVariant,
                format!("no variant for combination {}", combination),
            ));
        }
        let mut next = self.clone();
        next.variants.retain(|v| &v.combination != combination);
        next.excluded.push(combination.clone());
        Ok(next)
    }

    /// Lifts an exclusion placed by [`remove_combination`](Self::remove_combination).
    pub fn restore_combination(&self, combination: &Combination) -> Result<Self, EditorError> {
        let mut next = self.clone();
        next.excluded.retain(|c| c != combination);
        next.regenerate()
    }

    // ─── Internals ──────────────────────────────────────────────────────────

    fn regenerate(mut self) -> Result<Self, EditorError> {
        let combinations = generate_with_limit(&self.option_set(), self.config.max_combinations)?;
        self.excluded.retain(|c| combinations.contains(c));
        let combinations: Vec<Combination> = combinations
            .into_iter()
            .filter(|c| !self.excluded.contains(c))
            .collect();
        self.variants = reconcile_with(&combinations, &self.variants, &mut self.ids);
        Ok(self)
    }

    fn option_index(&self, id: &str) -> Result<usize, EditorError> {
        self.options
            .iter()
            .position(|o| o.option.id == id)
            .ok_or_else(|| EditorError::new(EditorErrorKind::UnknownOption, format!("no option with id '{}'", id)))
    }

    fn variant_index(&self, id: &str) -> Result<usize, EditorError> {
        self.variants
            .iter()
            .position(|v| v.id == id)
            .ok_or_else(|| EditorError::new(EditorErrorKind::UnknownVariant, format!("no variant with id '{}'", id)))
    }

    fn check_name_free(&self, name: &str, skip: Option<usize>) -> Result<(), EditorError> {
        let taken = self
            .options
            .iter()
            .enumerate()
            .any(|(i, o)| Some(i) != skip && o.option.name.eq_ignore_ascii_case(name));
        if taken {
            return Err(EditorError::new(
                EditorErrorKind::DuplicateName,
                format!("an option named '{}' already exists", name),
            ));
        }
        Ok(())
    }

    fn check_role_free(&self, role: OptionRole, skip: Option<usize>) -> Result<(), EditorError> {
        if role == OptionRole::Generic {
            return Ok(());
        }
        let taken = self
            .options
            .iter()
            .enumerate()
            .any(|(i, o)| Some(i) != skip && o.option.role() == role);
        if taken {
            return Err(EditorError::new(
                EditorErrorKind::DuplicateRole,
                format!("product already has a {} option", role.as_str()),
            ));
        }
        Ok(())
    }
}

fn first_duplicate(values: &[String]) -> Option<&str> {
    let mut seen = HashSet::new();
    values
        .iter()
        .map(String::as_str)
        .find(|v| !seen.insert(*v))
}
