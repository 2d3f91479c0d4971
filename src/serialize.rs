//! [`VariantDocument`] → YAML serialization.

use crate::error::SerializeError;
use crate::types::VariantDocument;

/// Serialize a VariantDocument to a YAML string.
///
/// `options` is emitted before `variants`; variant fields follow declaration
/// order.
pub fn serialize(doc: &VariantDocument) -> Result<String, SerializeError> {
    let value = serde_json::to_value(doc).map_err(|e| SerializeError {
        message: format!("failed to convert document to JSON value: {}", e),
    })?;

    serde_saphyr::to_string(&value).map_err(|e| SerializeError {
        message: format!("failed to serialize to YAML: {}", e),
    })
}

/// Serialize a VariantDocument to pretty-printed JSON, for callers that hand
/// the document straight to a JSON persistence API.
pub fn serialize_json(doc: &VariantDocument) -> Result<String, SerializeError> {
    serde_json::to_string_pretty(doc).map_err(|e| SerializeError {
        message: format!("failed to serialize to JSON: {}", e),
    })
}
