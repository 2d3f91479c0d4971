use crate::error::{ParseError, ParseErrorKind};
use crate::types::VariantDocument;

/// Parse a YAML (or JSON) string into an unvalidated VariantDocument.
///
/// Performs deserialization and type mapping only.
/// Does NOT validate the option set or reconcile variants.
pub fn parse(input: &str) -> Result<VariantDocument, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::new(ParseErrorKind::Syntax, "empty input"));
    }

    check_multi_document(input)?;

    // YAML → serde_json::Value → VariantDocument, so both steps report
    // errors in the same shape.
    let value: serde_json::Value = serde_saphyr::from_str(input).map_err(|e| {
        let msg = e.to_string();
        ParseError::new(classify_saphyr_error(&msg), msg)
    })?;

    let Some(obj) = value.as_object() else {
        return Err(ParseError::new(
            ParseErrorKind::TypeMismatch,
            "document root must be a YAML mapping",
        ));
    };

    for key in obj.keys() {
        match key.as_str() {
            "options" | "variants" => {}
            other => {
                return Err(ParseError {
                    kind: ParseErrorKind::UnknownField,
                    message: format!("unknown top-level field: {}", other),
                    path: Some(other.to_string()),
                    line: None,
                });
            }
        }
    }

    let doc: VariantDocument = serde_json::from_value(value).map_err(|e| {
        let msg = e.to_string();
        ParseError::new(classify_json_error(&msg), msg)
    })?;

    Ok(doc)
}

/// Check for multiple YAML documents (--- separator).
/// Only matches `---` at column 0 to avoid false positives inside block scalars.
fn check_multi_document(input: &str) -> Result<(), ParseError> {
    let mut doc_count = 0;
    for (line_num, line) in input.lines().enumerate() {
        if line.starts_with("---") && line[3..].trim().is_empty() {
            doc_count += 1;
            if doc_count > 1 {
                return Err(ParseError {
                    kind: ParseErrorKind::Syntax,
                    message: "multi-document YAML is not supported".to_string(),
                    path: None,
                    line: Some(line_num + 1),
                });
            }
        }
    }
    Ok(())
}

fn classify_saphyr_error(msg: &str) -> ParseErrorKind {
    let lower = msg.to_lowercase();
    if lower.contains("type") || lower.contains("invalid") || lower.contains("expected") {
        ParseErrorKind::TypeMismatch
    } else {
        ParseErrorKind::Syntax
    }
}

fn classify_json_error(msg: &str) -> ParseErrorKind {
    let lower = msg.to_lowercase();
    if lower.contains("unknown field") || lower.contains("unknown variant") {
        ParseErrorKind::UnknownField
    } else {
        ParseErrorKind::TypeMismatch
    }
}
