//! Structural schema check for rich text documents

use crate::content::describe_value;
use crate::error::ValidationError;
use crate::rich_text::V2_VERSION;
use serde_json::{Map, Value};

const ELEMENT_TYPES: &str = "one of \"paragraph\", \"heading\", \"link\"";
const STYLE_FLAGS: [&str; 4] = ["bold", "italic", "underline", "strikethrough"];

fn mismatch(path: &str, expected: &str, received: &Value) -> ValidationError {
    ValidationError::new(path, expected, describe_value(received))
}

fn missing(path: &str, expected: &str) -> ValidationError {
    ValidationError::new(path, expected, "nothing")
}

/// Check a v1 document: an array of element nodes
pub(super) fn check_document(value: &Value, path: &str) -> Result<(), ValidationError> {
    let elements = value
        .as_array()
        .ok_or_else(|| mismatch(path, "array of element nodes", value))?;

    for (i, element) in elements.iter().enumerate() {
        check_element(element, &format!("{}[{}]", path, i))?;
    }
    Ok(())
}

/// Check a v2 envelope: `{ "version": 2, "children": [...] }`
pub(super) fn check_envelope(value: &Value) -> Result<(), ValidationError> {
    let envelope = value
        .as_object()
        .ok_or_else(|| mismatch("$", "rich text v2 envelope object", value))?;

    match envelope.get("version") {
        Some(version) if version.as_u64() == Some(V2_VERSION) => {}
        Some(other) => return Err(mismatch("$.version", "2", other)),
        None => return Err(missing("$.version", "2")),
    }

    let children = envelope
        .get("children")
        .ok_or_else(|| missing("$.children", "array of element nodes"))?;
    check_document(children, "$.children")
}

fn check_element(value: &Value, path: &str) -> Result<(), ValidationError> {
    let element = value
        .as_object()
        .ok_or_else(|| mismatch(path, "element node", value))?;

    let type_path = format!("{}.type", path);
    let element_type = match element.get("type") {
        Some(Value::String(t)) => t.as_str(),
        Some(other) => return Err(mismatch(&type_path, ELEMENT_TYPES, other)),
        None => return Err(missing(&type_path, ELEMENT_TYPES)),
    };

    match element_type {
        "paragraph" => {}
        "heading" => check_heading_level(element, path)?,
        "link" => check_link_url(element, path)?,
        _ => {
            return Err(mismatch(
                &type_path,
                ELEMENT_TYPES,
                &Value::String(element_type.to_string()),
            ))
        }
    }

    let children_path = format!("{}.children", path);
    let children = match element.get("children") {
        Some(Value::Array(children)) => children,
        Some(other) => return Err(mismatch(&children_path, "array of text nodes", other)),
        None => return Err(missing(&children_path, "array of text nodes")),
    };

    for (i, child) in children.iter().enumerate() {
        check_text(child, &format!("{}[{}]", children_path, i))?;
    }
    Ok(())
}

fn check_heading_level(element: &Map<String, Value>, path: &str) -> Result<(), ValidationError> {
    let level_path = format!("{}.level", path);
    match element.get("level") {
        Some(level) if matches!(level.as_u64(), Some(1..=6)) => Ok(()),
        Some(other) => Err(mismatch(&level_path, "integer between 1 and 6", other)),
        None => Err(missing(&level_path, "integer between 1 and 6")),
    }
}

fn check_link_url(element: &Map<String, Value>, path: &str) -> Result<(), ValidationError> {
    match element.get("url") {
        None | Some(Value::String(_)) => Ok(()),
        Some(other) => Err(mismatch(&format!("{}.url", path), "string", other)),
    }
}

fn check_text(value: &Value, path: &str) -> Result<(), ValidationError> {
    let node = value
        .as_object()
        .ok_or_else(|| mismatch(path, "text node", value))?;

    // Nested elements are not allowed inside an element's children
    if node.contains_key("type") || node.contains_key("children") {
        return Err(mismatch(path, "text node", value));
    }

    let text_path = format!("{}.text", path);
    match node.get("text") {
        Some(Value::String(_)) => {}
        Some(other) => return Err(mismatch(&text_path, "string", other)),
        None => return Err(missing(&text_path, "string")),
    }

    for flag in STYLE_FLAGS {
        match node.get(flag) {
            None | Some(Value::Bool(_)) => {}
            Some(other) => return Err(mismatch(&format!("{}.{}", path, flag), "boolean", other)),
        }
    }
    Ok(())
}
