//! Wire-shape validation.
//!
//! Unlike [`decode`](crate::decode), which stops at the first bad element,
//! validation reports every violation in a document. Each context's wire
//! shape is described as a JSON Schema derived from its registry.

use serde_json::{json, Value};

use crate::error::{SchemaError, ValidateError};
use crate::registry::VariantRegistry;
use crate::types::{Context, DISCRIMINATOR, LINK_RELATED, LINK_SELF};

/// JSON Schema for the wire shape of `context`.
pub fn wire_schema(context: Context) -> Value {
    let link_target = json!({
        "oneOf": [
            { "type": "string" },
            {
                "type": "object",
                "required": ["href"],
                "properties": { "href": { "type": "string" } }
            }
        ]
    });

    let Some(registry) = VariantRegistry::for_context(context) else {
        // Exactly one of the two link members.
        return json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "title": context.as_str(),
            "type": "object",
            "properties": {
                LINK_SELF: link_target,
                LINK_RELATED: link_target
            },
            "oneOf": [
                { "required": [LINK_SELF] },
                { "required": [LINK_RELATED] }
            ]
        });
    };

    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": context.as_str(),
        "type": "array",
        "items": {
            "type": "object",
            "required": [DISCRIMINATOR, "id"],
            "properties": {
                DISCRIMINATOR: { "enum": registry.tags() },
                "id": { "type": "string" },
                "attributes": { "type": "object" },
                "relationships": { "type": "object" },
                "links": { "type": "object" }
            }
        }
    })
}

/// Validate a wire value against the shape of `context`.
///
/// # Errors
///
/// Returns `ValidateError::Invalid` listing every violation, each with the
/// JSON Pointer of the offending value.
pub fn validate_wire(value: &Value, context: Context) -> Result<(), ValidateError> {
    let schema = wire_schema(context);
    let validator = jsonschema::validator_for(&schema).map_err(|e| ValidateError::InvalidSchema {
        message: e.to_string(),
    })?;

    let errors: Vec<SchemaError> = validator
        .iter_errors(value)
        .map(|e| SchemaError {
            path: e.instance_path.to_string(),
            message: e.to_string(),
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidateError::Invalid { errors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_lists_registry_tags() {
        let schema = wire_schema(Context::ListRefsIncluded);
        assert_eq!(
            schema["items"]["properties"]["type"]["enum"],
            json!(["items", "versions"])
        );
    }

    #[test]
    fn valid_folder_contents() {
        let value = json!([
            { "type": "folders", "id": "f1" },
            { "type": "items", "id": "i1", "attributes": { "displayName": "doc.rvt" } }
        ]);
        assert!(validate_wire(&value, Context::FolderContents).is_ok());
    }

    #[test]
    fn reports_every_bad_element() {
        let value = json!([
            { "type": "versions", "id": "v1" },
            { "type": "folders", "id": "f1" },
            { "type": "items" }
        ]);
        match validate_wire(&value, Context::FolderContents) {
            Err(ValidateError::Invalid { errors }) => {
                let paths: Vec<&str> = errors.iter().map(|e| e.path.as_str()).collect();
                assert_eq!(errors.len(), 2, "{errors:?}");
                assert!(paths.contains(&"/0/type"));
                assert!(paths.contains(&"/2"));
            }
            other => panic!("expected two validation errors, got {other:?}"),
        }
    }

    #[test]
    fn link_object_needs_exactly_one_member() {
        let ctx = Context::RelationshipRefsLinks;
        assert!(validate_wire(&json!({ "self": "https://x" }), ctx).is_ok());
        assert!(validate_wire(&json!({ "related": { "href": "https://y" } }), ctx).is_ok());
        assert!(validate_wire(&json!({}), ctx).is_err());
        assert!(validate_wire(&json!({ "self": "https://x", "related": "https://y" }), ctx).is_err());
    }

    #[test]
    fn top_level_shape_is_checked() {
        let result = validate_wire(&json!({ "type": "folders", "id": "f1" }), Context::Refs);
        assert!(matches!(result, Err(ValidateError::Invalid { .. })));
    }
}
