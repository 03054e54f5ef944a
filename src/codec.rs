//! Tagged codec - decodes and encodes polymorphic resource collections.
//!
//! Tagged contexts carry a JSON array whose elements name their kind in a
//! `type` member. The links context carries a single object whose kind
//! follows from its members, see [`crate::links`].

use serde_json::{Map, Value};

use crate::error::CodecError;
use crate::links::{decode_link, encode_link};
use crate::registry::VariantRegistry;
use crate::resources::Resource;
use crate::types::{json_type_name, Context, DISCRIMINATOR, RESERVED_MEMBERS};

/// Decode a JSON value into resources for `context`.
///
/// The output has one resource per input element, in input order. Any
/// malformed or unknown element fails the whole call.
///
/// The links context expects a single object and yields a one-element
/// sequence.
///
/// # Errors
///
/// Returns `CodecError::ExpectedArrayOfObjects` for a non-array input or a
/// non-object element, `CodecError::MissingDiscriminator` when `type` is
/// absent or not a string, `CodecError::UnknownVariant` when the tag is not
/// registered for `context`, and `CodecError::InvalidPayload` when the
/// element does not fit the resolved schema.
pub fn decode(value: &Value, context: Context) -> Result<Vec<Resource>, CodecError> {
    let Some(registry) = VariantRegistry::for_context(context) else {
        return decode_link(value).map(|link| vec![link]);
    };

    let Value::Array(elements) = value else {
        return Err(CodecError::ExpectedArrayOfObjects {
            context,
            index: None,
            found: json_type_name(value).to_string(),
        });
    };

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| decode_element(registry, index, element))
        .collect()
}

fn decode_element(
    registry: &VariantRegistry,
    index: usize,
    element: &Value,
) -> Result<Resource, CodecError> {
    let context = registry.context();
    let Value::Object(object) = element else {
        return Err(CodecError::ExpectedArrayOfObjects {
            context,
            index: Some(index),
            found: format!("{} at element {}", json_type_name(element), index),
        });
    };

    let tag = object
        .get(DISCRIMINATOR)
        .and_then(Value::as_str)
        .ok_or(CodecError::MissingDiscriminator { context, index })?;
    let kind = registry.resolve(tag, index)?;

    // The discriminator belongs to the union, not to the schema.
    let payload: Map<String, Value> = object
        .iter()
        .filter(|(key, _)| key.as_str() != DISCRIMINATOR)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Resource::from_payload(kind, payload).map_err(|source| CodecError::InvalidPayload {
        context,
        index,
        kind,
        source,
    })
}

/// Encode resources as the wire value for `context`.
///
/// Each element is written as an object whose first member is `type`,
/// derived from the resource's case, followed by the schema's own members.
/// Members named `type` or `Type` on the schema are never written.
///
/// The links context expects exactly one link resource and yields a single
/// object.
///
/// # Errors
///
/// Returns `CodecError::VariantNotInContext` when a resource's kind is not
/// legal for `context`.
pub fn encode(resources: &[Resource], context: Context) -> Result<Value, CodecError> {
    let Some(registry) = VariantRegistry::for_context(context) else {
        return match resources {
            [link] => encode_link(link),
            _ => Err(CodecError::ExpectedSingleLink {
                context,
                actual: format!("{} resources", resources.len()),
            }),
        };
    };

    resources
        .iter()
        .enumerate()
        .map(|(index, resource)| encode_element(registry, index, resource))
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}

fn encode_element(
    registry: &VariantRegistry,
    index: usize,
    resource: &Resource,
) -> Result<Value, CodecError> {
    let kind = resource.kind();
    let tag = registry.tag_for(kind)?;
    let payload = resource
        .to_payload()
        .map_err(|source| CodecError::InvalidPayload {
            context: registry.context(),
            index,
            kind,
            source,
        })?;

    let mut object = Map::with_capacity(payload.len() + 1);
    object.insert(DISCRIMINATOR.to_string(), Value::String(tag.to_string()));
    object.extend(
        payload
            .into_iter()
            .filter(|(key, _)| !RESERVED_MEMBERS.contains(&key.as_str())),
    );
    Ok(Value::Object(object))
}
