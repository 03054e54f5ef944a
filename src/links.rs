//! Relationship link objects, identified by shape rather than by tag.
//!
//! `{"self": ...}` is a self link, `{"related": ...}` a related link. An
//! object carrying both is rejected.

use serde_json::{Map, Value};

use crate::error::CodecError;
use crate::resources::Resource;
use crate::types::{json_type_name, Context, ResourceKind, LINK_RELATED, LINK_SELF};

/// Pick the link kind from the members present on `object`.
pub fn link_kind(object: &Map<String, Value>) -> Result<ResourceKind, CodecError> {
    match (object.contains_key(LINK_SELF), object.contains_key(LINK_RELATED)) {
        (true, false) => Ok(ResourceKind::LinkSelf),
        (false, true) => Ok(ResourceKind::LinkRelated),
        (true, true) => Err(CodecError::AmbiguousLinkShape),
        (false, false) => Err(CodecError::UnknownLinkShape),
    }
}

/// Decode a single link object.
pub fn decode_link(value: &Value) -> Result<Resource, CodecError> {
    let context = Context::RelationshipRefsLinks;
    let Value::Object(object) = value else {
        return Err(CodecError::ExpectedSingleLink {
            context,
            actual: json_type_name(value).to_string(),
        });
    };

    let kind = link_kind(object)?;
    Resource::from_payload(kind, object.clone()).map_err(|source| CodecError::InvalidPayload {
        context,
        index: 0,
        kind,
        source,
    })
}

/// Encode a link resource. The shape is self-describing, so the payload is
/// written as is.
pub fn encode_link(resource: &Resource) -> Result<Value, CodecError> {
    let context = Context::RelationshipRefsLinks;
    let kind = resource.kind();
    if !matches!(kind, ResourceKind::LinkSelf | ResourceKind::LinkRelated) {
        return Err(CodecError::VariantNotInContext { kind, context });
    }

    resource
        .to_payload()
        .map(Value::Object)
        .map_err(|source| CodecError::InvalidPayload {
            context,
            index: 0,
            kind,
            source,
        })
}
