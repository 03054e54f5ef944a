//! Response documents whose collections are polymorphic.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::LoadError;
use crate::fields;
use crate::nullable::Nullable;
use crate::resources::Resource;

/// The `jsonapi` member of a response document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonApiVersion {
    pub version: String,
}

/// Children of a folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderContents {
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub jsonapi: Nullable<JsonApiVersion>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub links: Nullable<Value>,
    #[serde(with = "fields::folder_contents")]
    pub data: Vec<Resource>,
    #[serde(
        default,
        with = "fields::refs::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub included: Option<Vec<Resource>>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub meta: Nullable<Value>,
}

/// Parent folders of a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderRefs {
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub jsonapi: Nullable<JsonApiVersion>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub links: Nullable<Value>,
    #[serde(with = "fields::folder_refs")]
    pub data: Vec<Resource>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub meta: Nullable<Value>,
}

/// Resources referenced by a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refs {
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub jsonapi: Nullable<JsonApiVersion>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub links: Nullable<Value>,
    #[serde(with = "fields::refs")]
    pub data: Vec<Resource>,
    #[serde(
        default,
        with = "fields::refs::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub included: Option<Vec<Resource>>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub meta: Nullable<Value>,
}

/// Reference descriptor in a relationship-refs document.
///
/// Its `type` names the referenced resource's collection and is plain data
/// here, not a discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipRef {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub meta: Nullable<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Relationship references of a resource, with the referenced resources
/// in `included`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipRefs {
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub jsonapi: Nullable<JsonApiVersion>,
    #[serde(
        default,
        with = "fields::relationship_links::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub links: Option<Resource>,
    #[serde(default)]
    pub data: Vec<RelationshipRef>,
    #[serde(
        default,
        with = "fields::relationship_refs_included::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub included: Option<Vec<Resource>>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub meta: Nullable<Value>,
}

/// Result of a list-refs command: the references, with items and versions
/// in `included`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListRefs {
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub jsonapi: Nullable<JsonApiVersion>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub links: Nullable<Value>,
    #[serde(default)]
    pub data: Vec<RelationshipRef>,
    #[serde(
        default,
        with = "fields::list_refs_included::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub included: Option<Vec<Resource>>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub meta: Nullable<Value>,
}

/// Conversions shared by all response documents.
pub trait Document: Serialize + DeserializeOwned {
    /// Decode a document from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::InvalidJson` when the value does not match the
    /// document shape, including any codec failure in a polymorphic field.
    fn from_value(value: Value) -> Result<Self, LoadError> {
        serde_json::from_value(value).map_err(|source| LoadError::InvalidJson { source })
    }

    /// Decode a document from JSON text.
    fn from_json(text: &str) -> Result<Self, LoadError> {
        serde_json::from_str(text).map_err(|source| LoadError::InvalidJson { source })
    }

    /// Encode the document as a JSON value.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error when a polymorphic field holds a
    /// resource that is not legal for its context.
    fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl Document for FolderContents {}
impl Document for FolderRefs {}
impl Document for Refs {}
impl Document for RelationshipRefs {}
impl Document for ListRefs {}
