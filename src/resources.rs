//! Concrete resource schemas and the [`Resource`] sum type.
//!
//! The schemas carry no `type` member: the discriminator belongs to the
//! union layer in [`crate::codec`] and is synthesized from the enum case on
//! encode. Members a schema does not name are kept in its flattened `extra`
//! map so that re-encoding reproduces them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::nullable::Nullable;
use crate::types::ResourceKind;

/// Target of a link: either a bare URL or an `{ "href": ... }` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkTarget {
    Url(String),
    Href(HrefLink),
}

/// Object form of a link target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HrefLink {
    pub href: String,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub meta: Nullable<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HrefLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            meta: None,
            extra: Map::new(),
        }
    }
}

impl LinkTarget {
    /// The URL this link points at.
    pub fn href(&self) -> &str {
        match self {
            LinkTarget::Url(url) => url,
            LinkTarget::Href(link) => &link.href,
        }
    }
}

/// Links attached to a folder, item or version.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceLinks {
    #[serde(
        rename = "self",
        default,
        with = "crate::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub self_link: Nullable<LinkTarget>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub web_view: Nullable<LinkTarget>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Schema extension block carried in resource attributes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Extension {
    /// Extension type identifier, e.g. `folders:autodesk.core:Folder`.
    #[serde(
        rename = "type",
        default,
        with = "crate::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub extension_type: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub version: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub schema: Nullable<LinkTarget>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub data: Nullable<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderAttributes {
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub name: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub display_name: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub create_time: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub create_user_id: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub create_user_name: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub last_modified_user_id: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub last_modified_user_name: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub last_modified_time_rollup: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub object_count: Nullable<u64>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub hidden: Nullable<bool>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub extension: Nullable<Extension>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemAttributes {
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub display_name: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub create_time: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub create_user_id: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub create_user_name: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub last_modified_user_id: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub last_modified_user_name: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub hidden: Nullable<bool>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub reserved: Nullable<bool>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub reserved_time: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub reserved_user_id: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub reserved_user_name: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub path_in_project: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub extension: Nullable<Extension>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionAttributes {
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub name: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub display_name: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub create_time: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub create_user_id: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub create_user_name: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub last_modified_user_id: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub last_modified_user_name: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub version_number: Nullable<u64>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub mime_type: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub file_type: Nullable<String>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub storage_size: Nullable<u64>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub extension: Nullable<Extension>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reads a nullable member, treating `null` like absent.
fn present<T>(member: &Nullable<T>) -> Option<&T> {
    member.as_ref().and_then(Option::as_ref)
}

/// A folder (`"folders"`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub attributes: Nullable<FolderAttributes>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub links: Nullable<ResourceLinks>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub relationships: Nullable<Map<String, Value>>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub meta: Nullable<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Folder {
    /// Typed attributes, `None` when absent or `null`.
    pub fn attributes(&self) -> Option<&FolderAttributes> {
        present(&self.attributes)
    }
}

/// An item (`"items"`), the lineage of a document's versions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub attributes: Nullable<ItemAttributes>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub links: Nullable<ResourceLinks>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub relationships: Nullable<Map<String, Value>>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub meta: Nullable<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Typed attributes, `None` when absent or `null`.
    pub fn attributes(&self) -> Option<&ItemAttributes> {
        present(&self.attributes)
    }
}

/// A version (`"versions"`) of an item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Version {
    pub id: String,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub attributes: Nullable<VersionAttributes>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub links: Nullable<ResourceLinks>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub relationships: Nullable<Map<String, Value>>,
    #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
    pub meta: Nullable<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Version {
    /// Typed attributes, `None` when absent or `null`.
    pub fn attributes(&self) -> Option<&VersionAttributes> {
        present(&self.attributes)
    }
}

/// A relationship link object identified by its `self` member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkSelf {
    #[serde(rename = "self")]
    pub self_link: LinkTarget,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A relationship link object identified by its `related` member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRelated {
    pub related: LinkTarget,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A decoded resource: one case per resource kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    Folder(Folder),
    Item(Item),
    Version(Version),
    LinkSelf(LinkSelf),
    LinkRelated(LinkRelated),
}

impl Resource {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::Folder(_) => ResourceKind::Folder,
            Resource::Item(_) => ResourceKind::Item,
            Resource::Version(_) => ResourceKind::Version,
            Resource::LinkSelf(_) => ResourceKind::LinkSelf,
            Resource::LinkRelated(_) => ResourceKind::LinkRelated,
        }
    }

    /// Resource id. Links have none.
    pub fn id(&self) -> Option<&str> {
        match self {
            Resource::Folder(f) => Some(&f.id),
            Resource::Item(i) => Some(&i.id),
            Resource::Version(v) => Some(&v.id),
            Resource::LinkSelf(_) | Resource::LinkRelated(_) => None,
        }
    }

    /// Display name from the typed attributes, falling back to `name`.
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Resource::Folder(f) => f
                .attributes()
                .and_then(|a| present(&a.display_name).or(present(&a.name)))
                .map(String::as_str),
            Resource::Item(i) => i
                .attributes()
                .and_then(|a| present(&a.display_name))
                .map(String::as_str),
            Resource::Version(v) => v
                .attributes()
                .and_then(|a| present(&a.display_name).or(present(&a.name)))
                .map(String::as_str),
            Resource::LinkSelf(_) | Resource::LinkRelated(_) => None,
        }
    }

    /// Link URL for link cases.
    pub fn href(&self) -> Option<&str> {
        match self {
            Resource::LinkSelf(l) => Some(l.self_link.href()),
            Resource::LinkRelated(l) => Some(l.related.href()),
            _ => None,
        }
    }

    /// Decode a payload object (discriminator already removed) into the
    /// schema for `kind`.
    pub(crate) fn from_payload(
        kind: ResourceKind,
        payload: Map<String, Value>,
    ) -> Result<Self, serde_json::Error> {
        let value = Value::Object(payload);
        Ok(match kind {
            ResourceKind::Folder => Resource::Folder(serde_json::from_value(value)?),
            ResourceKind::Item => Resource::Item(serde_json::from_value(value)?),
            ResourceKind::Version => Resource::Version(serde_json::from_value(value)?),
            ResourceKind::LinkSelf => Resource::LinkSelf(serde_json::from_value(value)?),
            ResourceKind::LinkRelated => Resource::LinkRelated(serde_json::from_value(value)?),
        })
    }

    /// Encode the schema's own members, without any discriminator.
    pub(crate) fn to_payload(&self) -> Result<Map<String, Value>, serde_json::Error> {
        match self {
            Resource::Folder(f) => to_object(f),
            Resource::Item(i) => to_object(i),
            Resource::Version(v) => to_object(v),
            Resource::LinkSelf(l) => to_object(l),
            Resource::LinkRelated(l) => to_object(l),
        }
    }
}

fn to_object<T: Serialize>(schema: &T) -> Result<Map<String, Value>, serde_json::Error> {
    match serde_json::to_value(schema)? {
        Value::Object(map) => Ok(map),
        _ => Err(<serde_json::Error as serde::ser::Error>::custom(
            "resource payload did not serialize to an object",
        )),
    }
}

impl From<Folder> for Resource {
    fn from(folder: Folder) -> Self {
        Resource::Folder(folder)
    }
}

impl From<Item> for Resource {
    fn from(item: Item) -> Self {
        Resource::Item(item)
    }
}

impl From<Version> for Resource {
    fn from(version: Version) -> Self {
        Resource::Version(version)
    }
}

impl From<LinkSelf> for Resource {
    fn from(link: LinkSelf) -> Self {
        Resource::LinkSelf(link)
    }
}

impl From<LinkRelated> for Resource {
    fn from(link: LinkRelated) -> Self {
        Resource::LinkRelated(link)
    }
}
