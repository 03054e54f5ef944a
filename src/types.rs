//! Core types shared by the registries, the codec and the CLI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Member name carrying the discriminator on tagged resources.
pub const DISCRIMINATOR: &str = "type";

/// Member names the union layer owns; concrete schemas never emit them.
pub const RESERVED_MEMBERS: &[&str] = &["type", "Type"];

/// Link member marking a self link.
pub const LINK_SELF: &str = "self";

/// Link member marking a related link.
pub const LINK_RELATED: &str = "related";

/// Returns the JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The kind of a decoded resource, one per [`Resource`](crate::Resource) case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    Folder,
    Item,
    Version,
    LinkSelf,
    LinkRelated,
}

impl ResourceKind {
    /// Wire discriminator for tagged kinds. Links are identified by shape
    /// and have none.
    pub fn wire_tag(&self) -> Option<&'static str> {
        match self {
            ResourceKind::Folder => Some("folders"),
            ResourceKind::Item => Some("items"),
            ResourceKind::Version => Some("versions"),
            ResourceKind::LinkSelf | ResourceKind::LinkRelated => None,
        }
    }

    /// Human-readable name used in CLI output and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Folder => "folder",
            ResourceKind::Item => "item",
            ResourceKind::Version => "version",
            ResourceKind::LinkSelf => "link-self",
            ResourceKind::LinkRelated => "link-related",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A collection site whose elements are polymorphic.
///
/// Each context admits a fixed subset of resource kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Context {
    /// Children of a folder: folders and items.
    FolderContents,
    /// Parent folders of a resource.
    FolderRefs,
    /// Resources referenced by a resource.
    Refs,
    /// The `included` array of a relationship-refs document.
    RelationshipRefsIncluded,
    /// The `included` array of a list-refs (list command) document.
    ListRefsIncluded,
    /// The `links` object of a relationship: a single self or related link.
    RelationshipRefsLinks,
}

impl Context {
    /// Every context, in declaration order.
    pub const ALL: [Context; 6] = [
        Context::FolderContents,
        Context::FolderRefs,
        Context::Refs,
        Context::RelationshipRefsIncluded,
        Context::ListRefsIncluded,
        Context::RelationshipRefsLinks,
    ];

    /// Kebab-case name, as accepted by [`Context::from_str`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Context::FolderContents => "folder-contents",
            Context::FolderRefs => "folder-refs",
            Context::Refs => "refs",
            Context::RelationshipRefsIncluded => "relationship-refs-included",
            Context::ListRefsIncluded => "list-refs-included",
            Context::RelationshipRefsLinks => "relationship-refs-links",
        }
    }

    /// True for the links context, which holds one shape-identified object
    /// rather than an array of tagged objects.
    pub fn is_link_object(&self) -> bool {
        matches!(self, Context::RelationshipRefsLinks)
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown context name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownContext(pub String);

impl fmt::Display for UnknownContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Context::ALL.iter().map(Context::as_str).collect();
        write!(
            f,
            "unknown context \"{}\": expected one of {}",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for UnknownContext {}

impl FromStr for Context {
    type Err = UnknownContext;

    /// Case-insensitive; underscores are accepted in place of dashes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Context::ALL
            .into_iter()
            .find(|ctx| ctx.as_str() == normalized)
            .ok_or_else(|| UnknownContext(s.to_string()))
    }
}
