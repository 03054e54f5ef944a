//! Data-management resource codec
//!
//! Polymorphic decoding and encoding of heterogeneous resource collections:
//! JSON arrays whose elements are folders, items or versions, told apart by
//! their `type` member, and relationship link objects, told apart by whether
//! they carry `self` or `related`.
//!
//! # Example
//!
//! ```
//! use dm_resources::{decode, encode, Context, ResourceKind};
//! use serde_json::json;
//!
//! let wire = json!([
//!     { "type": "folders", "id": "f1", "name": "Root" },
//!     { "type": "items", "id": "i1", "name": "doc.rvt" }
//! ]);
//!
//! let resources = decode(&wire, Context::FolderContents).unwrap();
//! assert_eq!(resources[0].kind(), ResourceKind::Folder);
//! assert_eq!(resources[1].id(), Some("i1"));
//!
//! // Re-encoding restores the discriminators from the variant cases.
//! assert_eq!(encode(&resources, Context::FolderContents).unwrap(), wire);
//! ```
//!
//! # Contexts
//!
//! | Context | Legal kinds | Wire shape |
//! |---------|-------------|------------|
//! | `FolderContents` | folders, items | array |
//! | `FolderRefs`, `Refs`, `RelationshipRefsIncluded` | folders, items, versions | array |
//! | `ListRefsIncluded` | items, versions | array |
//! | `RelationshipRefsLinks` | self link, related link | object |
//!
//! An element whose tag is not legal for its context fails the whole decode.

mod codec;
pub mod documents;
mod error;
pub mod fields;
mod links;
mod loader;
mod nullable;
mod registry;
mod resources;
mod types;
mod validator;

pub use codec::{decode, encode};
pub use documents::{
    Document, FolderContents, FolderRefs, JsonApiVersion, ListRefs, Refs, RelationshipRef,
    RelationshipRefs,
};
pub use error::{CodecError, LoadError, SchemaError, ValidateError};
pub use links::{decode_link, encode_link, link_kind};
pub use loader::{load_document, load_document_str, select};
pub use registry::{
    VariantRegistry, FOLDER_CONTENTS, FOLDER_REFS, LIST_REFS_INCLUDED, REFS,
    RELATIONSHIP_REFS_INCLUDED,
};
pub use nullable::Nullable;
pub use resources::{
    Extension, Folder, FolderAttributes, HrefLink, Item, ItemAttributes, LinkRelated, LinkSelf,
    LinkTarget, Resource, ResourceLinks, Version, VersionAttributes,
};
pub use types::{json_type_name, Context, ResourceKind, UnknownContext, DISCRIMINATOR};
pub use validator::{validate_wire, wire_schema};
