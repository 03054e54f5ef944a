//! Variant registries: the closed discriminator tables of each context.

use crate::error::CodecError;
use crate::types::{Context, ResourceKind};

/// Fixed mapping from discriminator to resource kind for one context.
///
/// Lookup is by exact string match. Entry order only determines how the
/// expected tags are listed in error messages.
#[derive(Debug)]
pub struct VariantRegistry {
    context: Context,
    entries: &'static [(&'static str, ResourceKind)],
}

/// Children of a folder.
pub static FOLDER_CONTENTS: VariantRegistry = VariantRegistry {
    context: Context::FolderContents,
    entries: &[("folders", ResourceKind::Folder), ("items", ResourceKind::Item)],
};

/// Parent folders of a folder or item.
pub static FOLDER_REFS: VariantRegistry = VariantRegistry {
    context: Context::FolderRefs,
    entries: &[
        ("folders", ResourceKind::Folder),
        ("items", ResourceKind::Item),
        ("versions", ResourceKind::Version),
    ],
};

/// Resources referenced by a resource.
pub static REFS: VariantRegistry = VariantRegistry {
    context: Context::Refs,
    entries: &[
        ("folders", ResourceKind::Folder),
        ("items", ResourceKind::Item),
        ("versions", ResourceKind::Version),
    ],
};

/// `included` of a relationship-refs document.
pub static RELATIONSHIP_REFS_INCLUDED: VariantRegistry = VariantRegistry {
    context: Context::RelationshipRefsIncluded,
    entries: &[
        ("folders", ResourceKind::Folder),
        ("items", ResourceKind::Item),
        ("versions", ResourceKind::Version),
    ],
};

/// `included` of a list-refs document.
pub static LIST_REFS_INCLUDED: VariantRegistry = VariantRegistry {
    context: Context::ListRefsIncluded,
    entries: &[("items", ResourceKind::Item), ("versions", ResourceKind::Version)],
};

impl VariantRegistry {
    /// Registry for a tagged context. The links context is resolved by shape
    /// and has none.
    pub fn for_context(context: Context) -> Option<&'static VariantRegistry> {
        match context {
            Context::FolderContents => Some(&FOLDER_CONTENTS),
            Context::FolderRefs => Some(&FOLDER_REFS),
            Context::Refs => Some(&REFS),
            Context::RelationshipRefsIncluded => Some(&RELATIONSHIP_REFS_INCLUDED),
            Context::ListRefsIncluded => Some(&LIST_REFS_INCLUDED),
            Context::RelationshipRefsLinks => None,
        }
    }

    pub fn context(&self) -> Context {
        self.context
    }

    /// Registered discriminators, in priority order.
    pub fn tags(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(tag, _)| *tag).collect()
    }

    /// Registered kinds, in priority order.
    pub fn kinds(&self) -> impl Iterator<Item = ResourceKind> + '_ {
        self.entries.iter().map(|(_, kind)| *kind)
    }

    /// Resolve a discriminator found at `index` of the input array.
    pub fn resolve(&self, tag: &str, index: usize) -> Result<ResourceKind, CodecError> {
        self.entries
            .iter()
            .find(|(registered, _)| *registered == tag)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| CodecError::UnknownVariant {
                tag: tag.to_string(),
                context: self.context,
                index,
                expected: self.tags(),
            })
    }

    /// Discriminator for a kind. Total over the kinds this registry holds.
    pub fn tag_for(&self, kind: ResourceKind) -> Result<&'static str, CodecError> {
        self.entries
            .iter()
            .find(|(_, registered)| *registered == kind)
            .map(|(tag, _)| *tag)
            .ok_or(CodecError::VariantNotInContext {
                kind,
                context: self.context,
            })
    }

    pub fn contains(&self, kind: ResourceKind) -> bool {
        self.kinds().any(|registered| registered == kind)
    }
}
