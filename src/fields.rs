//! Serde adapters that embed the codec into typed document fields.
//!
//! ```
//! use dm_resources::{fields, Resource};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Contents {
//!     #[serde(with = "fields::folder_contents")]
//!     data: Vec<Resource>,
//! }
//!
//! let contents: Contents =
//!     serde_json::from_str(r#"{"data":[{"type":"folders","id":"f1"}]}"#).unwrap();
//! assert_eq!(contents.data[0].id(), Some("f1"));
//! ```

macro_rules! tagged_field {
    ($(#[$doc:meta])* $name:ident => $context:expr) => {
        $(#[$doc])*
        pub mod $name {
            use serde::{Deserialize, Deserializer, Serialize, Serializer};
            use serde_json::Value;

            use crate::codec::{decode, encode};
            use crate::resources::Resource;
            use crate::types::Context;

            const CONTEXT: Context = $context;

            pub fn serialize<S>(resources: &[Resource], serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                encode(resources, CONTEXT)
                    .map_err(serde::ser::Error::custom)?
                    .serialize(serializer)
            }

            pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Resource>, D::Error>
            where
                D: Deserializer<'de>,
            {
                let value = Value::deserialize(deserializer)?;
                decode(&value, CONTEXT).map_err(serde::de::Error::custom)
            }

            /// For `Option<Vec<Resource>>` fields; pair with `#[serde(default)]`.
            pub mod option {
                use super::*;

                pub fn serialize<S>(
                    resources: &Option<Vec<Resource>>,
                    serializer: S,
                ) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    match resources {
                        Some(resources) => super::serialize(resources, serializer),
                        None => serializer.serialize_none(),
                    }
                }

                pub fn deserialize<'de, D>(
                    deserializer: D,
                ) -> Result<Option<Vec<Resource>>, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    match Option::<Value>::deserialize(deserializer)? {
                        Some(value) => decode(&value, CONTEXT)
                            .map(Some)
                            .map_err(serde::de::Error::custom),
                        None => Ok(None),
                    }
                }
            }
        }
    };
}

tagged_field!(
    /// `data` of a folder-contents document.
    folder_contents => Context::FolderContents
);
tagged_field!(
    /// `data` of a folder-refs document.
    folder_refs => Context::FolderRefs
);
tagged_field!(
    /// `data` / `included` of a refs document.
    refs => Context::Refs
);
tagged_field!(
    /// `included` of a relationship-refs document.
    relationship_refs_included => Context::RelationshipRefsIncluded
);
tagged_field!(
    /// `included` of a list-refs document.
    list_refs_included => Context::ListRefsIncluded
);

/// A single relationship link object held as a [`Resource`].
pub mod relationship_links {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;

    use crate::links::{decode_link, encode_link};
    use crate::resources::Resource;

    pub fn serialize<S>(link: &Resource, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        encode_link(link)
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Resource, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        decode_link(&value).map_err(serde::de::Error::custom)
    }

    /// For `Option<Resource>` fields; pair with `#[serde(default)]`.
    pub mod option {
        use super::*;

        pub fn serialize<S>(link: &Option<Resource>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match link {
                Some(link) => super::serialize(link, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Resource>, D::Error>
        where
            D: Deserializer<'de>,
        {
            match Option::<Value>::deserialize(deserializer)? {
                Some(value) => decode_link(&value)
                    .map(Some)
                    .map_err(serde::de::Error::custom),
                None => Ok(None),
            }
        }
    }
}
