//! Members that may be absent, explicitly `null`, or set.
//!
//! Pair with `#[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]`
//! so that an absent member stays absent and a `null` member is written back
//! as `null`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// `None` when absent, `Some(None)` when `null`, `Some(Some(v))` when set.
pub type Nullable<T> = Option<Option<T>>;

pub(crate) fn serialize<S, T>(value: &Nullable<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    match value {
        Some(Some(inner)) => inner.serialize(serializer),
        _ => serializer.serialize_none(),
    }
}

pub(crate) fn deserialize<'de, D, T>(deserializer: D) -> Result<Nullable<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::Nullable;
    use serde::{Deserialize, Serialize};
    use serde_json::{json, Map, Value};

    #[derive(Debug, Serialize, Deserialize)]
    struct Attributes {
        #[serde(
            default,
            with = "crate::nullable",
            skip_serializing_if = "Option::is_none"
        )]
        hidden: Nullable<bool>,
        #[serde(flatten)]
        extra: Map<String, Value>,
    }

    #[test]
    fn absent_null_and_set_are_distinct() {
        let absent: Attributes = serde_json::from_value(json!({})).unwrap();
        assert_eq!(absent.hidden, None);

        let null: Attributes = serde_json::from_value(json!({ "hidden": null })).unwrap();
        assert_eq!(null.hidden, Some(None));

        let set: Attributes = serde_json::from_value(json!({ "hidden": true })).unwrap();
        assert_eq!(set.hidden, Some(Some(true)));
    }

    #[test]
    fn null_is_written_back() {
        for value in [json!({}), json!({ "hidden": null }), json!({ "hidden": false })] {
            let attributes: Attributes = serde_json::from_value(value.clone()).unwrap();
            assert_eq!(serde_json::to_value(&attributes).unwrap(), value);
        }
    }
}
