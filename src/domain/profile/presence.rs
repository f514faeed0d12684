//! Deserialization support for distinguishing absent keys from explicit nulls

use serde::{Deserialize, Deserializer};

/// Deserializer for `Option<Option<T>>` patch fields
///
/// With `#[serde(default)]` an absent key stays `None`; this function maps
/// any present value, including `null`, to `Some(inner)`. A present `null`
/// therefore reads as `Some(None)`: the caller must clear the field.
pub(super) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::double_option")]
        value: Option<Option<i64>>,
    }

    #[test]
    fn test_absent_null_and_value_are_distinct() {
        let absent: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.value, None);

        let null: Probe = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(null.value, Some(None));

        let set: Probe = serde_json::from_str(r#"{"value": 7}"#).unwrap();
        assert_eq!(set.value, Some(Some(7)));
    }
}
