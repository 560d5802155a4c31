//! # Parameter Encoder
//!
//! Options values are plain structs with `#[derive(Serialize)]`. Each field
//! declares how it reaches the wire with a serde attribute:
//!
//! | Convention | Field type | Attribute |
//! |---|---|---|
//! | omit-if-zero | `String`, `i64`, `Vec<_>`, ... | `#[serde(skip_serializing_if = "is_zero")]` |
//! | always-send | any | none |
//! | three-state | `Option<T>` | `#[serde(skip_serializing_if = "Option::is_none")]` |
//! | explicit clear | `Option<T>` | as above plus `serialize_with = "clear_zero"` |
//! | inverted flag | `bool` | `#[serde(rename = "...", with = "negated")]` |
//!
//! Encoding never touches the options value; [`encode`] produces a fresh
//! [`Value`].

use crate::framework::error::ClientError;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Values that have a "not set" zero form.
pub trait IsZero {
    fn is_zero(&self) -> bool;
}

macro_rules! impl_is_zero_numeric {
    ($($t:ty),*) => {
        $(impl IsZero for $t {
            fn is_zero(&self) -> bool {
                *self == 0 as $t
            }
        })*
    };
}

impl_is_zero_numeric!(i32, i64, u32, u64, usize, f64);

impl IsZero for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl IsZero for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl IsZero for str {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsZero for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> IsZero for HashMap<K, V> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> IsZero for BTreeMap<K, V> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsZero for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

/// `skip_serializing_if` predicate for the omit-if-zero convention.
pub fn is_zero<T: IsZero + ?Sized>(value: &T) -> bool {
    value.is_zero()
}

/// Serializes `Some(zero)` as `null`, so the appliance clears the field.
///
/// Pair with `skip_serializing_if = "Option::is_none"`; `None` never gets here.
pub fn clear_zero<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: IsZero + Serialize,
    S: Serializer,
{
    match value {
        Some(v) if !v.is_zero() => v.serialize(serializer),
        _ => serializer.serialize_none(),
    }
}

/// Boolean stored on the wire with the opposite meaning.
///
/// Shared by the encoder and the decoder, so the two directions stay exact
/// inverses.
pub mod negated {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(!*value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(!bool::deserialize(deserializer)?)
    }
}

/// [`negated`] for three-state update fields.
pub mod negated_option {
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.serialize_bool(!*v),
            None => serializer.serialize_none(),
        }
    }
}

/// Encodes an options value into a wire payload.
pub fn encode<T: Serialize + ?Sized>(opts: &T, context: &str) -> Result<Value, ClientError> {
    serde_json::to_value(opts).map_err(|e| ClientError::encode(context, e))
}

/// Encodes `opts` and adds a fixed discriminant field.
///
/// The discriminant is always sent and is decided by which creation
/// operation the caller invoked, never by the options value.
pub fn tagged<T: Serialize + ?Sized>(
    key: &str,
    tag: &str,
    opts: &T,
    context: &str,
) -> Result<Value, ClientError> {
    let mut params = encode(opts, context)?;
    match params.as_object_mut() {
        Some(map) => {
            map.insert(key.to_string(), Value::String(tag.to_string()));
            Ok(params)
        }
        None => Err(ClientError::encode(
            context,
            serde::ser::Error::custom("options must encode to a map"),
        )),
    }
}

/// `[id, value]` positional pair.
pub fn pair(id: impl Into<Value>, value: impl Into<Value>) -> Value {
    Value::Array(vec![id.into(), value.into()])
}

/// One `[field, "=", value]` clause of a query filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Filter(String, &'static str, Value);

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter(field.into(), "=", value.into())
    }

    pub fn field(&self) -> &str {
        &self.0
    }
}

/// Query parameters for a list of filter clauses.
pub fn filters(clauses: &[Filter]) -> Value {
    Value::Array(
        clauses
            .iter()
            .map(|Filter(field, op, value)| {
                Value::Array(vec![Value::String(field.clone()), Value::from(*op), value.clone()])
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Serialize)]
    struct Opts {
        name: String,
        #[serde(skip_serializing_if = "is_zero")]
        quota: i64,
        #[serde(skip_serializing_if = "is_zero")]
        comment: String,
        #[serde(skip_serializing_if = "is_zero")]
        tags: Vec<String>,
        enabled: bool,
        #[serde(rename = "stdout", with = "negated")]
        capture_stdout: bool,
    }

    #[derive(Debug, Default, Serialize)]
    struct Patch {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none", serialize_with = "clear_zero")]
        email: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none", with = "negated_option")]
        stdout: Option<bool>,
    }

    #[test]
    fn test_omit_if_zero_and_always_send() {
        let params = encode(&Opts::default(), "opts").unwrap();
        assert_eq!(params, json!({"name": "", "enabled": false, "stdout": true}));

        let params = encode(
            &Opts {
                name: "a".into(),
                quota: 4096,
                comment: "c".into(),
                tags: vec!["x".into()],
                enabled: true,
                capture_stdout: true,
            },
            "opts",
        )
        .unwrap();
        assert_eq!(
            params,
            json!({"name": "a", "quota": 4096, "comment": "c", "tags": ["x"], "enabled": true, "stdout": false})
        );
    }

    #[test]
    fn test_three_state_update() {
        assert_eq!(encode(&Patch::default(), "patch").unwrap(), json!({}));

        let patch = Patch {
            name: Some(String::new()),
            email: Some(String::new()),
            stdout: Some(true),
        };
        assert_eq!(
            encode(&patch, "patch").unwrap(),
            json!({"name": "", "email": null, "stdout": false})
        );

        let patch = Patch {
            email: Some("a@b.c".into()),
            ..Default::default()
        };
        assert_eq!(encode(&patch, "patch").unwrap(), json!({"email": "a@b.c"}));
    }

    #[test]
    fn test_encode_leaves_options_untouched() {
        let opts = Opts {
            name: "keep".into(),
            ..Default::default()
        };
        let _ = encode(&opts, "opts").unwrap();
        assert_eq!(opts.name, "keep");
    }

    #[test]
    fn test_tagged_adds_discriminant() {
        let params = tagged("type", "VOLUME", &Opts::default(), "opts").unwrap();
        assert_eq!(params["type"], "VOLUME");
        assert!(tagged("type", "X", &5, "scalar").is_err());
    }

    #[test]
    fn test_filter_and_pair_shapes() {
        assert_eq!(
            filters(&[Filter::eq("username", "alice"), Filter::eq("uid", 1000)]),
            json!([["username", "=", "alice"], ["uid", "=", 1000]])
        );
        assert_eq!(serde_json::to_value(Filter::eq("id", 3)).unwrap(), json!(["id", "=", 3]));
        assert_eq!(pair(7, json!({"force": true})), json!([7, {"force": true}]));
    }
}
