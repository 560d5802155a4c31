//! # Response Decoder
//!
//! Wire records are `#[derive(Deserialize)]` structs that mirror what the
//! appliance sends. Domain objects are built from them with `From`, after
//! these conventions have been applied:
//!
//! - nullable scalars: `#[serde(default, deserialize_with = "nullable")]`,
//!   `null` and missing both become the zero value;
//! - wrapped properties: [`Property`] holds the string and parsed forms;
//!   numeric domain fields take [`parsed_of`], textual ones take [`text_of`];
//! - inverted flags: `#[serde(with = "negated")]` from
//!   [`params`](crate::framework::params), the same helper the encoder uses;
//! - count-derived flags: [`hold_flag`].
//!
//! Shape mismatches are never defaulted away: a field that is present with
//! the wrong type fails the whole decode.

use crate::framework::error::ClientError;
use crate::framework::resource::Resource;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `null` or missing collapses to `T::default()`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A property record as the appliance reports it, e.g.
/// `{"value": "128K", "rawvalue": "131072", "parsed": 131072}`.
///
/// `P` is the type of the parsed form. Leave it as [`IgnoredAny`] for
/// properties only read through their string form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Property<P = IgnoredAny> {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub parsed: Option<P>,
}

/// String form of a possibly absent property, `""` when missing.
pub fn text_of<P>(property: Option<Property<P>>) -> String {
    property.and_then(|p| p.value).unwrap_or_default()
}

/// Parsed form of a possibly absent property, zero when missing.
pub fn parsed_of<P: Default>(property: Option<Property<P>>) -> P {
    property.and_then(|p| p.parsed).unwrap_or_default()
}

/// True iff the raw count is non-empty and not the literal `"0"`.
pub fn hold_flag(raw: &str) -> bool {
    !raw.is_empty() && raw != "0"
}

/// Decodes a single wire record into `T`.
pub fn decode_one<T: Resource>(response: Value, step: &str) -> Result<T, ClientError> {
    serde_json::from_value::<T::Wire>(response)
        .map(T::from_wire)
        .map_err(|e| ClientError::decode(format!("{} {}", T::KIND, step), e))
}

/// Decodes a JSON array of wire records. An empty array is an empty `Vec`.
pub fn decode_list<T: Resource>(response: Value, step: &str) -> Result<Vec<T>, ClientError> {
    serde_json::from_value::<Vec<T::Wire>>(response)
        .map(|records| records.into_iter().map(T::from_wire).collect())
        .map_err(|e| ClientError::decode(format!("{} {}", T::KIND, step), e))
}

/// Decodes any plain response type, e.g. a verb's scalar result.
pub fn decode_value<T: DeserializeOwned>(response: Value, context: &str) -> Result<T, ClientError> {
    serde_json::from_value(response).map_err(|e| ClientError::decode(context, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Record {
        #[serde(default, deserialize_with = "nullable")]
        email: String,
        #[serde(default, deserialize_with = "nullable")]
        mtu: i64,
        #[serde(default)]
        quota: Option<Property<i64>>,
        #[serde(default)]
        compression: Option<Property>,
        #[serde(default)]
        userrefs: Option<Property<String>>,
    }

    #[test]
    fn test_nullable_scalars_collapse_to_zero() {
        let r: Record = serde_json::from_value(json!({"email": null, "mtu": null})).unwrap();
        assert_eq!(r.email, "");
        assert_eq!(r.mtu, 0);

        let r: Record = serde_json::from_value(json!({})).unwrap();
        assert_eq!(r.email, "");

        let r: Record = serde_json::from_value(json!({"email": "a@b.c", "mtu": 9000})).unwrap();
        assert_eq!(r.email, "a@b.c");
        assert_eq!(r.mtu, 9000);
    }

    #[test]
    fn test_property_forms() {
        let r: Record = serde_json::from_value(json!({
            "quota": {"parsed": 4096, "value": "4K"},
            "compression": {"value": "LZ4", "rawvalue": "lz4", "parsed": "lz4"},
        }))
        .unwrap();
        assert_eq!(parsed_of(r.quota), 4096);
        assert_eq!(text_of(r.compression), "LZ4");

        let r: Record = serde_json::from_value(json!({"quota": {"parsed": null, "value": "none"}})).unwrap();
        assert_eq!(parsed_of(r.quota), 0);
        assert_eq!(text_of(r.compression), "");
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        assert!(serde_json::from_value::<Record>(json!({"quota": {"parsed": "lots"}})).is_err());
        assert!(serde_json::from_value::<Record>(json!({"mtu": "big"})).is_err());
    }

    #[test]
    fn test_hold_flag_predicate() {
        assert!(!hold_flag("0"));
        assert!(hold_flag("1"));
        assert!(hold_flag("12"));
        assert!(!hold_flag(""));

        let r: Record = serde_json::from_value(json!({"userrefs": {"parsed": "2"}})).unwrap();
        assert!(hold_flag(&parsed_of(r.userrefs)));
    }

    #[test]
    fn test_decode_value_reports_context() {
        let err = decode_value::<u32>(json!("x"), "interface checkin").unwrap_err();
        assert_eq!(err.to_string(), "failed to decode interface checkin");
    }
}
