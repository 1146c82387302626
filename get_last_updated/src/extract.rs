use log::warn;
use serde::de::Error as _;
use serde::Deserialize;
use serde_json::Value;

/// Tag metadata as returned by a registry; only `last_updated` is kept.
#[derive(Deserialize, Debug, Default)]
pub struct TagMetadata {
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Strict decode of a response body.
///
/// The root must be a JSON object. Duplicate keys resolve to the last one.
pub fn decode(body: &[u8]) -> serde_json::Result<TagMetadata> {
    let value: Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(serde_json::Error::custom("expected a JSON object"));
    }
    serde_json::from_value(value)
}

/// Returns the `last_updated` string, or an empty string when the body
/// cannot be decoded or the field is missing.
pub fn last_updated(body: &[u8]) -> String {
    match decode(body) {
        Ok(meta) => meta.last_updated.unwrap_or_default(),
        Err(e) => {
            warn!("could not decode response body, using empty value: {}", e);
            String::new()
        }
    }
}
