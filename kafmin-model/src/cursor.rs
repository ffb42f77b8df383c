//! Cursor token envelope shared by the paginated entity types.
//!
//! A cursor is the URL-safe base64 encoding of a small JSON object:
//! `{"id": <identity>, "attributes": {<sort field>: <value or null>, ...}}`.
//! Only the attributes named in the active sort are projected, so tokens stay
//! minimal and stable as entity schemas grow. The token carries no
//! server-side state and no expiry; it is valid only for as long as the
//! attribute semantics and comparator set are unchanged between pages.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CursorError {
    #[error("cursor is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("cursor is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("cursor payload is not valid JSON: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("cursor is missing the id field")]
    MissingId,
}

/// Serialize and encode an `(identity, attributes)` pair.
pub(crate) fn encode(id: &str, attributes: Map<String, Value>) -> String {
    let mut cursor = Map::new();
    cursor.insert("id".into(), Value::String(id.to_owned()));
    cursor.insert("attributes".into(), Value::Object(attributes));
    URL_SAFE.encode(Value::Object(cursor).to_string())
}

/// Decode a token back into its `(identity, attributes)` pair.
pub(crate) fn decode(token: &str) -> Result<(String, Map<String, Value>), CursorError> {
    let raw = String::from_utf8(URL_SAFE.decode(token)?)?;
    let mut cursor: Map<String, Value> = serde_json::from_str(&raw)?;

    let id = match cursor.get("id").and_then(Value::as_str) {
        Some(id) => id.to_owned(),
        None => return Err(CursorError::MissingId),
    };

    let attributes = match cursor.remove("attributes") {
        Some(Value::Object(attributes)) => attributes,
        _ => Map::new(),
    };

    Ok((id, attributes))
}

/// Project `value` into the attribute map only when `key` is an active sort
/// field. Fields outside the sort are omitted entirely; a known-but-unset
/// value is recorded as an explicit null.
pub(crate) fn maybe_attribute(
    attributes: &mut Map<String, Value>,
    sort_fields: &[String],
    key: &str,
    value: Option<Value>,
) {
    if sort_fields.iter().any(|field| field == key) {
        attributes.insert(key.to_owned(), value.unwrap_or(Value::Null));
    }
}
