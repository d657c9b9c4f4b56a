//! Wire DTOs for the remote document API.
//!
//! DESIGN
//! ======
//! Field names mirror the API's camelCase JSON. Conversion into view-facing
//! domain types happens in `state`, so a wire quirk (byte maps, missing role)
//! is absorbed here exactly once.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Credentials for `POST /auth/login` and `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub name: String,
    pub password: String,
}

/// Successful login body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Error body the API returns alongside non-success statuses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, deserialize_with = "deserialize_message")]
    pub message: Option<String>,
}

/// Gallery entry from `GET /document/all`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    pub id: String,
    pub image_url: String,
}

/// Body of a successful upload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Full document from `GET /document/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDto {
    pub id: String,
    pub filename: String,
    pub created_at: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    /// Raw image bytes; the API serializes a byte buffer as an index-keyed map.
    #[serde(default, deserialize_with = "deserialize_image_bytes")]
    pub image: Vec<u8>,
}

/// Speaker of a chat entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Role implied by the API's sequence convention: odd orders are user
    /// turns, even orders are replies. Only used when the server sends no role.
    pub fn from_order_parity(order: u32) -> Self {
        if order % 2 == 1 { Self::User } else { Self::Assistant }
    }

    /// Label used in the printed transcript.
    pub fn transcript_label(self) -> &'static str {
        match self {
            Self::User => "Question",
            Self::Assistant => "Answer",
        }
    }
}

/// Chat message from `GET /message/{documentId}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub content: String,
    #[serde(deserialize_with = "deserialize_order")]
    pub order: u32,
    #[serde(default)]
    pub sent_at: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Body of `POST /message/create/{documentId}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateMessageRequest {
    pub content: String,
    pub order: u32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytes {
    Seq(Vec<u8>),
    Buffer { data: Vec<u8> },
    Indexed(BTreeMap<String, u8>),
}

/// Reassemble image bytes from a JSON array, a `{ "data": [...] }` buffer
/// object, or an index-keyed map (`{"0": 137, "1": 80, ...}`).
fn deserialize_image_bytes<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawBytes>::deserialize(deserializer)?;
    match raw {
        None => Ok(Vec::new()),
        Some(RawBytes::Seq(bytes) | RawBytes::Buffer { data: bytes }) => Ok(bytes),
        Some(RawBytes::Indexed(map)) => bytes_from_index_map(map).map_err(D::Error::custom),
    }
}

/// Order an index-keyed byte map by numeric key. Keys must form `0..len`.
pub(crate) fn bytes_from_index_map(map: BTreeMap<String, u8>) -> Result<Vec<u8>, String> {
    let mut indexed = map
        .into_iter()
        .map(|(key, byte)| {
            key.parse::<usize>()
                .map(|idx| (idx, byte))
                .map_err(|_| format!("non-numeric byte index '{key}'"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    indexed.sort_unstable_by_key(|(idx, _)| *idx);
    for (expected, (idx, _)) in indexed.iter().enumerate() {
        if *idx != expected {
            return Err(format!("byte index gap at {expected}"));
        }
    }
    Ok(indexed.into_iter().map(|(_, byte)| byte).collect())
}

fn deserialize_order<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let order = match &value {
        serde_json::Value::Number(number) => number.as_u64(),
        serde_json::Value::String(text) => text.trim().parse::<u64>().ok(),
        _ => None,
    };
    let order = order.ok_or_else(|| D::Error::custom(format!("expected positive order, got {value}")))?;
    u32::try_from(order).map_err(|_| D::Error::custom(format!("order {order} out of range")))
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(id) => Ok(id.to_string()),
        other => Err(D::Error::custom(format!("expected string or numeric id, got {other}"))),
    }
}

/// NestJS-style validation errors send `message` as an array of strings.
fn deserialize_message<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(message) => Some(message),
        serde_json::Value::Array(items) => {
            let parts = items
                .iter()
                .filter_map(serde_json::Value::as_str)
                .collect::<Vec<_>>();
            if parts.is_empty() { None } else { Some(parts.join(", ")) }
        }
        _ => None,
    })
}
