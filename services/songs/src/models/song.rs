use serde::de::{self, DeserializeOwned, Unexpected};
use serde::{Deserialize, Serialize};
use serde_json::{Deserializer, Map, Value};
use sqlx::FromRow;

/// A persisted song row as exposed to clients. The generated `id` column is
/// never selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub name: String,
    pub url: String,
    #[sqlx(rename = "originalviews")]
    pub original_views: i32,
    #[sqlx(rename = "latestviews")]
    pub latest_views: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SongList {
    pub items: Vec<Song>,
}

// Request bodies decode leniently: keys match without regard to case, missing
// fields fall back to zero values and unknown fields (the legacy `auth` token
// included) are ignored. Field names below are the folded keys.

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateSongRequest {
    pub name: String,
    pub url: String,
    #[serde(rename = "originalviews")]
    pub original_views: i32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateSongRequest {
    pub url: String,
    #[serde(rename = "newname")]
    pub new_name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteSongRequest {
    pub url: String,
}

/// Decode the first JSON value in `body` into a request struct.
///
/// Bytes after that value are ignored and `null` yields the zero request.
/// Object keys are folded to lower case, so `URL`, `Url` and `url` all land
/// on the same field.
pub fn decode_request<T>(body: &[u8]) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    let value = match Deserializer::from_slice(body).into_iter::<Value>().next() {
        Some(value) => value?,
        None => return Err(<serde_json::Error as de::Error>::custom("unexpected end of JSON input")),
    };

    match value {
        Value::Null => Ok(T::default()),
        Value::Object(fields) => {
            let folded: Map<String, Value> = fields
                .into_iter()
                .map(|(key, value)| (key.to_lowercase(), value))
                .collect();
            serde_json::from_value(Value::Object(folded))
        }
        other => Err(<serde_json::Error as de::Error>::invalid_type(
            unexpected(&other),
            &"a JSON object",
        )),
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Null => Unexpected::Unit,
        Value::Object(_) => Unexpected::Map,
    }
}
