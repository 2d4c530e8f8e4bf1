//! Response shape classifier

use super::types::{PageEnvelope, ResponseShape};
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};

/// Keys that mark a paginated envelope
const ENVELOPE_KEYS: [&str; 2] = ["num_pages", "results"];

/// Keys that mark a single-entity detail envelope
const ENTITY_KEYS: [&str; 2] = ["export_version", "assessment"];

/// Field unwrapped from a single-entity envelope
const ENTITY_FIELD: &str = "assessment";

/// Classify a decoded response body.
///
/// Objects matching neither known envelope, scalars, and envelopes whose
/// pagination fields fail to decode are `UnexpectedResponseShape` errors
/// carrying the raw body.
pub fn classify(body: JsonValue) -> Result<ResponseShape> {
    match body {
        JsonValue::Array(records) => Ok(ResponseShape::BareList(records)),
        JsonValue::Object(map) => classify_object(map),
        other => Err(Error::unexpected_shape(other.to_string())),
    }
}

fn classify_object(mut map: JsonObject) -> Result<ResponseShape> {
    if has_keys(&map, &ENVELOPE_KEYS) {
        let body = JsonValue::Object(map);
        let raw = body.to_string();
        return serde_json::from_value::<PageEnvelope>(body)
            .map(ResponseShape::Paginated)
            .map_err(|_| Error::unexpected_shape(raw));
    }

    if has_keys(&map, &ENTITY_KEYS) {
        let entity = map.remove(ENTITY_FIELD).unwrap_or(JsonValue::Null);
        return Ok(ResponseShape::SingleEntity(entity));
    }

    Err(Error::unexpected_shape(JsonValue::Object(map).to_string()))
}

fn has_keys(map: &JsonObject, keys: &[&str]) -> bool {
    keys.iter().all(|key| map.contains_key(*key))
}

/// Classify a body that must be a page of a paginated listing
pub fn expect_envelope(body: Option<JsonValue>) -> Result<PageEnvelope> {
    let body = body.ok_or_else(|| Error::unexpected_shape("<non-JSON body>"))?;
    match classify(body)? {
        ResponseShape::Paginated(envelope) => Ok(envelope),
        other => Err(Error::unexpected_shape(format!(
            "expected a paginated envelope, got a {}",
            other.kind()
        ))),
    }
}
