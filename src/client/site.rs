//! Sites and district derivation

use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Site type marking the district-level site
pub const DISTRICT_SITE_TYPE: &str = "DISTRICT";

/// Site id some instances use for the district-level site
pub const DISTRICT_SITE_ID: &str = "9999999";

/// District label when no site qualifies
pub const UNKNOWN_DISTRICT: &str = "UNKNOWN";

/// One site (school or district office) visible to the credentials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Site identifier, normalized to a string
    #[serde(deserialize_with = "string_or_number")]
    pub site_id: String,
    /// Display name
    pub site_name: String,
    /// Site type (`DISTRICT`, `Elementary School`, ...)
    #[serde(default)]
    pub site_type_name: Option<String>,
    /// Remaining fields as returned by the API
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Site {
    /// Whether this site identifies the district
    pub fn is_district(&self) -> bool {
        self.site_type_name.as_deref() == Some(DISTRICT_SITE_TYPE)
            || self.site_id == DISTRICT_SITE_ID
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match JsonValue::deserialize(deserializer)? {
        JsonValue::String(s) => Ok(s),
        JsonValue::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number site_id, got {other}"
        ))),
    }
}

/// Derive the district label from the site list.
///
/// One district site gives its name; none gives `UNKNOWN`; several are
/// joined with `", "` in site order.
pub fn determine_district(sites: &[Site]) -> String {
    let districts: Vec<&str> = sites
        .iter()
        .filter(|site| site.is_district())
        .map(|site| site.site_name.as_str())
        .collect();

    match districts.as_slice() {
        [single] => (*single).to_string(),
        [] => {
            warn!("No district site found among {} sites.", sites.len());
            UNKNOWN_DISTRICT.to_string()
        }
        many => {
            warn!("More than one district site found: {:?}", many);
            many.join(", ")
        }
    }
}
