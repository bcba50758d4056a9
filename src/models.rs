use serde::{Deserialize, Deserializer, Serialize};

use crate::error::FetchError;

/// The collector writes `null` for some unset columns; read those the same
/// as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Operating system identity reported by the collector
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OsVersion {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub platform: String,
}

/// An application record. The collector omits empty fields, so every string
/// defaults to empty and `last_opened_time` to zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InstalledApp {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bundle_identifier: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bundle_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bundle_short_version: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_system_version: Option<String>,
    /// Seconds since epoch, 0 when never opened
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_opened_time: f64,
    /// Set once the application has been uninstalled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<f64>,
}

impl InstalledApp {
    pub fn is_deleted(&self) -> bool {
        self.end_time.is_some()
    }
}

/// Body of `GET /api/latest_data`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub os_version: OsVersion,
    #[serde(default, deserialize_with = "null_as_default")]
    pub osquery_version: String,
    pub installed_apps: Vec<InstalledApp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl ApiResponse {
    /// Decode a response body.
    ///
    /// `installed_apps` has to be present and an array before anything else
    /// is looked at; a body that is not JSON at all, or whose records carry
    /// the wrong types, is reported separately.
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

        if !value
            .get("installed_apps")
            .is_some_and(serde_json::Value::is_array)
        {
            return Err(FetchError::Format);
        }

        serde_json::from_value(value).map_err(|e| FetchError::Decode(e.to_string()))
    }
}
