use std::time::Duration;

use serde::{Deserialize, Deserializer};
use url::Url;

const DEFAULT_MEMO_TTL_MS: u64 = 5_000;
const DEFAULT_DEBOUNCE_MS: u64 = 800;
const DEFAULT_REQUIRED_NETWORK_TYPE: &str = "databricks";

/// Settings for the workspace name availability lookup.
///
/// Durations are given in milliseconds when deserialized.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityClientConfig {
    /// Base url of the databricks backend, e.g. `http://localhost:7007/api/databricks`.
    pub base_url: Url,
    #[serde(default = "default_memo_ttl", deserialize_with = "duration_from_millis")]
    pub memo_ttl: Duration,
    #[serde(default = "default_debounce", deserialize_with = "duration_from_millis")]
    pub debounce: Duration,
    /// The field only checks availability while the form's network type equals this value.
    #[serde(default = "default_required_network_type")]
    pub required_network_type: String,
}

impl AvailabilityClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            memo_ttl: default_memo_ttl(),
            debounce: default_debounce(),
            required_network_type: default_required_network_type(),
        }
    }
}

fn default_memo_ttl() -> Duration {
    Duration::from_millis(DEFAULT_MEMO_TTL_MS)
}

fn default_debounce() -> Duration {
    Duration::from_millis(DEFAULT_DEBOUNCE_MS)
}

fn default_required_network_type() -> String {
    DEFAULT_REQUIRED_NETWORK_TYPE.to_owned()
}

fn duration_from_millis<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_millis)
}
