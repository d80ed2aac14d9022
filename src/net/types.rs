//! Wire-format DTOs for the dashboard backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend JSON payloads so serde stays lossless.
//! Counts are accepted from either integer or integral float JSON numbers,
//! since the backend serializes some aggregates through float arithmetic.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Full aggregated allocation state returned by `GET /api/dashboard`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub total_clouds: u64,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub total_ips: u64,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub used_ips: u64,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub free_ips: u64,
    #[serde(default)]
    pub usage_percentage: f64,
    /// ISO 8601 timestamp of the backend aggregation run.
    #[serde(default)]
    pub last_update: Option<String>,
    #[serde(default)]
    pub clouds: Vec<CloudStats>,
    #[serde(default)]
    pub all_allocations: Vec<IpAllocation>,
    /// Addresses claimed by more than one cloud, keyed by IP.
    #[serde(default)]
    pub conflicts: BTreeMap<String, Vec<IpConflict>>,
}

impl DashboardSnapshot {
    /// Whether any address is claimed by more than one cloud.
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// Look up a cloud by its exact name.
    pub fn cloud(&self, cloud_name: &str) -> Option<&CloudStats> {
        self.clouds.iter().find(|c| c.cloud_name == cloud_name)
    }
}

/// Per-cloud aggregate.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CloudStats {
    pub cloud_name: String,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub total_pools: u64,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub total_ips: u64,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub used_ips: u64,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub free_ips: u64,
    /// Absent on clouds the backend could not reach.
    #[serde(default)]
    pub usage_percentage: Option<f64>,
    #[serde(default)]
    pub pools: Vec<IpPool>,
}

/// A contiguous address range managed within one cloud.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IpPool {
    pub name: String,
    /// CIDR notation, e.g. `"87.255.215.0/24"`.
    #[serde(default)]
    pub network: String,
    #[serde(default)]
    pub cloud_name: String,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub total_ips: u64,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub used_ips: u64,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub free_ips: u64,
    #[serde(default)]
    pub usage_percentage: Option<f64>,
    #[serde(default)]
    pub used_addresses: Vec<IpAllocation>,
    #[serde(default)]
    pub free_addresses: Vec<String>,
}

/// One allocated address.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IpAllocation {
    pub ip_address: String,
    pub org_name: String,
    #[serde(default)]
    pub org_id: Option<String>,
    #[serde(default)]
    pub entity_name: Option<String>,
    /// Backend classification (`FLOATING_IP`, `EDGE`, `VM_ALLOCATED`, `NAT`, ...).
    pub allocation_type: String,
    pub cloud_name: String,
    pub pool_name: String,
    #[serde(default)]
    pub allocation_date: Option<String>,
    #[serde(default)]
    pub vapp_name: Option<String>,
    #[serde(default)]
    pub deployed: Option<bool>,
}

/// One conflicting claim on an address.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpConflict {
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub clouds: Vec<String>,
    #[serde(default)]
    pub pools: Vec<String>,
    #[serde(default)]
    pub organizations: Vec<String>,
    #[serde(default)]
    pub conflict_type: Option<String>,
}

/// A free-form note attached to an IP, cloud, or pool.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub cloud_name: Option<String>,
    #[serde(default)]
    pub pool_name: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_pinned: bool,
}

/// Payload for creating or updating a note.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePayload {
    pub title: String,
    pub content: String,
    pub ip_address: Option<String>,
    pub cloud_name: Option<String>,
    pub pool_name: Option<String>,
}

/// Body of `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body of `POST /api/refresh` and `POST /api/logout`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RefreshTokenRequest<'a> {
    pub refresh_token: &'a str,
}

/// Token material issued by login, callback exchange, or refresh.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    /// Absent when the server keeps the existing refresh token.
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Response of `GET /api/verify`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub valid: bool,
    #[serde(default)]
    pub username: Option<String>,
}

/// Error body shape used by the backend (`{"detail": "..."}`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    pub detail: serde_json::Value,
}

impl ErrorDetail {
    /// Human-readable detail text; structured validation details are flattened to JSON.
    pub fn message(&self) -> String {
        match &self.detail {
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

fn deserialize_u64_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_i64_from_number(deserializer)?;
    u64::try_from(value).map_err(|_| D::Error::custom(format!("value {value} out of range for u64")))
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
