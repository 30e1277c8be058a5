//! Hi-Rez request signing utilities.

use chrono::{DateTime, Utc};
use md5::{Digest, Md5};

/// Timestamp layout expected by the Hi-Rez API (`YYYYMMDDHHmmss`, UTC).
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// A computed request signature together with the timestamp it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub signature: String,
    pub timestamp: String,
}

/// Format a point in time as a Hi-Rez timestamp.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Current UTC time as a Hi-Rez timestamp.
pub fn utc_timestamp() -> String {
    format_timestamp(Utc::now())
}

/// Generate the signature for an API call.
///
/// Format: md5(dev_id + lowercase(method) + auth_key + timestamp), hex encoded.
/// When `timestamp` is `None` the current UTC time is used.
pub fn create_signature(
    dev_id: &str,
    method: &str,
    auth_key: &str,
    timestamp: Option<&str>,
) -> Signature {
    let timestamp = timestamp.map_or_else(utc_timestamp, str::to_string);

    let mut hasher = Md5::new();
    hasher.update(dev_id.as_bytes());
    hasher.update(method.to_lowercase().as_bytes());
    hasher.update(auth_key.as_bytes());
    hasher.update(timestamp.as_bytes());

    Signature {
        signature: format!("{:x}", hasher.finalize()),
        timestamp,
    }
}
