use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// local wall clock, microsecond precision, no offset
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimeIpResponse {
    pub timestamp: String,
    pub ip: String
}

impl TimeIpResponse {

    pub fn new(now: NaiveDateTime, ip: impl Into<String>) -> Self {

        TimeIpResponse {
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
            ip: ip.into()
        }

    }

}
