use chrono::{DateTime, TimeZone, Utc};
use reqwest::header::HeaderMap;

/// Rate-limit budget reported by the GitHub API on every response.
///
/// Only observed and logged; requests never wait on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    pub remaining: u32,
    pub reset_at: Option<DateTime<Utc>>,
}

impl RateLimitInfo {
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let remaining = headers
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())?;

        let reset_at = headers
            .get("x-ratelimit-reset")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<i64>().ok())
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single());

        Some(Self { remaining, reset_at })
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}
