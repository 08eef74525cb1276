//! Liveness probe.

use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Payload returned by the liveness endpoint.
#[derive(Debug, Serialize)]
pub struct LivenessReport<'a> {
    pub status: &'static str,
    pub service: &'a str,
    pub timestamp: String,
}

/// Always-200 liveness answer stamped with the current UTC time.
pub fn report(service: &str) -> Json<LivenessReport<'_>> {
    Json(LivenessReport {
        status: "ok",
        service,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
