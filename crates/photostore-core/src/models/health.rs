//! Health check response.

use serde::Serialize;
use utoipa::ToSchema;

/// Payload for GET /.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    #[serde(rename = "uptime-in-secs")]
    pub uptime_in_secs: u64,
    #[serde(rename = "dbConnection")]
    pub db_connection: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_wire_field_names() {
        let response = HealthResponse {
            status: "running".to_string(),
            uptime_in_secs: 42,
            db_connection: "connected".to_string(),
        };
        let json = serde_json::to_value(&response).expect("serialize");
        assert_eq!(json["uptime-in-secs"], 42);
        assert_eq!(json["dbConnection"], "connected");
    }
}
