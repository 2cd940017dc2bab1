use serde::{Deserialize, Serialize};

/// Response of `GET /` — the backend's greeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootInfo {
    #[serde(default)]
    pub message: Option<String>,
}

impl RootInfo {
    /// The greeting, or an empty string when the backend sent none.
    pub fn message_or_empty(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }
}

/// Response of `GET /api/health`. A live backend answers
/// `{"status": "healthy", "database": "connected"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthInfo {
    pub status: String,
    pub database: String,
}

impl HealthInfo {
    /// Human-readable one-liner shown in the status panel.
    pub fn summary(&self) -> String {
        format!("{} - {}", self.status, self.database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_joins_status_and_database() {
        let health = HealthInfo {
            status: "ok".to_string(),
            database: "up".to_string(),
        };
        assert_eq!(health.summary(), "ok - up");
    }

    #[test]
    fn root_message_defaults_to_empty() {
        let info: RootInfo = serde_json::from_str("{}").unwrap();
        assert_eq!(info.message_or_empty(), "");

        let info: RootInfo =
            serde_json::from_str(r#"{"message":"Hello from the backend"}"#).unwrap();
        assert_eq!(info.message_or_empty(), "Hello from the backend");
    }
}
