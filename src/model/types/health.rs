use serde::{Deserialize, Serialize};

/// What `GET /health` reports. Extra fields the server sends are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
}

/// State of the API indicator in the page header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ApiStatus {
    #[default]
    Checking,
    Online(String),
    Offline,
}

impl ApiStatus {
    pub fn label(&self) -> String {
        match self {
            ApiStatus::Checking => "Checking API...".to_string(),
            ApiStatus::Online(status) => format!("API is {}", status),
            ApiStatus::Offline => "API is offline".to_string(),
        }
    }

    pub fn dot_class(&self) -> &'static str {
        match self {
            ApiStatus::Checking => "status-dot checking",
            ApiStatus::Online(_) => "status-dot healthy",
            ApiStatus::Offline => "status-dot",
        }
    }
}
