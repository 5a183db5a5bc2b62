/// Client side settings. The API base can be baked in at build time with
/// `USER_DESK_API_BASE`, otherwise requests go to `/api` on the page origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    /// milliseconds between two background refreshes
    pub refresh_interval: u64,
    /// milliseconds a notification stays on screen
    pub notification_timeout: u32,
}

pub const DEFAULT_API_BASE: &str = "/api";

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("USER_DESK_API_BASE")
                .unwrap_or(DEFAULT_API_BASE)
                .to_string(),
            refresh_interval: 30_000,
            notification_timeout: 3_000,
        }
    }
}
