use crate::console_warn;

/// Configuration for the authentication front end.
///
/// Values are compiled-in: the client is served from the same origin as the
/// API it talks to, so there is nothing to discover at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthConfig {
    pub api: ApiConfig,
    pub timing: TimingConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Root under which the authentication endpoints live.
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimingConfig {
    /// How long the success message stays visible before the modal closes
    /// and the page redirects.
    pub redirect_delay_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "/schoolApp/api".to_string(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            redirect_delay_ms: 1000,
        }
    }
}

impl AuthConfig {
    pub fn new() -> Self {
        Self {
            api: ApiConfig::default(),
            timing: TimingConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timing.redirect_delay_ms == 0 {
            return Err("redirect_delay_ms must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::new()
    }
}

use std::sync::OnceLock;

static GLOBAL_CONFIG: OnceLock<AuthConfig> = OnceLock::new();

/// Get the global configuration, initialized with compiled-in defaults
pub fn get_auth_config() -> AuthConfig {
    GLOBAL_CONFIG
        .get_or_init(|| {
            let config = AuthConfig::new();
            if let Err(e) = config.validate() {
                console_warn!("Invalid configuration: {}", e);
                AuthConfig::new()
            } else {
                config
            }
        })
        .clone()
}
