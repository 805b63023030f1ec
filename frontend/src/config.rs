#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub token_key: String,
    pub redirect_delay_ms: u32,
    pub message_dismiss_ms: u32,
    pub min_password_len: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            token_key: "token".to_string(),
            redirect_delay_ms: 1500,
            message_dismiss_ms: 5000,
            min_password_len: 6,
        }
    }
}

impl AppConfig {
    /// Values are fixed at build time; unset or unparseable variables keep the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            token_key: option_env!("TOKEN_STORAGE_KEY")
                .map(str::to_string)
                .unwrap_or(defaults.token_key),
            redirect_delay_ms: option_env!("REDIRECT_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.redirect_delay_ms),
            message_dismiss_ms: option_env!("MESSAGE_DISMISS_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.message_dismiss_ms),
            min_password_len: option_env!("MIN_PASSWORD_LEN")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.min_password_len),
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.token_key, "token");
        assert_eq!(config.redirect_delay_ms, 1500);
        assert_eq!(config.message_dismiss_ms, 5000);
        assert_eq!(config.min_password_len, 6);
    }
}
