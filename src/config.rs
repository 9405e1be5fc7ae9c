use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u32,
    pub support_email: String,
    pub environment: String,
    pub enable_logging: bool,
    pub telegram_script_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            request_timeout_ms: 10_000,
            support_email: "support@example.com".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            telegram_script_url: "https://telegram.org/js/telegram-web-app.js".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    /// (build.rs las inyecta desde `.env`)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_URL")
                .map(|s| s.to_string())
                .unwrap_or(defaults.api_base_url),
            request_timeout_ms: option_env!("API_TIMEOUT_MS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.request_timeout_ms),
            support_email: option_env!("SUPPORT_EMAIL")
                .map(|s| s.to_string())
                .unwrap_or(defaults.support_email),
            environment: option_env!("ENVIRONMENT")
                .map(|s| s.to_string())
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.enable_logging),
            telegram_script_url: option_env!("TELEGRAM_SCRIPT_URL")
                .map(|s| s.to_string())
                .unwrap_or(defaults.telegram_script_url),
        }
    }

    /// URL base sin `/` final
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel de log para wasm_logger
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            log::Level::Warn
        } else if self.is_production() {
            log::Level::Info
        } else {
            log::Level::Debug
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trims_slash() {
        let config = AppConfig {
            api_base_url: "https://api.example.com/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.api_base_url(), "https://api.example.com");
    }

    #[test]
    fn test_log_level_follows_flag() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.environment = "production".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
        config.enable_logging = false;
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
