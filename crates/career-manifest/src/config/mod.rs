use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub narration: NarrationConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            narration: NarrationConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Which narrator turns a computed result into free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarratorKind {
    Disabled,
    Template,
    Groq,
    Claude,
}

impl NarratorKind {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "off" | "none" | "disabled" => Ok(Self::Disabled),
            "template" => Ok(Self::Template),
            "groq" => Ok(Self::Groq),
            "claude" | "anthropic" => Ok(Self::Claude),
            other => Err(ConfigError::UnknownNarrator(other.to_string())),
        }
    }

    pub const fn is_generative(self) -> bool {
        matches!(self, Self::Groq | Self::Claude)
    }

    pub const fn default_model(self) -> &'static str {
        match self {
            Self::Groq => "llama3-70b-8192",
            Self::Claude => "claude-3-haiku-20240307",
            Self::Disabled | Self::Template => "",
        }
    }

    pub const fn default_base_url(self) -> &'static str {
        match self {
            Self::Groq => "https://api.groq.com/openai",
            Self::Claude => "https://api.anthropic.com",
            Self::Disabled | Self::Template => "",
        }
    }
}

/// Optional free-text narration layered on top of the deterministic result.
#[derive(Debug, Clone)]
pub struct NarrationConfig {
    pub kind: NarratorKind,
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl NarrationConfig {
    pub fn disabled() -> Self {
        Self {
            kind: NarratorKind::Disabled,
            api_key: None,
            model: String::new(),
            base_url: String::new(),
            timeout: Duration::from_secs(30),
        }
    }

    fn from_env() -> Result<Self, ConfigError> {
        let kind = NarratorKind::parse(&env::var("LLM_PROVIDER").unwrap_or_default())?;

        let api_key = env::var("LLM_API_KEY")
            .ok()
            .filter(|value| !value.trim().is_empty());
        if kind.is_generative() && api_key.is_none() {
            return Err(ConfigError::MissingApiKey);
        }

        let model = env::var("LLM_MODEL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| kind.default_model().to_string());
        let base_url = env::var("LLM_BASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| kind.default_base_url().to_string());

        let timeout_secs = env::var("LLM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidTimeout)?;

        Ok(Self {
            kind,
            api_key,
            model,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    UnknownNarrator(String),
    MissingApiKey,
    InvalidTimeout,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::UnknownNarrator(value) => write!(
                f,
                "LLM_PROVIDER '{}' is not one of off, template, groq, claude",
                value
            ),
            ConfigError::MissingApiKey => {
                write!(f, "LLM_API_KEY is required when LLM_PROVIDER selects a model")
            }
            ConfigError::InvalidTimeout => {
                write!(f, "LLM_TIMEOUT_SECS must be a whole number of seconds")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::UnknownNarrator(_)
            | ConfigError::MissingApiKey
            | ConfigError::InvalidTimeout => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "LLM_PROVIDER",
            "LLM_API_KEY",
            "LLM_MODEL",
            "LLM_BASE_URL",
            "LLM_TIMEOUT_SECS",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.narration.kind, NarratorKind::Disabled);
        assert_eq!(config.narration.timeout, Duration::from_secs(30));
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
    }

    #[test]
    fn generative_narrator_requires_api_key() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("LLM_PROVIDER", "groq");
        assert!(matches!(AppConfig::load(), Err(ConfigError::MissingApiKey)));

        env::set_var("LLM_API_KEY", "secret");
        let config = AppConfig::load().expect("config loads with key");
        assert_eq!(config.narration.kind, NarratorKind::Groq);
        assert_eq!(config.narration.model, "llama3-70b-8192");
        assert_eq!(config.narration.base_url, "https://api.groq.com/openai");
        reset_env();
    }

    #[test]
    fn rejects_unknown_narrator_and_bad_timeout() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("LLM_PROVIDER", "oracle");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::UnknownNarrator(value)) if value == "oracle"
        ));

        env::set_var("LLM_PROVIDER", "template");
        env::set_var("LLM_TIMEOUT_SECS", "soon");
        assert!(matches!(AppConfig::load(), Err(ConfigError::InvalidTimeout)));
        reset_env();
    }
}
