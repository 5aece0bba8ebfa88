use newscheck_common::error::{NewscheckError, NewscheckResult};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub model_dir: PathBuf,
    pub log_level: String,
    pub debug: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present, then reads vars with defaults.
    pub fn from_env() -> NewscheckResult<Self> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        Ok(Self {
            host: get_var_or("HOST", "0.0.0.0"),
            port: get_var_or("PORT", "5000")
                .parse()
                .map_err(|e| NewscheckError::Config(format!("invalid PORT: {e}")))?,
            model_dir: PathBuf::from(get_var_or("MODEL_DIR", "models")),
            log_level: get_var_or("LOG_LEVEL", "info"),
            debug: parse_bool(&get_var_or("DEBUG", "false"))?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_bool(value: &str) -> NewscheckResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(NewscheckError::Config(format!(
            "invalid boolean value: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn config_from_env_uses_defaults() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        for key in ["HOST", "PORT", "MODEL_DIR", "LOG_LEVEL", "DEBUG"] {
            env::remove_var(key);
        }

        let cfg = AppConfig::from_env().expect("should parse config");
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 5000);
        assert_eq!(cfg.model_dir, PathBuf::from("models"));
        assert_eq!(cfg.log_level, "info");
        assert!(!cfg.debug);
    }

    #[test]
    fn config_from_env_reads_overrides() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        env::set_var("HOST", "127.0.0.1");
        env::set_var("PORT", "8123");
        env::set_var("MODEL_DIR", "/opt/models");
        env::set_var("DEBUG", "true");

        let cfg = AppConfig::from_env().expect("should parse config");
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 8123);
        assert_eq!(cfg.model_dir, PathBuf::from("/opt/models"));
        assert!(cfg.debug);

        for key in ["HOST", "PORT", "MODEL_DIR", "DEBUG"] {
            env::remove_var(key);
        }
    }

    #[test]
    fn config_from_env_rejects_bad_port() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        env::set_var("PORT", "not-a-port");
        let result = AppConfig::from_env();
        assert!(result.is_err());
        env::remove_var("PORT");
    }

    #[test]
    fn bind_addr_formats_correctly() {
        let cfg = AppConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
            model_dir: PathBuf::from("models"),
            log_level: "debug".to_owned(),
            debug: false,
        };
        assert_eq!(cfg.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(parse_bool("1").unwrap());
        assert!(!parse_bool("no").unwrap());
        assert!(parse_bool("maybe").is_err());
    }
}
