use crate::utils::errors::{AppError, Result};

const DEFAULT_APP_NAME: &str = "todos";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub app_name: String,
    /// Base URL of the PostgREST endpoint (e.g. `https://xyz.supabase.co`).
    pub db_api_url: String,
    pub db_api_key: String,
    pub log_level: log::LevelFilter,
}

impl Settings {
    /// Build settings from any key lookup (Worker vars, secrets, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| AppError::Config(format!("{} is not set", key)))
        };
        let db_api_url = required("DB_API_URL")?.trim_end_matches('/').to_string();
        let db_api_key = required("DB_API_KEY")?;
        let app_name = lookup("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string());
        let level = lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let log_level = level
            .parse()
            .map_err(|_| AppError::Config(format!("invalid LOG_LEVEL: {}", level)))?;

        Ok(Self {
            app_name,
            db_api_url,
            db_api_key,
            log_level,
        })
    }

    /// Settings for running without a remote database (tests, local runs).
    pub fn local(app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            db_api_url: String::new(),
            db_api_key: String::new(),
            log_level: log::LevelFilter::Info,
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env(env: &worker::Env) -> Result<Self> {
        Self::from_lookup(|key| {
            env.var(key)
                .or_else(|_| env.secret(key))
                .map(|v| v.to_string())
                .ok()
        })
    }
}
