use uuid::Uuid;
use worker::*;

use crate::utils::config::Settings;

/// Per-request state handed from the fetch entry point to the store and logger.
#[derive(Clone)]
pub struct AppContext {
    pub env: Env,
    pub settings: Settings,
    pub request_id: String,
    pub start_time: u64,
}

impl AppContext {
    pub fn new(env: Env) -> std::result::Result<Self, crate::utils::errors::AppError> {
        let settings = Settings::from_env(&env)?;
        Ok(Self {
            env,
            settings,
            request_id: Uuid::new_v4().to_string(),
            start_time: Date::now().as_millis() as u64,
        })
    }

    pub fn elapsed_ms(&self) -> u64 {
        (Date::now().as_millis() as u64).saturating_sub(self.start_time)
    }
}
