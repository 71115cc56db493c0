use http::Method;

use crate::reply::Reply;
use crate::utils::config::Settings;
use crate::utils::errors::{AppError, Result};

pub fn health_check(settings: &Settings, method: &Method) -> Result<Reply> {
    if *method != Method::GET {
        return Err(AppError::MethodNotAllowed);
    }
    Ok(Reply::text(200, format!("OK from {}", settings.app_name)))
}
