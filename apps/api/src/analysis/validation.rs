//! Request-level JD checks, applied by the HTTP layer before the engine runs.
//!
//! - Blank JD: rejected.
//! - JD shorter than the configured threshold: rejected until the caller
//!   acknowledges the warning (`acknowledge_short_jd: true`).

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const EMPTY_JD_MESSAGE: &str = "Please paste a job description to proceed.";
pub const SHORT_JD_MESSAGE: &str =
    "This JD is too short to analyze deeply. Paste the full JD for better output, or resend with acknowledge_short_jd to proceed anyway.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JdQuality {
    Full,
    /// Below the threshold but explicitly acknowledged.
    Short,
}

pub fn validate_jd(
    jd_text: &str,
    acknowledge_short: bool,
    short_threshold: usize,
) -> Result<JdQuality, AppError> {
    if jd_text.trim().is_empty() {
        return Err(AppError::Validation(EMPTY_JD_MESSAGE.to_string()));
    }
    if jd_text.chars().count() < short_threshold {
        if acknowledge_short {
            return Ok(JdQuality::Short);
        }
        return Err(AppError::UnprocessableEntity(SHORT_JD_MESSAGE.to_string()));
    }
    Ok(JdQuality::Full)
}
