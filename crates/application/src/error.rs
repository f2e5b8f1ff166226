use thiserror::Error;

/// Application-level errors. Every variant is recovered at the request
/// boundary and rendered as a `success: false` body.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or missing input, reported verbatim to the caller
    #[error("{0}")]
    Validation(String),

    /// Referenced entity or user absent
    #[error("{0}")]
    NotFound(String),

    /// Duplicate username/email, self-follow
    #[error("{0}")]
    Conflict(String),

    /// Missing or invalid session
    #[error("{0}")]
    Authentication(String),

    /// OTP requested again inside the cooldown window
    #[error("Wait for {} for new OTP request", format_wait(*remaining_secs))]
    Cooldown { remaining_secs: u64 },

    /// Operation attempted out of order (e.g. reset before OTP verification)
    #[error("{0}")]
    State(String),

    /// Document store failure
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),

    /// Upload/mail collaborator or other unexpected failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message safe to show the caller. Store and internal failures are
    /// collapsed to a generic line; everything else reports verbatim.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Storage(_) | AppError::Internal(_) => {
                "Something went wrong. Please try again later.".to_string()
            }
            other => other.to_string(),
        }
    }

    /// True for the variants whose details must stay out of responses.
    pub fn is_unexpected(&self) -> bool {
        matches!(self, AppError::Storage(_) | AppError::Internal(_))
    }
}

/// Remaining-wait formatter: "4 mins 59 secs", "1 min", "30 secs".
pub fn format_wait(total_secs: u64) -> String {
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;

    let mut result = String::new();
    if minutes > 0 {
        result.push_str(&format!("{} min{}", minutes, if minutes > 1 { "s" } else { "" }));
    }
    if seconds > 0 {
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(&format!("{} sec{}", seconds, if seconds > 1 { "s" } else { "" }));
    }
    if result.is_empty() {
        result.push_str("0 secs");
    }
    result
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AppError::Authentication(format!("Invalid or expired token: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| "validation failed".to_string())
                    )
                })
            })
            .collect();
        AppError::Validation(messages.join(", "))
    }
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;
