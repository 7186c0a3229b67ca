use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Printed when the operator account already exists and nothing was done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub status: &'static str,
    pub user: String,
    pub database: String,
    pub message: String,
    pub checked_at: String,
}

impl Notice {
    pub fn already_configured(user: &str, database: &str) -> Self {
        Notice {
            status: "already_configured",
            user: user.to_string(),
            database: database.to_string(),
            message: format!("user {user} already exists in {database}, nothing to do"),
            checked_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}
