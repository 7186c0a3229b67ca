use std::{env, fmt};

#[derive(Clone)]
pub struct Settings {
    pub mongodb_uri: String,
    pub log_db: String,
    pub log_collection: String,
    pub index_field: String,

    /// Shared by all three bootstrap accounts.
    pub password: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            mongodb_uri: "mongodb://localhost:27017".to_string(),
            log_db: "userlog".to_string(),
            log_collection: "rawlogs".to_string(),
            index_field: "uuid".to_string(),
            password: "Emotibot1".to_string(),
        }
    }
}

// Keep the password out of logs.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("mongodb_uri", &self.mongodb_uri)
            .field("log_db", &self.log_db)
            .field("log_collection", &self.log_collection)
            .field("index_field", &self.index_field)
            .field("password", &"<redacted>")
            .finish()
    }
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    from_lookup(|key| env::var(key).ok())
}

/// Builds settings from any key lookup, falling back to the defaults for
/// missing or empty values.
pub fn from_lookup<F>(lookup: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = Settings::default();
    let get = |key: &str, fallback: String| {
        lookup(key)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(fallback)
    };

    Settings {
        mongodb_uri: get("MONGODB_URI", defaults.mongodb_uri),
        log_db: get("BOOTSTRAP_LOG_DB", defaults.log_db),
        log_collection: get("BOOTSTRAP_LOG_COLLECTION", defaults.log_collection),
        index_field: get("BOOTSTRAP_INDEX_FIELD", defaults.index_field),
        password: get("BOOTSTRAP_PASSWORD", defaults.password),
    }
}
