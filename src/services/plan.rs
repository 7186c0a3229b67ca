use crate::{
    config::Settings,
    models::{AccountSpec, LogStoreSpec, RoleGrant, SortDirection},
};

/// Holds every user document and defines the `root` and `dbOwner` grants
/// used below.
pub const ADMIN_DB: &str = "admin";

pub const OPERATOR_USER: &str = "root";
pub const ADMINISTRATOR_USER: &str = "admin";
pub const LOGGER_USER: &str = "logger";

/// Everything the bootstrap creates, in creation order.
#[derive(Debug, Clone)]
pub struct BootstrapPlan {
    pub admin_db: String,
    /// Operator first: its presence means the bootstrap already ran.
    pub accounts: Vec<AccountSpec>,
    pub log_store: LogStoreSpec,
}

impl BootstrapPlan {
    pub fn from_settings(settings: &Settings) -> Self {
        let pw = settings.password.as_str();

        let accounts = vec![
            AccountSpec::new(OPERATOR_USER, pw, vec![RoleGrant::on("root", ADMIN_DB)]),
            AccountSpec::new(ADMINISTRATOR_USER, pw, vec![RoleGrant::on("dbOwner", ADMIN_DB)]),
            AccountSpec::new(LOGGER_USER, pw, vec![RoleGrant::on("readWrite", &settings.log_db)]),
        ];

        BootstrapPlan {
            admin_db: ADMIN_DB.to_string(),
            accounts,
            log_store: LogStoreSpec {
                database: settings.log_db.clone(),
                collection: settings.log_collection.clone(),
                index_field: settings.index_field.clone(),
                direction: SortDirection::Descending,
            },
        }
    }

    pub fn sentinel(&self) -> &AccountSpec {
        &self.accounts[0]
    }
}
