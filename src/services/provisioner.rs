use crate::{
    error::DbError,
    models::{AccountSpec, LogStoreSpec},
};

/// The database calls the bootstrap needs. Every database is named
/// explicitly, nothing relies on a "current" database.
#[allow(async_fn_in_trait)]
pub trait Provisioner {
    async fn count_users(&self, admin_db: &str, username: &str) -> Result<u64, DbError>;

    async fn create_user(&self, admin_db: &str, account: &AccountSpec) -> Result<(), DbError>;

    async fn create_collection(&self, db: &str, collection: &str) -> Result<(), DbError>;

    /// Returns the name of the created index.
    async fn create_index(&self, store: &LogStoreSpec) -> Result<String, DbError>;

    async fn collection_exists(&self, db: &str, collection: &str) -> Result<bool, DbError>;

    async fn index_names(&self, db: &str, collection: &str) -> Result<Vec<String>, DbError>;
}
