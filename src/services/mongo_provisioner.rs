use mongodb::{
    bson::{doc, Document},
    Client, IndexModel,
};

use crate::{
    config::Settings,
    error::{BootstrapError, DbError},
    models::{AccountSpec, LogStoreSpec},
};

use super::{plan::ADMIN_DB, provisioner::Provisioner};

/// Every user document lives here, whatever its authentication database.
const USERS_COLLECTION: &str = "system.users";

/// Matches users named `username` whose authentication database is `auth_db`.
fn user_filter(auth_db: &str, username: &str) -> Document {
    doc! { "user": username, "db": auth_db }
}

/// `Provisioner` backed by a live MongoDB deployment.
#[derive(Clone)]
pub struct MongoProvisioner {
    client: Client,
}

impl MongoProvisioner {
    pub fn new(client: Client) -> Self {
        MongoProvisioner { client }
    }

    /// Builds a client and pings the admin database so a bad URI fails here
    /// rather than on the first bootstrap call.
    pub async fn connect(settings: &Settings) -> Result<Self, BootstrapError> {
        let connect_err = |e: mongodb::error::Error| BootstrapError::Connect {
            uri: settings.mongodb_uri.clone(),
            source: e.into(),
        };

        let client = Client::with_uri_str(&settings.mongodb_uri)
            .await
            .map_err(connect_err)?;

        client
            .database(ADMIN_DB)
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(connect_err)?;

        tracing::info!("connected to {}", settings.mongodb_uri);
        Ok(Self::new(client))
    }
}

impl Provisioner for MongoProvisioner {
    async fn count_users(&self, admin_db: &str, username: &str) -> Result<u64, DbError> {
        let users = self
            .client
            .database(ADMIN_DB)
            .collection::<Document>(USERS_COLLECTION);

        Ok(users
            .count_documents(user_filter(admin_db, username), None)
            .await?)
    }

    async fn create_user(&self, admin_db: &str, account: &AccountSpec) -> Result<(), DbError> {
        self.client
            .database(admin_db)
            .run_command(account.create_user_command(), None)
            .await?;
        Ok(())
    }

    async fn create_collection(&self, db: &str, collection: &str) -> Result<(), DbError> {
        self.client
            .database(db)
            .create_collection(collection, None)
            .await?;
        Ok(())
    }

    async fn create_index(&self, store: &LogStoreSpec) -> Result<String, DbError> {
        let col = self
            .client
            .database(&store.database)
            .collection::<Document>(&store.collection);
        let model = IndexModel::builder().keys(store.index_keys()).build();

        let created = col.create_index(model, None).await?;
        Ok(created.index_name)
    }

    async fn collection_exists(&self, db: &str, collection: &str) -> Result<bool, DbError> {
        let names = self
            .client
            .database(db)
            .list_collection_names(doc! { "name": collection })
            .await?;
        Ok(!names.is_empty())
    }

    async fn index_names(&self, db: &str, collection: &str) -> Result<Vec<String>, DbError> {
        let col = self.client.database(db).collection::<Document>(collection);
        Ok(col.list_index_names().await?)
    }
}
