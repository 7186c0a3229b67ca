#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use userlog_bootstrap::{
    config::Settings,
    error::DbError,
    models::{AccountSpec, LogStoreSpec, RoleGrant},
    services::{BootstrapPlan, Provisioner},
};

#[derive(Debug, Default)]
pub struct FakeState {
    /// (admin db, username) -> roles
    pub users: BTreeMap<(String, String), Vec<RoleGrant>>,
    pub collections: BTreeSet<String>,
    /// namespace -> (index name, keys)
    pub indexes: BTreeMap<String, Vec<(String, String)>>,
    pub creation_calls: Vec<String>,
}

/// A call the fake rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailAt {
    CountUsers,
    CreateUser(String),
    CreateCollection,
    CreateIndex,
}

/// In-memory deployment that mimics the server's duplicate checks.
#[derive(Debug, Default)]
pub struct FakeMongo {
    pub state: Mutex<FakeState>,
    pub fail_at: Option<FailAt>,
}

impl FakeMongo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(fail: FailAt) -> Self {
        FakeMongo {
            fail_at: Some(fail),
            ..Self::default()
        }
    }

    pub fn failing_on_user(username: &str) -> Self {
        Self::failing_at(FailAt::CreateUser(username.to_string()))
    }

    fn fails(&self, call: &FailAt) -> bool {
        self.fail_at.as_ref() == Some(call)
    }

    pub fn with_user(self, admin_db: &str, username: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .users
            .insert((admin_db.to_string(), username.to_string()), Vec::new());
        self
    }

    pub fn creation_calls(&self) -> Vec<String> {
        self.state.lock().unwrap().creation_calls.clone()
    }

    pub fn usernames(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .users
            .keys()
            .map(|(_, u)| u.clone())
            .collect()
    }

    pub fn roles_of(&self, admin_db: &str, username: &str) -> Option<Vec<RoleGrant>> {
        self.state
            .lock()
            .unwrap()
            .users
            .get(&(admin_db.to_string(), username.to_string()))
            .cloned()
    }

    pub fn has_collection(&self, ns: &str) -> bool {
        self.state.lock().unwrap().collections.contains(ns)
    }

    pub fn indexes_of(&self, ns: &str) -> Vec<(String, String)> {
        self.state
            .lock()
            .unwrap()
            .indexes
            .get(ns)
            .cloned()
            .unwrap_or_default()
    }
}

impl Provisioner for FakeMongo {
    async fn count_users(&self, admin_db: &str, username: &str) -> Result<u64, DbError> {
        if self.fails(&FailAt::CountUsers) {
            return Err("connection reset by peer".into());
        }
        let st = self.state.lock().unwrap();
        Ok(st
            .users
            .contains_key(&(admin_db.to_string(), username.to_string())) as u64)
    }

    async fn create_user(&self, admin_db: &str, account: &AccountSpec) -> Result<(), DbError> {
        let mut st = self.state.lock().unwrap();
        st.creation_calls.push(format!("createUser {}", account.username));

        if self.fails(&FailAt::CreateUser(account.username.clone())) {
            return Err("not authorized on admin to execute command".into());
        }
        let key = (admin_db.to_string(), account.username.clone());
        if st.users.contains_key(&key) {
            return Err(format!("User \"{}@{}\" already exists", account.username, admin_db).into());
        }
        st.users.insert(key, account.roles.clone());
        Ok(())
    }

    async fn create_collection(&self, db: &str, collection: &str) -> Result<(), DbError> {
        let mut st = self.state.lock().unwrap();
        let ns = format!("{db}.{collection}");
        st.creation_calls.push(format!("createCollection {ns}"));

        if self.fails(&FailAt::CreateCollection) {
            return Err("not authorized on userlog to execute command".into());
        }
        if !st.collections.insert(ns.clone()) {
            return Err(format!("Collection {ns} already exists.").into());
        }
        // every collection starts with the _id index
        st.indexes
            .insert(ns, vec![("_id_".to_string(), "_id:1".to_string())]);
        Ok(())
    }

    async fn create_index(&self, store: &LogStoreSpec) -> Result<String, DbError> {
        let mut st = self.state.lock().unwrap();
        let ns = store.namespace();
        st.creation_calls.push(format!("createIndex {ns}"));

        if self.fails(&FailAt::CreateIndex) {
            return Err("operation exceeded time limit".into());
        }
        let name = store.index_name();
        let keys = format!("{}:{}", store.index_field, store.direction.as_i32());
        st.collections.insert(ns.clone());
        let entry = st.indexes.entry(ns).or_default();
        if !entry.iter().any(|(n, _)| *n == name) {
            entry.push((name.clone(), keys));
        }
        Ok(name)
    }

    async fn collection_exists(&self, db: &str, collection: &str) -> Result<bool, DbError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .collections
            .contains(&format!("{db}.{collection}")))
    }

    async fn index_names(&self, db: &str, collection: &str) -> Result<Vec<String>, DbError> {
        Ok(self
            .indexes_of(&format!("{db}.{collection}"))
            .into_iter()
            .map(|(n, _)| n)
            .collect())
    }
}

pub fn default_plan() -> BootstrapPlan {
    BootstrapPlan::from_settings(&Settings::default())
}
