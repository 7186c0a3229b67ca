use std::fmt;

use mongodb::bson::{doc, Bson, Document};

/// A named privilege on one database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGrant {
    pub role: String,
    pub db: String,
}

impl RoleGrant {
    pub fn on(role: &str, db: &str) -> Self {
        RoleGrant {
            role: role.to_string(),
            db: db.to_string(),
        }
    }

    pub fn to_bson(&self) -> Bson {
        Bson::Document(doc! { "role": &self.role, "db": &self.db })
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct AccountSpec {
    pub username: String,
    pub password: String,
    pub roles: Vec<RoleGrant>,
}

impl AccountSpec {
    pub fn new(username: &str, password: &str, roles: Vec<RoleGrant>) -> Self {
        AccountSpec {
            username: username.to_string(),
            password: password.to_string(),
            roles,
        }
    }

    /// `createUser` command document, run against the admin database.
    pub fn create_user_command(&self) -> Document {
        let roles: Vec<Bson> = self.roles.iter().map(RoleGrant::to_bson).collect();
        doc! {
            "createUser": &self.username,
            "pwd": &self.password,
            "roles": roles,
        }
    }
}

impl fmt::Debug for AccountSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountSpec")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("roles", &self.roles)
            .finish()
    }
}
