use std::fmt;

use thiserror::Error;

/// Boxed driver (or test double) error.
pub type DbError = Box<dyn std::error::Error + Send + Sync>;

/// The call that was in flight when the bootstrap stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    CountUsers(String),
    CreateUser(String),
    CreateCollection(String),
    CreateIndex(String),
    Inspect(String),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::CountUsers(user) => write!(f, "counting users named {user}"),
            Step::CreateUser(user) => write!(f, "creating user {user}"),
            Step::CreateCollection(ns) => write!(f, "creating collection {ns}"),
            Step::CreateIndex(name) => write!(f, "creating index {name}"),
            Step::Inspect(what) => write!(f, "inspecting {what}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("failed to connect to {uri}: {source}")]
    Connect {
        uri: String,
        #[source]
        source: DbError,
    },

    #[error("{step} failed: {source}")]
    Step {
        step: Step,
        #[source]
        source: DbError,
    },
}

impl BootstrapError {
    pub fn step(&self) -> Option<&Step> {
        match self {
            BootstrapError::Step { step, .. } => Some(step),
            BootstrapError::Connect { .. } => None,
        }
    }
}

/// Attaches the in-flight step to a provisioner error.
pub(crate) fn at(step: Step) -> impl FnOnce(DbError) -> BootstrapError {
    move |source| BootstrapError::Step { step, source }
}
