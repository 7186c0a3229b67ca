use std::io::{self, Write};

use crate::{
    error::{at, BootstrapError, Step},
    models::Notice,
};

use super::{plan::BootstrapPlan, provisioner::Provisioner};

/// What was created on a fresh run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionReport {
    pub users: Vec<String>,
    pub collection: String,
    pub index: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Provisioned(ProvisionReport),
    AlreadyConfigured(Notice),
}

/// Creates the accounts, log collection and index unless the operator
/// account already exists.
///
/// Calls run strictly in order and the first failure aborts the run.
/// Nothing that already succeeded is rolled back, and a later run will see
/// the operator account and skip everything, including a log store that
/// was never created.
pub async fn ensure_initial_state<P: Provisioner>(
    provisioner: &P,
    plan: &BootstrapPlan,
) -> Result<Outcome, BootstrapError> {
    let sentinel = plan.sentinel();

    let existing = provisioner
        .count_users(&plan.admin_db, &sentinel.username)
        .await
        .map_err(at(Step::CountUsers(sentinel.username.clone())))?;

    if existing > 0 {
        tracing::warn!(
            "user {} already exists in {}, skipping bootstrap",
            sentinel.username,
            plan.admin_db
        );
        return Ok(Outcome::AlreadyConfigured(Notice::already_configured(
            &sentinel.username,
            &plan.admin_db,
        )));
    }

    let mut users = Vec::with_capacity(plan.accounts.len());
    for account in &plan.accounts {
        provisioner
            .create_user(&plan.admin_db, account)
            .await
            .map_err(at(Step::CreateUser(account.username.clone())))?;
        tracing::info!("created user {} in {}", account.username, plan.admin_db);
        users.push(account.username.clone());
    }

    let store = &plan.log_store;
    provisioner
        .create_collection(&store.database, &store.collection)
        .await
        .map_err(at(Step::CreateCollection(store.namespace())))?;
    tracing::info!("created collection {}", store.namespace());

    let index = provisioner
        .create_index(store)
        .await
        .map_err(at(Step::CreateIndex(store.index_name())))?;
    tracing::info!("created index {} on {}", index, store.namespace());

    Ok(Outcome::Provisioned(ProvisionReport {
        users,
        collection: store.namespace(),
        index,
    }))
}

/// Writes the diagnostic line for the already-configured branch. A fresh
/// run prints nothing.
pub fn emit_notice<W: Write>(outcome: &Outcome, out: &mut W) -> io::Result<()> {
    if let Outcome::AlreadyConfigured(notice) = outcome {
        serde_json::to_writer(&mut *out, notice)?;
        writeln!(out)?;
    }
    Ok(())
}
