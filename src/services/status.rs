use serde::Serialize;

use crate::error::{at, BootstrapError, Step};

use super::{plan::BootstrapPlan, provisioner::Provisioner};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountStatus {
    pub username: String,
    pub present: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub accounts: Vec<AccountStatus>,
    pub collection: String,
    pub collection_present: bool,
    pub index: String,
    pub index_present: bool,
}

impl StatusReport {
    /// Human-readable list of everything the plan expects but is missing.
    pub fn gaps(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .accounts
            .iter()
            .filter(|a| !a.present)
            .map(|a| format!("user {}", a.username))
            .collect();

        if !self.collection_present {
            out.push(format!("collection {}", self.collection));
        }
        if !self.index_present {
            out.push(format!("index {} on {}", self.index, self.collection));
        }
        out
    }

    pub fn is_complete(&self) -> bool {
        self.gaps().is_empty()
    }
}

/// Read-only look at what the bootstrap would have created. Never repairs.
pub async fn inspect<P: Provisioner>(
    provisioner: &P,
    plan: &BootstrapPlan,
) -> Result<StatusReport, BootstrapError> {
    let mut accounts = Vec::with_capacity(plan.accounts.len());
    for account in &plan.accounts {
        let n = provisioner
            .count_users(&plan.admin_db, &account.username)
            .await
            .map_err(at(Step::CountUsers(account.username.clone())))?;
        accounts.push(AccountStatus {
            username: account.username.clone(),
            present: n > 0,
        });
    }

    let store = &plan.log_store;
    let collection_present = provisioner
        .collection_exists(&store.database, &store.collection)
        .await
        .map_err(at(Step::Inspect(store.namespace())))?;

    let index_present = if collection_present {
        provisioner
            .index_names(&store.database, &store.collection)
            .await
            .map_err(at(Step::Inspect(store.namespace())))?
            .iter()
            .any(|name| *name == store.index_name())
    } else {
        false
    };

    let report = StatusReport {
        accounts,
        collection: store.namespace(),
        collection_present,
        index: store.index_name(),
        index_present,
    };

    for gap in report.gaps() {
        tracing::warn!("missing {}", gap);
    }

    Ok(report)
}
