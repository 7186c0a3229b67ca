pub mod provisioner;
pub mod mongo_provisioner;
pub mod plan;

pub mod bootstrap;
pub mod status;

pub use bootstrap::{emit_notice, ensure_initial_state, Outcome, ProvisionReport};
pub use mongo_provisioner::MongoProvisioner;
pub use plan::BootstrapPlan;
pub use provisioner::Provisioner;
pub use status::{inspect, StatusReport};
