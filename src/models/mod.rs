pub mod account;
pub mod log_store;
pub mod notice;

pub use account::{AccountSpec, RoleGrant};
pub use log_store::{LogStoreSpec, SortDirection};
pub use notice::Notice;
