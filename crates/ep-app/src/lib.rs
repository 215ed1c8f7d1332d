//! etcd proxy agent application layer
//!
//! This crate contains the provisioning use cases, the reconciliation
//! controller that sequences them, and the lifecycle trigger dispatcher.

pub mod deps;
pub mod dispatcher;
pub mod usecases;

#[cfg(test)]
mod mocks;

pub use deps::AgentDeps;
pub use dispatcher::{DispatchError, Handler, TriggerDispatcher, TriggerReport};
pub use usecases::{
    BlockReason, ConfigureError, ConfigureOutcome, InstallError, InstallOutcome,
    ReconciliationController, SkipReason,
};
