//! Provisioning use cases.
//!
//! Each step is its own use case so it can be exercised in isolation;
//! [`ReconciliationController`] decides which of them run on an invocation.

pub mod credential_provisioner;
pub mod package_installer;
pub mod port_reconciler;
pub mod reconcile;
pub mod service_account;
pub mod unit_configurer;

pub use credential_provisioner::ProvisionCredentials;
pub use package_installer::InstallFromPackage;
pub use port_reconciler::{PortChange, ReconcilePorts};
pub use reconcile::{
    BlockReason, ConfigureError, ConfigureOutcome, InstallError, InstallOutcome,
    ReconciliationController, SkipReason,
};
pub use service_account::EnsureServiceAccount;
pub use unit_configurer::{EnsureServiceUnit, UnitOutcome};
