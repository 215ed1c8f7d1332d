//! Port interfaces for the application layer
//!
//! Ports define the contract between the reconciliation use cases and the
//! host they run on. This follows Hexagonal Architecture principles: the
//! provisioning logic never talks to the package manager, the service
//! supervisor or the filesystem directly.
//!
//! ## Port Placement Guidelines
//!
//! A port belongs here when it is a host capability used by at least one
//! use case and implemented by the infrastructure or platform layer.

pub mod artifact_source;
pub mod config_store;
pub mod filesystem;
pub mod firewall;
pub mod host_facts;
pub mod package_manager;
pub mod peer_relation;
pub mod provisioning_state;
pub mod service_manager;
pub mod status;
pub mod user_account;

pub use artifact_source::{Artifact, ArtifactLookup, ArtifactSourceError, ArtifactSourcePort};
pub use config_store::ConfigStorePort;
pub use filesystem::HostFilesystemPort;
pub use firewall::FirewallPort;
pub use host_facts::HostFactsPort;
pub use package_manager::PackageManagerPort;
pub use peer_relation::PeerRelationPort;
pub use provisioning_state::ProvisioningStatePort;
pub use service_manager::ServiceManagerPort;
pub use status::StatusPort;
pub use user_account::UserAccountPort;
