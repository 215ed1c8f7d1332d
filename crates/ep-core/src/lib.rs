//! # ep-core
//!
//! Core domain models and port interfaces for the etcd proxy agent.
//!
//! This crate contains pure provisioning logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod host;
pub mod ports;
pub mod provisioning;
pub mod service;
pub mod status;

// Re-export commonly used types at the crate root
pub use config::{AgentConfig, ConfigError, DesiredConfig, ListenPort};
pub use host::{HostFacts, InitVariant};
pub use provisioning::{LifecycleTrigger, ProvisioningState};
pub use service::{ClientCredentials, CredentialPaths, ServiceLayout};
pub use status::{StatusKind, WorkloadStatus};
