//! File-backed adapters for the etcd proxy agent.
//!
//! Everything here persists to or reads from plain files under the agent's
//! state directory. OS command adapters live in `ep-platform`.

pub mod artifact_dir;
mod json_file;
pub mod config_store;
pub mod peer_relation;
pub mod provisioning_state;

pub use artifact_dir::DirectoryArtifactSource;
pub use config_store::{FileConfigStore, DEFAULT_APPLIED_CONFIG_FILE};
pub use peer_relation::JsonPeerRelation;
pub use provisioning_state::{FileProvisioningStateRepository, DEFAULT_STATE_FILE};
