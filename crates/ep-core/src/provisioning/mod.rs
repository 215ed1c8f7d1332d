//! Provisioning domain module.
//!
//! Durable markers and the lifecycle triggers that drive reconciliation.

mod state;
mod trigger;

pub use state::ProvisioningState;
pub use trigger::{LifecycleTrigger, UnknownTrigger};
