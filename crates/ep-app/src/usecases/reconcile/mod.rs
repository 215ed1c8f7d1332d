//! Reconciliation controller.
//!
//! Sequences the provisioning use cases against the durable markers so every
//! entry point can be invoked any number of times, in any order.

mod controller;
mod error;
mod outcome;

pub use controller::ReconciliationController;
pub use error::{ConfigureError, InstallError};
pub use outcome::{BlockReason, ConfigureOutcome, InstallOutcome, SkipReason};
