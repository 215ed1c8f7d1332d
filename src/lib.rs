//! etcd proxy agent binary support: CLI surface and bootstrap.
//!
//! The reconciliation logic lives in `ep-app`; this crate only assembles it
//! for one lifecycle trigger per invocation.

pub mod bootstrap;
pub mod cli;
