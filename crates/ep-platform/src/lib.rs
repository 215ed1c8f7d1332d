//! # ep-platform
//!
//! Operating system implementations of the etcd proxy agent's ports.
//!
//! Everything that shells out goes through [`runner::CommandRunner`] so the
//! adapters can be tested against a recording runner.

pub mod adapters;
pub mod runner;

#[cfg(any(test, feature = "testing"))]
pub mod recording;

pub use runner::{CommandError, CommandOutput, CommandRunner, CommandSpec, TokioCommandRunner};

#[cfg(any(test, feature = "testing"))]
pub use recording::RecordingRunner;
