//! Configuration module
//!
//! Credentials are read once from the environment at startup and passed by
//! value into the agent. There is no ambient settings lookup anywhere else
//! in the crate.

mod credentials;

pub use credentials::{ConfigError, Credentials};
