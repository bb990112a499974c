//! Command implementations behind the `gtrav` binary.

pub mod commands;
