//! Process bootstrap shared by Heartbeat binaries

pub mod bootstrap;
pub mod signal;
