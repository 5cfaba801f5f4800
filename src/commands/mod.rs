//! CLI command implementations

pub mod common;
pub mod init;
pub mod plan;
pub mod run;
pub mod validate;
