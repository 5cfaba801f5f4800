pub mod blueprint;
pub mod commands;
