pub mod commands;
pub mod executor;
pub mod factory;
