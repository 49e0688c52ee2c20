pub mod api;
pub mod command;
pub mod config;
pub mod error;
pub mod executor;
pub mod input;
pub mod registry;
pub mod session;

pub use registry::Registry;
pub use session::Session;
