pub mod alias;

pub use alias::{register_aliases, AliasCommand};
