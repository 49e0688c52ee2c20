mod load;
mod types;

pub use load::{apply_env_overrides, default_config_path, load, load_default, load_from};
pub use types::*;
