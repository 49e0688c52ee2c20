mod adb;
mod decode;

pub use adb::AdbExecutor;
pub use decode::{OutputEncoding, OUTPUT_ENCODING_ENV};
