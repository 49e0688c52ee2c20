use encoding_rs::{Encoding, UTF_8};

/// Env var naming an encoding label (`latin1`, `utf-16le`, ...) that adb
/// output is read in instead of UTF-8.
pub const OUTPUT_ENCODING_ENV: &str = "REPLICANT_OUTPUT_ENCODING";

/// Character set captured adb stdout is read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputEncoding(&'static Encoding);

impl Default for OutputEncoding {
    fn default() -> Self {
        Self(UTF_8)
    }
}

impl OutputEncoding {
    /// `None` when `encoding_rs` does not know the label.
    pub fn from_label(label: &str) -> Option<Self> {
        Encoding::for_label(label.trim().as_bytes()).map(Self)
    }

    /// The [`OUTPUT_ENCODING_ENV`] override, or UTF-8.
    pub fn from_env() -> Self {
        let Ok(label) = std::env::var(OUTPUT_ENCODING_ENV) else {
            return Self::default();
        };
        Self::from_label(&label).unwrap_or_else(|| {
            tracing::warn!(target: "replicant.adb", %label, "unknown output encoding, reading UTF-8");
            Self::default()
        })
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Malformed sequences become U+FFFD rather than failing the command.
    pub fn decode(&self, bytes: &[u8]) -> String {
        if self.0 == UTF_8 {
            return String::from_utf8_lossy(bytes).into_owned();
        }
        let (text, had_errors) = self.0.decode_without_bom_handling(bytes);
        if had_errors {
            tracing::debug!(target: "replicant.adb", encoding = self.name(), "replaced malformed output bytes");
        }
        text.into_owned()
    }
}
