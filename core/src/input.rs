/// Marks a line as a registered command (`!package com.example`) instead of
/// text forwarded to adb.
pub const SENTINEL: char = '!';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedInput {
    Custom { name: String, args: Vec<String> },
    /// The whole trimmed line, unsplit.
    PassThrough(String),
}

impl ParsedInput {
    pub fn is_custom(&self) -> bool {
        matches!(self, ParsedInput::Custom { .. })
    }
}

/// Splits a raw REPL line.
///
/// Returns `None` for blank lines and for a sentinel with no command token.
/// Custom command names are lowercased so `!LIST` and `!list` resolve alike.
pub fn parse_line(raw: &str) -> Option<ParsedInput> {
    let line = raw.trim();
    if line.is_empty() {
        return None;
    }

    let Some(rest) = line.strip_prefix(SENTINEL) else {
        return Some(ParsedInput::PassThrough(line.to_string()));
    };

    let mut parts = rest.split_whitespace();
    let name = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some(ParsedInput::Custom { name, args })
}
