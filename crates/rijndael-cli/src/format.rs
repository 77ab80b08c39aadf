//! Text renderings of byte strings for terminal input and output.

use anyhow::{bail, Context, Result};

/// How ciphertext and plaintext bytes are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Space-separated uppercase hex pairs: `69 C4 E0`.
    HexBytes,
    /// Quoted escaped string: `"\x69\xC4\xE0"`.
    CString,
}

impl OutputFormat {
    /// Renders `bytes` in this format.
    pub fn render(self, bytes: &[u8]) -> String {
        match self {
            Self::HexBytes => bytes
                .iter()
                .map(|b| format!("{b:02X}"))
                .collect::<Vec<_>>()
                .join(" "),
            Self::CString => {
                let mut out = String::with_capacity(bytes.len() * 4 + 2);
                out.push('"');
                for b in bytes {
                    out.push_str(&format!("\\x{b:02X}"));
                }
                out.push('"');
                out
            }
        }
    }
}

/// Parses bytes written in either [`OutputFormat`] (or as plain hex).
pub fn parse_bytes(text: &str) -> Result<Vec<u8>> {
    let trimmed = text.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed);
    let digits: String = unquoted
        .replace("\\x", "")
        .replace("\\X", "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if digits.is_empty() {
        bail!("no hex bytes in input");
    }
    hex::decode(&digits).with_context(|| format!("decode hex bytes from {trimmed:?}"))
}
