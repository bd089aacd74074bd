//! Text transforms applied to the message before it is embedded in a payload.
//!
//! Messages are serialized with `serde_json`, so line breaks reach the wire
//! as `\n` escapes and double quotes as `\"` without any manual escaping.

pub const CODE_FENCE: &str = "```";

const FROM_MARKER: &str = "```From:";
const PRE_OPEN: &str = "<pre>";
const PRE_CLOSE: &str = "</pre>";

/// Collapses CRLF line endings to LF.
pub fn normalize_line_endings(message: &str) -> String {
    message.replace("\r\n", "\n")
}

/// Removes every code fence marker.
pub fn strip_code_fences(text: &str) -> String {
    text.replace(CODE_FENCE, "")
}

/// Telegram renders fences literally: the fence that precedes the `From:`
/// trailer becomes a line break and all other fences are dropped.
pub fn telegram_text(text: &str) -> String {
    strip_code_fences(&text.replace(FROM_MARKER, "\nFrom:"))
}

/// Teams understands HTML, so the first fenced block becomes `<pre>...</pre>`.
pub fn teams_text(text: &str) -> String {
    text.replacen(CODE_FENCE, PRE_CLOSE, 2).replacen(PRE_CLOSE, PRE_OPEN, 1)
}
