//! Helpers for putting chat text into log records.
//!
//! Submissions come straight from users, so they can contain newlines or
//! control characters that would split or garble a log line. Everything user
//! supplied goes through [escape_log] before it is logged.

use std::fmt::Write;

/// Longest chat text preview kept in a log record, in characters.
pub const MAX_PREVIEW: usize = 120;

/// Escape `s` for single-line logging, truncated to [MAX_PREVIEW] characters.
///
/// - `\n`, `\r`, `\t` and backslash are written as their escape sequences
/// - other control characters become `\xNN`
/// - longer input ends with `…`
pub fn escape_log(s: &str) -> String {
    escape_log_with_limit(s, MAX_PREVIEW)
}

pub fn escape_log_with_limit(s: &str, max_chars: usize) -> String {
    let mut out = String::with_capacity(s.len().min(max_chars) + 8);
    for (count, ch) in s.chars().enumerate() {
        if count >= max_chars {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(&mut out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_control_characters() {
        assert_eq!(escape_log("c!s a\nc!stop\r\t"), "c!s a\\nc!stop\\r\\t");
        assert_eq!(escape_log("a\\b\u{7}"), "a\\\\b\\x07");
    }

    #[test]
    fn truncates_long_submissions() {
        let long = "z".repeat(MAX_PREVIEW + 10);
        let escaped = escape_log(&long);
        assert_eq!(escaped.chars().count(), MAX_PREVIEW + 1);
        assert!(escaped.ends_with('…'));
        assert_eq!(escape_log_with_limit("abcdef", 3), "abc…");
    }
}
