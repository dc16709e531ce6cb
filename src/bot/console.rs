//! Line-oriented console driver.
//!
//! Each input line is one chat message, optionally addressed to a channel:
//!
//! ```text
//! #games c!start word
//! c!s it            ← goes to #games, the last channel named
//! ```
//!
//! Replies are written as `[#channel] text`, one output line per reply line.

use anyhow::Result;
use log::debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::public::is_channel_ref;
use super::{ChatBot, Reply};

/// Channel used until a line names another one.
pub const DEFAULT_CHANNEL: &str = "#general";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleStats {
    pub lines: u64,
    pub replies: u64,
}

/// Split a console line into an optional leading channel and message text.
pub fn split_line(line: &str) -> (Option<&str>, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((head, rest)) if is_channel_ref(head) => (Some(head), rest.trim()),
        None if is_channel_ref(line) => (Some(line), ""),
        _ => (None, line),
    }
}

pub fn format_reply(reply: &Reply) -> String {
    let mut out = String::new();
    for line in reply.text.lines() {
        if line.is_empty() {
            out.push_str(&format!("[{}]\n", reply.channel));
        } else {
            out.push_str(&format!("[{}] {}\n", reply.channel, line));
        }
    }
    out
}

/// Feed every line of `reader` to `bot` until EOF, writing replies to
/// `writer`.
pub async fn run_console<R, W>(bot: &ChatBot, reader: R, mut writer: W) -> Result<ConsoleStats>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut stats = ConsoleStats::default();
    let mut current = DEFAULT_CHANNEL.to_string();
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        stats.lines += 1;
        let (channel, text) = split_line(&line);
        if let Some(channel) = channel {
            current = channel.to_string();
        }
        if text.is_empty() {
            continue;
        }
        for reply in bot.handle_message(&current, text) {
            writer.write_all(format_reply(&reply).as_bytes()).await?;
            stats.replies += 1;
        }
        writer.flush().await?;
    }
    debug!(
        "console input closed: lines={} replies={}",
        stats.lines, stats.replies
    );
    Ok(stats)
}
