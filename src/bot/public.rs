//! Channel command parser.
//!
//! Commands are recognized only when they start with the configured prefix
//! (default `c!`) so ordinary conversation never triggers the bot. The command
//! word is case-insensitive; arguments are passed through as typed.
//!
//! | Text | Command |
//! |------|---------|
//! | `c!start [mode] [#channel]` | [BotCommand::Start] |
//! | `c!stop [#channel]` | [BotCommand::Stop] |
//! | `c!s <text>`, `c!submit <text>` | [BotCommand::Submit] |
//! | `c!sp`, `c!space` | [BotCommand::Space] |
//! | `c!status` | [BotCommand::Status] |
//! | `c!help` | [BotCommand::Help] |
use log::trace;

use crate::logutil::escape_log;

#[derive(Debug, PartialEq, Eq)]
pub enum BotCommand {
    Start {
        mode: Option<String>,
        channel: Option<String>,
    },
    Stop {
        channel: Option<String>,
    },
    Submit(String),
    Space,
    Status,
    Help,
    Unknown,
    Invalid(String),
}

pub struct BotCommandParser {
    prefix: String,
}

impl BotCommandParser {
    pub fn new() -> Self {
        Self::with_prefix("c!")
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn parse(&self, raw: &str) -> BotCommand {
        let trimmed = raw.trim();
        let body = match strip_prefix_ignore_case(trimmed, &self.prefix) {
            Some(body) => body,
            None => return BotCommand::Unknown,
        };
        let (word, args) = match body.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (body, ""),
        };
        let command = match word.to_ascii_lowercase().as_str() {
            "start" => {
                let mut tokens = args.split_whitespace();
                let mut mode = None;
                let mut channel = None;
                if let Some(first) = tokens.next() {
                    if is_channel_ref(first) {
                        channel = Some(first.to_string());
                    } else {
                        mode = Some(first.to_string());
                        channel = tokens.next().map(str::to_string);
                    }
                }
                match channel {
                    Some(c) if !is_channel_ref(&c) => {
                        BotCommand::Invalid(format!("Not a channel: {}", c))
                    }
                    _ => BotCommand::Start { mode, channel },
                }
            }
            "stop" => match args.split_whitespace().next() {
                Some(c) if !is_channel_ref(c) => {
                    BotCommand::Invalid(format!("Not a channel: {}", c))
                }
                c => BotCommand::Stop {
                    channel: c.map(str::to_string),
                },
            },
            "s" | "submit" => {
                if args.is_empty() {
                    BotCommand::Invalid("Submission required".into())
                } else {
                    BotCommand::Submit(args.to_string())
                }
            }
            "sp" | "space" => BotCommand::Space,
            "status" => BotCommand::Status,
            "help" | "?" => BotCommand::Help,
            _ => BotCommand::Unknown,
        };
        trace!("Parsed {:?} from '{}'", command, escape_log(raw));
        command
    }
}

impl Default for BotCommandParser {
    fn default() -> Self {
        Self::new()
    }
}

/// `#name` with a non-empty name.
pub fn is_channel_ref(token: &str) -> bool {
    token.len() > 1 && token.starts_with('#')
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        text.get(prefix.len()..)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_prefix() {
        let parser = BotCommandParser::new();
        assert_eq!(parser.parse("start"), BotCommand::Unknown);
        assert_eq!(parser.parse("hello c!start"), BotCommand::Unknown);
        assert_eq!(parser.parse("C!STATUS"), BotCommand::Status);
    }

    #[test]
    fn start_arguments() {
        let parser = BotCommandParser::new();
        assert_eq!(
            parser.parse("c!start"),
            BotCommand::Start {
                mode: None,
                channel: None
            }
        );
        assert_eq!(
            parser.parse("c!start word #games"),
            BotCommand::Start {
                mode: Some("word".into()),
                channel: Some("#games".into())
            }
        );
        assert_eq!(
            parser.parse("c!start #games"),
            BotCommand::Start {
                mode: None,
                channel: Some("#games".into())
            }
        );
        assert!(matches!(
            parser.parse("c!start word games"),
            BotCommand::Invalid(_)
        ));
    }

    #[test]
    fn submit_keeps_argument_text() {
        let parser = BotCommandParser::new();
        assert_eq!(parser.parse("c!s Dog"), BotCommand::Submit("Dog".into()));
        assert_eq!(
            parser.parse("c!submit  two words "),
            BotCommand::Submit("two words".into())
        );
        assert!(matches!(parser.parse("c!s"), BotCommand::Invalid(_)));
        assert!(matches!(parser.parse("c!s   "), BotCommand::Invalid(_)));
    }

    #[test]
    fn stop_with_and_without_channel() {
        let parser = BotCommandParser::new();
        assert_eq!(parser.parse("c!stop"), BotCommand::Stop { channel: None });
        assert_eq!(
            parser.parse("c!stop #games"),
            BotCommand::Stop {
                channel: Some("#games".into())
            }
        );
        assert!(matches!(parser.parse("c!stop games"), BotCommand::Invalid(_)));
    }

    #[test]
    fn space_aliases_and_unknown_words() {
        let parser = BotCommandParser::new();
        assert_eq!(parser.parse("c!sp"), BotCommand::Space);
        assert_eq!(parser.parse("c!SPACE"), BotCommand::Space);
        assert_eq!(parser.parse("c!help"), BotCommand::Help);
        assert_eq!(parser.parse("c!spaces"), BotCommand::Unknown);
        assert_eq!(parser.parse("c!"), BotCommand::Unknown);
    }

    #[test]
    fn custom_prefix() {
        let parser = BotCommandParser::with_prefix("!");
        assert_eq!(parser.parse("!status"), BotCommand::Status);
        assert_eq!(parser.parse("c!status"), BotCommand::Unknown);
    }

    #[test]
    fn multibyte_text_does_not_panic() {
        let parser = BotCommandParser::new();
        assert_eq!(parser.parse("é"), BotCommand::Unknown);
        assert_eq!(parser.parse("→!status"), BotCommand::Unknown);
    }
}
