//! Input highlighting for the shell.

use std::borrow::Cow;

use crate::command::COMMAND_NAMES;

const RESET: &str = "\x1b[0m";
const KNOWN_COMMAND: &str = "\x1b[1;32m";
const UNKNOWN_COMMAND: &str = "\x1b[31m";
const QUOTED: &str = "\x1b[33m";
const NUMBER: &str = "\x1b[35m";
const FLAG: &str = "\x1b[36m";

/// Colors the command word, quoted names, numbers, and flags.
pub struct CommandHighlighter;

impl CommandHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Highlight a line of input.
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim().is_empty() {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut chars = line.char_indices().peekable();
        let mut seen_command = false;

        while let Some((start, c)) = chars.next() {
            if c.is_whitespace() {
                result.push(c);
                continue;
            }

            if c == '"' {
                result.push_str(QUOTED);
                result.push(c);
                for (_, next) in chars.by_ref() {
                    result.push(next);
                    if next == '"' {
                        break;
                    }
                }
                result.push_str(RESET);
                seen_command = true;
                continue;
            }

            let mut end = start + c.len_utf8();
            while let Some(&(i, next)) = chars.peek() {
                if next.is_whitespace() || next == '"' {
                    break;
                }
                end = i + next.len_utf8();
                chars.next();
            }
            let word = &line[start..end];

            let color = if !seen_command {
                seen_command = true;
                if COMMAND_NAMES.contains(&word.to_ascii_lowercase().as_str()) {
                    KNOWN_COMMAND
                } else {
                    UNKNOWN_COMMAND
                }
            } else if word.chars().all(|ch| ch.is_ascii_digit()) {
                NUMBER
            } else if word.starts_with('-') {
                FLAG
            } else {
                ""
            };

            if color.is_empty() {
                result.push_str(word);
            } else {
                result.push_str(color);
                result.push_str(word);
                result.push_str(RESET);
            }
        }

        Cow::Owned(result)
    }
}

impl Default for CommandHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
