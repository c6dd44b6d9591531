//! Command line tokenizing and parsing.

use gameshelf_foundation::{Error, Result};

/// Every command word, for completion and help.
pub const COMMAND_NAMES: &[&str] = &[
    "import",
    "search",
    "lookup",
    "list",
    "count",
    "export",
    "relate",
    "recs",
    "recommendations",
    "undo",
    "history",
    "help",
    "exit",
];

/// How `list` renders the library.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ListMode {
    /// Plain name list, alphabetical.
    Names,
    /// Table, alphabetical.
    Table,
    /// Grouped under initial letters.
    Grouped,
    /// Table, most played first.
    Playtime,
}

/// Count argument of `history`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryCount {
    /// No count given.
    Default,
    /// A positive count.
    Last(usize),
    /// A count that is zero, negative, too large, or not a number.
    ///
    /// `history` falls back to its default and warns instead of failing.
    Rejected(String),
}

impl HistoryCount {
    fn parse(text: &str) -> Self {
        match positive(text) {
            Ok(count) => Self::Last(count),
            Err(_) => Self::Rejected(text.to_string()),
        }
    }
}

/// A parsed command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Replace the library from a snapshot source.
    Import(String),
    /// Prefix search.
    Search(String),
    /// Exact name lookup.
    Lookup(String),
    /// List every game.
    List(ListMode),
    /// Played/unplayed counts.
    Count,
    /// CSV export under the given name.
    Export(String),
    /// Relate two games, each given as an id, name, or prefix.
    Relate(String, String),
    /// Related games for one game.
    Recommend {
        /// Game id, name, or prefix.
        game: String,
        /// Maximum number of results; `None` uses the configured default.
        count: Option<usize>,
    },
    /// Revert the last relation.
    Undo,
    /// Show recent commands.
    History(HistoryCount),
    /// Show usage.
    Help,
    /// Leave the shell.
    Exit,
}

impl Command {
    /// Parses one input line.
    ///
    /// Returns `Ok(None)` for a blank line.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error for unknown commands, missing or
    /// extra arguments, bad counts, and unterminated quotes.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let tokens = tokenize(line)?;
        let Some((word, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "import" => Self::Import(joined(args, "import <file>")?),
            "search" => Self::Search(joined(args, "search <prefix>")?),
            "lookup" => Self::Lookup(joined(args, "lookup <name>")?),
            "list" => Self::List(match args {
                [] => ListMode::Names,
                [flag] if flag == "-l" => ListMode::Table,
                [flag] if flag == "-n" => ListMode::Grouped,
                [flag] if flag == "-p" => ListMode::Playtime,
                _ => return Err(usage("list [-l | -n | -p]")),
            }),
            "count" => no_args(args, Self::Count, "count")?,
            "export" => match args {
                [name] => Self::Export(name.clone()),
                _ => return Err(usage("export <name>")),
            },
            "relate" => match args {
                [first, second] => Self::Relate(first.clone(), second.clone()),
                _ => return Err(usage("relate <game> <game>")),
            },
            "recs" | "recommendations" => match args {
                [game] => Self::Recommend {
                    game: game.clone(),
                    count: None,
                },
                [game, count] => Self::Recommend {
                    game: game.clone(),
                    count: Some(positive(count)?),
                },
                _ => return Err(usage("recs <game> [count]")),
            },
            "undo" => no_args(args, Self::Undo, "undo")?,
            "history" => match args {
                [] => Self::History(HistoryCount::Default),
                [count] => Self::History(HistoryCount::parse(count)),
                _ => return Err(usage("history [count]")),
            },
            "help" => Self::Help,
            "exit" | "quit" => Self::Exit,
            other => {
                return Err(Error::invalid_argument(format!(
                    "unknown command '{other}', type 'help' for commands"
                )));
            }
        };

        Ok(Some(command))
    }

    /// Returns true if this command belongs in the command history.
    #[must_use]
    pub const fn is_recorded(&self) -> bool {
        !matches!(self, Self::History(_) | Self::Exit)
    }
}

/// Splits a line on whitespace, keeping double-quoted runs together.
///
/// `""` yields an empty argument.
///
/// # Errors
///
/// Returns an invalid argument error if a quote is left open.
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_quotes {
        return Err(Error::invalid_argument("unterminated quote"));
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

fn usage(text: &str) -> Error {
    Error::invalid_argument(format!("usage: {text}"))
}

fn joined(args: &[String], text: &str) -> Result<String> {
    if args.is_empty() {
        return Err(usage(text));
    }
    Ok(args.join(" "))
}

fn no_args(args: &[String], command: Command, text: &str) -> Result<Command> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(usage(text))
    }
}

fn positive(text: &str) -> Result<usize> {
    match text.parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(Error::invalid_argument(format!(
            "'{text}' is not a positive count"
        ))),
    }
}
