//! Line editor abstraction for the shell.
//!
//! The shell talks to a [`LineEditor`] so tests can drive it with scripted
//! input; [`RustylineEditor`] is the terminal implementation.

use crate::highlight::CommandHighlighter;
use gameshelf_foundation::{Error, Result};
use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator as RLValidator};
use std::borrow::Cow;

const MAX_EDITOR_HISTORY: usize = 1000;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to the editor's recall history.
    fn add_history(&mut self, line: &str);

    /// Replace the words offered by tab completion.
    fn set_completions(&mut self, words: Vec<String>);
}

#[derive(Helper, Completer, Hinter, RLValidator)]
struct ShellHelper {
    #[rustyline(Completer)]
    completer: ShellCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    #[rustyline(Validator)]
    validator: QuoteValidator,
    highlighter: CommandHighlighter,
}

impl Highlighter for ShellHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;36m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes command words, game names, and `import` paths.
struct ShellCompleter {
    file_completer: FilenameCompleter,
    words: Vec<String>,
}

impl ShellCompleter {
    fn new() -> Self {
        Self {
            file_completer: FilenameCompleter::new(),
            words: crate::command::COMMAND_NAMES
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
        }
    }
}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before = &line[..pos];
        if before.trim_start().starts_with("import ") {
            return self.file_completer.complete(line, pos, ctx);
        }

        let start = before.rfind(char::is_whitespace).map_or(0, |i| i + 1);
        let word = before[start..].to_lowercase();

        let candidates: Vec<Pair> = self
            .words
            .iter()
            .filter(|candidate| {
                candidate
                    .trim_start_matches('"')
                    .to_lowercase()
                    .starts_with(word.trim_start_matches('"'))
            })
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate.clone(),
            })
            .collect();

        Ok((start, candidates))
    }
}

/// Rejects input with an unbalanced double quote.
#[derive(Default)]
struct QuoteValidator;

impl Validator for QuoteValidator {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        if ctx.input().matches('"').count() % 2 == 1 {
            Ok(ValidationResult::Invalid(Some(" (unterminated quote)".into())))
        } else {
            Ok(ValidationResult::Valid(None))
        }
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<ShellHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(MAX_EDITOR_HISTORY)
            .map_err(|e| Error::internal(e))?
            .build();

        let helper = ShellHelper {
            completer: ShellCompleter::new(),
            hinter: HistoryHinter::new(),
            validator: QuoteValidator,
            highlighter: CommandHighlighter::new(),
        };

        let mut editor = Editor::with_config(config)
            .map_err(|e| Error::internal(e))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::internal(e)),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_completions(&mut self, words: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.words = words;
        }
    }
}
