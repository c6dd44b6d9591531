//! The interactive shell loop.

use crate::command::Command;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::{Response, Session};
use gameshelf_foundation::{Error, Result};
use std::io::{self, Write};

/// The interactive shell.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Library, configuration, and command history.
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Prompt printed before each command.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a shell over `session` with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a shell with the given editor.
    pub fn with_editor(editor: E, session: Session) -> Self {
        let mut repl = Self {
            editor,
            session,
            show_banner: true,
            prompt: "> ".to_string(),
        };
        repl.refresh_completions();
        repl
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the shell until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!("Goodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let line = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if line.trim().is_empty() {
            println!("Tip: Type 'help' for commands.");
            return Ok(true);
        }

        self.editor.add_history(&line);

        match self.eval(&line) {
            Ok(Response::Exit) => return Ok(false),
            Ok(Response::Output(text)) => {
                if !text.is_empty() {
                    println!("{text}");
                }
            }
            Err(e) => self.print_error(&e),
        }

        Ok(true)
    }

    /// Executes one command line.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be parsed or fails.
    pub fn eval(&mut self, input: &str) -> Result<Response> {
        let response = self.session.execute_line(input)?;
        if matches!(Command::parse(input), Ok(Some(Command::Import(_)))) {
            self.refresh_completions();
        }
        Ok(response)
    }

    /// Runs each line in order, printing results, without prompting.
    ///
    /// Returns the number of lines that failed.
    pub fn eval_batch<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>) -> usize {
        let mut failures = 0;
        for line in lines {
            match self.eval(line) {
                Ok(Response::Exit) => break,
                Ok(Response::Output(text)) => {
                    if !text.is_empty() {
                        println!("{text}");
                    }
                }
                Err(e) => {
                    self.print_error(&e);
                    failures += 1;
                }
            }
        }
        failures
    }

    fn refresh_completions(&mut self) {
        self.editor.set_completions(self.session.completion_words());
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        match &error.context {
            Some(context) => eprintln!("\x1b[31mError: {error} {context}\x1b[0m"),
            None => eprintln!("\x1b[31mError: {error}\x1b[0m"),
        }
    }

    /// Prints the welcome banner.
    fn print_banner(&self) {
        println!(
            "\x1b[1;33mgameshelf v{} - Type 'help' for commands\x1b[0m",
            env!("CARGO_PKG_VERSION")
        );
        let store = self.session.library().store();
        if store.has_fetched() {
            println!(
                "Library: {} games for {}",
                store.len(),
                store.user().username
            );
        }
        println!(":::::::::::::::::::::::");

        let _ = io::stdout().flush();
    }
}
