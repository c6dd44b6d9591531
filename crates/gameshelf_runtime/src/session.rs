//! Session state for the shell.
//!
//! The session owns the library, the configuration it was opened with, the
//! command history and the snapshot source. It executes parsed commands and
//! persists after every mutation; a failed save is reported alongside the
//! command's output and never rolls memory back.

use std::fmt::Write as _;

use gameshelf_foundation::{AppId, Error, ErrorContext, Result};
use gameshelf_storage::{Library, RelateOutcome, SortKey};
use tracing::{debug, warn};

use crate::command::{COMMAND_NAMES, Command, HistoryCount, ListMode};
use crate::config::Config;
use crate::export;
use crate::fetch::{LibraryFetcher, OwnedGamesFile};
use crate::history::CommandHistory;
use crate::render;
use crate::serialize;

/// Lines shown by `history` when no count is given.
pub const DEFAULT_HISTORY_DISPLAY: usize = 10;

/// Usage text printed by `help`.
pub const HELP: &str = "\
Available commands:
  import <file>            Replace the library from a saved GetOwnedGames response
  search <prefix>          Find games whose name starts with <prefix>
  lookup <name>            Find a game by its full name
  list [-l | -n | -p]      List games (-l table, -n by initial, -p by playtime)
  count                    Show played, unplayed and total game counts
  export <name>            Write the library to exported/<name>.csv
  relate <game> <game>     Mark two games as related
  recs <game> [count]      Show games related to <game>
  undo                     Revert the last relate
  history [count]          Show recent commands
  help                     Show this message
  exit                     Leave gameshelf

A <game> is an app id, a full name, or a name prefix. Quote names that
contain spaces, e.g. relate \"Half-Life 2\" Portal.";

/// What the caller should do after a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// Print this text (possibly empty) and keep going.
    Output(String),
    /// Leave the shell.
    Exit,
}

impl Response {
    /// Returns the printable text, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Output(text) => Some(text),
            Self::Exit => None,
        }
    }
}

/// Shell session: library state plus everything needed to run commands.
pub struct Session {
    library: Library,
    config: Config,
    history: CommandHistory,
    fetcher: Box<dyn LibraryFetcher>,
}

impl Session {
    /// Creates an empty session. Call [`load`](Self::load) to read saved data.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            library: Library::with_undo_depth(config.undo_depth),
            history: CommandHistory::new(config.history_size),
            fetcher: Box::new(OwnedGamesFile::new()),
            config,
        }
    }

    /// Replaces the snapshot source used by `import`.
    #[must_use]
    pub fn with_fetcher(mut self, fetcher: impl LibraryFetcher + 'static) -> Self {
        self.fetcher = Box::new(fetcher);
        self
    }

    /// Returns the library.
    #[must_use]
    pub const fn library(&self) -> &Library {
        &self.library
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the command history.
    #[must_use]
    pub const fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Reads the games and relations files.
    ///
    /// Nothing here is fatal: a missing file leaves that part empty, and an
    /// unreadable or malformed one is skipped. Returns one notice per problem.
    pub fn load(&mut self) -> Vec<String> {
        let mut notices = Vec::new();

        if let Err(e) = self.config.ensure_data_dir() {
            warn!("{e}");
            notices.push(e.to_string());
        }

        match serialize::load_games(self.config.games_path()) {
            Ok(Some(snapshot)) => self.library.replace_games(snapshot.games, snapshot.user),
            Ok(None) => debug!("No games file, starting with an empty library"),
            Err(e) => {
                warn!("Skipping games file: {e}");
                notices.push(e.to_string());
            }
        }

        match serialize::load_relations(self.config.relations_path()) {
            Ok(Some(loaded)) => {
                notices.extend(
                    loaded
                        .skipped
                        .iter()
                        .map(|message| format!("relations file: skipped {message}")),
                );
                self.library.replace_relations(loaded.graph);
            }
            Ok(None) => debug!("No relations file, starting with no relations"),
            Err(e) => {
                warn!("Skipping relations file: {e}");
                notices.push(e.to_string());
            }
        }

        notices
    }

    /// Parses and executes one input line.
    ///
    /// Parsed commands other than `history` and `exit` are recorded in the
    /// command history whether or not they succeed.
    ///
    /// # Errors
    ///
    /// Returns the parse or execution error.
    pub fn execute_line(&mut self, line: &str) -> Result<Response> {
        let Some(command) = Command::parse(line)? else {
            return Ok(Response::Output(String::new()));
        };
        if command.is_recorded() {
            self.history.push(line.trim());
        }
        self.execute(command).map_err(|e| {
            if e.context.is_some() {
                e
            } else {
                e.with_context(ErrorContext::new().with_source(format!("'{}'", line.trim())))
            }
        })
    }

    /// Executes a parsed command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails; state is left unchanged.
    pub fn execute(&mut self, command: Command) -> Result<Response> {
        let text = match command {
            Command::Import(account) => self.import(&account)?,
            Command::Search(prefix) => self.search(&prefix)?,
            Command::Lookup(name) => self.lookup(&name)?,
            Command::List(mode) => self.list(mode),
            Command::Count => self.count(),
            Command::Export(name) => self.export(&name)?,
            Command::Relate(first, second) => self.relate(&first, &second)?,
            Command::Recommend { game, count } => self.recommend(&game, count)?,
            Command::Undo => self.undo(),
            Command::History(count) => self.show_history(count),
            Command::Help => HELP.to_string(),
            Command::Exit => return Ok(Response::Exit),
        };
        Ok(Response::Output(text))
    }

    /// Words offered by tab completion: command names, then game names.
    #[must_use]
    pub fn completion_words(&self) -> Vec<String> {
        let games = self.library.store().records().iter().map(|game| {
            if game.name.contains(char::is_whitespace) {
                format!("\"{}\"", game.name)
            } else {
                game.name.clone()
            }
        });
        COMMAND_NAMES
            .iter()
            .map(|name| (*name).to_string())
            .chain(games)
            .collect()
    }

    fn import(&mut self, account: &str) -> Result<String> {
        let snapshot = self.fetcher.fetch_library(account)?;
        let count = snapshot.games.len();
        let username = snapshot.user.username.clone();

        self.library.replace_games(snapshot.games, snapshot.user);

        let mut out = format!("Imported {count} games for {username}.");
        self.save_games(&mut out);
        Ok(out)
    }

    fn search(&self, prefix: &str) -> Result<String> {
        if let Some(notice) = self.empty_library_notice() {
            return Ok(notice);
        }
        let results = self.library.search(prefix);
        if results.is_empty() {
            return Err(Error::game_not_found(prefix));
        }
        Ok(render::game_table(
            &format!("Search Results for '{prefix}':"),
            &results,
        ))
    }

    fn lookup(&self, name: &str) -> Result<String> {
        if let Some(notice) = self.empty_library_notice() {
            return Ok(notice);
        }
        let game = self.library.lookup_exact(name)?;
        Ok(render::game_table("Lookup Result:", &[game]))
    }

    fn list(&self, mode: ListMode) -> String {
        if let Some(notice) = self.empty_library_notice() {
            return notice;
        }
        match mode {
            ListMode::Names => render::name_list(
                "All Games (Alphabetical):",
                &self.library.list_all(SortKey::Name),
            ),
            ListMode::Table => render::game_table(
                "All Games (Alphabetical by Name):",
                &self.library.list_all(SortKey::Name),
            ),
            ListMode::Grouped => render::grouped_list(&self.library.store().group_by_initial()),
            ListMode::Playtime => render::game_table(
                "All Games (Sorted by Playtime):",
                &self.library.list_all(SortKey::Playtime),
            ),
        }
    }

    fn count(&self) -> String {
        if let Some(notice) = self.empty_library_notice() {
            return notice;
        }
        let summary = self.library.store().playtime_summary();
        format!(
            "Number of games played: {}\nNumber of games not played: {}\nTotal games in library: {}",
            summary.played, summary.unplayed, summary.total
        )
    }

    fn export(&self, name: &str) -> Result<String> {
        if let Some(notice) = self.empty_library_notice() {
            return Ok(notice);
        }
        let games = self.library.store().records();
        let path = export::export_csv(&self.config.export_dir(), name, games)?;
        Ok(format!("Exported {} games to {}.", games.len(), path.display()))
    }

    fn relate(&mut self, first: &str, second: &str) -> Result<String> {
        let (first_id, first_name) = self.resolve(first)?;
        let (second_id, second_name) = self.resolve(second)?;

        let mut out = match self.library.relate(first_id, second_id)? {
            RelateOutcome::Created => {
                format!("Related {first_name} ({first_id}) and {second_name} ({second_id}).")
            }
            RelateOutcome::AlreadyRelated => {
                return Ok(format!("{first_name} and {second_name} are already related."));
            }
            RelateOutcome::SelfRelation => {
                return Ok("A game cannot be related to itself.".to_string());
            }
        };
        self.save_relations(&mut out);
        Ok(out)
    }

    fn recommend(&self, game: &str, count: Option<usize>) -> Result<String> {
        let (id, name) = self.resolve(game)?;
        let count = count.unwrap_or(self.config.max_recommendations);
        let related = self.library.recommend(id, count)?;

        if related.is_empty() {
            return Ok(format!("No related games for {name}."));
        }

        let mut out = format!("Games related to {name}:");
        for other in related {
            match self.library.store().find_by_app_id(other) {
                Some(record) => {
                    let _ = write!(out, "\n- {} ({other})", record.name);
                }
                None => {
                    let _ = write!(out, "\n- App {other}");
                }
            }
        }
        Ok(out)
    }

    fn undo(&mut self) -> String {
        let Some(action) = self.library.undo() else {
            return "Nothing to undo.".to_string();
        };
        let mut out = format!("Undid {action}.");
        self.save_relations(&mut out);
        out
    }

    fn show_history(&self, count: HistoryCount) -> String {
        let mut out = String::new();
        let count = match count {
            HistoryCount::Default => DEFAULT_HISTORY_DISPLAY,
            HistoryCount::Last(count) => count,
            HistoryCount::Rejected(text) => {
                let _ = writeln!(out, "{}", rejected_count_warning(&text));
                DEFAULT_HISTORY_DISPLAY
            }
        };

        if self.history.is_empty() {
            out.push_str("Command history is empty.");
            return out;
        }
        let _ = write!(out, "-- Command History (last up to {count} entries) --");
        for line in self.history.recent(count) {
            let _ = write!(out, "\n- {line}");
        }
        out
    }

    fn resolve(&self, identifier: &str) -> Result<(AppId, String)> {
        let game = self.library.resolve(identifier)?;
        Ok((game.app_id, game.name.clone()))
    }

    fn empty_library_notice(&self) -> Option<String> {
        let store = self.library.store();
        if !store.is_empty() {
            return None;
        }
        Some(if store.has_fetched() {
            format!(
                "No games found for the current user ({}). Profile might have been private during last import.",
                store.user().username
            )
        } else {
            "No local game data. Use 'import <file>' first.".to_string()
        })
    }

    fn save_games(&self, out: &mut String) {
        let store = self.library.store();
        let result = self.config.ensure_data_dir().and_then(|()| {
            serialize::save_games(self.config.games_path(), store.user(), store.records())
        });
        report_save_failure(result, out);
    }

    fn save_relations(&self, out: &mut String) {
        let result = self.config.ensure_data_dir().and_then(|()| {
            serialize::save_relations(self.config.relations_path(), self.library.relations())
        });
        report_save_failure(result, out);
    }
}

fn rejected_count_warning(text: &str) -> String {
    let reason = match text.parse::<i128>() {
        Ok(count) if count <= 0 => "History count must be positive".to_string(),
        Ok(_) => format!("Number for history count too large: '{text}'"),
        Err(_) => format!("Invalid number for history count: '{text}'"),
    };
    format!("Warning: {reason}. Showing default ({DEFAULT_HISTORY_DISPLAY}).")
}

fn report_save_failure(result: Result<()>, out: &mut String) {
    if let Err(e) = result {
        warn!("Save failed: {e}");
        let _ = write!(out, "\nWarning: changes were not saved: {e}");
    }
}
