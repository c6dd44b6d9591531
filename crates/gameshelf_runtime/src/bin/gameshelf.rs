//! gameshelf CLI entry point.

use gameshelf_runtime::{Config, Repl, Session};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    data_dir: Option<PathBuf>,
    commands: Vec<String>,
    show_help: bool,
    show_version: bool,
    no_banner: bool,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--no-banner" => config.no_banner = true,
            "-d" | "--data-dir" => {
                let dir = args.next().ok_or("--data-dir requires a value")?;
                config.data_dir = Some(PathBuf::from(dir));
            }
            "-c" | "--command" => {
                let command = args.next().ok_or("--command requires a value")?;
                config.commands.push(command);
            }
            other => {
                return Err(format!("unknown option: {other}").into());
            }
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(ExitCode::SUCCESS);
    }

    if cli.show_version {
        println!("gameshelf {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = Config::from_env();
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }

    let mut session = Session::new(config);
    for notice in session.load() {
        eprintln!("\x1b[33mWarning: {notice}\x1b[0m");
    }

    let mut repl = Repl::new(session)?;

    // Batch mode: run the given commands and exit
    if !cli.commands.is_empty() {
        let failures = repl.eval_batch(cli.commands.iter().map(String::as_str));
        return Ok(if failures == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    if cli.no_banner {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(ExitCode::SUCCESS)
}

fn print_help() {
    println!(
        "\x1b[1mgameshelf\x1b[0m - Local game library cache with search and related-game links

\x1b[1mUSAGE:\x1b[0m
    gameshelf [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help              Print help information
    -V, --version           Print version information
    -d, --data-dir DIR      Directory for games.json, relations.json and exports
    -c, --command LINE      Run LINE and exit (repeatable)
    --no-banner             Start the shell without the banner

\x1b[1mENVIRONMENT:\x1b[0m
    GAMESHELF_DATA_DIR              Data directory (default: data)
    GAMESHELF_UNDO_DEPTH            Undoable relates kept (default: 10)
    GAMESHELF_HISTORY_SIZE          Commands kept by history (default: 20)
    GAMESHELF_MAX_RECOMMENDATIONS   Default count for recs (default: 5)
    RUST_LOG                        Log filter (default: warn)

Variables may also be set in a .env file in the working directory.

\x1b[1mEXAMPLES:\x1b[0m
    gameshelf                                   Start the interactive shell
    gameshelf -c \"import owned_games.json\"      Import a saved library
    gameshelf -c \"relate 220 400\" -c \"recs 220\" Relate two games and list related

Type 'help' inside the shell for the command list."
    );
}
