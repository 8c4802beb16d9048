//! cll - an interactive console for shell commands, JavaScript and questions
//!
//! Parses the command line, installs logging and hands a session to the
//! line editor (or runs a single line with `--execute`).

mod repl;

use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::{anyhow, bail, Context, Result};
use tracing::{debug, info};

use cll::{ConsoleMode, Session};

/// Command line options
#[derive(Debug, Default)]
struct AppArgs {
    /// Configuration directory
    config_dir: Option<PathBuf>,
    /// Enable debug logging
    debug: bool,
    /// Initial mode, overriding the configuration
    mode: Option<ConsoleMode>,
    /// Run one line and exit
    execute: Option<String>,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> Result<Self> {
        Self::parse_from(env::args().skip(1))
    }

    fn parse_from(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut app_args = AppArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    let dir = args.next().ok_or_else(|| anyhow!("Missing config directory"))?;
                    app_args.config_dir = Some(PathBuf::from(dir));
                }
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--mode" | "-m" => {
                    let mode = args.next().ok_or_else(|| anyhow!("Missing mode"))?;
                    app_args.mode = Some(mode.parse::<ConsoleMode>().map_err(|e: String| anyhow!(e))?);
                }
                "--execute" | "-e" => {
                    let line = args.next().ok_or_else(|| anyhow!("Missing line to execute"))?;
                    app_args.execute = Some(line);
                }
                "--help" | "-?" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-v" => {
                    println!("cll v{}", cll::VERSION);
                    process::exit(0);
                }
                other if other.starts_with('-') => bail!("Unknown option: {}", other),
                other => bail!("Unexpected argument: {}", other),
            }
        }

        Ok(app_args)
    }
}

/// Print help information
fn print_help() {
    println!("cll - {}", cll::DESCRIPTION);
    println!();
    println!("USAGE:");
    println!("    cll [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <DIR>     Configuration directory");
    println!("    -d, --debug            Enable debug logging");
    println!("    -m, --mode <MODE>      Initial mode (shell, js, ask)");
    println!("    -e, --execute <LINE>   Run one line and exit");
    println!("    -?, --help             Print this help message");
    println!("    -v, --version          Print version information");
    println!();
    println!("CONFIGURATION:");
    println!("    cll reads config.toml and aliases from, in order:");
    println!("    1. Directory specified with --config");
    println!("    2. $CLL_CONFIG_DIR");
    println!("    3. $XDG_CONFIG_HOME/cll or ~/.config/cll");
    println!();
    println!("ENVIRONMENT:");
    println!("    CLL_CONFIG_DIR         Configuration directory");
    println!("    CLL_DEBUG              Enable debug logging (1 or true)");
    println!("    RUST_LOG               Set logging level (error, warn, info, debug, trace)");
}

fn debug_from_env() -> bool {
    env::var("CLL_DEBUG").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

fn init_logging(debug: bool) {
    let log_level = if debug { "debug" } else { "warn" };
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

fn start_session(args: &AppArgs) -> Result<Session> {
    let session = match &args.config_dir {
        Some(dir) => cll::init_in(dir),
        None => cll::init(),
    };

    session.map_err(|e| anyhow!(cll::handle_startup_error(&e)))
}

/// Run a single line, returning the process exit code
fn run_once(session: &mut Session, line: &str) -> i32 {
    let expanded = session.dispatcher.expand_alias(line);
    let result = session.dispatcher.execute_command(&expanded);

    if !result.output.is_empty() {
        print!("{}", result.output);
        if !result.output.ends_with('\n') {
            println!();
        }
    }
    if !result.error.is_empty() {
        eprintln!("{}", result.error);
    }

    match (result.success, result.exit_code) {
        (false, 0) => 1,
        (_, code) => code,
    }
}

fn main() -> Result<()> {
    let args = AppArgs::parse().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!();
        print_help();
        process::exit(2);
    });

    init_logging(args.debug || debug_from_env());
    info!("Starting cll v{}", cll::VERSION);
    debug!("Arguments: {:?}", args);

    let mut session = start_session(&args).context("Failed to start cll")?;
    if let Some(mode) = args.mode {
        session.dispatcher.set_mode(mode);
    }

    if let Some(line) = &args.execute {
        let code = run_once(&mut session, line);
        process::exit(code);
    }

    repl::run(&mut session)?;
    session.save_history();
    Ok(())
}
