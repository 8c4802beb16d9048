//! Interactive line editor loop

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, warn};

use cll::config::prompt::prompt_for;
use cll::models::format_execution_time;
use cll::{CommandResult, Session};

const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

const TIMING_THRESHOLD: Duration = Duration::from_millis(1);

/// Read, dispatch and print until the user quits
pub fn run(session: &mut Session) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    for entry in session.history.entries() {
        rl.add_history_entry(entry)?;
    }

    print_welcome(session);

    loop {
        let prompt = current_prompt(session);
        let readline = rl.readline(&prompt);

        if session.dispatcher.is_in_multi_line_mode() {
            match readline {
                Ok(line) => session.dispatcher.append_multi_line_input(&line),
                Err(ReadlineError::Eof) => {
                    let result = session.dispatcher.execute_multi_line_input();
                    print_result(session, &result);
                }
                Err(ReadlineError::Interrupted) => {
                    session.dispatcher.end_multi_line_mode();
                    println!("Multi-line input cancelled");
                }
                Err(err) => return Err(err.into()),
            }
            continue;
        }

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                rl.add_history_entry(line)?;
                session.history.add(line);

                let expanded = session.dispatcher.expand_alias(line);
                if is_quit(&expanded) {
                    println!("Goodbye!");
                    break;
                }

                debug!("Dispatching '{}'", expanded);
                let result = session.dispatcher.execute_command(&expanded);
                print_result(session, &result);
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => {
                warn!("Line editor failed: {}", err);
                return Err(err.into());
            }
        }
    }

    Ok(())
}

fn print_welcome(session: &Session) {
    println!("cll v{} - {} mode", cll::VERSION, session.dispatcher.mode());
    println!("Type 'help' for commands, '&' for JavaScript, '?' to ask, 'quit' to leave.");
    println!();
}

fn current_prompt(session: &Session) -> String {
    let working_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    prompt_for(
        &session.config.prompt,
        session.dispatcher.mode(),
        session.dispatcher.multi_line_mode(),
        session.config.general.enable_colors,
        &working_dir,
    )
}

fn is_quit(line: &str) -> bool {
    matches!(line.trim(), "quit" | "exit")
}

fn print_result(session: &Session, result: &CommandResult) {
    let colors = session.config.general.enable_colors;

    if !result.output.is_empty() {
        print!("{}", result.output);
        if !result.output.ends_with('\n') {
            println!();
        }
    }

    if !result.error.is_empty() {
        if colors {
            eprintln!("{}{}{}", RED, result.error, RESET);
        } else {
            eprintln!("{}", result.error);
        }
    }

    if session.config.general.show_execution_time && result.execution_time > TIMING_THRESHOLD {
        let elapsed = format_execution_time(result.execution_time);
        if colors {
            println!("{}{}{}", DIM, elapsed, RESET);
        } else {
            println!("{}", elapsed);
        }
    }
}
