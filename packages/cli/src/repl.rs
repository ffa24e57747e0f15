//! REPL loop and command execution.
//!
//! `rustyline` blocks while waiting for input, so the editor lives on a
//! `spawn_blocking` thread and hands lines to the async loop over a channel.
//! The reader only prompts again once the loop asks for the next line, so
//! command output never interleaves with the prompt.

use std::sync::mpsc as std_mpsc;

use rustyline::{DefaultEditor, error::ReadlineError};
use serde::Serialize;
use store_core::ProductUseCase;
use tokio::sync::mpsc;

use crate::{
    command::{Command, HELP},
    error::CliError,
};

const PROMPT: &str = "store> ";

type Line = Result<String, ReadlineError>;

/// Run the REPL until `quit`, Ctrl-C or Ctrl-D.
///
/// Command failures (including NotFound) are printed and the loop continues;
/// only terminal errors end it.
pub async fn run_repl(usecase: ProductUseCase) -> Result<(), CliError> {
    println!("{HELP}");

    let (line_tx, line_rx) = mpsc::channel(1);
    let (ready_tx, ready_rx) = std_mpsc::channel();
    let reader = tokio::task::spawn_blocking(move || read_lines(line_tx, ready_rx));

    // serve_lines drops both channel ends on return, which stops the reader
    let result = serve_lines(&usecase, line_rx, ready_tx).await;
    reader.await?;
    result?;

    tracing::info!("Bye");
    Ok(())
}

/// Blocking side: prompt once per ready signal and forward what was read.
///
/// Returns on Ctrl-C / Ctrl-D, on a readline failure, or when the async side
/// has gone away.
fn read_lines(lines: mpsc::Sender<Line>, ready: std_mpsc::Receiver<()>) {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            let _ = lines.blocking_send(Err(e));
            return;
        }
    };

    while ready.recv().is_ok() {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim().to_string();
                if !line.is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                if lines.blocking_send(Ok(line)).is_err() {
                    return;
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return,
            Err(e) => {
                let _ = lines.blocking_send(Err(e));
                return;
            }
        }
    }
}

/// Async side: request a line, run it, print the outcome.
///
/// Ends on `quit` or when the reader closes the channel.
async fn serve_lines(
    usecase: &ProductUseCase,
    mut lines: mpsc::Receiver<Line>,
    ready: std_mpsc::Sender<()>,
) -> Result<(), CliError> {
    loop {
        if ready.send(()).is_err() {
            break;
        }
        let Some(line) = lines.recv().await else {
            break;
        };
        let line = line?;
        if line.is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => command,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        match execute(usecase, command).await {
            Ok(output) => println!("{output}"),
            Err(e) => {
                tracing::debug!("Command failed: {:?}", e);
                eprintln!("{e}");
            }
        }
    }
    Ok(())
}

/// Execute one command and render its result
pub async fn execute(usecase: &ProductUseCase, command: Command) -> Result<String, CliError> {
    match command {
        Command::Create(body) => to_json(&usecase.create(body).await?),
        Command::Get(id) => to_json(&usecase.get(id).await?),
        Command::Query(params) => to_json(&usecase.query(params).await?),
        Command::Update(id, body) => to_json(&usecase.update(id, body).await?),
        Command::Delete(id) => to_json(&usecase.delete(id).await?),
        Command::Help => Ok(HELP.to_string()),
        Command::Quit => Ok(String::new()),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}
