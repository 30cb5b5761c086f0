//! Listen command implementation

use anyhow::Result;
use std::future::Future;
use std::path::Path;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::info;

use sagx::assistant::{Assistant, messages};
use sagx::config::Config;
use sagx::output::EffectRunner;
use sagx::Session;

/// Words that end the listen loop
const STOP_WORDS: &[&str] = &["exit", "quit"];

/// Answer transcripts from stdin until EOF, a stop word or Ctrl-C.
///
/// Each line is one recognized utterance. A line is fully handled (lookups
/// included) before the next one is read.
pub async fn listen_command(config_path: Option<&Path>, dry_run: bool) -> Result<()> {
    let config = Config::load(config_path)?;
    let assistant = Assistant::from_config(&config);
    let mut runner = EffectRunner::from_config(&config);
    let mut session = Session::new();

    info!(session = %session.id, "Session started");

    let input = BufReader::new(tokio::io::stdin());
    let interrupted = listen_loop(
        &assistant,
        &mut session,
        &mut runner,
        input,
        tokio::signal::ctrl_c(),
        dry_run,
    )
    .await?;
    if interrupted {
        info!("Interrupted");
    }

    runner.shutdown();
    info!(
        session = %session.id,
        tasks = session.todo.len(),
        "Session ended"
    );
    Ok(())
}

/// Drive the assistant from `input` until it ends, a stop word is read or
/// `interrupt` completes.
///
/// One `interrupt` future covers the whole loop, so it also cuts short a
/// dispatch that is still waiting on a lookup. Returns whether the loop was
/// interrupted.
async fn listen_loop<R, I>(
    assistant: &Assistant,
    session: &mut Session,
    runner: &mut EffectRunner,
    input: R,
    interrupt: I,
    dry_run: bool,
) -> Result<bool>
where
    R: AsyncBufRead + Unpin,
    I: Future<Output = std::io::Result<()>>,
{
    let mut lines = input.lines();
    tokio::pin!(interrupt);

    loop {
        if !dry_run {
            runner.presenter().show_status(messages::LISTENING);
        }

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = &mut interrupt => return Ok(true),
        };

        let Some(line) = line else {
            return Ok(false);
        };

        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if STOP_WORDS.contains(&command.to_lowercase().as_str()) {
            return Ok(false);
        }

        let dispatch = tokio::select! {
            dispatch = assistant.handle(session, &line) => dispatch,
            _ = &mut interrupt => return Ok(true),
        };
        super::emit(&dispatch, runner, dry_run)?;
    }
}
