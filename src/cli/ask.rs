//! Ask command implementation

use anyhow::Result;
use std::path::Path;

use sagx::assistant::Assistant;
use sagx::config::Config;
use sagx::output::EffectRunner;
use sagx::Session;

/// Answer a single transcript in a fresh session
pub async fn ask_command(config_path: Option<&Path>, transcript: &str, dry_run: bool) -> Result<()> {
    let config = Config::load(config_path)?;
    let assistant = Assistant::from_config(&config);
    let mut runner = EffectRunner::from_config(&config);
    let mut session = Session::new();

    let dispatch = assistant.handle(&mut session, transcript).await;
    super::emit(&dispatch, &mut runner, dry_run)?;

    // Dropping the runner would cut the answer off mid-sentence
    runner.finish();
    Ok(())
}
