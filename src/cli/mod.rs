//! CLI command implementations

pub mod ask;
pub mod init;
pub mod listen;
pub mod rules;

use anyhow::Result;

use sagx::assistant::Dispatch;
use sagx::output::EffectRunner;

/// Hand a dispatch to the output adapters, or print it as JSON in dry-run mode
pub(crate) fn emit(dispatch: &Dispatch, runner: &mut EffectRunner, dry_run: bool) -> Result<()> {
    if dry_run {
        println!("{}", serde_json::to_string(dispatch)?);
    } else {
        runner.run(&dispatch.effects);
    }
    Ok(())
}
