//! `projscope entry` command

use anyhow::Result;

use crate::cli::EntryArgs;
use projscope::util::GlobalContext;

pub fn execute(args: EntryArgs, ctx: &GlobalContext) -> Result<()> {
    let project = ctx.project(args.dir.as_deref())?;
    let entry = project.entry_path()?;

    if !entry.exists() {
        tracing::warn!("entry point {} does not exist", entry.display());
    }

    println!("{}", entry.display());
    Ok(())
}
