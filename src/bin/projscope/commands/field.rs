//! `projscope field` command

use anyhow::{Context, Result};
use serde_json::Value;

use crate::cli::FieldArgs;
use projscope::util::GlobalContext;

pub fn execute(args: FieldArgs, ctx: &GlobalContext) -> Result<()> {
    let located = ctx.locate(args.dir.as_deref())?;
    let value = located.require_field(&args.key)?;

    // Strings print raw so the output can be used directly in scripts
    match value {
        Value::String(s) => println!("{}", s),
        other => println!(
            "{}",
            serde_json::to_string_pretty(&other).context("failed to serialize field")?
        ),
    }

    Ok(())
}
