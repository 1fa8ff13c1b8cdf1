//! `projscope show` command

use anyhow::{Context, Result};

use crate::cli::ShowArgs;
use projscope::util::diagnostic::{emit, Diagnostic};
use projscope::util::GlobalContext;

pub fn execute(args: ShowArgs, ctx: &GlobalContext) -> Result<()> {
    let located = ctx.locate(args.dir.as_deref())?;
    let manifest = &located.manifest;

    if args.json {
        let json =
            serde_json::to_string_pretty(manifest).context("failed to serialize manifest")?;
        println!("{}", json);
        return Ok(());
    }

    // A bad version is worth a warning, not a failure
    if let Err(e) = manifest.version() {
        emit(
            &Diagnostic::warning(e.to_string()).with_location(&located.path),
            ctx.color(),
        );
    }

    println!("name:    {}", manifest.name().unwrap_or("-"));
    println!("version: {}", manifest.version_str().unwrap_or("-"));
    println!("main:    {}", manifest.main().unwrap_or("-"));
    println!("path:    {}", located.path.display());

    if ctx.is_verbose() {
        let keys: Vec<&str> = manifest.other_keys().collect();
        if !keys.is_empty() {
            println!("other:   {}", keys.join(", "));
        }
    }

    Ok(())
}
