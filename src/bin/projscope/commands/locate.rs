//! `projscope locate` command

use anyhow::Result;

use crate::cli::LocateArgs;
use projscope::util::fs::relative_path;
use projscope::util::GlobalContext;

pub fn execute(args: LocateArgs, ctx: &GlobalContext) -> Result<()> {
    let manifest_path = ctx.find_manifest(args.dir.as_deref())?;

    if args.relative {
        println!("{}", relative_path(ctx.cwd(), &manifest_path).display());
    } else {
        println!("{}", manifest_path.display());
    }

    Ok(())
}
