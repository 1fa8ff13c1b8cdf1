//! `projscope dist` command

use anyhow::Result;

use crate::cli::DistArgs;
use projscope::util::diagnostic::{suggestions, Diagnostic};
use projscope::util::GlobalContext;
use projscope::Platform;

pub fn execute(args: DistArgs, ctx: &GlobalContext) -> Result<()> {
    let platform: Platform = match args.platform.as_deref() {
        Some(name) => name.parse()?,
        None => match ctx.config().platform()? {
            Some(platform) => platform,
            None => {
                return Err(Diagnostic::error("no platform given")
                    .with_suggestion(suggestions::NO_PLATFORM)
                    .into())
            }
        },
    };

    let project = ctx.project(args.dir.as_deref())?;
    tracing::debug!("project `{}` for {}", project.name(), platform);

    let path = if args.absolute {
        project.absolute_dist_path(platform)
    } else {
        project.dist_path(platform)
    };

    println!("{}", path.display());
    Ok(())
}
