use shellkit_ops::ops_diffstat::{word_diff_stat, GIT_ERROR};
use shellkit_util::errors::{ToolError, ToolResult};

use crate::cli::DiffStatArgs;

pub fn exec(args: DiffStatArgs) -> ToolResult<()> {
    let cwd = std::env::current_dir().map_err(ToolError::Io)?;

    match word_diff_stat(&cwd, &args.git_args) {
        Ok(stat) => println!("{stat}"),
        Err(e) => {
            tracing::debug!("{e}");
            println!("{GIT_ERROR}");
        }
    }
    Ok(())
}
