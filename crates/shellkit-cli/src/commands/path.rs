use std::io::Write;

use shellkit_ops::ops_path::{compute_search_path, split_search_path, Mode, USAGE_WARNING};
use shellkit_util::errors::{ToolError, ToolResult};

use crate::cli::PathArgs;

pub fn exec(args: PathArgs) -> ToolResult<()> {
    let mode = Mode::from_args(args.args.as_slice());
    if mode == Mode::Invalid {
        eprintln!("{USAGE_WARNING}");
    }

    let cwd = std::env::current_dir().map_err(ToolError::Io)?;
    let existing = std::env::var_os("PATH")
        .map(|value| split_search_path(&value.to_string_lossy()))
        .unwrap_or_default();

    let report = compute_search_path(mode, &cwd, &existing);

    for skipped in report.skipped {
        tracing::warn!("{}", ToolError::from(skipped));
    }
    for conflict in &report.conflicts {
        eprintln!("{conflict}");
    }

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", report.path).map_err(ToolError::Io)?;
    stdout.flush().map_err(ToolError::Io)?;
    Ok(())
}
