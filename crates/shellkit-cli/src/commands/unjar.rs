use shellkit_ops::ops_unjar::unjar;
use shellkit_util::errors::{ToolError, ToolResult};

use crate::cli::UnjarArgs;

pub fn exec(_args: UnjarArgs) -> ToolResult<()> {
    let cwd = std::env::current_dir().map_err(ToolError::Io)?;
    let report = unjar(&cwd);

    for skipped in report.skipped {
        tracing::warn!("{}", ToolError::from(skipped));
    }
    tracing::debug!(
        "{} archive(s) in {} pass(es), {} failed",
        report.processed.len(),
        report.passes,
        report.failed.len()
    );

    println!("Done:");
    for archive in &report.processed {
        println!("  {}", archive.display());
    }
    Ok(())
}
