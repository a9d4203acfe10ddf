//! `path`: compute a new `PATH` from the executables under the current
//! directory. The result goes to stdout without a trailing newline so the
//! shell can assign it directly.

use clap::Parser;
use miette::Result;

use shellkit_cli::cli::PathArgs;
use shellkit_cli::commands::path;

fn main() -> Result<()> {
    shellkit_cli::init_logging();
    let args = PathArgs::parse();
    path::exec(args)
}
