use clap::Parser;
use miette::Result;

use shellkit_cli::cli::DiffStatArgs;
use shellkit_cli::commands::diffstat;

fn main() -> Result<()> {
    shellkit_cli::init_logging();
    let args = DiffStatArgs::parse();
    diffstat::exec(args)
}
