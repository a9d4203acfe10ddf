use clap::Parser;
use miette::Result;

use shellkit_cli::cli::RandIdArgs;
use shellkit_cli::commands::randid;

fn main() -> Result<()> {
    shellkit_cli::init_logging();
    let args = RandIdArgs::parse();
    randid::exec(args)
}
