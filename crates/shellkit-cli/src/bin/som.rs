use clap::Parser;
use miette::Result;

use shellkit_cli::cli::SomArgs;
use shellkit_cli::commands::som;

fn main() -> Result<()> {
    shellkit_cli::init_logging();
    let args = SomArgs::parse();
    som::exec(args)
}
