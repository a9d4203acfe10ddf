//! `unjar`: unpack nested jar and zip archives in place.

use clap::Parser;
use miette::Result;

use shellkit_cli::cli::UnjarArgs;
use shellkit_cli::commands::unjar;

fn main() -> Result<()> {
    shellkit_cli::init_logging();
    let args = UnjarArgs::parse();
    unjar::exec(args)
}
