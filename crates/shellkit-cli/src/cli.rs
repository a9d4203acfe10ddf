//! CLI argument definitions for the shellkit binaries.
//!
//! Uses `clap` derive macros. Each binary parses one of these structs and
//! hands it to the matching handler in [`crate::commands`].

use clap::Parser;

/// Arguments of `path`.
#[derive(Parser, Debug)]
#[command(
    name = "path",
    version,
    about = "Print PATH with every directory under the current one that holds executables prepended",
    long_about = "Walks the current directory and prints a new PATH value with every \
                  subdirectory that provides a not-yet-seen executable in front of the \
                  existing entries. Meant to be evaluated by the shell, e.g. \
                  `export PATH=\"$(path)\"`. With `-remove`, prints PATH with every \
                  directory under the current one taken out instead. Any other \
                  arguments, `-h` and `-V` included, only deduplicate PATH.",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct PathArgs {
    /// Pass nothing to add directories, or `-remove` to strip them
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

/// Arguments of `gitwdiffstat`.
#[derive(Parser, Debug)]
#[command(
    name = "gitwdiffstat",
    version,
    about = "Count inserted and deleted words in a git diff",
    long_about = "Runs `git diff <GIT_DIFF_ARGS> --word-diff=porcelain` and counts the \
                  changed words. `-h` is passed through to git like any other argument.",
    disable_help_flag = true
)]
pub struct DiffStatArgs {
    /// Arguments passed through to `git diff` (revisions, paths, ...)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "GIT_DIFF_ARGS")]
    pub git_args: Vec<String>,
}

/// Arguments of `randid`.
#[derive(Parser, Debug)]
#[command(
    name = "randid",
    version,
    about = "Print a random lowercase identifier one character narrower than the terminal"
)]
pub struct RandIdArgs {
    /// Terminal width override
    #[arg(long, env = "COLUMNS", hide_env_values = true)]
    pub columns: Option<String>,
}

/// Arguments of `som`.
#[derive(Parser, Debug)]
#[command(
    name = "som",
    version,
    about = "Sort blocks of stdin that start at lines beginning with `|`"
)]
pub struct SomArgs {}

/// Arguments of `unjar`.
#[derive(Parser, Debug)]
#[command(
    name = "unjar",
    version,
    about = "Recursively unpack every .jar and .zip below the current directory"
)]
pub struct UnjarArgs {}
