//! Operation: count inserted and deleted words in a `git diff`.

use std::fmt;
use std::path::Path;

use shellkit_util::errors::ToolError;
use shellkit_util::process::CommandBuilder;

/// Line printed instead of a summary when git fails.
pub const GIT_ERROR: &str = "Error while running git.";

/// Word counts taken from porcelain word-diff output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DiffStat {
    pub added: usize,
    pub removed: usize,
}

impl DiffStat {
    /// Count words on `+` and `-` lines of `git diff --word-diff=porcelain`
    /// output. The `+++`/`---` file headers are ignored and the leading
    /// marker is not counted as a word.
    pub fn from_porcelain(text: &str) -> Self {
        let mut stat = DiffStat::default();
        for line in text.lines() {
            if let Some(rest) = line.strip_prefix('+') {
                if !line.starts_with("+++") {
                    stat.added += rest.split_whitespace().count();
                }
            } else if let Some(rest) = line.strip_prefix('-') {
                if !line.starts_with("---") {
                    stat.removed += rest.split_whitespace().count();
                }
            }
        }
        stat
    }
}

impl fmt::Display for DiffStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} insertion(+), {} deletion(-)",
            self.added, self.removed
        )
    }
}

/// Run `git diff <diff_args> --word-diff=porcelain` in `repo_dir` and count
/// the changed words.
pub fn word_diff_stat(repo_dir: &Path, diff_args: &[String]) -> Result<DiffStat, ToolError> {
    let output = CommandBuilder::new("git")
        .arg("diff")
        .args(diff_args)
        .arg("--word-diff=porcelain")
        .cwd(repo_dir)
        .exec_stdout()?;
    Ok(DiffStat::from_porcelain(&output))
}
