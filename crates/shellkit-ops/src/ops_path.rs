//! Operation: build a command search path from the executables found under
//! a directory tree, or strip that tree back out of an existing path.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::Path;

use shellkit_util::fs::{absolutize, is_executable, is_hidden, DirWalk, SkippedDir};

/// Separator between entries of a search-path variable on this platform.
pub const PATH_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// Line written to stderr when the arguments are not understood.
pub const USAGE_WARNING: &str = "Error: Bad usage. I am just removing duplicates.";

/// What the path collector should do, derived from the raw arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Prepend every directory holding a new executable.
    Build,
    /// Drop every directory under the current one.
    Remove,
    /// Unrecognised arguments: only deduplicate the existing path.
    Invalid,
}

impl Mode {
    /// No arguments selects [`Mode::Build`]; a single `-remove` (or
    /// `--remove`) selects [`Mode::Remove`]; anything else is invalid.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        match args {
            [] => Mode::Build,
            [flag] if matches!(flag.as_ref(), "-remove" | "--remove") => Mode::Remove,
            _ => Mode::Invalid,
        }
    }
}

/// Split a search-path variable into its entries.
///
/// Empty entries are kept, as the shell treats them as the current directory.
pub fn split_search_path(value: &str) -> Vec<String> {
    value.split(PATH_SEPARATOR).map(str::to_string).collect()
}

/// An ordered list of directories in which every entry appears once.
#[derive(Debug, Default, Clone)]
pub struct SearchPath {
    entries: Vec<String>,
    seen: HashSet<String>,
}

impl SearchPath {
    /// Append `dir` unless it is already present. Returns whether it was added.
    pub fn push(&mut self, dir: impl Into<String>) -> bool {
        let dir = dir.into();
        if self.seen.contains(&dir) {
            return false;
        }
        self.seen.insert(dir.clone());
        self.entries.push(dir);
        true
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl fmt::Display for SearchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = PATH_SEPARATOR.to_string();
        f.write_str(&self.entries.join(&sep))
    }
}

/// Executable name to the directories providing it, in discovery order.
#[derive(Debug, Default)]
pub struct ExecutableRegistry {
    by_name: BTreeMap<String, Vec<String>>,
}

impl ExecutableRegistry {
    /// Record that `dir` contains an executable called `name`.
    ///
    /// Returns `true` when no directory had provided `name` before.
    pub fn register(&mut self, name: impl Into<String>, dir: &str) -> bool {
        let dirs = self.by_name.entry(name.into()).or_default();
        let is_new = dirs.is_empty();
        dirs.push(dir.to_string());
        is_new
    }

    /// Every executable provided by more than one distinct directory,
    /// ordered by executable name.
    pub fn conflicts(&self) -> Vec<Shadowing> {
        self.by_name
            .iter()
            .filter_map(|(name, dirs)| {
                let (winner, rest) = dirs.split_first()?;
                let mut shadowed: Vec<String> = Vec::new();
                for dir in rest {
                    if dir != winner && !shadowed.contains(dir) {
                        shadowed.push(dir.clone());
                    }
                }
                if shadowed.is_empty() {
                    return None;
                }
                Some(Shadowing {
                    name: name.clone(),
                    winner: winner.clone(),
                    shadowed,
                })
            })
            .collect()
    }
}

/// An executable name found in several directories of the scanned tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shadowing {
    pub name: String,
    /// The directory whose copy takes precedence.
    pub winner: String,
    pub shadowed: Vec<String>,
}

impl fmt::Display for Shadowing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Warning: using {name} from {winner}; ignoring {name} from {rest}",
            name = self.name,
            winner = self.winner,
            rest = self.shadowed.join(" and "),
        )
    }
}

/// Outcome of [`compute_search_path`].
#[derive(Debug, Default)]
pub struct PathReport {
    pub path: SearchPath,
    /// Shadowing conflicts, only populated in [`Mode::Build`].
    pub conflicts: Vec<Shadowing>,
    /// Directories that could not be listed during the walk.
    pub skipped: Vec<SkippedDir>,
}

/// Compute the new search path for `mode`.
///
/// `current_dir` is the root of the scanned tree and `existing` the entries
/// of the search path already in effect. The filesystem is only read.
pub fn compute_search_path(mode: Mode, current_dir: &Path, existing: &[String]) -> PathReport {
    let root = absolutize(current_dir, Path::new(""));
    match mode {
        Mode::Build => build(&root, existing),
        Mode::Remove => remove(&root, existing),
        Mode::Invalid => {
            let mut report = PathReport::default();
            for dir in existing {
                report.path.push(dir.as_str());
            }
            report
        }
    }
}

fn build(root: &Path, existing: &[String]) -> PathReport {
    let mut registry = ExecutableRegistry::default();
    let mut path = SearchPath::default();

    let mut walk = DirWalk::new(root).skip_hidden(true);
    for listing in walk.by_ref() {
        let dir = listing.dir.to_string_lossy().into_owned();
        let mut has_new_executable = false;
        for entry in &listing.entries {
            let name = entry.file_name();
            if is_hidden(&name) || !is_executable(&entry.path()) {
                continue;
            }
            if registry.register(name.to_string_lossy(), &dir) {
                has_new_executable = true;
            }
        }
        if has_new_executable {
            tracing::debug!("Adding {dir}");
            path.push(dir);
        }
    }

    for dir in existing {
        path.push(dir.as_str());
    }

    PathReport {
        path,
        conflicts: registry.conflicts(),
        skipped: walk.into_skipped(),
    }
}

fn remove(root: &Path, existing: &[String]) -> PathReport {
    // Unreadable directories and symlinked aliases count as part of the
    // tree even though the walk does not yield them.
    let mut walk = DirWalk::new(root);
    walk.by_ref().for_each(drop);

    let mut path = SearchPath::default();
    for dir in existing {
        if walk.has_reached(&absolutize(root, Path::new(dir))) {
            tracing::debug!("Removing {dir}");
            continue;
        }
        path.push(dir.as_str());
    }

    PathReport {
        path,
        conflicts: Vec::new(),
        skipped: walk.into_skipped(),
    }
}
