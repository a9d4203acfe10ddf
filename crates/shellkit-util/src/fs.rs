use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs::DirEntry;
use std::path::{Component, Path, PathBuf};

use crate::errors::ToolError;

/// Ensure a directory exists, creating it and any parents if needed.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Whether a file name is hidden, i.e. starts with a dot.
pub fn is_hidden(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// Make `path` absolute relative to `base` and fold `.` and `..` components.
///
/// This is purely lexical: symlinks are not resolved and the path does not
/// need to exist. An empty `path` resolves to `base` itself.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `/..` stays at the root
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Whether `path` is a regular file the current process may execute.
///
/// Symlinks are followed. On Unix the check is `access(2)` with `X_OK`, so
/// it reflects the invoking user's effective permissions rather than just
/// the mode bits.
pub fn is_executable(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => has_execute_access(path),
        _ => false,
    }
}

#[cfg(unix)]
fn has_execute_access(path: &Path) -> bool {
    use nix::unistd::{access, AccessFlags};
    access(path, AccessFlags::X_OK).is_ok()
}

#[cfg(not(unix))]
fn has_execute_access(_path: &Path) -> bool {
    true
}

/// One directory yielded by [`DirWalk`] together with its direct entries,
/// in the order the platform listed them.
#[derive(Debug)]
pub struct Listing {
    pub dir: PathBuf,
    pub entries: Vec<DirEntry>,
}

/// A directory that could not be listed and was left out of the walk.
#[derive(Debug)]
pub struct SkippedDir {
    pub path: PathBuf,
    pub message: String,
}

impl From<SkippedDir> for ToolError {
    fn from(skipped: SkippedDir) -> Self {
        ToolError::Walk {
            path: skipped.path,
            message: skipped.message,
        }
    }
}

/// Pre-order, depth-first directory walk driven by an explicit stack.
///
/// Siblings are visited in listing order; nothing is sorted. Symlinked
/// directories are followed, but every physical directory is yielded at
/// most once, so cycles terminate. Directories that cannot be read are
/// recorded and returned by [`DirWalk::into_skipped`] instead of aborting the walk.
///
/// Every directory path the walk reaches is remembered, including aliases of
/// an already visited directory and unreadable directories, so
/// [`DirWalk::has_reached`] answers for all of them once the walk is done.
#[derive(Debug)]
pub struct DirWalk {
    pending: Vec<PathBuf>,
    visited: HashSet<PathBuf>,
    reached: HashSet<PathBuf>,
    aliases: HashSet<PathBuf>,
    skipped: Vec<SkippedDir>,
    skip_hidden: bool,
}

impl DirWalk {
    /// Start a walk at `root`, which is always yielded first.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            pending: vec![root.into()],
            visited: HashSet::new(),
            reached: HashSet::new(),
            aliases: HashSet::new(),
            skipped: Vec::new(),
            skip_hidden: false,
        }
    }

    /// Do not descend into directories whose name starts with a dot.
    /// The root is yielded regardless of its own name.
    pub fn skip_hidden(mut self, skip: bool) -> Self {
        self.skip_hidden = skip;
        self
    }

    /// Whether the walk reached `path`, directly or through a symlinked
    /// alias that was not descended into because its target was already
    /// visited. `path` is compared as given, so it should be absolute and
    /// normalized the same way as the root.
    pub fn has_reached(&self, path: &Path) -> bool {
        if self.reached.contains(path) {
            return true;
        }
        let under_alias = path.ancestors().skip(1).any(|a| self.aliases.contains(a));
        under_alias
            && std::fs::canonicalize(path).is_ok_and(|real| self.visited.contains(&real))
    }

    /// Consume the walk, returning the directories that could not be listed.
    pub fn into_skipped(self) -> Vec<SkippedDir> {
        self.skipped
    }

    fn first_visit(&mut self, dir: &Path) -> bool {
        let key = std::fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
        self.visited.insert(key)
    }
}

impl Iterator for DirWalk {
    type Item = Listing;

    fn next(&mut self) -> Option<Listing> {
        while let Some(dir) = self.pending.pop() {
            self.reached.insert(dir.clone());
            if !self.first_visit(&dir) {
                tracing::debug!("Already visited {}, skipping", dir.display());
                self.aliases.insert(dir);
                continue;
            }

            let read = match std::fs::read_dir(&dir) {
                Ok(read) => read,
                Err(e) => {
                    tracing::debug!("Cannot list {}: {e}", dir.display());
                    self.skipped.push(SkippedDir {
                        path: dir,
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            let entries: Vec<DirEntry> = read.filter_map(|e| e.ok()).collect();

            let children: Vec<PathBuf> = entries
                .iter()
                .filter(|e| !(self.skip_hidden && is_hidden(&e.file_name())))
                .map(|e| e.path())
                .filter(|p| p.is_dir())
                .collect();
            // Reverse so the first listed child is popped first.
            self.pending.extend(children.into_iter().rev());

            return Some(Listing { dir, entries });
        }
        None
    }
}
