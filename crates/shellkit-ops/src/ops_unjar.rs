//! Operation: unpack every `.jar` and `.zip` below a directory, including
//! archives that only appear after unpacking others.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};

use shellkit_util::errors::ToolError;
use shellkit_util::fs::{ensure_dir, DirWalk, SkippedDir};
use shellkit_util::progress;

/// File name patterns treated as archives.
pub const ARCHIVE_PATTERNS: &[&str] = &["*.jar", "*.zip"];

/// Outcome of [`unjar`].
#[derive(Debug, Default)]
pub struct UnjarReport {
    /// Every archive that was processed, successfully or not.
    pub processed: BTreeSet<PathBuf>,
    /// Archives that could not be extracted.
    pub failed: Vec<ToolError>,
    /// Directories that could not be listed on the final scan.
    pub skipped: Vec<SkippedDir>,
    /// Number of full-tree scans performed.
    pub passes: usize,
}

/// Glob set matching [`ARCHIVE_PATTERNS`] against file names.
pub fn archive_matcher() -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in ARCHIVE_PATTERNS {
        builder.add(Glob::new(pattern).expect("valid archive glob"));
    }
    builder.build().expect("valid archive glob set")
}

/// Repeatedly scan `root` and extract every archive not seen before into the
/// directory containing it, until a scan finds nothing new.
///
/// Each archive is attempted once; failures are logged and collected so
/// that the loop always terminates.
pub fn unjar(root: &Path) -> UnjarReport {
    let matcher = archive_matcher();
    let mut report = UnjarReport::default();

    loop {
        report.passes += 1;
        let pb = progress::spinner(&format!(
            "Scanning {} (pass {})",
            root.display(),
            report.passes
        ));

        let mut found_new = false;
        let mut walk = DirWalk::new(root);
        for listing in walk.by_ref() {
            for entry in &listing.entries {
                let path = entry.path();
                if report.processed.contains(&path)
                    || !matcher.is_match(entry.file_name())
                    || !path.is_file()
                {
                    continue;
                }

                found_new = true;
                pb.suspend(|| progress::status("Extracting", &path.display().to_string()));
                if let Err(e) = extract_zip(&path, &listing.dir) {
                    tracing::warn!("{e}");
                    report.failed.push(e);
                }
                report.processed.insert(path);
            }
        }
        pb.finish_and_clear();
        report.skipped = walk.into_skipped();

        if !found_new {
            break;
        }
    }

    report
}

/// Extract the archive at `zip_path` into `dest`, overwriting existing files.
///
/// Entries whose names would escape `dest` are skipped. Unix permission bits
/// stored in the archive are restored.
pub fn extract_zip(zip_path: &Path, dest: &Path) -> Result<(), ToolError> {
    let archive_err = |message: String| ToolError::Archive {
        path: zip_path.to_path_buf(),
        message,
    };

    let file = fs::File::open(zip_path).map_err(|e| archive_err(e.to_string()))?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| archive_err(format!("failed to open: {e}")))?;

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| archive_err(format!("entry {i}: {e}")))?;

        let Some(relative) = entry.enclosed_name() else {
            tracing::warn!(
                "Skipping unsafe entry {} in {}",
                entry.name(),
                zip_path.display()
            );
            continue;
        };
        let out_path = dest.join(relative);

        if entry.is_dir() {
            ensure_dir(&out_path).map_err(ToolError::Io)?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            ensure_dir(parent).map_err(ToolError::Io)?;
        }
        let mut out = fs::File::create(&out_path).map_err(ToolError::Io)?;
        std::io::copy(&mut entry, &mut out)
            .map_err(|e| archive_err(format!("failed to read {}: {e}", entry.name())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                if let Err(e) = fs::set_permissions(&out_path, fs::Permissions::from_mode(mode)) {
                    tracing::warn!("Failed to set permissions on {}: {e}", out_path.display());
                }
            }
        }
    }
    Ok(())
}
