//! Directory tree copying for staging and publishing packs.

use crate::error::Result;
use crate::ignore::is_ignored;
use globset::GlobSet;
use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Recursively mirrors `src_dir` into `dest_dir`, skipping entries matched
/// by the ignore set.
///
/// An ignored directory is pruned with its entire subtree. Destination
/// directories are created as needed and existing files are overwritten.
/// The relative structure is preserved exactly.
///
/// # Errors
/// * `Error::Io` on the first filesystem failure; the copy aborts with no
///   rollback of already-copied entries
pub fn copy_dir_filtered<P: AsRef<Path>>(
    src_dir: P,
    dest_dir: P,
    ignore_set: &GlobSet,
) -> Result<()> {
    let src_dir = src_dir.as_ref();
    let dest_dir = dest_dir.as_ref();

    for entry in fs::read_dir(src_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let name_str = name.to_string_lossy();

        if is_ignored(ignore_set, &name_str) {
            debug!("Skipping ignored entry: {}", name_str);
            continue;
        }

        let src_path = entry.path();
        let dest_path = dest_dir.join(&name);
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            fs::create_dir_all(&dest_path)?;
            copy_dir_filtered(&src_path, &dest_path, ignore_set)?;
        } else {
            if let Some(parent) = dest_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(&src_path, &dest_path)?;
        }
    }

    Ok(())
}

/// Mirrors `src_dir` into `dest_dir` without any filtering.
///
/// Used by the publish steps, where the staged tree has already been
/// filtered.
pub fn copy_dir<P: AsRef<Path>>(src_dir: P, dest_dir: P) -> Result<()> {
    let src_dir = src_dir.as_ref();
    let dest_dir = dest_dir.as_ref();

    for entry in WalkDir::new(src_dir) {
        let entry = entry.map_err(std::io::Error::from)?;
        let relative = entry
            .path()
            .strip_prefix(src_dir)
            .map_err(std::io::Error::other)?;
        let dest_path = dest_dir.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest_path)?;
        } else {
            if let Some(parent) = dest_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &dest_path)?;
        }
    }

    Ok(())
}
