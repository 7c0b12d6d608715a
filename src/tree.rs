//! Internal module for rendering the directory tree view.

use crate::error::DirdocError;
use crate::options::SnapshotOptions;
use std::fs;
use std::path::{Path, PathBuf};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const BLANK_INDENT: &str = "    ";

struct TreeEntry {
    name: String,
    path: PathBuf,
    is_dir: bool,
    is_symlink: bool,
}

/// Renders `options.root` as a tree, one `\n`-terminated line per entry.
///
/// The first line is `<root-name>/`. Entries at each level are sorted by
/// name with files and directories interleaved; ignored names are dropped
/// together with everything beneath them.
///
/// # Errors
///
/// Fails when the root is not a directory or cannot be listed. Nested
/// directories that cannot be listed are logged and rendered empty.
pub fn render_tree(options: &SnapshotOptions) -> Result<String, DirdocError> {
    let root = &options.root;
    if !root.is_dir() {
        return Err(DirdocError::InvalidRoot(root.clone()));
    }
    let mut out = format!("{}/\n", root_name(root));
    render_level(root, "", options, &mut out)?;
    Ok(out)
}

/// Renders the entries below `dir` without a line for `dir` itself, each
/// line starting with `prefix`.
pub fn render_entries(
    dir: &Path,
    prefix: &str,
    options: &SnapshotOptions,
) -> Result<String, DirdocError> {
    let mut out = String::new();
    render_level(dir, prefix, options, &mut out)?;
    Ok(out)
}

/// Display name of the root: the last component of its canonical path.
pub fn root_name(root: &Path) -> String {
    let resolved = fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
    match resolved.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => resolved.display().to_string(),
    }
}

fn render_level(
    dir: &Path,
    prefix: &str,
    options: &SnapshotOptions,
    out: &mut String,
) -> Result<(), DirdocError> {
    let entries = list_entries(dir, options)?;
    let total = entries.len();
    for (idx, entry) in entries.into_iter().enumerate() {
        let is_last = idx + 1 == total;
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        if !entry.is_dir {
            out.push_str(&format!("{}{}{}\n", prefix, connector, entry.name));
            continue;
        }
        out.push_str(&format!("{}{}{}/\n", prefix, connector, entry.name));
        if entry.is_symlink && !options.follow_links {
            continue;
        }
        let indent = if is_last { BLANK_INDENT } else { PIPE_INDENT };
        let child_prefix = format!("{}{}", prefix, indent);
        if let Err(e) = render_level(&entry.path, &child_prefix, options, out) {
            tracing::warn!("Skipping contents of {}: {}", entry.path.display(), e);
        }
    }
    Ok(())
}

fn list_entries(dir: &Path, options: &SnapshotOptions) -> Result<Vec<TreeEntry>, DirdocError> {
    let read_dir = fs::read_dir(dir).map_err(|e| DirdocError::io(dir, e))?;
    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();
        let is_symlink = entry.file_type().map(|t| t.is_symlink()).unwrap_or(false);
        // Both checks follow symlinks; a dangling link is neither and is listed as a file.
        let is_dir = path.is_dir();
        let is_file = path.is_file();
        if (is_dir && options.is_ignored_dir(&name)) || (is_file && options.is_ignored_file(&name))
        {
            continue;
        }
        entries.push(TreeEntry {
            name,
            path,
            is_dir,
            is_symlink,
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
