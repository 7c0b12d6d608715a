use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Output file name used when none is given.
pub const DEFAULT_OUTPUT: &str = "full_directory.md";

/// Directory names skipped at every level unless defaults are disabled.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[".git", ".venv", "node_modules", "__pycache__"];

/// How the content dumper decides a file is not text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BinaryDetection {
    /// Binary iff the bytes are not valid UTF-8.
    #[default]
    Utf8,
    /// A NUL byte near the start, or invalid UTF-8.
    Simple,
    /// `content_inspector` classification, or invalid UTF-8.
    Accurate,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotOptions {
    pub root: PathBuf,
    pub ignored_dirs: BTreeSet<String>,
    pub ignored_files: BTreeSet<String>,
    pub output: PathBuf,
    pub binary_detection: BinaryDetection,
    pub follow_links: bool,
}
impl SnapshotOptions {
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.ignored_dirs.contains(name)
    }
    pub fn is_ignored_file(&self, name: &str) -> bool {
        self.ignored_files.contains(name)
    }
}
impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            ignored_dirs: DEFAULT_IGNORED_DIRS.iter().map(|s| s.to_string()).collect(),
            ignored_files: BTreeSet::from([DEFAULT_OUTPUT.to_string()]),
            output: PathBuf::from(DEFAULT_OUTPUT),
            binary_detection: BinaryDetection::default(),
            follow_links: false,
        }
    }
}
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    options: SnapshotOptions,
}
impl SnapshotBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: SnapshotOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn ignore_dir(mut self, name: impl Into<String>) -> Self {
        self.options.ignored_dirs.insert(name.into());
        self
    }
    pub fn ignore_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options
            .ignored_dirs
            .extend(names.into_iter().map(Into::into));
        self
    }
    pub fn ignore_file(mut self, name: impl Into<String>) -> Self {
        self.options.ignored_files.insert(name.into());
        self
    }
    pub fn ignore_files<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options
            .ignored_files
            .extend(names.into_iter().map(Into::into));
        self
    }
    /// Drops the built-in ignored directory names.
    pub fn no_default_ignores(mut self) -> Self {
        for name in DEFAULT_IGNORED_DIRS {
            self.options.ignored_dirs.remove(*name);
        }
        self
    }
    /// Sets the output path. Its file name replaces the previous output's
    /// name in the ignored files so the document never lists itself.
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        if let Some(old) = file_name_of(&self.options.output) {
            self.options.ignored_files.remove(&old);
        }
        self.options.output = path.into();
        if let Some(new) = file_name_of(&self.options.output) {
            self.options.ignored_files.insert(new);
        }
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn build(self) -> SnapshotOptions {
        self.options
    }
}

fn file_name_of(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}
