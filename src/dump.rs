//! Content dumper: walks the root and yields every readable text file.

use crate::error::DirdocError;
use crate::language::language_for_path;
use crate::options::{BinaryDetection, SnapshotOptions};
use crate::types::FileSection;
use ignore::WalkBuilder;
use std::fs;
use std::path::{Component, Path};

/// Bytes inspected by the sniffing detection strategies.
const SNIFF_LEN: usize = 8192;

/// Lazy iterator over the text files under a root.
///
/// Ignored directory names are pruned before descent, so nothing beneath
/// them is ever read. Files that are not text are skipped silently; other
/// read failures are logged and skipped. Entries are visited in file-name
/// order within each directory, which keeps repeated runs identical.
pub struct ContentWalker {
    inner: ignore::Walk,
    options: SnapshotOptions,
}
impl ContentWalker {
    pub fn new(options: &SnapshotOptions) -> Result<Self, DirdocError> {
        if !options.root.is_dir() {
            return Err(DirdocError::InvalidRoot(options.root.clone()));
        }
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .follow_links(options.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b));
        let filter = options.clone();
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 || !entry.path().is_dir() {
                return true;
            }
            !filter.is_ignored_dir(&entry.file_name().to_string_lossy())
        });
        Ok(Self {
            inner: builder.build(),
            options: options.clone(),
        })
    }

    fn section_for(&self, path: &Path) -> Option<FileSection> {
        let relative = relative_path(&self.options.root, path);
        match read_text(path, self.options.binary_detection) {
            Ok(content) => Some(FileSection {
                language: language_for_path(path).to_string(),
                path: relative,
                content,
            }),
            Err(DirdocError::Io { source, .. }) => {
                tracing::warn!("Error reading {}: {}", path.display(), source);
                None
            }
            Err(e) => {
                tracing::trace!("Skipping {}", e);
                None
            }
        }
    }
}
impl Iterator for ContentWalker {
    type Item = FileSection;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    continue;
                }
            };
            if entry.depth() == 0 {
                continue;
            }
            let path = entry.path();
            if path.is_dir() {
                continue;
            }
            if self
                .options
                .is_ignored_file(&entry.file_name().to_string_lossy())
            {
                continue;
            }
            if let Some(section) = self.section_for(path) {
                return Some(section);
            }
        }
    }
}

/// Collects every text file under the root.
pub fn collect_sections(options: &SnapshotOptions) -> Result<Vec<FileSection>, DirdocError> {
    Ok(ContentWalker::new(options)?.collect())
}

/// Reads a file as text, returning [`DirdocError::Decode`] when the
/// configured strategy classifies it as binary.
pub fn read_text(path: &Path, detection: BinaryDetection) -> Result<String, DirdocError> {
    let bytes = fs::read(path).map_err(|e| DirdocError::io(path, e))?;
    let head = &bytes[..bytes.len().min(SNIFF_LEN)];
    let is_binary = match detection {
        BinaryDetection::Utf8 => false,
        BinaryDetection::Simple => head.contains(&0),
        BinaryDetection::Accurate => content_inspector::inspect(head).is_binary(),
    };
    if is_binary {
        return Err(DirdocError::decode(path));
    }
    String::from_utf8(bytes).map_err(|_| DirdocError::decode(path))
}

/// Root-relative path with `/` separators on every platform.
pub fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
