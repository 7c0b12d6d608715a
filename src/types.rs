use serde::{Deserialize, Serialize};

/// One text file as it appears in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSection {
    /// Path relative to the root, always with `/` separators.
    pub path: String,
    /// Code fence tag inferred from the extension.
    pub language: String,
    /// The file's contents, verbatim.
    pub content: String,
}

/// A complete in-memory snapshot of a directory.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Name shown on the first tree line.
    pub root_name: String,
    /// The rendered tree, starting with `<root_name>/`.
    pub tree: String,
    /// Every text file found, in traversal order.
    pub files: Vec<FileSection>,
}
