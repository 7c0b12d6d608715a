//! # dirdoc
//!
//! `dirdoc` snapshots a directory into a single Markdown document: an ASCII
//! tree of the directory structure followed by the contents of every text file,
//! each in a code fence tagged with a language inferred from its extension.
//!
//! Directories and files are excluded by name at every level. Files that are
//! not text are skipped silently, and files that cannot be read are logged via
//! `tracing` and skipped, so one bad file never aborts a run.
//!
//! # Example
//!
//! ```no_run
//! use dirdoc::{OutputFormat, SnapshotBuilder, write_document_to_file};
//!
//! let options = SnapshotBuilder::new(".")
//!     .ignore_dir("target")
//!     .output("docs.md")
//!     .build();
//!
//! let written = write_document_to_file(&options, OutputFormat::Markdown)
//!     .expect("Failed to write snapshot");
//! println!("{} files documented", written);
//! ```

mod dump;
mod error;
mod language;
mod options;
pub mod output;
mod tree;
mod types;

pub use dump::{ContentWalker, collect_sections, read_text, relative_path};
pub use error::DirdocError;
pub use language::{DEFAULT_LANGUAGE, language_for_extension, language_for_path};
pub use options::{
    BinaryDetection, DEFAULT_IGNORED_DIRS, DEFAULT_OUTPUT, SnapshotBuilder, SnapshotOptions,
};
pub use output::{
    OutputFormat, markdown_section, render_markdown, snapshot, write_document,
    write_document_to_file,
};
pub use tree::{render_entries, render_tree, root_name};
pub use types::{FileSection, Snapshot};
