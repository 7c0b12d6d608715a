//! Document output for dirdoc snapshots.
//!
//! The Markdown document is written incrementally: the tree first, then one
//! section per text file as the content walker yields it. The JSON format
//! collects a [`Snapshot`] and serializes it in one go.

use crate::dump::{ContentWalker, collect_sections};
use crate::error::DirdocError;
use crate::options::SnapshotOptions;
use crate::tree::{render_tree, root_name};
use crate::types::{FileSection, Snapshot};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

/// Builds the whole snapshot in memory.
pub fn snapshot(options: &SnapshotOptions) -> Result<Snapshot, DirdocError> {
    Ok(Snapshot {
        root_name: root_name(&options.root),
        tree: render_tree(options)?,
        files: collect_sections(options)?,
    })
}

/// Writes the document for `options` to `out`, returning the number of
/// file sections written.
pub fn write_document<W: Write>(
    options: &SnapshotOptions,
    format: OutputFormat,
    out: &mut W,
) -> Result<usize, DirdocError> {
    match format {
        OutputFormat::Markdown => write_markdown(options, out),
        OutputFormat::Json => write_json(options, out),
    }
}

/// Creates `options.output` and writes the document into it.
///
/// The file handle lives for the whole run; failures reading individual
/// files never reach it.
pub fn write_document_to_file(
    options: &SnapshotOptions,
    format: OutputFormat,
) -> Result<usize, DirdocError> {
    if !options.root.is_dir() {
        return Err(DirdocError::InvalidRoot(options.root.clone()));
    }
    let path = options.output.as_path();
    let file = File::create(path).map_err(|e| DirdocError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    let written = write_document(options, format, &mut writer)?;
    writer.flush().map_err(|e| DirdocError::io(path, e))?;
    Ok(written)
}

/// Renders the Markdown document into a string.
pub fn render_markdown(options: &SnapshotOptions) -> Result<String, DirdocError> {
    let mut buf = Vec::new();
    write_markdown(options, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

// ----------------------- Internal formatting -----------------------

fn write_markdown<W: Write>(options: &SnapshotOptions, out: &mut W) -> Result<usize, DirdocError> {
    let sink = options.output.as_path();
    let tree = render_tree(options)?;
    write_str(out, sink, &markdown_header(&tree))?;

    let mut written = 0;
    for section in ContentWalker::new(options)? {
        write_str(out, sink, &markdown_section(&section))?;
        written += 1;
    }
    tracing::debug!("Wrote {} file sections", written);
    Ok(written)
}

fn write_json<W: Write>(options: &SnapshotOptions, out: &mut W) -> Result<usize, DirdocError> {
    let snapshot = snapshot(options)?;
    serde_json::to_writer_pretty(&mut *out, &snapshot)?;
    write_str(out, options.output.as_path(), "\n")?;
    Ok(snapshot.files.len())
}

fn markdown_header(tree: &str) -> String {
    let mut out = String::with_capacity(tree.len() + 96);
    out.push_str("# Project Documentation\n\n");
    out.push_str("## Directory Structure\n\n");
    out.push_str("```\n");
    out.push_str(tree);
    out.push_str("\n```\n\n");
    out.push_str("## File Contents\n\n");
    out
}

/// Formats one file as a Markdown section. The closing fence always starts
/// on a fresh line, so content that already ends in a newline gets a blank
/// line before it.
pub fn markdown_section(section: &FileSection) -> String {
    let mut out = String::with_capacity(section.content.len() + section.path.len() + 32);
    out.push_str(&format!("# {}\n\n", section.path));
    out.push_str(&format!("```{}\n", section.language));
    out.push_str(&section.content);
    out.push_str("\n```\n\n");
    out.push_str("---\n\n");
    out
}

fn write_str<W: Write>(out: &mut W, sink: &Path, text: &str) -> Result<(), DirdocError> {
    out.write_all(text.as_bytes())
        .map_err(|e| DirdocError::io(sink, e))
}
