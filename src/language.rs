//! Extension to code-fence language lookup.

use std::path::Path;

/// Tag used for any extension missing from the table.
pub const DEFAULT_LANGUAGE: &str = "text";

/// Looks up the fence tag for a lowercase extension with its leading dot,
/// e.g. `".py"`.
pub fn language_for_extension(ext: &str) -> &'static str {
    match ext {
        ".py" => "python",
        ".js" => "javascript",
        ".ts" => "typescript",
        ".java" => "java",
        ".c" | ".h" => "c",
        ".cpp" | ".hpp" => "cpp",
        ".html" => "html",
        ".css" => "css",
        ".md" => "markdown",
        ".txt" => "text",
        ".json" => "json",
        ".xml" => "xml",
        ".yml" | ".yaml" => "yaml",
        _ => DEFAULT_LANGUAGE,
    }
}

/// Infers the fence tag from a path's extension, case-insensitively.
///
/// Dotfiles such as `.bashrc` have no extension and get the default tag.
pub fn language_for_path(path: &Path) -> &'static str {
    match path.extension() {
        Some(ext) => {
            let ext = format!(".{}", ext.to_string_lossy().to_lowercase());
            language_for_extension(&ext)
        }
        None => DEFAULT_LANGUAGE,
    }
}
