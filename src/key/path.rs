//! File path construction

use std::path::{Path, PathBuf};

/// Build `{directory}/{key}{extension}`.
///
/// The extension includes its dot (`".json"`) or is empty.
pub fn build_path(directory: &Path, key: &str, extension: &str) -> PathBuf {
    let mut file_name = String::with_capacity(key.len() + extension.len());
    file_name.push_str(key);
    file_name.push_str(extension);
    directory.join(file_name)
}
