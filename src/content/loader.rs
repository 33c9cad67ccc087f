//! Loader for JSON board description files at startup.

use std::fs;
use std::path::{Path, PathBuf};

use super::data::BoardDef;
use super::registry::BoardRegistry;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Parse a single board description.
pub fn parse_board(contents: &str, file: &str) -> Result<BoardDef, ContentLoadError> {
    if contents.trim().is_empty() {
        return Err(ContentLoadError {
            file: file.to_string(),
            message: "Empty board file".to_string(),
        });
    }

    serde_json::from_str(contents).map_err(|e| ContentLoadError {
        file: file.to_string(),
        message: format!("Parse error: {}", e),
    })
}

/// Load a single board file from disk.
pub fn load_board_file(path: &Path) -> Result<BoardDef, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_board(&contents, &file_name)
}

/// Load every `*.json` file in `dir` into a BoardRegistry.
///
/// Files are read in name order. Boards that fail to load, or that reuse an
/// id already loaded, are reported in the error list and skipped; the rest
/// still make it into the registry.
pub fn load_board_directory(dir: &Path) -> (BoardRegistry, Vec<ContentLoadError>) {
    let mut registry = BoardRegistry::default();
    let mut errors = Vec::new();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            errors.push(ContentLoadError {
                file: dir.display().to_string(),
                message: format!("IO error: {}", e),
            });
            return (registry, errors);
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    for path in paths {
        match load_board_file(&path) {
            Ok(board) => {
                let id = board.id.clone();
                if !registry.insert(board) {
                    errors.push(ContentLoadError {
                        file: path.display().to_string(),
                        message: format!("Duplicate board id '{}'", id),
                    });
                }
            }
            Err(e) => errors.push(e),
        }
    }

    (registry, errors)
}
