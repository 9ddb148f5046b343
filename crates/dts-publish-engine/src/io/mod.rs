use crate::normalize::{self, NormalizeError, NormalizeOptions};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed declarations in {path}: {source}")]
    Normalize {
        path: PathBuf,
        source: NormalizeError,
    },
}

/// Counts reported after normalizing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeSummary {
    pub namespaces: usize,
    pub catch_all_lines: usize,
    pub bytes_written: usize,
}

/// Read a declaration file as UTF-8
pub fn read_declaration_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a declaration file, replacing any existing content
pub fn write_declaration_file(path: &Path, content: &str) -> Result<(), IoError> {
    let write_err = |source| IoError::Write {
        path: path.to_path_buf(),
        source,
    };

    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    fs::write(path, content).map_err(write_err)
}

/// Normalize `input` and write the result to `output`.
pub fn normalize_file(
    input: &Path,
    output: &Path,
    options: &NormalizeOptions,
) -> Result<NormalizeSummary, IoError> {
    let text = read_declaration_file(input)?;

    let scanned = normalize::scan(&text, options).map_err(|source| IoError::Normalize {
        path: input.to_path_buf(),
        source,
    })?;
    let rendered = normalize::render::render(&scanned, options.catch_all);

    write_declaration_file(output, &rendered)?;

    Ok(NormalizeSummary {
        namespaces: scanned.namespaces.len(),
        catch_all_lines: scanned.catch_all.len(),
        bytes_written: rendered.len(),
    })
}
