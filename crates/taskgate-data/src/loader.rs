//! Player document loading: format detection, deserialization, validation,
//! and conversion into generation inputs.

use crate::schema::{GAME_NAME, PlayerDocument};
use ron::extensions::Extensions;
use std::path::{Path, PathBuf};
use taskgate_core::error::GenerateError;
use taskgate_core::graph::TaskGraph;
use taskgate_core::options::WorldOptions;

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur while loading a player document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// A serialization error occurred while writing a document.
    #[error("failed to write {file}: {detail}")]
    Write { file: PathBuf, detail: String },

    /// The document has no player name.
    #[error("player document {file} has no player name")]
    MissingName { file: PathBuf },

    /// The document belongs to a different game.
    #[error("player document {file} is for game '{found}', expected '{}'", GAME_NAME)]
    WrongGame { file: PathBuf, found: String },

    /// The document has no game options section.
    #[error("player document {file} has no '{}' section", GAME_NAME)]
    MissingSection { file: PathBuf },

    /// A host-common knob holds a value outside its range.
    #[error("progression_balancing {value} in {file} is out of range (0..=99)")]
    InvalidProgressionBalancing { file: PathBuf, value: u32 },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The document loaded but its options failed generation validation.
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, DocumentError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(DocumentError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

/// RON dialect for player documents. Implicit `Some` keeps the game section
/// directly under the game key, the same shape the TOML and JSON forms use;
/// no `Some(...)` wrapper appears in a document.
pub(crate) const RON_EXTENSIONS: Extensions = Extensions::IMPLICIT_SOME;

// ===========================================================================
// Loading
// ===========================================================================

/// Read and deserialize a document according to its extension. No
/// validation beyond what serde enforces.
pub fn read_document(path: &Path) -> Result<PlayerDocument, DocumentError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        Format::Ron => ron::Options::default()
            .with_default_extension(RON_EXTENSIONS)
            .from_str(&content)
            .map_err(|e| DocumentError::Parse {
                file: path.to_path_buf(),
                detail: e.to_string(),
            }),
        Format::Json => serde_json::from_str(&content).map_err(|e| DocumentError::Parse {
            file: path.to_path_buf(),
            detail: e.to_string(),
        }),
        Format::Toml => toml::from_str(&content).map_err(|e| DocumentError::Parse {
            file: path.to_path_buf(),
            detail: e.to_string(),
        }),
    }
}

/// Read a document and validate its top level: a non-empty player name, the
/// right game, a present options section, and in-range host-common knobs.
pub fn load_document(path: &Path) -> Result<PlayerDocument, DocumentError> {
    let document = read_document(path)?;

    if document.name.trim().is_empty() {
        return Err(DocumentError::MissingName {
            file: path.to_path_buf(),
        });
    }
    if document.game != GAME_NAME {
        return Err(DocumentError::WrongGame {
            file: path.to_path_buf(),
            found: document.game.clone(),
        });
    }
    let Some(section) = &document.section else {
        return Err(DocumentError::MissingSection {
            file: path.to_path_buf(),
        });
    };
    if section.progression_balancing > 99 {
        return Err(DocumentError::InvalidProgressionBalancing {
            file: path.to_path_buf(),
            value: section.progression_balancing,
        });
    }

    Ok(document)
}

/// Load a validated document and extract the generation options.
pub fn load_options(path: &Path) -> Result<WorldOptions, DocumentError> {
    let document = load_document(path)?;
    // load_document guarantees the section exists.
    let section = document
        .section
        .as_ref()
        .ok_or_else(|| DocumentError::MissingSection {
            file: path.to_path_buf(),
        })?;
    Ok(section.to_world_options())
}

/// Load a document and run it through graph compilation, surfacing both
/// document problems and generation problems as one error type.
pub fn compile_document(path: &Path) -> Result<TaskGraph, DocumentError> {
    let options = load_options(path)?;
    Ok(TaskGraph::compile(&options)?)
}

// ===========================================================================
// Tests
// ===========================================================================
