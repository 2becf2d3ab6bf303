//! Starter document emission.
//!
//! Gives players a valid document to edit instead of a blank page: numbered
//! placeholder tasks, rewards set to the `RANDOM` sentinel, no
//! prerequisites.

use crate::loader::{DocumentError, Format, RON_EXTENSIONS, detect_format};
use crate::schema::{GAME_NAME, GameSection, PlayerDocument, RANDOM_REWARD};
use std::path::Path;
use taskgate_core::id::MAX_TASKS;

/// Serialize a document in the format chosen by the path's extension and
/// write it to disk.
///
/// RON output carries the `#![enable(implicit_some)]` header matching the
/// dialect the loader reads.
pub fn write_document(path: &Path, document: &PlayerDocument) -> Result<(), DocumentError> {
    let format = detect_format(path)?;
    let text = match format {
        Format::Ron => {
            let config = ron::ser::PrettyConfig::default().extensions(RON_EXTENSIONS);
            ron::ser::to_string_pretty(document, config).map_err(|e| DocumentError::Write {
                file: path.to_path_buf(),
                detail: e.to_string(),
            })?
        }
        Format::Json => {
            serde_json::to_string_pretty(document).map_err(|e| DocumentError::Write {
                file: path.to_path_buf(),
                detail: e.to_string(),
            })?
        }
        Format::Toml => toml::to_string_pretty(document).map_err(|e| DocumentError::Write {
            file: path.to_path_buf(),
            detail: e.to_string(),
        })?,
    };
    std::fs::write(path, text)?;
    Ok(())
}

/// Build the starter document for `n` tasks. `n` is clamped to
/// `1..=MAX_TASKS`.
pub fn template_document(n: usize) -> PlayerDocument {
    let n = n.clamp(1, MAX_TASKS);
    PlayerDocument {
        description: "Starter document. Replace the task and reward text with your own."
            .to_string(),
        name: "Player".to_string(),
        game: GAME_NAME.to_string(),
        section: Some(GameSection {
            tasks: (1..=n).map(|i| format!("Task {i}")).collect(),
            rewards: vec![RANDOM_REWARD.to_string(); n],
            task_prereqs: vec![String::new(); n],
            ..GameSection::default()
        }),
    }
}

/// Write a starter document with `n` placeholder tasks to `path`.
pub fn write_template(path: &Path, n: usize) -> Result<(), DocumentError> {
    write_document(path, &template_document(n))
}
