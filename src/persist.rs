//! Save files.
//!
//! A save is the whole [`Game`] encoded with `bincode` into
//! `<dir>/<name>.kniffel`: every board, the dice, whose turn it is, the
//! action history and the random stream position. Loading a save resumes
//! exactly where it left off, down to the next roll.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::core::KniffelError;
use crate::game::Game;

/// File extension of save files, without the dot.
pub const SAVE_EXTENSION: &str = "kniffel";

/// Prefix of generated save names (`game1`, `game2`, ...).
pub const SAVE_PREFIX: &str = "game";

/// Persistence failures.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("save file is corrupt: {0}")]
    Codec(#[from] bincode::Error),

    #[error("save file holds an unplayable game: {0}")]
    Corrupt(#[source] KniffelError),

    #[error("no saved game named {name:?}")]
    NotFound { name: String },

    #[error("{name:?} is not a valid save name")]
    InvalidName { name: String },
}

/// Path of the save called `name` inside `dir`.
pub fn save_path(dir: &Path, name: &str) -> Result<PathBuf, SaveError> {
    let valid = !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(|c: char| matches!(c, '/' | '\\') || c.is_control());
    if !valid {
        return Err(SaveError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(dir.join(format!("{name}.{SAVE_EXTENSION}")))
}

/// Write `game` to `<dir>/<name>.kniffel`, replacing any previous save.
pub fn save_game<R: Serialize>(
    dir: &Path,
    name: &str,
    game: &Game<R>,
) -> Result<PathBuf, SaveError> {
    let path = save_path(dir, name)?;
    fs::create_dir_all(dir)?;

    let mut writer = BufWriter::new(File::create(&path)?);
    bincode::serialize_into(&mut writer, game)?;
    writer.flush()?;

    debug!(path = %path.display(), "game saved");
    Ok(path)
}

/// Read the save called `name` from `dir`.
///
/// A save that decodes but fails [`Game::validate`] is rejected as
/// [`SaveError::Corrupt`].
pub fn load_game<R: DeserializeOwned>(dir: &Path, name: &str) -> Result<Game<R>, SaveError> {
    let path = save_path(dir, name)?;
    if !path.is_file() {
        return Err(SaveError::NotFound {
            name: name.to_string(),
        });
    }

    let reader = BufReader::new(File::open(&path)?);
    let game: Game<R> = bincode::deserialize_from(reader)?;
    game.validate().map_err(SaveError::Corrupt)?;

    info!(path = %path.display(), "game loaded");
    Ok(game)
}

/// Names of every save in `dir`, sorted. A missing directory has no saves.
pub fn list_saves(dir: &Path) -> Result<Vec<String>, SaveError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };

    let mut names = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(SAVE_EXTENSION) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            names.push(stem.to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// The first of `game1`, `game2`, ... with no save in `dir` yet.
pub fn next_save_name(dir: &Path) -> Result<String, SaveError> {
    let mut counter = 1u32;
    loop {
        let name = format!("{SAVE_PREFIX}{counter}");
        if !save_path(dir, &name)?.exists() {
            return Ok(name);
        }
        counter += 1;
    }
}

/// Remove the save called `name` from `dir`.
pub fn delete_save(dir: &Path, name: &str) -> Result<(), SaveError> {
    let path = save_path(dir, name)?;
    match fs::remove_file(&path) {
        Ok(()) => {
            info!(path = %path.display(), "save deleted");
            Ok(())
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(SaveError::NotFound {
            name: name.to_string(),
        }),
        Err(err) => Err(err.into()),
    }
}
