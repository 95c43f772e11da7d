//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{GameplayDefaults, LevelDef};

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

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse RON text. `file` only labels the error.
pub fn parse_ron<T>(contents: &str, file: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a single RON struct from disk.
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_ron(&contents, &file_name)
}

/// Load gameplay defaults and the level they point at from `base_path`.
/// Returns every error encountered so they can all be reported at once.
pub fn load_all_content(
    base_path: &Path,
) -> Result<(GameplayDefaults, LevelDef), Vec<ContentLoadError>> {
    // Defaults name the level file, so they are required before anything else
    let defaults_path = base_path.join("gameplay_defaults.ron");
    let defaults = load_single_file::<GameplayDefaults>(&defaults_path).map_err(|e| vec![e])?;

    let mut errors = Vec::new();

    if defaults.player_speed < 0.0 {
        errors.push(ContentLoadError {
            file: defaults_path.display().to_string(),
            message: format!("player_speed must not be negative, got {}", defaults.player_speed),
        });
    }

    let level_path = base_path.join(&defaults.level_file);
    let level = match load_single_file::<LevelDef>(&level_path) {
        Ok(level) => Some(level),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    match level {
        Some(level) if errors.is_empty() => Ok((defaults, level)),
        _ => Err(errors),
    }
}
