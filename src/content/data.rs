//! Data definitions for the RON content files.
//!
//! These structs mirror assets/data/gameplay_defaults.ron and the level files
//! under assets/data/levels/.

use serde::{Deserialize, Serialize};

// ============================================================================
// Gameplay defaults (gameplay_defaults.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GameplayDefaults {
    pub schema_version: u32,
    /// Level file to load, relative to assets/data/.
    pub level_file: String,
    /// Pixels per second.
    pub player_speed: f32,
    pub player_size: (f32, f32),
    pub enemy_size: (f32, f32),
    /// Fixed seed for enemy decisions. A fresh seed is rolled when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameplayDefaults {
    fn default() -> Self {
        Self {
            schema_version: 1,
            level_file: "levels/level_01.ron".to_string(),
            player_speed: 96.0,
            player_size: (20.0, 28.0),
            enemy_size: (20.0, 28.0),
            seed: None,
        }
    }
}

// ============================================================================
// Levels (levels/*.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub schema_version: u32,
    pub name: String,
    pub cell_side_length: f32,
    /// One string per grid row, top row first. See `CellKind::from_glyph`.
    pub rows: Vec<String>,
    /// (column, row) of the cell the player starts in.
    pub player_spawn: (usize, usize),
    #[serde(default)]
    pub enemies: Vec<EnemySpawnDef>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnemySpawnDef {
    pub cell: (usize, usize),
    pub speed: f32,
    #[serde(default)]
    pub can_move_over_empty_cells: bool,
}

impl Default for LevelDef {
    /// Small built-in level used when no level file can be loaded.
    fn default() -> Self {
        let rows = [
            "FFFFdFFFFFFdFFFF",
            "....H......H....",
            "....H......H....",
            "FFFFuFFFFFFbFFFF",
            "...........H....",
            "...........H....",
            "FFFFFFFFFFFuFFFF",
        ];

        Self {
            schema_version: 1,
            name: "Fallback".to_string(),
            cell_side_length: 32.0,
            rows: rows.iter().map(|row| row.to_string()).collect(),
            player_spawn: (1, 6),
            enemies: vec![EnemySpawnDef {
                cell: (14, 0),
                speed: 64.0,
                can_move_over_empty_cells: false,
            }],
        }
    }
}
