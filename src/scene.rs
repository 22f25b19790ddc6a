//! Scene layout: the prop list loaded from `config/scene.json`, falling back
//! to the built-in farm when the file is missing or malformed.

use std::{fs, path::Path};

use homestead_core::ItemKind;
use serde::{Deserialize, Serialize};
use tracing::warn;

const DEFAULT_SCENE_PATH: &str = "config/scene.json";

/// One stocked slot inside a chest.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SlotSpec {
    pub row: usize,
    pub col: usize,
    pub kind: ItemKind,
    pub count: u32,
}

/// One prop placement in the scene file.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PropSpec {
    Table {
        position: [f32; 3],
    },
    HoePickup {
        position: [f32; 3],
    },
    CowPickup {
        position: [f32; 3],
    },
    Chest {
        position: [f32; 3],
        #[serde(default)]
        contents: Vec<SlotSpec>,
    },
    DirtBlock {
        position: [f32; 3],
    },
    SellingPoint {
        position: [f32; 3],
    },
    /// Decorative crate; position gets a small random scatter on spawn.
    Crate {
        position: [f32; 3],
        size: [f32; 3],
    },
}

/// The full scene layout.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SceneConfig {
    pub props: Vec<PropSpec>,
}

impl SceneConfig {
    /// The built-in farm layout used when no scene file is present.
    pub fn builtin() -> Self {
        let mut props = vec![
            PropSpec::Table {
                position: [6.0, 0.0, 0.0],
            },
            PropSpec::HoePickup {
                position: [4.5, 0.8, 0.0],
            },
            PropSpec::Chest {
                position: [0.0, 0.0, 8.0],
                contents: vec![
                    SlotSpec {
                        row: 0,
                        col: 0,
                        kind: ItemKind::TomatoSeed,
                        count: 5,
                    },
                    SlotSpec {
                        row: 0,
                        col: 1,
                        kind: ItemKind::Burger,
                        count: 3,
                    },
                ],
            },
            PropSpec::SellingPoint {
                position: [0.0, 0.0, -6.0],
            },
            PropSpec::CowPickup {
                position: [-9.0, 0.0, 0.0],
            },
        ];
        for dz in [-2.0, 0.0, 2.0] {
            props.push(PropSpec::DirtBlock {
                position: [-6.0, 0.0, dz],
            });
        }
        for (x, z) in [(9.0, 6.0), (-9.0, -6.0), (9.0, -6.0), (-9.0, 6.0)] {
            props.push(PropSpec::Crate {
                position: [x, 0.0, z],
                size: [0.5, 0.5, 0.5],
            });
        }
        Self { props }
    }
}

/// Load the scene layout from the default path.
pub fn load_scene() -> SceneConfig {
    load_scene_from_path(Path::new(DEFAULT_SCENE_PATH))
}

/// Load a scene layout from an explicit path, falling back to the built-in
/// farm on any error.
pub fn load_scene_from_path(path: &Path) -> SceneConfig {
    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str::<SceneConfig>(&contents) {
            Ok(scene) => scene,
            Err(err) => {
                warn!("Failed to parse {}: {err}. Using built-in scene", path.display());
                SceneConfig::builtin()
            }
        },
        Err(err) => {
            if err.kind() == std::io::ErrorKind::NotFound {
                warn!("Scene file not found at {}. Using built-in scene", path.display());
            } else {
                warn!("Failed to read {}: {err}. Using built-in scene", path.display());
            }
            SceneConfig::builtin()
        }
    }
}
