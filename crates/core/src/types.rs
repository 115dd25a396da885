use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    Wall,
    Floor,
    Chest,
    SavePoint,
    Exit,
}

impl TileKind {
    pub fn is_walkable(self) -> bool {
        self != TileKind::Wall
    }
}

/// Semantic role assigned to each generated room. Exactly one per room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RoomKind {
    Start,
    Combat,
    Elite,
    Treasure,
    Shop,
    Boss,
}

/// Tile/enemy-pool palette selected per story area or per dungeon floor band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Theme {
    Forest,
    Cave,
    Flower,
    Abyss,
}

impl Theme {
    /// Unknown names fall back to `Forest` so generation always produces a
    /// playable level instead of failing on a bad area string.
    pub fn from_name(name: &str) -> Self {
        match name {
            "cave" => Theme::Cave,
            "flower" => Theme::Flower,
            "abyss" => Theme::Abyss,
            _ => Theme::Forest,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Forest => "forest",
            Theme::Cave => "cave",
            Theme::Flower => "flower",
            Theme::Abyss => "abyss",
        }
    }
}
