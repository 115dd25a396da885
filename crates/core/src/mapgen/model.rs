//! Public data model for generated levels: tile grid, classified rooms, and
//! entity placement lists consumed by the combat/loot collaborators.

use xxhash_rust::xxh3::xxh3_64;

use crate::types::{Pos, RoomKind, TileKind};

/// Axis-aligned room rectangle in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

impl Rect {
    pub fn right(self) -> usize {
        self.x + self.w - 1
    }

    pub fn bottom(self) -> usize {
        self.y + self.h - 1
    }

    pub fn center(self) -> Pos {
        Pos { y: (self.y + self.h / 2) as i32, x: (self.x + self.w / 2) as i32 }
    }

    pub fn contains(self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) >= self.x
            && (pos.x as usize) <= self.right()
            && (pos.y as usize) >= self.y
            && (pos.y as usize) <= self.bottom()
    }

    pub fn area(self) -> usize {
        self.w * self.h
    }
}

/// A carved room plus the semantic role the classifier assigned to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedRoom {
    pub rect: Rect,
    pub kind: RoomKind,
}

/// One enemy to spawn when the floor loads.
///
/// `hp`/`atk` carry the template base stats with the elite modifier already
/// applied where `is_elite` is set; area-level scaling happens in the combat
/// consumer through the scaling API. Placements are created once at
/// generation time and never mutated by this engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnemyPlacement {
    pub template_id: &'static str,
    pub pos: Pos,
    pub hp: i32,
    pub atk: i32,
    pub is_elite: bool,
    pub is_boss: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedLevel {
    pub cols: usize,
    pub rows: usize,
    pub tiles: Vec<TileKind>,
    pub rooms: Vec<PlacedRoom>,
    pub enemies: Vec<EnemyPlacement>,
    pub chests: Vec<Pos>,
    pub shops: Vec<Pos>,
    pub start_tile: Pos,
    pub save_point_tile: Pos,
    pub exit_tile: Pos,
}

impl GeneratedLevel {
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if pos.x < 0 || pos.y < 0 {
            return TileKind::Wall;
        }
        let x = pos.x as usize;
        let y = pos.y as usize;
        if x >= self.cols || y >= self.rows {
            return TileKind::Wall;
        }
        self.tiles[y * self.cols + x]
    }

    /// Stable byte serialization used for determinism fingerprints. Field
    /// order and encoding must not change silently; regression tests compare
    /// these bytes across calls.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.cols as u32).to_le_bytes());
        bytes.extend((self.rows as u32).to_le_bytes());
        for tile in &self.tiles {
            bytes.push(match tile {
                TileKind::Wall => 0,
                TileKind::Floor => 1,
                TileKind::Chest => 2,
                TileKind::SavePoint => 3,
                TileKind::Exit => 4,
            });
        }

        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for room in &self.rooms {
            bytes.extend((room.rect.x as u32).to_le_bytes());
            bytes.extend((room.rect.y as u32).to_le_bytes());
            bytes.extend((room.rect.w as u32).to_le_bytes());
            bytes.extend((room.rect.h as u32).to_le_bytes());
            bytes.push(match room.kind {
                RoomKind::Start => 0,
                RoomKind::Combat => 1,
                RoomKind::Elite => 2,
                RoomKind::Treasure => 3,
                RoomKind::Shop => 4,
                RoomKind::Boss => 5,
            });
        }

        bytes.extend((self.enemies.len() as u32).to_le_bytes());
        for enemy in &self.enemies {
            bytes.extend(enemy.template_id.as_bytes());
            bytes.push(0);
            bytes.extend(enemy.pos.y.to_le_bytes());
            bytes.extend(enemy.pos.x.to_le_bytes());
            bytes.extend(enemy.hp.to_le_bytes());
            bytes.extend(enemy.atk.to_le_bytes());
            bytes.push(u8::from(enemy.is_elite));
            bytes.push(u8::from(enemy.is_boss));
        }

        bytes.extend((self.chests.len() as u32).to_le_bytes());
        for chest in &self.chests {
            bytes.extend(chest.y.to_le_bytes());
            bytes.extend(chest.x.to_le_bytes());
        }
        bytes.extend((self.shops.len() as u32).to_le_bytes());
        for shop in &self.shops {
            bytes.extend(shop.y.to_le_bytes());
            bytes.extend(shop.x.to_le_bytes());
        }

        for pos in [self.start_tile, self.save_point_tile, self.exit_tile] {
            bytes.extend(pos.y.to_le_bytes());
            bytes.extend(pos.x.to_le_bytes());
        }

        bytes
    }

    /// xxh3 over the canonical bytes, handy for quick equality checks in
    /// tests and the fuzz harness.
    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}
