//! Procedural level generation pipeline: BSP partition, room/corridor
//! carving, room classification, and entity population, all driven by one
//! deterministic stream per call.

mod bsp;
mod classify;
mod layout;
mod model;
mod populate;

pub use classify::BOSS_INTERVAL;
pub use model::{EnemyPlacement, GeneratedLevel, PlacedRoom, Rect};

use crate::rng::GenRng;
use crate::types::{RoomKind, Theme, TileKind};

pub const GRID_COLS: usize = 20;
pub const GRID_ROWS: usize = 15;

pub fn generate_level(seed: u32, theme: Theme, area_level: i32) -> GeneratedLevel {
    LevelGenerator::new(seed, theme, area_level).generate()
}

pub struct LevelGenerator {
    seed: u32,
    theme: Theme,
    area_level: i32,
    cols: usize,
    rows: usize,
}

impl LevelGenerator {
    pub fn new(seed: u32, theme: Theme, area_level: i32) -> Self {
        Self { seed, theme, area_level, cols: GRID_COLS, rows: GRID_ROWS }
    }

    /// Run the full pipeline. Stateless with respect to the seed: the only
    /// mutable state is the stream created here, so two calls with the same
    /// inputs produce bit-identical levels.
    pub fn generate(&self) -> GeneratedLevel {
        let mut rng = GenRng::new(self.seed);
        let mut tiles = vec![TileKind::Wall; self.cols * self.rows];

        let mut tree = bsp::build_tree(self.cols, self.rows, &mut rng);
        let room_rects = layout::carve_rooms(&mut tree, &mut tiles, self.cols, &mut rng);
        layout::connect_rooms(&tree, &mut tiles, self.cols);

        let kinds = classify::classify_rooms(room_rects.len(), self.area_level, &mut rng);
        let populated = populate::populate(
            &mut tiles,
            self.cols,
            &room_rects,
            &kinds,
            self.theme,
            self.area_level,
            &mut rng,
        );

        let rooms = room_rects
            .into_iter()
            .zip(kinds)
            .map(|(rect, kind)| PlacedRoom { rect, kind })
            .collect();

        GeneratedLevel {
            cols: self.cols,
            rows: self.rows,
            tiles,
            rooms,
            enemies: populated.enemies,
            chests: populated.chests,
            shops: populated.shops,
            start_tile: populated.start_tile,
            save_point_tile: populated.save_point_tile,
            exit_tile: populated.exit_tile,
        }
    }
}
