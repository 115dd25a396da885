//! Fixed content tables: enemy templates per theme, boss roster, and the
//! per-area difficulty offsets consumed by the scaling functions.

use crate::types::Theme;

pub mod keys {
    pub const ENEMY_WASP_SCOUT: &str = "enemy_wasp_scout";
    pub const ENEMY_BEETLE_GRUB: &str = "enemy_beetle_grub";
    pub const ENEMY_THORN_SPIDER: &str = "enemy_thorn_spider";

    pub const ENEMY_CAVE_MOTH: &str = "enemy_cave_moth";
    pub const ENEMY_STONE_WEEVIL: &str = "enemy_stone_weevil";
    pub const ENEMY_GLOOM_TICK: &str = "enemy_gloom_tick";

    pub const ENEMY_POLLEN_MITE: &str = "enemy_pollen_mite";
    pub const ENEMY_HONEY_SLIME: &str = "enemy_honey_slime";
    pub const ENEMY_RAZOR_MANTIS: &str = "enemy_razor_mantis";

    pub const ENEMY_VOID_DRONE: &str = "enemy_void_drone";
    pub const ENEMY_HUSK_SPAWN: &str = "enemy_husk_spawn";
    pub const ENEMY_ABYSS_STINGER: &str = "enemy_abyss_stinger";

    pub const BOSS_HORNET_WARLORD: &str = "boss_hornet_warlord";
    pub const BOSS_FUNGAL_TYRANT: &str = "boss_fungal_tyrant";
    pub const BOSS_QUEEN_OF_THORNS: &str = "boss_queen_of_thorns";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnemyTemplate {
    pub id: &'static str,
    pub hp: i32,
    pub atk: i32,
    pub speed: u32,
    pub xp: i32,
}

const FOREST_POOL: [EnemyTemplate; 3] = [
    EnemyTemplate { id: keys::ENEMY_WASP_SCOUT, hp: 6, atk: 3, speed: 14, xp: 4 },
    EnemyTemplate { id: keys::ENEMY_BEETLE_GRUB, hp: 10, atk: 2, speed: 8, xp: 5 },
    EnemyTemplate { id: keys::ENEMY_THORN_SPIDER, hp: 8, atk: 4, speed: 11, xp: 6 },
];

const CAVE_POOL: [EnemyTemplate; 3] = [
    EnemyTemplate { id: keys::ENEMY_CAVE_MOTH, hp: 7, atk: 3, speed: 13, xp: 5 },
    EnemyTemplate { id: keys::ENEMY_STONE_WEEVIL, hp: 14, atk: 3, speed: 6, xp: 7 },
    EnemyTemplate { id: keys::ENEMY_GLOOM_TICK, hp: 9, atk: 5, speed: 10, xp: 8 },
];

const FLOWER_POOL: [EnemyTemplate; 3] = [
    EnemyTemplate { id: keys::ENEMY_POLLEN_MITE, hp: 8, atk: 4, speed: 12, xp: 7 },
    EnemyTemplate { id: keys::ENEMY_HONEY_SLIME, hp: 16, atk: 3, speed: 5, xp: 9 },
    EnemyTemplate { id: keys::ENEMY_RAZOR_MANTIS, hp: 12, atk: 6, speed: 11, xp: 10 },
];

const ABYSS_POOL: [EnemyTemplate; 3] = [
    EnemyTemplate { id: keys::ENEMY_VOID_DRONE, hp: 12, atk: 6, speed: 12, xp: 11 },
    EnemyTemplate { id: keys::ENEMY_HUSK_SPAWN, hp: 18, atk: 5, speed: 8, xp: 12 },
    EnemyTemplate { id: keys::ENEMY_ABYSS_STINGER, hp: 14, atk: 8, speed: 13, xp: 14 },
];

/// Bosses rotate by floor milestone, in this order.
pub const BOSS_TEMPLATES: [EnemyTemplate; 3] = [
    EnemyTemplate { id: keys::BOSS_HORNET_WARLORD, hp: 60, atk: 9, speed: 10, xp: 40 },
    EnemyTemplate { id: keys::BOSS_FUNGAL_TYRANT, hp: 80, atk: 8, speed: 7, xp: 55 },
    EnemyTemplate { id: keys::BOSS_QUEEN_OF_THORNS, hp: 100, atk: 11, speed: 9, xp: 75 },
];

pub fn enemy_pool(theme: Theme) -> &'static [EnemyTemplate] {
    match theme {
        Theme::Forest => &FOREST_POOL,
        Theme::Cave => &CAVE_POOL,
        Theme::Flower => &FLOWER_POOL,
        Theme::Abyss => &ABYSS_POOL,
    }
}

pub fn enemy_template(id: &str) -> Option<&'static EnemyTemplate> {
    for pool in [&FOREST_POOL[..], &CAVE_POOL[..], &FLOWER_POOL[..], &ABYSS_POOL[..]] {
        if let Some(template) = pool.iter().find(|template| template.id == id) {
            return Some(template);
        }
    }
    BOSS_TEMPLATES.iter().find(|template| template.id == id)
}

/// Per-area contribution to the area level. Later story areas increase
/// monotonically; unknown names scale like the starting fields instead of
/// failing the generation pass.
pub fn area_offset(area: &str) -> i32 {
    match area {
        "village" => 0,
        "forest_south" => 0,
        "forest_north" => 2,
        "cave_shallow" => 4,
        "cave_deep" => 6,
        "flower_field" => 8,
        "abyss" => 10,
        _ => 0,
    }
}

/// The village is the one area that never spawns enemies.
pub fn area_is_safe(area: &str) -> bool {
    area == "village"
}
