//! Entity placement for classified rooms: enemies, chests, shop NPCs, the
//! boss, and the start/save/exit tiles.

use super::classify::BOSS_INTERVAL;
use super::model::{EnemyPlacement, Rect};
use crate::content::{self, EnemyTemplate};
use crate::rng::GenRng;
use crate::scaling;
use crate::types::{Pos, RoomKind, Theme, TileKind};

const COMBAT_PACK_MIN: usize = 3;
const COMBAT_PACK_MAX: usize = 6;
const ELITE_ESCORT_COUNT: usize = 2;

/// Random draws before the free-cell search falls back to a scan.
const FREE_CELL_ATTEMPTS: usize = 16;

pub(super) struct Populated {
    pub(super) enemies: Vec<EnemyPlacement>,
    pub(super) chests: Vec<Pos>,
    pub(super) shops: Vec<Pos>,
    pub(super) start_tile: Pos,
    pub(super) save_point_tile: Pos,
    pub(super) exit_tile: Pos,
}

pub(super) fn populate(
    tiles: &mut [TileKind],
    cols: usize,
    rooms: &[Rect],
    kinds: &[RoomKind],
    theme: Theme,
    area_level: i32,
    rng: &mut GenRng,
) -> Populated {
    debug_assert_eq!(rooms.len(), kinds.len());

    let start_room = rooms[0];
    let start_tile = start_room.center();
    let save_point_tile = save_point_near_center(start_room);
    let exit_tile = rooms[rooms.len() - 1].center();

    let pool = content::enemy_pool(theme);
    let reserved = [start_tile, save_point_tile, exit_tile];

    let mut enemies = Vec::new();
    let mut chests = Vec::new();
    let mut shops = Vec::new();

    for (room, kind) in rooms.iter().zip(kinds) {
        match kind {
            // The start room never spawns anything.
            RoomKind::Start => {}
            RoomKind::Combat => {
                let pack_size = rng.range_usize(COMBAT_PACK_MIN, COMBAT_PACK_MAX);
                for _ in 0..pack_size {
                    let template = rng.pick(pool);
                    place_enemy(&mut enemies, *room, template, false, &reserved, rng);
                }
            }
            RoomKind::Elite => {
                let template = rng.pick(pool);
                place_enemy(&mut enemies, *room, template, true, &reserved, rng);
                for _ in 0..ELITE_ESCORT_COUNT {
                    let escort = rng.pick(pool);
                    place_enemy(&mut enemies, *room, escort, false, &reserved, rng);
                }
            }
            RoomKind::Treasure => {
                let chest_count = rng.range_usize(1, 2);
                for _ in 0..chest_count {
                    let taken = |pos: Pos| reserved.contains(&pos) || chests.contains(&pos);
                    if let Some(pos) = free_interior_cell(*room, rng, taken) {
                        tiles[(pos.y as usize) * cols + (pos.x as usize)] = TileKind::Chest;
                        chests.push(pos);
                    }
                }
            }
            RoomKind::Shop => {
                shops.push(room.center());
            }
            RoomKind::Boss => {
                let boss = boss_for_level(area_level);
                enemies.push(EnemyPlacement {
                    template_id: boss.id,
                    pos: room.center(),
                    hp: boss.hp,
                    atk: boss.atk,
                    is_elite: false,
                    is_boss: true,
                });
            }
        }
    }

    tiles[(save_point_tile.y as usize) * cols + (save_point_tile.x as usize)] = TileKind::SavePoint;
    tiles[(exit_tile.y as usize) * cols + (exit_tile.x as usize)] = TileKind::Exit;

    Populated { enemies, chests, shops, start_tile, save_point_tile, exit_tile }
}

/// One cell to the side of the start room's center, always inside the room.
fn save_point_near_center(room: Rect) -> Pos {
    let center = room.center();
    let x = if (center.x as usize) < room.right() { center.x + 1 } else { center.x - 1 };
    Pos { y: center.y, x }
}

fn random_interior_cell(room: Rect, rng: &mut GenRng) -> Pos {
    let x = rng.range_usize(room.x, room.right());
    let y = rng.range_usize(room.y, room.bottom());
    Pos { y: y as i32, x: x as i32 }
}

/// Random free cell inside the room. Collisions with reserved or occupied
/// cells re-roll; after enough misses a row-order scan finds a free cell so
/// crowded rooms still fill up. Returns `None` only when the room has no
/// free cell at all.
fn free_interior_cell(room: Rect, rng: &mut GenRng, taken: impl Fn(Pos) -> bool) -> Option<Pos> {
    for _ in 0..FREE_CELL_ATTEMPTS {
        let pos = random_interior_cell(room, rng);
        if !taken(pos) {
            return Some(pos);
        }
    }
    for y in room.y..=room.bottom() {
        for x in room.x..=room.right() {
            let pos = Pos { y: y as i32, x: x as i32 };
            if !taken(pos) {
                return Some(pos);
            }
        }
    }
    None
}

/// Spawn an enemy on a free cell of the room. Elite stats are applied here,
/// once, at spawn time; they are never re-derived.
fn place_enemy(
    enemies: &mut Vec<EnemyPlacement>,
    room: Rect,
    template: &EnemyTemplate,
    is_elite: bool,
    reserved: &[Pos],
    rng: &mut GenRng,
) {
    let Some(pos) = free_interior_cell(room, rng, |pos| {
        reserved.contains(&pos) || enemies.iter().any(|enemy| enemy.pos == pos)
    }) else {
        return;
    };
    let (hp, atk) = if is_elite {
        scaling::elite_stats(template.hp, template.atk)
    } else {
        (template.hp, template.atk)
    };
    enemies.push(EnemyPlacement {
        template_id: template.id,
        pos,
        hp,
        atk,
        is_elite,
        is_boss: false,
    });
}

/// Bosses rotate with each milestone floor: level 5 fights the first boss,
/// level 10 the second, and so on around the roster.
fn boss_for_level(area_level: i32) -> &'static EnemyTemplate {
    let milestone = (area_level / BOSS_INTERVAL).max(1) as usize;
    &content::BOSS_TEMPLATES[(milestone - 1) % content::BOSS_TEMPLATES.len()]
}
