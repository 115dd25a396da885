//! Room carving and corridor wiring on top of the BSP tree.

use super::bsp::{BspNode, MAX_ROOM_SIZE, MIN_ROOM_SIZE};
use super::model::Rect;
use crate::rng::GenRng;
use crate::types::{Pos, TileKind};

/// Carve one room per leaf, keeping a one-cell margin inside the leaf so no
/// two rooms can touch without a shared wall. Returns the rooms in leaf
/// order (depth-first, left before right), which is the room index order the
/// classifier sees.
pub(super) fn carve_rooms(
    tree: &mut BspNode,
    tiles: &mut [TileKind],
    cols: usize,
    rng: &mut GenRng,
) -> Vec<Rect> {
    let mut rooms = Vec::new();
    tree.for_each_leaf_mut(&mut |leaf| {
        let room = place_room_in_leaf(leaf.rect, rng);
        for y in room.y..=room.bottom() {
            for x in room.x..=room.right() {
                tiles[y * cols + x] = TileKind::Floor;
            }
        }
        leaf.room = Some(room);
        rooms.push(room);
    });
    rooms
}

/// Random room size in `[MIN_ROOM_SIZE, MAX_ROOM_SIZE]`, clamped to the
/// leaf's interior when the leaf is too small to host the minimum. Clamping
/// instead of failing keeps undersized configurations playable.
fn place_room_in_leaf(leaf: Rect, rng: &mut GenRng) -> Rect {
    let interior_w = leaf.w - 2;
    let interior_h = leaf.h - 2;

    let w = rng.range_usize(MIN_ROOM_SIZE.min(interior_w), MAX_ROOM_SIZE.min(interior_w));
    let h = rng.range_usize(MIN_ROOM_SIZE.min(interior_h), MAX_ROOM_SIZE.min(interior_h));

    let x = rng.range_usize(leaf.x + 1, leaf.x + leaf.w - w - 1);
    let y = rng.range_usize(leaf.y + 1, leaf.y + leaf.h - h - 1);
    Rect { x, y, w, h }
}

/// Connect sibling subtrees bottom-up: at every internal node, carve one
/// L-shaped corridor between a room center from each side. This yields
/// exactly `rooms - 1` corridors, a spanning tree over the rooms — full
/// connectivity, no cycles.
///
/// Returns the center of some room in the subtree (the left-most leaf's),
/// which the parent uses as its connection point.
pub(super) fn connect_rooms(node: &BspNode, tiles: &mut [TileKind], cols: usize) -> Option<Pos> {
    if node.is_leaf() {
        return node.room.map(Rect::center);
    }

    let left = node.left.as_deref().and_then(|child| connect_rooms(child, tiles, cols));
    let right = node.right.as_deref().and_then(|child| connect_rooms(child, tiles, cols));

    match (left, right) {
        (Some(from), Some(to)) => {
            carve_l_shaped_corridor(tiles, cols, from, to);
            Some(from)
        }
        (from, to) => from.or(to),
    }
}

/// Full horizontal run to the target column, then full vertical run to the
/// target row. Writing floor over floor is a no-op, so overlapping corridors
/// and room interiors compose cleanly.
fn carve_l_shaped_corridor(tiles: &mut [TileKind], cols: usize, from: Pos, to: Pos) {
    let (min_x, max_x) = (from.x.min(to.x), from.x.max(to.x));
    for x in min_x..=max_x {
        tiles[(from.y as usize) * cols + (x as usize)] = TileKind::Floor;
    }
    let (min_y, max_y) = (from.y.min(to.y), from.y.max(to.y));
    for y in min_y..=max_y {
        tiles[(y as usize) * cols + (to.x as usize)] = TileKind::Floor;
    }
}
