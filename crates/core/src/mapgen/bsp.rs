//! Recursive binary space partitioning of the level rectangle.
//!
//! Partitioning only builds the tree; rooms are carved in a separate pass so
//! the tree can be reasoned about (and tested) on its own. The invariant the
//! tests lean on: leaf rectangles tile the root rectangle exactly, with no
//! overlap and no gap.

use super::model::Rect;
use crate::rng::GenRng;

pub(super) const MIN_ROOM_SIZE: usize = 3;
pub(super) const MAX_ROOM_SIZE: usize = 7;
pub(super) const MAX_DEPTH: u32 = 3;

/// A side is splittable when it can host a minimum room plus margin on both
/// halves of the cut.
const MIN_SPLIT_LEN: usize = 2 * MIN_ROOM_SIZE + 2;

pub(super) struct BspNode {
    pub(super) rect: Rect,
    pub(super) left: Option<Box<BspNode>>,
    pub(super) right: Option<Box<BspNode>>,
    pub(super) room: Option<Rect>,
}

impl BspNode {
    pub(super) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Depth-first leaf visit, left before right. Room carving, corridor
    /// wiring, and classification all rely on this fixed order for
    /// reproducibility.
    pub(super) fn for_each_leaf_mut(&mut self, visit: &mut impl FnMut(&mut BspNode)) {
        if self.is_leaf() {
            visit(self);
            return;
        }
        if let Some(left) = self.left.as_mut() {
            left.for_each_leaf_mut(visit);
        }
        if let Some(right) = self.right.as_mut() {
            right.for_each_leaf_mut(visit);
        }
    }

    #[cfg(test)]
    fn leaves(&self) -> Vec<Rect> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    #[cfg(test)]
    fn collect_leaves(&self, out: &mut Vec<Rect>) {
        if self.is_leaf() {
            out.push(self.rect);
            return;
        }
        if let Some(left) = self.left.as_ref() {
            left.collect_leaves(out);
        }
        if let Some(right) = self.right.as_ref() {
            right.collect_leaves(out);
        }
    }
}

pub(super) fn build_tree(cols: usize, rows: usize, rng: &mut GenRng) -> BspNode {
    let mut root =
        BspNode { rect: Rect { x: 0, y: 0, w: cols, h: rows }, left: None, right: None, room: None };
    split(&mut root, MAX_DEPTH, rng);
    root
}

fn split(node: &mut BspNode, depth: u32, rng: &mut GenRng) {
    if depth == 0 {
        return;
    }

    let rect = node.rect;
    let can_split_w = rect.w >= MIN_SPLIT_LEN;
    let can_split_h = rect.h >= MIN_SPLIT_LEN;
    if !can_split_w && !can_split_h {
        return;
    }

    // Split the longer axis; a square rect takes one draw as tie-break. If
    // only one axis is splittable it wins regardless of aspect.
    let split_vertical = match (can_split_w, can_split_h) {
        (true, false) => true,
        (false, true) => false,
        _ => {
            if rect.w > rect.h {
                true
            } else if rect.h > rect.w {
                false
            } else {
                rng.next_f64() < 0.5
            }
        }
    };

    let (left_rect, right_rect) = if split_vertical {
        // Cut leaves at least MIN_ROOM_SIZE + 1 columns on each side.
        let cut = rng.range_usize(MIN_ROOM_SIZE + 1, rect.w - MIN_ROOM_SIZE - 1);
        (
            Rect { x: rect.x, y: rect.y, w: cut, h: rect.h },
            Rect { x: rect.x + cut, y: rect.y, w: rect.w - cut, h: rect.h },
        )
    } else {
        let cut = rng.range_usize(MIN_ROOM_SIZE + 1, rect.h - MIN_ROOM_SIZE - 1);
        (
            Rect { x: rect.x, y: rect.y, w: rect.w, h: cut },
            Rect { x: rect.x, y: rect.y + cut, w: rect.w, h: rect.h - cut },
        )
    };

    let mut left = Box::new(BspNode { rect: left_rect, left: None, right: None, room: None });
    let mut right = Box::new(BspNode { rect: right_rect, left: None, right: None, room: None });
    split(&mut left, depth - 1, rng);
    split(&mut right, depth - 1, rng);
    node.left = Some(left);
    node.right = Some(right);
}
