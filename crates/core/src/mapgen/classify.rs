//! Weighted room classification.
//!
//! Rule order is first-match-wins and deliberately asymmetric: combat shows
//! up both as the explicit 50% bucket and as the fallback for rolls past
//! 90%. That bias is part of the balance (it drives spawn density); do not
//! normalize the weights.

use crate::rng::GenRng;
use crate::types::RoomKind;

/// Area levels that are a multiple of this get a boss room.
pub const BOSS_INTERVAL: i32 = 5;

/// Cumulative roll thresholds for the non-special rooms.
const COMBAT_THRESHOLD: f64 = 0.50;
const TREASURE_THRESHOLD: f64 = 0.65;
const ELITE_THRESHOLD: f64 = 0.80;
const SHOP_THRESHOLD: f64 = 0.90;

pub(super) fn is_boss_milestone(area_level: i32) -> bool {
    area_level > 0 && area_level % BOSS_INTERVAL == 0
}

/// Assign one role per room, in room index order.
///
/// Room 0 is always the start room and the last room is the boss room on
/// milestone levels; neither consumes a random roll, so their presence never
/// shifts the classification of the rooms in between.
pub(super) fn classify_rooms(room_count: usize, area_level: i32, rng: &mut GenRng) -> Vec<RoomKind> {
    let boss_index = if is_boss_milestone(area_level) && room_count >= 2 {
        Some(room_count - 1)
    } else {
        None
    };

    (0..room_count)
        .map(|index| {
            if index == 0 {
                RoomKind::Start
            } else if Some(index) == boss_index {
                RoomKind::Boss
            } else {
                roll_room_kind(rng)
            }
        })
        .collect()
}

fn roll_room_kind(rng: &mut GenRng) -> RoomKind {
    let roll = rng.next_f64();
    if roll < COMBAT_THRESHOLD {
        RoomKind::Combat
    } else if roll < TREASURE_THRESHOLD {
        RoomKind::Treasure
    } else if roll < ELITE_THRESHOLD {
        RoomKind::Elite
    } else if roll < SHOP_THRESHOLD {
        RoomKind::Shop
    } else {
        // Fallback bucket: unmatched rolls land on combat again.
        RoomKind::Combat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_zero_is_always_start() {
        for seed in 0..32_u32 {
            let mut rng = GenRng::new(seed);
            let kinds = classify_rooms(6, 3, &mut rng);
            assert_eq!(kinds[0], RoomKind::Start);
            assert!(!kinds[1..].contains(&RoomKind::Start));
        }
    }

    #[test]
    fn boss_room_appears_only_on_milestone_levels() {
        for seed in 0..32_u32 {
            let mut rng = GenRng::new(seed);
            let milestone = classify_rooms(6, 10, &mut rng);
            assert_eq!(milestone[5], RoomKind::Boss);
            assert_eq!(milestone.iter().filter(|&&kind| kind == RoomKind::Boss).count(), 1);

            let mut rng = GenRng::new(seed);
            let ordinary = classify_rooms(6, 7, &mut rng);
            assert!(!ordinary.contains(&RoomKind::Boss));
        }
    }

    #[test]
    fn special_rooms_do_not_consume_rolls() {
        // Middle rooms must classify identically whether or not the level is
        // a boss milestone, because start/boss assignments skip the RNG.
        let mut with_boss_rng = GenRng::new(424_242);
        let with_boss = classify_rooms(6, 5, &mut with_boss_rng);
        let mut without_boss_rng = GenRng::new(424_242);
        let without_boss = classify_rooms(6, 4, &mut without_boss_rng);
        assert_eq!(with_boss[1..5], without_boss[1..5]);
    }

    #[test]
    fn single_room_levels_stay_a_start_room_even_on_milestones() {
        let mut rng = GenRng::new(1);
        let kinds = classify_rooms(1, 5, &mut rng);
        assert_eq!(kinds, vec![RoomKind::Start]);
    }

    #[test]
    fn roll_distribution_respects_the_combat_bias() {
        let mut rng = GenRng::new(987_654);
        let mut combat = 0_u32;
        let total = 10_000;
        for _ in 0..total {
            if roll_room_kind(&mut rng) == RoomKind::Combat {
                combat += 1;
            }
        }
        // 50% explicit bucket plus the 10% fallback.
        let share = f64::from(combat) / f64::from(total);
        assert!((0.55..0.65).contains(&share), "combat share drifted: {share}");
    }

    #[test]
    fn milestone_detection_is_every_fifth_level() {
        assert!(is_boss_milestone(5));
        assert!(is_boss_milestone(10));
        assert!(!is_boss_milestone(4));
        assert!(!is_boss_milestone(1));
        assert!(!is_boss_milestone(0));
    }
}
