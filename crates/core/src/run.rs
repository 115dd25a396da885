//! Dungeon-mode run tracking: floor progression, theme cycling, kill/score
//! accounting, and the permanent growth stats earned from boss kills.
//!
//! The tracker is the engine's only mutable shared state. It is not designed
//! for concurrent floor transitions; embedders must serialize access to it.
//! Calls made in the wrong phase are consumer sequencing bugs and are
//! guarded with assertions rather than silently ignored.

use serde::{Deserialize, Serialize};

use crate::mapgen::{self, GeneratedLevel};
use crate::rng::derive_floor_seed;
use crate::types::Theme;

/// Floors per theme band before the cycle advances.
const THEME_BAND_FLOORS: u32 = 5;
const THEME_CYCLE: [Theme; 4] = [Theme::Forest, Theme::Cave, Theme::Flower, Theme::Abyss];

/// Per-call growth increments, one entry per stat.
const GROWTH_MAX_HP: i32 = 1;
const GROWTH_ATK: i32 = 1;
const GROWTH_SPEED: i32 = 1;
const GROWTH_NEEDLE_DMG: i32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunPhase {
    Idle,
    Active,
    Ended,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowthStat {
    MaxHp,
    Atk,
    Speed,
    NeedleDmg,
}

/// The player-side stats growth points apply to. Owned by the caller; the
/// tracker only mutates it through [`RunTracker::apply_growth`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerStats {
    pub max_hp: i32,
    pub atk: i32,
    pub speed: i32,
    pub needle_dmg: i32,
}

/// Permanent growth counters accumulated across boss kills within a run.
///
/// Serializes to a flat record of four integers. Older save records may be
/// missing fields; each one defaults to zero on load so partial records
/// keep working.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthState {
    #[serde(default)]
    pub max_hp: u32,
    #[serde(default)]
    pub atk: u32,
    #[serde(default)]
    pub speed: u32,
    #[serde(default)]
    pub needle_dmg: u32,
}

impl GrowthState {
    /// Reapply every accumulated increment to a fresh stat block, used when
    /// resuming a saved run.
    pub fn apply_to(&self, player: &mut PlayerStats) {
        player.max_hp += self.max_hp as i32 * GROWTH_MAX_HP;
        player.atk += self.atk as i32 * GROWTH_ATK;
        player.speed += self.speed as i32 * GROWTH_SPEED;
        player.needle_dmg += self.needle_dmg as i32 * GROWTH_NEEDLE_DMG;
    }
}

/// Final score record produced when a run ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub floor: u32,
    pub kills: u32,
    pub pollen_collected: u32,
    pub score: u64,
}

pub struct RunTracker {
    run_seed: u32,
    phase: RunPhase,
    floor: u32,
    kills: u32,
    pollen_collected: u32,
    growth: GrowthState,
}

impl RunTracker {
    pub fn new(run_seed: u32) -> Self {
        Self {
            run_seed,
            phase: RunPhase::Idle,
            floor: 0,
            kills: 0,
            pollen_collected: 0,
            growth: GrowthState::default(),
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn floor(&self) -> u32 {
        self.floor
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }

    pub fn pollen_collected(&self) -> u32 {
        self.pollen_collected
    }

    pub fn growth(&self) -> GrowthState {
        self.growth
    }

    /// Resume a saved run's growth counters. Only meaningful before `start`
    /// replaces them, i.e. when rebuilding a tracker from a save file.
    pub fn restore_growth(&mut self, growth: GrowthState) {
        assert!(self.phase == RunPhase::Idle, "restore_growth after the run started");
        self.growth = growth;
    }

    /// Begin a run. `deep_start` is the externally-unlocked option to skip
    /// floor 1 and begin on floor 2. Returns the first floor's level.
    pub fn start(&mut self, deep_start: bool) -> GeneratedLevel {
        assert!(self.phase != RunPhase::Active, "start called while a run is active");
        self.phase = RunPhase::Active;
        self.floor = if deep_start { 2 } else { 1 };
        self.kills = 0;
        self.pollen_collected = 0;
        self.growth = GrowthState::default();
        self.generate_current_floor()
    }

    pub fn next_floor(&mut self) -> GeneratedLevel {
        assert!(self.phase == RunPhase::Active, "next_floor outside an active run");
        self.floor += 1;
        self.generate_current_floor()
    }

    pub fn record_kill(&mut self, pollen_dropped: u32) {
        assert!(self.phase == RunPhase::Active, "record_kill outside an active run");
        self.kills += 1;
        self.pollen_collected += pollen_dropped;
    }

    /// Finalize the run. The score formula deliberately rewards depth and
    /// kills over hoarded pollen and never multiplies by zero pollen:
    /// `floor * kills * max(1, pollen_remaining)`.
    pub fn end_run(&mut self, pollen_remaining: u32) -> RunSummary {
        assert!(self.phase == RunPhase::Active, "end_run outside an active run");
        self.phase = RunPhase::Ended;
        let score =
            u64::from(self.floor) * u64::from(self.kills) * u64::from(pollen_remaining.max(1));
        RunSummary {
            floor: self.floor,
            kills: self.kills,
            pollen_collected: self.pollen_collected,
            score,
        }
    }

    /// Spend one growth point on a stat. Each call consumes exactly one
    /// point (the caller tracks how many are available) and bumps both the
    /// player's stat block and the persistent counter.
    pub fn apply_growth(&mut self, stat: GrowthStat, player: &mut PlayerStats) {
        assert!(self.phase == RunPhase::Active, "apply_growth outside an active run");
        match stat {
            GrowthStat::MaxHp => {
                self.growth.max_hp += 1;
                player.max_hp += GROWTH_MAX_HP;
            }
            GrowthStat::Atk => {
                self.growth.atk += 1;
                player.atk += GROWTH_ATK;
            }
            GrowthStat::Speed => {
                self.growth.speed += 1;
                player.speed += GROWTH_SPEED;
            }
            GrowthStat::NeedleDmg => {
                self.growth.needle_dmg += 1;
                player.needle_dmg += GROWTH_NEEDLE_DMG;
            }
        }
    }

    fn generate_current_floor(&self) -> GeneratedLevel {
        let floor_seed = derive_floor_seed(self.run_seed, self.floor);
        mapgen::generate_level(floor_seed, theme_for_floor(self.floor), self.floor as i32)
    }
}

/// Themes cycle in five-floor bands: floors 1–5 forest, 6–10 cave, 11–15
/// flower, 16–20 abyss, then around again.
pub fn theme_for_floor(floor: u32) -> Theme {
    let band = (floor.saturating_sub(1) / THEME_BAND_FLOORS) as usize;
    THEME_CYCLE[band % THEME_CYCLE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RoomKind;

    fn base_player() -> PlayerStats {
        PlayerStats { max_hp: 20, atk: 5, speed: 10, needle_dmg: 3 }
    }

    #[test]
    fn start_resets_counters_and_activates() {
        let mut tracker = RunTracker::new(11);
        let level = tracker.start(false);
        assert_eq!(tracker.phase(), RunPhase::Active);
        assert_eq!(tracker.floor(), 1);
        assert_eq!(tracker.kills(), 0);
        assert!(!level.rooms.is_empty());
    }

    #[test]
    fn deep_start_begins_on_floor_two() {
        let mut tracker = RunTracker::new(11);
        tracker.start(true);
        assert_eq!(tracker.floor(), 2);
    }

    #[test]
    fn floors_regenerate_deterministically_per_run_seed() {
        let mut left = RunTracker::new(4_242);
        let mut right = RunTracker::new(4_242);
        assert_eq!(left.start(false).canonical_bytes(), right.start(false).canonical_bytes());
        assert_eq!(left.next_floor().canonical_bytes(), right.next_floor().canonical_bytes());

        let mut other = RunTracker::new(4_243);
        assert_ne!(left.next_floor().canonical_bytes(), other.start(false).canonical_bytes());
    }

    #[test]
    fn every_fifth_floor_is_a_boss_floor() {
        let mut tracker = RunTracker::new(99);
        tracker.start(false);
        let mut level = None;
        for _ in 0..4 {
            level = Some(tracker.next_floor());
        }
        assert_eq!(tracker.floor(), 5);
        let level = level.expect("generated floor 5");
        assert!(level.rooms.iter().any(|room| room.kind == RoomKind::Boss));
        assert_eq!(level.enemies.iter().filter(|enemy| enemy.is_boss).count(), 1);
    }

    #[test]
    fn kill_accounting_accumulates_pollen() {
        let mut tracker = RunTracker::new(1);
        tracker.start(false);
        tracker.record_kill(3);
        tracker.record_kill(0);
        tracker.record_kill(7);
        assert_eq!(tracker.kills(), 3);
        assert_eq!(tracker.pollen_collected(), 10);
    }

    #[test]
    fn end_run_score_never_multiplies_by_zero_pollen() {
        let mut tracker = RunTracker::new(8);
        tracker.start(false);
        for _ in 0..10 {
            tracker.record_kill(1);
        }
        for _ in 0..3 {
            tracker.next_floor();
        }
        let summary = tracker.end_run(0);
        assert_eq!(summary.floor, 4);
        assert_eq!(summary.kills, 10);
        assert_eq!(summary.score, 40, "4 * 10 * max(1, 0)");
        assert_eq!(tracker.phase(), RunPhase::Ended);
    }

    #[test]
    fn end_run_multiplies_remaining_pollen_when_positive() {
        let mut tracker = RunTracker::new(8);
        tracker.start(false);
        tracker.record_kill(5);
        tracker.record_kill(5);
        let summary = tracker.end_run(6);
        // floor 1 * 2 kills * 6 pollen
        assert_eq!(summary.score, 12);
    }

    #[test]
    fn growth_points_bump_player_and_counters() {
        let mut tracker = RunTracker::new(2);
        tracker.start(false);
        let mut player = base_player();

        tracker.apply_growth(GrowthStat::MaxHp, &mut player);
        tracker.apply_growth(GrowthStat::NeedleDmg, &mut player);
        tracker.apply_growth(GrowthStat::NeedleDmg, &mut player);

        assert_eq!(player.max_hp, 21);
        assert_eq!(player.needle_dmg, 7);
        assert_eq!(
            tracker.growth(),
            GrowthState { max_hp: 1, atk: 0, speed: 0, needle_dmg: 2 }
        );
    }

    #[test]
    fn growth_state_reapplies_accumulated_totals() {
        let growth = GrowthState { max_hp: 3, atk: 2, speed: 1, needle_dmg: 4 };
        let mut player = base_player();
        growth.apply_to(&mut player);
        assert_eq!(player, PlayerStats { max_hp: 23, atk: 7, speed: 11, needle_dmg: 11 });
    }

    #[test]
    fn starting_a_new_run_resets_growth() {
        let mut tracker = RunTracker::new(2);
        tracker.start(false);
        let mut player = base_player();
        tracker.apply_growth(GrowthStat::Atk, &mut player);
        tracker.end_run(0);

        tracker.start(false);
        assert_eq!(tracker.growth(), GrowthState::default());
    }

    #[test]
    fn theme_bands_cycle_every_five_floors() {
        assert_eq!(theme_for_floor(1), Theme::Forest);
        assert_eq!(theme_for_floor(5), Theme::Forest);
        assert_eq!(theme_for_floor(6), Theme::Cave);
        assert_eq!(theme_for_floor(11), Theme::Flower);
        assert_eq!(theme_for_floor(16), Theme::Abyss);
        assert_eq!(theme_for_floor(21), Theme::Forest);
    }

    #[test]
    fn growth_round_trips_through_json() {
        let growth = GrowthState { max_hp: 5, atk: 0, speed: 2, needle_dmg: 9 };
        let json = serde_json::to_string(&growth).expect("serialize");
        let decoded: GrowthState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(growth, decoded);

        let zero: GrowthState = serde_json::from_str("{}").expect("empty record");
        assert_eq!(zero, GrowthState::default());
    }

    #[test]
    fn growth_tolerates_partially_missing_records() {
        let decoded: GrowthState =
            serde_json::from_str(r#"{"max_hp": 4, "needle_dmg": 6}"#).expect("partial record");
        assert_eq!(decoded, GrowthState { max_hp: 4, atk: 0, speed: 0, needle_dmg: 6 });
    }

    #[test]
    #[should_panic(expected = "record_kill outside an active run")]
    fn record_kill_before_start_is_a_sequencing_bug() {
        let mut tracker = RunTracker::new(3);
        tracker.record_kill(1);
    }

    #[test]
    #[should_panic(expected = "start called while a run is active")]
    fn double_start_is_a_sequencing_bug() {
        let mut tracker = RunTracker::new(3);
        tracker.start(false);
        tracker.start(false);
    }
}
