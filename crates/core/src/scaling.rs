//! Difficulty scaling functions.
//!
//! Everything here is a pure function of its arguments: the populator calls
//! into this module during generation, and combat/loot code calls the same
//! functions at spawn or drop time. Randomness never lives here; callers that
//! need a roll draw from their own [`crate::rng::GenRng`].

use crate::content;

/// Multipliers applied per point of area level, one rate per scaled stat.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalingRates {
    pub hp: f64,
    pub atk: f64,
    pub xp: f64,
    pub coin: f64,
}

/// Story-mode pacing: areas outlevel the player quickly.
pub const STORY_RATES: ScalingRates = ScalingRates { hp: 0.12, atk: 0.08, xp: 0.10, coin: 0.05 };

/// Dungeon-mode pacing: deliberately shallower so the infinite mode ramps
/// slower than story-mode leveling.
pub const DUNGEON_RATES: ScalingRates = ScalingRates { hp: 0.09, atk: 0.06, xp: 0.08, coin: 0.04 };

/// Number of loot rarity tiers, lowest to highest.
pub const RARITY_TIERS: usize = 5;

/// Weight vectors at the ends of the interpolation horizon. Relative weights,
/// not probabilities; they feed straight into a weighted pick.
const RARITY_WEIGHTS_LOW: [f64; RARITY_TIERS] = [64.0, 22.0, 9.0, 4.0, 1.0];
const RARITY_WEIGHTS_HIGH: [f64; RARITY_TIERS] = [10.0, 22.0, 30.0, 24.0, 14.0];

/// Area levels at or beyond this get the full high-level weight vector.
const RARITY_HORIZON: i32 = 100;

/// Affix ranges widen by five percent per item level.
const AFFIX_GROWTH_PER_LEVEL: f64 = 0.05;

/// `max(1, player_level + offset(area))`. Recomputed on demand, never stored.
pub fn area_level(player_level: i32, area: &str) -> i32 {
    (player_level + content::area_offset(area)).max(1)
}

/// Ceiling-rounded linear scaling, used uniformly for HP, ATK, XP, and coin
/// drops with the per-stat rates above.
pub fn enemy_stat(base: i32, area_level: i32, rate: f64) -> i32 {
    (f64::from(base) * (1.0 + rate * f64::from(area_level))).ceil() as i32
}

/// Fixed elite modifier, applied once at spawn time: double HP, one-and-a-half
/// ATK rounded up.
pub fn elite_stats(hp: i32, atk: i32) -> (i32, i32) {
    (hp * 2, (f64::from(atk) * 1.5).ceil() as i32)
}

/// Relative rarity weights for the given area level, interpolated
/// componentwise between the low- and high-level vectors.
pub fn rarity_weights(area_level: i32) -> [f64; RARITY_TIERS] {
    let t = (f64::from(area_level) / f64::from(RARITY_HORIZON)).clamp(0.0, 1.0);
    let mut weights = [0.0; RARITY_TIERS];
    for (tier, weight) in weights.iter_mut().enumerate() {
        *weight = lerp(RARITY_WEIGHTS_LOW[tier], RARITY_WEIGHTS_HIGH[tier], t);
    }
    weights
}

/// `[min, max]` affix magnitude range grown linearly with item level. The
/// item generator draws a uniform value from the returned range.
pub fn affix_roll(base_min: i32, base_max: i32, item_level: i32) -> (i32, i32) {
    let growth = 1.0 + AFFIX_GROWTH_PER_LEVEL * f64::from(item_level);
    let min = (f64::from(base_min) * growth).floor() as i32;
    let max = (f64::from(base_max) * growth).ceil() as i32;
    (min, max.max(min))
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
