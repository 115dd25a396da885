//! Deterministic pseudo-random stream and seed derivation helpers.
//!
//! Every random decision made during generation flows through [`GenRng`], a
//! 32-bit xorshift generator seeded once per generation call. Two streams
//! built from the same seed are indistinguishable, which is what makes whole
//! levels reproducible from `(seed, theme, area_level)`.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenRng {
    state: u32,
}

impl GenRng {
    pub fn new(seed: u32) -> Self {
        // Xorshift has a single absorbing state at zero.
        Self { state: if seed == 0 { 0x9E37_79B9 } else { seed } }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut s = self.state;
        s ^= s << 13;
        s ^= s >> 17;
        s ^= s << 5;
        self.state = s;
        s
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Uniform integer in `[min, max]`, both ends inclusive.
    pub fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max);
        let span = (max - min + 1) as f64;
        min + (self.next_f64() * span) as i32
    }

    pub fn range_usize(&mut self, min: usize, max: usize) -> usize {
        debug_assert!(min <= max);
        let span = (max - min + 1) as f64;
        min + (self.next_f64() * span) as usize
    }

    /// Uniform element choice. Empty slices are a caller error.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        assert!(!items.is_empty(), "pick called on an empty slice");
        &items[self.range_usize(0, items.len() - 1)]
    }

    /// Cumulative-weight selection: draw `r` in `[0, total)`, then subtract
    /// each item's weight in iteration order and take the first item that
    /// drives the running total to zero or below. The left-to-right
    /// subtraction order is part of the reproducibility contract; do not
    /// replace it with a search that could tie-break differently.
    pub fn weighted_pick<'a, T>(&mut self, items: &'a [T], weight: impl Fn(&T) -> f64) -> &'a T {
        assert!(!items.is_empty(), "weighted_pick called on an empty slice");
        let total: f64 = items.iter().map(&weight).sum();
        let mut r = self.next_f64() * total;
        for item in items {
            r -= weight(item);
            if r <= 0.0 {
                return item;
            }
        }
        // Float round-off can leave a sliver; the last item owns it.
        &items[items.len() - 1]
    }
}

static GENERATED_SEED_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Time/pid-derived seed for callers that want non-reproducible output.
/// Callers that care about replayability pass their own seed instead.
pub fn runtime_seed() -> u32 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = std::process::id();
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u32)
        ^ ((now_nanos >> 32) as u32)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_u32(entropy)
}

/// Per-floor stream seed for dungeon runs. Avalanche mix so consecutive
/// floors of the same run get unrelated layouts.
pub fn derive_floor_seed(run_seed: u32, floor: u32) -> u32 {
    let mut mixed = run_seed ^ 0x9E37_79B9;
    mixed ^= floor.wrapping_mul(0x85EB_CA6B);
    mix_u32(mixed)
}

fn mix_u32(value: u32) -> u32 {
    let mut mixed = value;
    mixed ^= mixed >> 16;
    mixed = mixed.wrapping_mul(0x85EB_CA6B);
    mixed ^= mixed >> 13;
    mixed = mixed.wrapping_mul(0xC2B2_AE35);
    mixed ^ (mixed >> 16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streams_from_equal_seeds_are_indistinguishable() {
        let mut a = GenRng::new(777);
        let mut b = GenRng::new(777);
        for _ in 0..256 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn next_f64_stays_in_unit_interval() {
        let mut rng = GenRng::new(42);
        for _ in 0..1_000 {
            let value = rng.next_f64();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn range_i32_is_inclusive_on_both_ends() {
        let mut rng = GenRng::new(9);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..2_000 {
            let value = rng.range_i32(3, 6);
            assert!((3..=6).contains(&value));
            seen_min |= value == 3;
            seen_max |= value == 6;
        }
        assert!(seen_min && seen_max, "both range ends should be reachable");
    }

    #[test]
    fn zero_seed_does_not_produce_a_stuck_stream() {
        let mut rng = GenRng::new(0);
        let first = rng.next_u32();
        let second = rng.next_u32();
        assert_ne!(first, 0);
        assert_ne!(first, second);
    }

    #[test]
    fn weighted_pick_respects_left_to_right_subtraction_order() {
        // With a dominant first weight, almost every draw lands on it; the
        // point here is that a zero-weight head never absorbs a positive r.
        let items = ["never", "always"];
        let mut rng = GenRng::new(1234);
        for _ in 0..200 {
            let chosen = rng.weighted_pick(&items, |&item| if item == "never" { 0.0 } else { 5.0 });
            assert_eq!(*chosen, "always");
        }
    }

    #[test]
    fn weighted_pick_distribution_tracks_weights() {
        let items = [1_u32, 2, 3];
        let mut rng = GenRng::new(2024);
        let mut counts = [0_u32; 3];
        for _ in 0..3_000 {
            let chosen = *rng.weighted_pick(&items, |&item| f64::from(item));
            counts[(chosen - 1) as usize] += 1;
        }
        assert!(counts[2] > counts[0], "heavier items should win more often: {counts:?}");
    }

    #[test]
    fn floor_seed_changes_when_inputs_change() {
        let baseline = derive_floor_seed(99, 2);
        assert_ne!(baseline, derive_floor_seed(98, 2));
        assert_ne!(baseline, derive_floor_seed(99, 3));
        assert_eq!(baseline, derive_floor_seed(99, 2));
    }
}
