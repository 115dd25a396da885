//! Randomized invariant harness: hammers generation with arbitrary inputs
//! and asserts the properties the game relies on (determinism, full
//! connectivity, start/boss room rules).

use anyhow::Result;
use clap::Parser;
use hive_core::{GeneratedLevel, Pos, RoomKind, Theme, generate_level};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 5_000)]
    iterations: u32,
}

const THEMES: [Theme; 4] = [Theme::Forest, Theme::Cave, Theme::Flower, Theme::Abyss];

fn main() -> Result<()> {
    let args = Args::parse();

    println!(
        "Fuzzing generation with meta-seed {} for {} iterations...",
        args.seed, args.iterations
    );
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for iteration in 0..args.iterations {
        let level_seed = rng.next_u64() as u32;
        let theme = THEMES[(rng.next_u64() % THEMES.len() as u64) as usize];
        let area_level = (rng.next_u64() % 40 + 1) as i32;

        let level = generate_level(level_seed, theme, area_level);
        let replay = generate_level(level_seed, theme, area_level);
        assert_eq!(
            level.canonical_bytes(),
            replay.canonical_bytes(),
            "determinism broke: seed={level_seed} theme={theme:?} area_level={area_level}"
        );

        assert_connected(&level, level_seed, area_level);
        assert_room_rules(&level, level_seed, area_level);

        if iteration % 1_000 == 0 && iteration > 0 {
            println!("  {iteration} iterations ok");
        }
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}

fn assert_connected(level: &GeneratedLevel, seed: u32, area_level: i32) {
    let mut seen = vec![false; level.cols * level.rows];
    let start = level.start_tile;
    seen[(start.y as usize) * level.cols + (start.x as usize)] = true;
    let mut open = vec![start];
    while let Some(pos) = open.pop() {
        for next in [
            Pos { y: pos.y - 1, x: pos.x },
            Pos { y: pos.y, x: pos.x + 1 },
            Pos { y: pos.y + 1, x: pos.x },
            Pos { y: pos.y, x: pos.x - 1 },
        ] {
            if !level.tile_at(next).is_walkable() {
                continue;
            }
            let index = (next.y as usize) * level.cols + (next.x as usize);
            if !seen[index] {
                seen[index] = true;
                open.push(next);
            }
        }
    }

    let walkable = level.tiles.iter().filter(|tile| tile.is_walkable()).count();
    let reached = seen.iter().filter(|&&s| s).count();
    assert_eq!(
        reached, walkable,
        "unreachable tiles: seed={seed} area_level={area_level} ({reached}/{walkable})"
    );
}

fn assert_room_rules(level: &GeneratedLevel, seed: u32, area_level: i32) {
    assert!(!level.rooms.is_empty(), "seed={seed}: no rooms");
    assert_eq!(level.rooms[0].kind, RoomKind::Start, "seed={seed}: room 0 must be the start");
    for enemy in &level.enemies {
        assert!(
            !level.rooms[0].rect.contains(enemy.pos),
            "seed={seed} area_level={area_level}: enemy inside the start room"
        );
    }

    let boss_count = level.enemies.iter().filter(|enemy| enemy.is_boss).count();
    if area_level % hive_core::mapgen::BOSS_INTERVAL == 0 {
        assert_eq!(boss_count, 1, "seed={seed} area_level={area_level}: expected one boss");
    } else {
        assert_eq!(boss_count, 0, "seed={seed} area_level={area_level}: unexpected boss");
    }
}
