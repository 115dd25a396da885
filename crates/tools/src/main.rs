//! Render a generated level as ASCII for eyeballing layouts and balance.

use anyhow::Result;
use clap::Parser;
use hive_core::{GeneratedLevel, Pos, Theme, TileKind, generate_level, rng, scaling};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Generation seed; omit for a time-derived one
    #[arg(short, long)]
    seed: Option<u32>,
    /// Theme name (forest, cave, flower, abyss); unknown names fall back to forest
    #[arg(short, long, default_value = "forest")]
    theme: String,
    /// Area level driving classification and boss milestones
    #[arg(short, long, default_value_t = 3)]
    area_level: i32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rng::runtime_seed);
    let theme = Theme::from_name(&args.theme);
    let level = generate_level(seed, theme, args.area_level);

    println!("seed={seed} theme={} area_level={}", theme.name(), args.area_level);
    println!("fingerprint={:#018x}", level.fingerprint());
    println!();
    print_grid(&level);
    println!();

    for room in &level.rooms {
        println!(
            "room {:?} at ({}, {}) {}x{}",
            room.kind, room.rect.x, room.rect.y, room.rect.w, room.rect.h
        );
    }
    println!();

    for enemy in &level.enemies {
        let tag = if enemy.is_boss {
            " [boss]"
        } else if enemy.is_elite {
            " [elite]"
        } else {
            ""
        };
        println!(
            "enemy {} at ({}, {}) hp={} atk={}{tag}",
            enemy.template_id, enemy.pos.x, enemy.pos.y, enemy.hp, enemy.atk
        );
    }

    let weights = scaling::rarity_weights(args.area_level);
    println!();
    println!("rarity weights at level {}: {weights:?}", args.area_level);

    Ok(())
}

fn print_grid(level: &GeneratedLevel) {
    for y in 0..level.rows {
        let mut line = String::with_capacity(level.cols);
        for x in 0..level.cols {
            let pos = Pos { y: y as i32, x: x as i32 };
            let glyph = if level.enemies.iter().any(|enemy| enemy.is_boss && enemy.pos == pos) {
                'B'
            } else if level.enemies.iter().any(|enemy| enemy.pos == pos) {
                'e'
            } else if level.shops.contains(&pos) {
                '$'
            } else if pos == level.start_tile {
                '@'
            } else {
                match level.tile_at(pos) {
                    TileKind::Wall => '#',
                    TileKind::Floor => '.',
                    TileKind::Chest => 'c',
                    TileKind::SavePoint => '+',
                    TileKind::Exit => '>',
                }
            };
            line.push(glyph);
        }
        println!("{line}");
    }
}
