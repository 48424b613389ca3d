//! Example Battle - A scripted encounter demonstrating dungeon_core
//!
//! Usage: `example_battle [SEED] [CONSTANTS.toml]`
//!
//! The run shows:
//! - Entering a room and looting a weapon into the hero's inventory
//! - Equipping it and fighting the room's monster with seeded dice
//! - Turn reports, the final outcome and the monster's drops

use anyhow::{Context, Result};
use dungeon_core::config::load_constants;
use dungeon_core::prelude::*;
use dungeon_core::Room;
use std::env;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_SEED: u64 = 7;
const MAX_TURNS: u32 = 50;

fn build_room() -> Result<Room> {
    let mut room = Room::new("A collapsed shrine, its altar split by roots.", Element::Poison)?;
    room.add_item(
        Weapon::new("Flame Sword", 8)?
            .with_element(Element::Fire)
            .with_description("A blade that never cools.")
            .into(),
    );
    room.add_monster(
        Monster::new("Bog Lurker", 70, 9, 6, Element::Poison)?
            .with_loot(vec!["Swamp Pearl".to_string(), "Lurker Fang".to_string()]),
    );
    Ok(room)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut args = env::args().skip(1);
    let seed = match args.next() {
        Some(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("invalid seed: {raw}"))?,
        None => DEFAULT_SEED,
    };
    let rules = match args.next() {
        Some(path) => load_constants(Path::new(&path))
            .with_context(|| format!("failed to load constants from {path}"))?,
        None => GameConstants::default(),
    };
    info!(seed, "starting encounter");

    let mut room = build_room()?;
    let mut hero: Hero = Warrior::from_rules("conan", 120, 120, 10, 8, &rules)?
        .with_defenses(3, 2)
        .into();

    println!("{}", room.enter(hero.name()));
    println!("{}\n", room.description());

    let sword = room.loot_into("flame sword", hero.inventory_mut())?;
    let outcome = hero.equip(sword)?;
    println!("{}", outcome.message());
    println!("{}\n", hero.inventory());

    let monster = room
        .remove_monster("bog lurker")
        .context("the shrine should hold a monster")?;
    let mut battle = Battle::with_dice(hero, monster, RngDice::seeded(seed)).with_rules(rules);

    println!("Actions:");
    for (key, entry) in battle.available_actions() {
        println!("  {}. {}", key, entry.description);
    }
    println!();

    while battle.is_active() && battle.turn_count() < MAX_TURNS {
        let report = battle.execute_turn("1")?;
        println!("== Turn {} ==", report.turn);
        for line in &report.log {
            println!("  {}", line);
        }
        for status in &report.statuses {
            println!(
                "  {}: {}/{} ({})",
                status.name, status.life, status.max_life, status.status
            );
        }
    }

    if battle.is_active() {
        warn!(turns = battle.turn_count(), "encounter stopped before a winner emerged");
    }

    match battle.get_combat_result() {
        CombatOutcome::Victory { loot } => {
            println!("\nVictory! Drops: {}", loot.join(", "));
        }
        CombatOutcome::Defeat => println!("\nThe hero has fallen."),
        CombatOutcome::Ongoing => println!("\nThe fight goes on..."),
    }
    Ok(())
}
