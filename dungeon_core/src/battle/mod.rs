//! Battle - Turn orchestration between one hero and one monster
//!
//! Each round walks the fixed turn order. For every participant the status
//! is resolved first, then the fight is checked for an end, then the
//! participant acts unless its status prevents it, then the fight is checked
//! again. A participant killed earlier in the round never gets its step.

mod report;

pub use report::{CombatOutcome, ParticipantStatus, TurnReport};

use crate::combat::{CombatContext, Combatant};
use crate::config::GameConstants;
use crate::dice::{Dice, RngDice};
use crate::error::CombatError;
use crate::hero::{ActionMap, Hero};
use crate::monster::Monster;
use crate::status::resolve_status;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Which side of the fight acts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Participant {
    Hero,
    Monster,
}

/// A single encounter
#[derive(Debug)]
pub struct Battle<D: Dice = RngDice<ChaCha8Rng>> {
    hero: Hero,
    monster: Monster,
    dice: D,
    rules: GameConstants,
    turn_order: [Participant; 2],
    turn_count: u32,
    active: bool,
}

impl Battle {
    /// Battle with entropy-seeded dice and default rules
    pub fn new(hero: Hero, monster: Monster) -> Self {
        Battle::with_dice(hero, monster, RngDice::from_entropy())
    }
}

impl<D: Dice> Battle<D> {
    pub fn with_dice(hero: Hero, monster: Monster, dice: D) -> Self {
        let turn_order = initiative(&hero, &monster);
        info!(
            hero = hero.name(),
            monster = monster.name(),
            first = ?turn_order[0],
            "battle started"
        );
        Battle {
            hero,
            monster,
            dice,
            rules: GameConstants::default(),
            turn_order,
            turn_count: 0,
            active: true,
        }
    }

    pub fn with_rules(mut self, rules: GameConstants) -> Self {
        self.rules = rules;
        self
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    /// Mutable hero access between rounds (equipment changes, items)
    pub fn hero_mut(&mut self) -> &mut Hero {
        &mut self.hero
    }

    pub fn monster(&self) -> &Monster {
        &self.monster
    }

    pub fn rules(&self) -> &GameConstants {
        &self.rules
    }

    pub fn turn_order(&self) -> [Participant; 2] {
        self.turn_order
    }

    /// Rounds completed so far
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The hero's current action menu
    pub fn available_actions(&self) -> ActionMap {
        self.hero.get_actions(&self.rules)
    }

    pub fn get_combat_result(&self) -> CombatOutcome {
        outcome_of(&self.hero, &self.monster)
    }

    /// Run one round, with `action` as the hero's chosen menu key
    ///
    /// An unknown key, a missing weapon or a shortage of ammo or mana fails
    /// before anything changes, so the round can simply be retried.
    pub fn execute_turn(&mut self, action: &str) -> Result<TurnReport, CombatError> {
        if !self.active {
            return Err(CombatError::BattleOver);
        }
        self.hero.check_action(action, &self.rules)?;

        let Battle {
            hero,
            monster,
            dice,
            rules,
            turn_order,
            turn_count,
            active,
        } = self;
        let mut ctx = CombatContext::new(dice, rules);
        let mut log = Vec::new();

        for participant in *turn_order {
            let actor: &mut dyn Combatant = match participant {
                Participant::Hero => &mut *hero,
                Participant::Monster => &mut *monster,
            };

            if let Some(tick) = resolve_status(actor, &mut ctx) {
                if let Some(hit) = &tick.hit {
                    log.push(format!(
                        "{} suffers {} from being {}.",
                        actor.name(),
                        hit.summary(),
                        tick.status
                    ));
                }
            }

            if outcome_of(hero, monster).is_over() {
                break;
            }

            let actor: &dyn Combatant = match participant {
                Participant::Hero => &*hero,
                Participant::Monster => &*monster,
            };
            let status = actor.stats().status();
            if status.prevents_action() {
                log.push(format!(
                    "{} is prevented from acting ({}).",
                    actor.name(),
                    status.name()
                ));
                continue;
            }

            let line = match participant {
                Participant::Hero => hero.perform_action(action, &mut *monster, &mut ctx)?,
                Participant::Monster => monster.strike(&mut *hero, &mut ctx)?,
            };
            debug!(?participant, %line, "action resolved");
            log.push(line);

            if outcome_of(hero, monster).is_over() {
                break;
            }
        }

        let outcome = outcome_of(hero, monster);
        *turn_count += 1;
        *active = !outcome.is_over();
        if !*active {
            info!(turn = *turn_count, result = outcome.name(), "battle concluded");
        }

        let statuses = turn_order
            .iter()
            .map(|participant| {
                let entity: &dyn Combatant = match participant {
                    Participant::Hero => &*hero,
                    Participant::Monster => &*monster,
                };
                ParticipantStatus {
                    name: entity.name().to_string(),
                    status: entity.stats().status().name().to_string(),
                    life: entity.stats().current_life(),
                    max_life: entity.stats().max_life(),
                }
            })
            .collect();

        Ok(TurnReport {
            turn: *turn_count,
            log,
            statuses,
            combat_over: outcome.is_over(),
            outcome,
        })
    }

    /// Hand the participants back once the encounter is done with
    pub fn into_parts(self) -> (Hero, Monster) {
        (self.hero, self.monster)
    }
}

/// Faster side first; a tie goes to the hero
fn initiative(hero: &Hero, monster: &Monster) -> [Participant; 2] {
    if monster.stats().speed() > hero.stats().speed() {
        [Participant::Monster, Participant::Hero]
    } else {
        [Participant::Hero, Participant::Monster]
    }
}

/// A dead hero is a defeat even if the monster died too
fn outcome_of(hero: &Hero, monster: &Monster) -> CombatOutcome {
    if !hero.is_alive() {
        CombatOutcome::Defeat
    } else if !monster.is_alive() {
        CombatOutcome::Victory {
            loot: monster.get_loot(),
        }
    } else {
        CombatOutcome::Ongoing
    }
}
