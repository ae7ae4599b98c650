//! Helpers for deterministic battle regressions.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;
use wizard_core::{
    run_battle, Battle, BattleRng, BattleSummary, Character, ClassKind, CombatEvent,
    ScriptedConsole,
};

pub const DEFAULT_SEED: u64 = 42;

/// Outcome of feeding a fixed list of menu inputs to a fresh battle.
pub struct ScriptedRun {
    /// `None` when the inputs ran out before anyone fell.
    pub summary: Option<BattleSummary>,
    pub transcript: Vec<String>,
    pub battle: Battle,
}

impl ScriptedRun {
    /// Rendered combat events, one per line, without menus or prompts.
    pub fn combat_log(&self) -> String {
        self.battle
            .history()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn scripted_battle(kind: ClassKind, name: &str, seed: u64, inputs: &[&str]) -> ScriptedRun {
    let mut battle = Battle::new(
        Character::new(kind, name),
        Character::evil_wizard(),
        BattleRng::new(seed),
    );
    let mut console = ScriptedConsole::new(inputs.iter().copied());
    let summary = run_battle(&mut battle, &mut console).ok();
    ScriptedRun {
        summary,
        transcript: console.into_transcript(),
        battle,
    }
}

/// Damage dealt by `count` basic attacks against a fresh wizard each time.
pub fn sample_damage_rolls(kind: ClassKind, seed: u64, count: usize) -> Vec<i32> {
    let attacker = Character::new(kind, "Sampler");
    let mut rng = BattleRng::new(seed);
    (0..count)
        .map(|_| {
            let mut target = Character::evil_wizard();
            attacker.attack(&mut target, &mut rng);
            target.max_health() - target.health()
        })
        .collect()
}

/// Rolls drawn straight from `StdRng`, the stream `BattleRng` must reproduce
/// for saved seeds to keep replaying the same fight.
pub fn reference_rolls(seed: u64, range: RangeInclusive<i32>, count: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(range.clone())).collect()
}

pub fn sample_combat_trace(seed: u64) -> serde_json::Value {
    let rolls = sample_damage_rolls(ClassKind::Archer, seed, 3);
    json!({ "class": ClassKind::Archer, "rolls": rolls, "seed": seed })
}

/// Events of the first turn of a fight with no randomness involved.
pub fn opening_exchange(kind: ClassKind, name: &str) -> Vec<CombatEvent> {
    let mut battle = Battle::new(
        Character::new(kind, name),
        Character::evil_wizard(),
        BattleRng::new(DEFAULT_SEED),
    );
    battle.resolve_turn(wizard_core::PlayerAction::Attack)
}
