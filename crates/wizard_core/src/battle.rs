//! Turn resolution and the interactive battle loop.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::character::Character;
use crate::class::SpecialAbility;
use crate::console::{Console, ConsoleError};
use crate::events::CombatEvent;
use crate::rng::BattleRng;

pub const ACTION_PROMPT: &str = "Choose an action: ";
pub const ABILITY_PROMPT: &str = "Choose ability: ";
pub const INVALID_ACTION: &str = "Invalid choice. Try again.";
pub const INVALID_ABILITY: &str = "Invalid ability choice. Try again.";

const ACTION_MENU: [&str; 4] = ["Attack", "Use Special Ability", "Heal", "View Stats"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    Ongoing,
    WizardDefeated,
    PlayerDefeated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleOutcome {
    Victory,
    Defeat,
}

/// A validated choice from the turn menu. `Special(None)` is what a class
/// without abilities ends up with; it still costs the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Attack,
    Special(Option<SpecialAbility>),
    Heal,
    ViewStats,
}

impl PlayerAction {
    fn from_menu_token(token: &str) -> Option<Self> {
        match token {
            "1" => Some(Self::Attack),
            "2" => Some(Self::Special(None)),
            "3" => Some(Self::Heal),
            "4" => Some(Self::ViewStats),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSummary {
    pub outcome: BattleOutcome,
    pub turns: u32,
    pub hero_health: i32,
    pub wizard_health: i32,
}

/// One hero against the wizard. Owns both combatants, the generator and the
/// event history.
#[derive(Debug, Clone)]
pub struct Battle {
    player: Character,
    wizard: Character,
    rng: BattleRng,
    turn: u32,
    history: Vec<CombatEvent>,
}

impl Battle {
    pub fn new(player: Character, wizard: Character, rng: BattleRng) -> Self {
        info!(
            target: "wizard_core.battle",
            hero = %player.name(),
            class = %player.kind(),
            seed = rng.seed(),
            "battle started"
        );
        Self {
            player,
            wizard,
            rng,
            turn: 0,
            history: Vec::new(),
        }
    }

    pub fn state(&self) -> BattleState {
        if self.wizard.is_defeated() {
            BattleState::WizardDefeated
        } else if self.player.is_defeated() {
            BattleState::PlayerDefeated
        } else {
            BattleState::Ongoing
        }
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self.state() {
            BattleState::Ongoing => None,
            BattleState::WizardDefeated => Some(BattleOutcome::Victory),
            BattleState::PlayerDefeated => Some(BattleOutcome::Defeat),
        }
    }

    pub fn player(&self) -> &Character {
        &self.player
    }

    pub fn wizard(&self) -> &Character {
        &self.wizard
    }

    pub fn player_mut(&mut self) -> &mut Character {
        &mut self.player
    }

    pub fn wizard_mut(&mut self) -> &mut Character {
        &mut self.wizard
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn history(&self) -> &[CombatEvent] {
        &self.history
    }

    pub fn into_parts(self) -> (Character, Character, Vec<CombatEvent>) {
        (self.player, self.wizard, self.history)
    }

    /// Resolves one full turn: the hero acts, then a surviving wizard
    /// regenerates and strikes back. Returns the events of this turn only.
    /// Calling this on a finished battle does nothing.
    pub fn resolve_turn(&mut self, action: PlayerAction) -> Vec<CombatEvent> {
        if self.state() != BattleState::Ongoing {
            return Vec::new();
        }
        self.turn += 1;
        let mut events = self.player_phase(action);

        if self.wizard.is_alive() {
            events.extend(self.wizard.regenerate());
            events.extend(self.wizard.attack(&mut self.player, &mut self.rng));
        }

        match self.state() {
            BattleState::WizardDefeated => events.push(CombatEvent::Victory {
                hero: self.player.name().to_owned(),
                wizard: self.wizard.name().to_owned(),
            }),
            BattleState::PlayerDefeated => events.push(CombatEvent::Fallen {
                hero: self.player.name().to_owned(),
                wizard: self.wizard.name().to_owned(),
            }),
            BattleState::Ongoing => {}
        }

        debug!(
            target: "wizard_core.battle",
            turn = self.turn,
            hero_health = self.player.health(),
            wizard_health = self.wizard.health(),
            "turn resolved"
        );
        self.history.extend(events.iter().cloned());
        events
    }

    fn player_phase(&mut self, action: PlayerAction) -> Vec<CombatEvent> {
        match action {
            PlayerAction::Attack => self.player.attack(&mut self.wizard, &mut self.rng),
            PlayerAction::Special(Some(ability)) => {
                self.player
                    .use_special(ability, &mut self.wizard, &mut self.rng)
            }
            PlayerAction::Special(None) => vec![CombatEvent::NoSpecialAbility {
                name: self.player.name().to_owned(),
                ability: None,
            }],
            PlayerAction::Heal if self.player.heal_amount() > 0 => self.player.heal(),
            PlayerAction::Heal => vec![CombatEvent::CannotHeal {
                name: self.player.name().to_owned(),
            }],
            PlayerAction::ViewStats => vec![self.player.display_stats()],
        }
    }

    fn summary(&self, outcome: BattleOutcome) -> BattleSummary {
        BattleSummary {
            outcome,
            turns: self.turn,
            hero_health: self.player.health(),
            wizard_health: self.wizard.health(),
        }
    }
}

/// Drives `battle` through the console until one side falls. Invalid menu
/// input is reported and the menu shown again without spending a turn.
pub fn run_battle<C: Console + ?Sized>(
    battle: &mut Battle,
    console: &mut C,
) -> Result<BattleSummary, ConsoleError> {
    loop {
        if let Some(outcome) = battle.outcome() {
            info!(
                target: "wizard_core.battle",
                ?outcome,
                turns = battle.turn(),
                "battle finished"
            );
            return Ok(battle.summary(outcome));
        }

        let Some(action) = read_action(battle.player(), console)? else {
            continue;
        };
        for event in battle.resolve_turn(action) {
            console.say(&event.to_string())?;
        }
    }
}

/// `Ok(None)` means the input was rejected and the turn must restart.
fn read_action<C: Console + ?Sized>(
    player: &Character,
    console: &mut C,
) -> Result<Option<PlayerAction>, ConsoleError> {
    console.say("")?;
    console.say("--- Your Turn ---")?;
    for (index, label) in ACTION_MENU.iter().enumerate() {
        console.say(&format!("{}. {label}", index + 1))?;
    }
    let token = console.prompt(ACTION_PROMPT)?;
    let Some(action) = PlayerAction::from_menu_token(&token) else {
        debug!(target: "wizard_core.battle", token = %token, "rejected action token");
        console.say(INVALID_ACTION)?;
        return Ok(None);
    };
    if action != PlayerAction::Special(None) {
        return Ok(Some(action));
    }

    let abilities = player.kind().special_abilities();
    if abilities.is_empty() {
        return Ok(Some(action));
    }
    console.say("")?;
    console.say("Special Abilities:")?;
    for (index, ability) in abilities.iter().enumerate() {
        console.say(&format!("{}. {ability}", index + 1))?;
    }
    let token = console.prompt(ABILITY_PROMPT)?;
    let chosen = match token.as_str() {
        "1" => abilities.first(),
        "2" => abilities.get(1),
        _ => None,
    };
    match chosen {
        Some(ability) => Ok(Some(PlayerAction::Special(Some(*ability)))),
        None => {
            debug!(target: "wizard_core.battle", token = %token, "rejected ability token");
            console.say(INVALID_ABILITY)?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::ClassKind;
    use crate::console::ScriptedConsole;

    fn battle_with(kind: ClassKind) -> Battle {
        Battle::new(
            Character::new(kind, "Hero"),
            Character::evil_wizard(),
            BattleRng::new(42),
        )
    }

    #[test]
    fn warrior_attack_turn_matches_reference_numbers() {
        let mut battle = battle_with(ClassKind::Warrior);
        let events = battle.resolve_turn(PlayerAction::Attack);
        assert_eq!(battle.wizard().health(), 130);
        assert_eq!(battle.player().health(), 125);
        assert_eq!(battle.state(), BattleState::Ongoing);
        assert!(matches!(
            events[..],
            [
                CombatEvent::Hit { damage: 25, .. },
                CombatEvent::Regenerated { health: 130, .. },
                CombatEvent::Hit { damage: 15, .. },
            ]
        ));
    }

    #[test]
    fn killing_blow_skips_wizard_turn() {
        let mut battle = battle_with(ClassKind::Mage);
        battle.wizard_mut().set_health(30);
        let events = battle.resolve_turn(PlayerAction::Attack);
        assert_eq!(battle.state(), BattleState::WizardDefeated);
        assert_eq!(battle.player().health(), 100);
        assert!(!events
            .iter()
            .any(|event| matches!(event, CombatEvent::Regenerated { .. })));
        assert!(matches!(events.last(), Some(CombatEvent::Victory { .. })));
    }

    #[test]
    fn wizard_can_finish_the_hero() {
        let mut battle = battle_with(ClassKind::Mage);
        battle.player_mut().set_health(15);
        let events = battle.resolve_turn(PlayerAction::ViewStats);
        assert_eq!(battle.state(), BattleState::PlayerDefeated);
        assert_eq!(battle.outcome(), Some(BattleOutcome::Defeat));
        assert!(matches!(events.last(), Some(CombatEvent::Fallen { .. })));
    }

    #[test]
    fn heal_without_heal_amount_still_costs_the_turn() {
        let mut battle = battle_with(ClassKind::Warrior);
        let events = battle.resolve_turn(PlayerAction::Heal);
        assert!(matches!(events[0], CombatEvent::CannotHeal { .. }));
        assert_eq!(battle.player().health(), 125);
        assert_eq!(battle.wizard().health(), 155);
    }

    #[test]
    fn divine_shield_absorbs_the_counterattack() {
        let mut battle = battle_with(ClassKind::Paladin);
        battle.resolve_turn(PlayerAction::Special(Some(SpecialAbility::DivineShield)));
        assert_eq!(battle.player().health(), 160);
        assert!(!battle.player().is_shielded());
        battle.resolve_turn(PlayerAction::ViewStats);
        assert_eq!(battle.player().health(), 145);
    }

    #[test]
    fn finished_battle_ignores_further_turns() {
        let mut battle = battle_with(ClassKind::Warrior);
        battle.wizard_mut().set_health(0);
        assert!(battle.resolve_turn(PlayerAction::Attack).is_empty());
        assert_eq!(battle.turn(), 0);
    }

    #[test]
    fn invalid_menu_input_leaves_everyone_untouched() {
        let mut battle = battle_with(ClassKind::Warrior);
        let mut console = ScriptedConsole::new(["9"]);
        let result = run_battle(&mut battle, &mut console);
        assert!(matches!(result, Err(ConsoleError::Closed)));
        assert_eq!(battle.player().health(), 140);
        assert_eq!(battle.wizard().health(), 150);
        assert_eq!(battle.turn(), 0);
        assert!(console.transcript().iter().any(|line| line == INVALID_ACTION));
    }

    #[test]
    fn invalid_ability_input_restarts_the_turn() {
        let mut battle = battle_with(ClassKind::Archer);
        let mut console = ScriptedConsole::new(["2", "3", "2", "0"]);
        let result = run_battle(&mut battle, &mut console);
        assert!(matches!(result, Err(ConsoleError::Closed)));
        assert_eq!(battle.turn(), 0);
        assert_eq!(battle.player().health(), 120);
        let rejected = console
            .transcript()
            .iter()
            .filter(|line| *line == INVALID_ABILITY)
            .count();
        assert_eq!(rejected, 2);
    }

    #[test]
    fn special_without_abilities_costs_the_turn() {
        let mut battle = battle_with(ClassKind::Mage);
        let mut console = ScriptedConsole::new(["2"]);
        let _ = run_battle(&mut battle, &mut console);
        assert_eq!(battle.turn(), 1);
        assert_eq!(battle.player().health(), 85);
        assert!(console
            .transcript()
            .iter()
            .any(|line| line == "No special ability available for your class."));
    }

    #[test]
    fn evade_from_the_menu_dodges_the_counterattack() {
        let mut battle = battle_with(ClassKind::Archer);
        let mut console = ScriptedConsole::new(["2", "2"]);
        let _ = run_battle(&mut battle, &mut console);
        assert_eq!(battle.turn(), 1);
        assert_eq!(battle.player().health(), 120);
        assert_eq!(battle.wizard().health(), 155);
    }

    #[test]
    fn mage_wins_in_five_turns() {
        let mut battle = battle_with(ClassKind::Mage);
        let mut console = ScriptedConsole::new(["1"; 5]);
        let summary = run_battle(&mut battle, &mut console).unwrap();
        assert_eq!(
            summary,
            BattleSummary {
                outcome: BattleOutcome::Victory,
                turns: 5,
                hero_health: 40,
                wizard_health: -5,
            }
        );
        assert_eq!(console.remaining_inputs(), 0);
    }
}
