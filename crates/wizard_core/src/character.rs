//! The combatant record and the rules every combatant shares.

use tracing::{debug, info};

use crate::class::{AttackStyle, ClassKind, SpecialAbility, HOLY_STRIKE_BONUS};
use crate::events::CombatEvent;
use crate::rng::BattleRng;

/// Name of the fixed opponent.
pub const WIZARD_NAME: &str = "The Dark Wizard";

/// A hero or the wizard. Class-specific constants come from [`ClassKind`];
/// everything mutable during a fight lives here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    kind: ClassKind,
    name: String,
    health: i32,
    max_health: i32,
    attack_power: i32,
    heal_amount: i32,
    is_evading: bool,
    is_shielded: bool,
}

impl Character {
    pub fn new(kind: ClassKind, name: impl Into<String>) -> Self {
        let health = kind.base_health();
        Self {
            kind,
            name: name.into(),
            health,
            max_health: health,
            attack_power: kind.attack_power(),
            heal_amount: kind.heal_amount(),
            is_evading: false,
            is_shielded: false,
        }
    }

    pub fn evil_wizard() -> Self {
        Self::new(ClassKind::Wizard, WIZARD_NAME)
    }

    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn attack_power(&self) -> i32 {
        self.attack_power
    }

    pub fn heal_amount(&self) -> i32 {
        self.heal_amount
    }

    pub fn is_evading(&self) -> bool {
        self.is_evading
    }

    pub fn is_shielded(&self) -> bool {
        self.is_shielded
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn is_defeated(&self) -> bool {
        !self.is_alive()
    }

    /// Overrides current health, for staging scenarios.
    pub fn set_health(&mut self, health: i32) {
        self.health = health;
    }

    /// Inclusive bounds of a basic attack roll.
    pub fn damage_range(&self) -> std::ops::RangeInclusive<i32> {
        let (below, above) = self.kind.variance();
        (self.attack_power - below)..=(self.attack_power + above)
    }

    /// Basic attack: the opponent's defences are checked first; if nothing
    /// stops the blow a damage roll is subtracted from the opponent's health.
    pub fn attack(&self, opponent: &mut Character, rng: &mut BattleRng) -> Vec<CombatEvent> {
        if let Some(blocked) = opponent.consume_defense(&self.name) {
            return vec![blocked];
        }
        let damage = rng.gen_range(self.damage_range());
        debug!(
            target: "wizard_core.character",
            attacker = %self.name,
            damage,
            "damage rolled"
        );
        self.land_hit(opponent, damage, self.kind.attack_style())
    }

    /// Restores `heal_amount`, never past `max_health`.
    pub fn heal(&mut self) -> Vec<CombatEvent> {
        self.health = (self.health + self.heal_amount).min(self.max_health);
        vec![CombatEvent::Healed {
            name: self.name.clone(),
            amount: self.heal_amount,
            health: self.health,
        }]
    }

    /// Regeneration ignores `max_health` entirely.
    pub fn regenerate(&mut self) -> Vec<CombatEvent> {
        let amount = self.kind.regeneration();
        self.health += amount;
        vec![CombatEvent::Regenerated {
            name: self.name.clone(),
            amount,
            health: self.health,
        }]
    }

    pub fn display_stats(&self) -> CombatEvent {
        CombatEvent::Stats {
            name: self.name.clone(),
            health: self.health,
            max_health: self.max_health,
            attack_power: self.attack_power,
        }
    }

    /// Two basic attacks; the second is skipped once the opponent is down.
    pub fn quick_shot(&self, opponent: &mut Character, rng: &mut BattleRng) -> Vec<CombatEvent> {
        let mut events = self.attack(opponent, rng);
        if opponent.is_alive() {
            events.extend(self.attack(opponent, rng));
        }
        events
    }

    pub fn evade(&mut self) -> Vec<CombatEvent> {
        self.is_evading = true;
        vec![CombatEvent::EvasiveStance {
            name: self.name.clone(),
        }]
    }

    /// Fixed `attack_power + 15` damage behind the same defence check as a
    /// basic attack. Does not touch the generator.
    pub fn holy_strike(&self, opponent: &mut Character) -> Vec<CombatEvent> {
        if let Some(blocked) = opponent.consume_defense(&self.name) {
            return vec![blocked];
        }
        self.land_hit(
            opponent,
            self.attack_power + HOLY_STRIKE_BONUS,
            AttackStyle::HolyStrike,
        )
    }

    pub fn divine_shield(&mut self) -> Vec<CombatEvent> {
        self.is_shielded = true;
        vec![CombatEvent::ShieldRaised {
            name: self.name.clone(),
        }]
    }

    /// Runs `ability` if this class owns it. Anything else is reported and
    /// leaves both combatants untouched.
    pub fn use_special(
        &mut self,
        ability: SpecialAbility,
        opponent: &mut Character,
        rng: &mut BattleRng,
    ) -> Vec<CombatEvent> {
        match (self.kind, ability) {
            (ClassKind::Archer, SpecialAbility::QuickShot) => self.quick_shot(opponent, rng),
            (ClassKind::Archer, SpecialAbility::Evade) => self.evade(),
            (ClassKind::Paladin, SpecialAbility::HolyStrike) => self.holy_strike(opponent),
            (ClassKind::Paladin, SpecialAbility::DivineShield) => self.divine_shield(),
            _ => vec![CombatEvent::NoSpecialAbility {
                name: self.name.clone(),
                ability: Some(ability),
            }],
        }
    }

    /// Spends at most one pending defence against an incoming attack.
    /// Evasion is consulted before the shield.
    fn consume_defense(&mut self, attacker: &str) -> Option<CombatEvent> {
        if self.is_evading {
            self.is_evading = false;
            info!(target: "wizard_core.character", defender = %self.name, "evasion consumed");
            Some(CombatEvent::Evaded {
                defender: self.name.clone(),
                attacker: attacker.to_owned(),
            })
        } else if self.is_shielded {
            self.is_shielded = false;
            info!(target: "wizard_core.character", defender = %self.name, "shield consumed");
            Some(CombatEvent::Blocked {
                defender: self.name.clone(),
                attacker: attacker.to_owned(),
            })
        } else {
            None
        }
    }

    fn land_hit(
        &self,
        opponent: &mut Character,
        damage: i32,
        style: AttackStyle,
    ) -> Vec<CombatEvent> {
        opponent.health -= damage;
        let mut events = vec![CombatEvent::Hit {
            attacker: self.name.clone(),
            defender: opponent.name.clone(),
            damage,
            style,
        }];
        if opponent.is_defeated() {
            events.push(CombatEvent::Defeated {
                name: opponent.name.clone(),
            });
        }
        events
    }
}
