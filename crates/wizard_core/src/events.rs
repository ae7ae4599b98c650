use std::fmt;

use serde::{Deserialize, Serialize};

use crate::class::{AttackStyle, SpecialAbility};

/// Everything that can happen during a battle. Character operations return
/// these instead of printing; the battle loop renders them through the
/// console and keeps them as history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CombatEvent {
    Hit {
        attacker: String,
        defender: String,
        damage: i32,
        style: AttackStyle,
    },
    Defeated {
        name: String,
    },
    Evaded {
        defender: String,
        attacker: String,
    },
    Blocked {
        defender: String,
        attacker: String,
    },
    Healed {
        name: String,
        amount: i32,
        health: i32,
    },
    Regenerated {
        name: String,
        amount: i32,
        health: i32,
    },
    EvasiveStance {
        name: String,
    },
    ShieldRaised {
        name: String,
    },
    Stats {
        name: String,
        health: i32,
        max_health: i32,
        attack_power: i32,
    },
    CannotHeal {
        name: String,
    },
    NoSpecialAbility {
        name: String,
        ability: Option<SpecialAbility>,
    },
    Victory {
        hero: String,
        wizard: String,
    },
    Fallen {
        hero: String,
        wizard: String,
    },
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit {
                attacker,
                defender,
                damage,
                style,
            } => match style {
                AttackStyle::Basic => {
                    write!(f, "{attacker} attacks {defender} for {damage} damage!")
                }
                AttackStyle::Arrow => write!(
                    f,
                    "{attacker} shoots an arrow at {defender} for {damage} damage!"
                ),
                AttackStyle::Strike => {
                    write!(f, "{attacker} strikes {defender} for {damage} damage!")
                }
                AttackStyle::HolyStrike => write!(
                    f,
                    "{attacker} performs a Holy Strike on {defender} for {damage} damage!"
                ),
            },
            Self::Defeated { name } => write!(f, "{name} has been defeated!"),
            Self::Evaded { defender, attacker } => {
                write!(f, "{defender} evades the attack from {attacker}!")
            }
            Self::Blocked { defender, attacker } => write!(
                f,
                "{defender}'s Divine Shield blocks the attack from {attacker}!"
            ),
            Self::Healed {
                name,
                amount,
                health,
            } => write!(
                f,
                "{name} heals for {amount} health! Current health: {health}"
            ),
            Self::Regenerated {
                name,
                amount,
                health,
            } => write!(
                f,
                "{name} regenerates {amount} health! Current health: {health}"
            ),
            Self::EvasiveStance { name } => write!(
                f,
                "{name} takes an evasive stance, ready to dodge the next attack!"
            ),
            Self::ShieldRaised { name } => write!(
                f,
                "{name} raises a Divine Shield, ready to block the next attack!"
            ),
            Self::Stats {
                name,
                health,
                max_health,
                attack_power,
            } => write!(
                f,
                "{name}'s Stats - Health: {health}/{max_health}, Attack Power: {attack_power}"
            ),
            Self::CannotHeal { .. } => f.write_str("Your class cannot heal."),
            Self::NoSpecialAbility { ability: None, .. } => {
                f.write_str("No special ability available for your class.")
            }
            Self::NoSpecialAbility {
                name,
                ability: Some(ability),
            } => write!(f, "{name} does not know {ability}."),
            Self::Victory { hero, wizard } => {
                write!(f, "The wizard {wizard} has been defeated by {hero}!")
            }
            Self::Fallen { hero, wizard } => {
                write!(f, "{hero} has fallen. {wizard} is victorious!")
            }
        }
    }
}
