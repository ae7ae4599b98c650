use std::fmt;

use serde::{Deserialize, Serialize};

/// Extra flat damage a Holy Strike adds on top of the Paladin's attack power.
pub const HOLY_STRIKE_BONUS: i32 = 15;

/// Health the Evil Wizard regains at the start of each of its turns.
pub const WIZARD_REGENERATION: i32 = 5;

/// Every combatant archetype. The numeric table lives here; behaviour shared by
/// all of them lives on [`crate::Character`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    Warrior,
    Mage,
    Archer,
    Paladin,
    Wizard,
}

/// How a basic attack is narrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackStyle {
    Basic,
    Arrow,
    Strike,
    HolyStrike,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialAbility {
    QuickShot,
    Evade,
    HolyStrike,
    DivineShield,
}

impl ClassKind {
    const PLAYABLE: [ClassKind; 4] = [
        ClassKind::Warrior,
        ClassKind::Mage,
        ClassKind::Archer,
        ClassKind::Paladin,
    ];

    /// Hero classes in menu order.
    pub const fn playable() -> &'static [ClassKind] {
        &Self::PLAYABLE
    }

    /// Maps a class-menu token ("1".."4") to its class. The token must match
    /// exactly.
    pub fn from_menu_token(token: &str) -> Option<Self> {
        match token {
            "1" => Some(Self::Warrior),
            "2" => Some(Self::Mage),
            "3" => Some(Self::Archer),
            "4" => Some(Self::Paladin),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Warrior => "Warrior",
            Self::Mage => "Mage",
            Self::Archer => "Archer",
            Self::Paladin => "Paladin",
            Self::Wizard => "Evil Wizard",
        }
    }

    pub const fn base_health(self) -> i32 {
        match self {
            Self::Warrior => 140,
            Self::Mage => 100,
            Self::Archer => 120,
            Self::Paladin => 160,
            Self::Wizard => 150,
        }
    }

    /// Median of the class damage roll.
    pub const fn attack_power(self) -> i32 {
        match self {
            Self::Warrior => 25,
            Self::Mage => 35,
            Self::Archer => 30,
            Self::Paladin => 20,
            Self::Wizard => 15,
        }
    }

    /// `(below, above)` offsets around attack power that bound a basic attack
    /// roll, inclusive.
    pub const fn variance(self) -> (i32, i32) {
        match self {
            Self::Archer => (5, 5),
            Self::Paladin => (3, 7),
            Self::Warrior | Self::Mage | Self::Wizard => (0, 0),
        }
    }

    pub const fn heal_amount(self) -> i32 {
        match self {
            Self::Archer => 20,
            Self::Paladin => 25,
            Self::Warrior | Self::Mage | Self::Wizard => 0,
        }
    }

    pub const fn regeneration(self) -> i32 {
        match self {
            Self::Wizard => WIZARD_REGENERATION,
            _ => 0,
        }
    }

    pub const fn attack_style(self) -> AttackStyle {
        match self {
            Self::Archer => AttackStyle::Arrow,
            Self::Paladin => AttackStyle::Strike,
            Self::Warrior | Self::Mage | Self::Wizard => AttackStyle::Basic,
        }
    }

    /// Abilities offered in the special-ability sub-menu, in menu order.
    pub const fn special_abilities(self) -> &'static [SpecialAbility] {
        match self {
            Self::Archer => &[SpecialAbility::QuickShot, SpecialAbility::Evade],
            Self::Paladin => &[SpecialAbility::HolyStrike, SpecialAbility::DivineShield],
            Self::Warrior | Self::Mage | Self::Wizard => &[],
        }
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl SpecialAbility {
    pub const fn label(self) -> &'static str {
        match self {
            Self::QuickShot => "Quick Shot",
            Self::Evade => "Evade",
            Self::HolyStrike => "Holy Strike",
            Self::DivineShield => "Divine Shield",
        }
    }
}

impl fmt::Display for SpecialAbility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_tokens_are_exact() {
        assert_eq!(ClassKind::from_menu_token("1"), Some(ClassKind::Warrior));
        assert_eq!(ClassKind::from_menu_token("4"), Some(ClassKind::Paladin));
        assert_eq!(ClassKind::from_menu_token(" 1"), None);
        assert_eq!(ClassKind::from_menu_token("5"), None);
        assert_eq!(ClassKind::from_menu_token(""), None);
    }

    #[test]
    fn wizard_is_not_playable() {
        assert!(!ClassKind::playable().contains(&ClassKind::Wizard));
        assert_eq!(ClassKind::playable().len(), 4);
    }

    #[test]
    fn only_archer_and_paladin_heal_or_have_abilities() {
        for kind in ClassKind::playable() {
            let heals = kind.heal_amount() > 0;
            let has_abilities = !kind.special_abilities().is_empty();
            let expected = matches!(kind, ClassKind::Archer | ClassKind::Paladin);
            assert_eq!(heals, expected, "{kind}");
            assert_eq!(has_abilities, expected, "{kind}");
        }
    }

    #[test]
    fn only_wizard_regenerates() {
        assert_eq!(ClassKind::Wizard.regeneration(), 5);
        for kind in ClassKind::playable() {
            assert_eq!(kind.regeneration(), 0);
        }
    }
}
