use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use wizard_core::{BattleOutcome, BattleSummary, Character, ClassKind, CombatEvent};

use crate::SessionError;

/// Post-battle record written as JSON. It describes a finished fight; it
/// cannot be loaded to resume one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BattleReport {
    pub id: String,
    pub timestamp: String,
    pub seed: u64,
    pub hero: CombatantSummary,
    pub wizard: CombatantSummary,
    pub summary: ReportSummary,
    #[serde(default)]
    pub events: Vec<CombatEvent>,
}

impl BattleReport {
    pub fn new(
        seed: u64,
        hero: &Character,
        wizard: &Character,
        summary: BattleSummary,
        events: Vec<CombatEvent>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: format!("battle-{}", now.format("%Y%m%dT%H%M%S")),
            timestamp: now.to_rfc3339(),
            seed,
            hero: CombatantSummary::from(hero),
            wizard: CombatantSummary::from(wizard),
            summary: ReportSummary {
                outcome: summary.outcome,
                turns: summary.turns,
            },
            events,
        }
    }

    pub fn write_to(&self, path: &Path) -> Result<(), SessionError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn read_from(path: &Path) -> Result<Self, SessionError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// One-line description used by the `report` command.
    pub fn headline(&self) -> String {
        let verdict = match self.summary.outcome {
            BattleOutcome::Victory => "defeated",
            BattleOutcome::Defeat => "fell to",
        };
        format!(
            "Report {} -> {} the {} {} {} after {} turns (seed {})",
            self.id,
            self.hero.name,
            self.hero.class,
            verdict,
            self.wizard.name,
            self.summary.turns,
            self.seed
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CombatantSummary {
    pub name: String,
    pub class: ClassKind,
    pub health: i32,
    pub max_health: i32,
}

impl From<&Character> for CombatantSummary {
    fn from(character: &Character) -> Self {
        Self {
            name: character.name().to_owned(),
            class: character.kind(),
            health: character.health(),
            max_health: character.max_health(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportSummary {
    pub outcome: BattleOutcome,
    pub turns: u32,
}
