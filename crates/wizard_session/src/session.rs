use tracing::info;
use wizard_core::{create_character, run_battle, Battle, BattleRng, Character, Console};

use crate::config::SessionConfig;
use crate::report::BattleReport;
use crate::SessionError;

pub const BANNER: &str = "=== Defeat the Evil Wizard ===";

/// Plays one complete game on `console`: hero creation, the battle, and the
/// report when one is configured.
pub fn run_session<C: Console + ?Sized>(
    config: &SessionConfig,
    console: &mut C,
) -> Result<BattleReport, SessionError> {
    let rng = match config.battle.seed {
        Some(seed) => BattleRng::new(seed),
        None => BattleRng::from_entropy(),
    };

    console.say(BANNER)?;
    let hero = create_character(console)?;
    let mut battle = Battle::new(hero, Character::evil_wizard(), rng);
    let summary = run_battle(&mut battle, console)?;
    let seed = battle.seed();

    let (hero, wizard, history) = battle.into_parts();
    let include_events = config
        .report
        .as_ref()
        .map_or(true, |report| report.include_events);
    let events = if include_events { history } else { Vec::new() };
    let report = BattleReport::new(seed, &hero, &wizard, summary, events);

    if let Some(report_cfg) = config.report.as_ref() {
        report.write_to(&report_cfg.path)?;
        info!(
            target: "wizard_session.report",
            path = %report_cfg.path.display(),
            "battle report written"
        );
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BattleConfig;
    use wizard_core::{BattleOutcome, ClassKind, ConsoleError, ScriptedConsole};

    fn seeded(seed: u64) -> SessionConfig {
        SessionConfig {
            battle: BattleConfig { seed: Some(seed) },
            ..SessionConfig::default()
        }
    }

    #[test]
    fn warrior_session_runs_to_victory() {
        let mut inputs = vec!["1", "Conan"];
        inputs.extend(["1"; 8]);
        let mut console = ScriptedConsole::new(inputs);
        let report = run_session(&seeded(42), &mut console).unwrap();

        assert_eq!(report.seed, 42);
        assert_eq!(report.hero.class, ClassKind::Warrior);
        assert_eq!(report.summary.outcome, BattleOutcome::Victory);
        assert_eq!(report.summary.turns, 8);
        assert_eq!(report.hero.health, 35);
        assert_eq!(report.wizard.health, -15);
        assert!(!report.events.is_empty());
        assert_eq!(console.transcript()[0], BANNER);
    }

    #[test]
    fn events_can_be_left_out_of_the_report() {
        let dir = std::env::temp_dir()
            .join(format!("wizard_session_run_{}", std::process::id()));
        let path = dir.join("report.json");
        let mut config = seeded(1);
        config.set_report_path(path.clone());
        if let Some(report) = config.report.as_mut() {
            report.include_events = false;
        }

        let mut inputs = vec!["2", "Merlin"];
        inputs.extend(["1"; 5]);
        let mut console = ScriptedConsole::new(inputs);
        let report = run_session(&config, &mut console).unwrap();

        assert!(report.events.is_empty());
        let written = BattleReport::read_from(&path).unwrap();
        assert_eq!(written, report);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn closed_input_surfaces_as_console_error() {
        let mut console = ScriptedConsole::new(["3"]);
        let err = run_session(&seeded(5), &mut console).unwrap_err();
        assert!(matches!(err, SessionError::Console(ConsoleError::Closed)));
    }
}
