//! Rules and turn loop for a single hero facing the Evil Wizard.

pub mod battle;
pub mod character;
pub mod class;
pub mod console;
pub mod events;
pub mod factory;
pub mod rng;

pub use battle::{run_battle, Battle, BattleOutcome, BattleState, BattleSummary, PlayerAction};
pub use character::{Character, WIZARD_NAME};
pub use class::{AttackStyle, ClassKind, SpecialAbility, HOLY_STRIKE_BONUS, WIZARD_REGENERATION};
pub use console::{Console, ConsoleError, ScriptedConsole, TerminalConsole};
pub use events::CombatEvent;
pub use factory::create_character;
pub use rng::BattleRng;
