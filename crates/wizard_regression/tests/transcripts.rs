use wizard_core::ClassKind;
use wizard_regression::{opening_exchange, scripted_battle, DEFAULT_SEED};

#[test]
fn mage_victory_combat_log() {
    let run = scripted_battle(ClassKind::Mage, "Merlin", DEFAULT_SEED, &["1"; 5]);
    assert!(run.summary.is_some());
    insta::assert_snapshot!(run.combat_log(), @r###"
    Merlin attacks The Dark Wizard for 35 damage!
    The Dark Wizard regenerates 5 health! Current health: 120
    The Dark Wizard attacks Merlin for 15 damage!
    Merlin attacks The Dark Wizard for 35 damage!
    The Dark Wizard regenerates 5 health! Current health: 90
    The Dark Wizard attacks Merlin for 15 damage!
    Merlin attacks The Dark Wizard for 35 damage!
    The Dark Wizard regenerates 5 health! Current health: 60
    The Dark Wizard attacks Merlin for 15 damage!
    Merlin attacks The Dark Wizard for 35 damage!
    The Dark Wizard regenerates 5 health! Current health: 30
    The Dark Wizard attacks Merlin for 15 damage!
    Merlin attacks The Dark Wizard for 35 damage!
    The Dark Wizard has been defeated!
    The wizard The Dark Wizard has been defeated by Merlin!
    "###);
}

#[test]
fn warrior_opening_exchange() {
    let events = opening_exchange(ClassKind::Warrior, "Conan");
    insta::assert_json_snapshot!(events, @r###"
    [
      {
        "event": "hit",
        "attacker": "Conan",
        "defender": "The Dark Wizard",
        "damage": 25,
        "style": "basic"
      },
      {
        "event": "regenerated",
        "name": "The Dark Wizard",
        "amount": 5,
        "health": 130
      },
      {
        "event": "hit",
        "attacker": "The Dark Wizard",
        "defender": "Conan",
        "damage": 15,
        "style": "basic"
      }
    ]
    "###);
}

#[test]
fn special_menu_transcript_for_a_warrior() {
    let run = scripted_battle(ClassKind::Warrior, "Conan", DEFAULT_SEED, &["2"]);
    let turn: Vec<&str> = run
        .transcript
        .iter()
        .map(String::as_str)
        .filter(|line| !line.is_empty())
        .take(9)
        .collect();
    assert_eq!(
        turn,
        [
            "--- Your Turn ---",
            "1. Attack",
            "2. Use Special Ability",
            "3. Heal",
            "4. View Stats",
            "Choose an action: 2",
            "No special ability available for your class.",
            "The Dark Wizard regenerates 5 health! Current health: 155",
            "The Dark Wizard attacks Conan for 15 damage!",
        ]
    );
}
