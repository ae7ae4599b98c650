use tracing::{debug, info};

use crate::character::Character;
use crate::class::ClassKind;
use crate::console::{Console, ConsoleError};

pub const CLASS_PROMPT: &str = "Enter the number of your class choice: ";
pub const NAME_PROMPT: &str = "Enter your character's name: ";
pub const INVALID_CLASS: &str = "Invalid choice. Please enter 1, 2, 3, or 4.";
pub const EMPTY_NAME: &str = "Name cannot be empty.";

/// Asks for a class and a name until both are valid, then builds the hero.
/// Bad input only ever reprompts; the only error is a failing console.
pub fn create_character<C: Console + ?Sized>(console: &mut C) -> Result<Character, ConsoleError> {
    let kind = choose_class(console)?;
    let name = choose_name(console)?;
    info!(target: "wizard_core.factory", class = %kind, name = %name, "hero created");
    Ok(Character::new(kind, name))
}

fn choose_class<C: Console + ?Sized>(console: &mut C) -> Result<ClassKind, ConsoleError> {
    loop {
        console.say("Choose your character class:")?;
        for (index, kind) in ClassKind::playable().iter().enumerate() {
            console.say(&format!("{}. {kind}", index + 1))?;
        }
        let token = console.prompt(CLASS_PROMPT)?;
        match ClassKind::from_menu_token(&token) {
            Some(kind) => return Ok(kind),
            None => {
                debug!(target: "wizard_core.factory", token = %token, "rejected class token");
                console.say(INVALID_CLASS)?;
            }
        }
    }
}

fn choose_name<C: Console + ?Sized>(console: &mut C) -> Result<String, ConsoleError> {
    loop {
        let raw = console.prompt(NAME_PROMPT)?;
        let name = raw.trim();
        if !name.is_empty() {
            return Ok(name.to_owned());
        }
        console.say(EMPTY_NAME)?;
    }
}
