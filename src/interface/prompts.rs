use chrono::NaiveDate;
use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::interface::menu::MenuAction;
use crate::interface::validation::{
    canonical_food_name, latest_best_before, parse_menu_choice, parse_weight, suggest_food_name,
};
use crate::storage::StorageMode;

/// Prompt for the storage mode, fixed for the rest of the session.
pub fn prompt_storage_mode() -> Result<StorageMode> {
    let modes = [StorageMode::Stack, StorageMode::Queue];

    println!("Choose storage mode:");
    for (i, mode) in modes.iter().enumerate() {
        println!("{}. {}", i + 1, mode.door_description());
    }

    let input: String = Input::new()
        .with_prompt(format!("Enter choice (1 or {})", modes.len()))
        .validate_with(|s: &String| {
            parse_menu_choice(s, 1, modes.len())
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?;

    let choice = parse_menu_choice(&input, 1, modes.len())?;
    Ok(modes[choice - 1])
}

/// Prompt for the next main menu action.
pub fn prompt_menu_action() -> Result<MenuAction> {
    let options: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();

    let selection = Select::new()
        .with_prompt("Fast Food Storage Menu")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(MenuAction::ALL[selection])
}

/// Prompt for a food name from the allowed vocabulary.
///
/// Offers the closest match when the input is not recognised. Returns `None`
/// when no acceptable name was given.
pub fn prompt_food_name(allowed: &[String]) -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt(format!("Enter food name ({})", allowed.join("/")))
        .interact_text()?;

    if let Ok(name) = canonical_food_name(&input, allowed) {
        return Ok(Some(name));
    }

    if let Some(suggestion) = suggest_food_name(&input, allowed) {
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", suggestion))
            .default(true)
            .interact()?;

        if confirm {
            return Ok(Some(suggestion.to_string()));
        }
    }

    println!("Invalid food name. Allowed: {}.", allowed.join(", "));
    Ok(None)
}

/// Prompt for a weight in grams, repeating until a positive integer is given.
pub fn prompt_weight() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Enter weight in grams (positive integer)")
        .validate_with(|s: &String| parse_weight(s).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;

    parse_weight(&input)
}

/// Prompt for a best-before date. Blank input is returned as-is.
pub fn prompt_best_before(today: NaiveDate, max_shelf_days: u32) -> Result<String> {
    let latest = latest_best_before(today, max_shelf_days);
    let input: String = Input::new()
        .with_prompt(format!(
            "Enter best-before date (yyyy-mm-dd) or press ENTER for {}",
            latest.format("%Y-%m-%d")
        ))
        .allow_empty(true)
        .interact_text()?;

    Ok(input)
}

/// Prompt for a name to search for.
pub fn prompt_search_name() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Enter name to search")
        .interact_text()?;

    Ok(input.trim().to_string())
}
